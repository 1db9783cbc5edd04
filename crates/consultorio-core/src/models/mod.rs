//! Domain models.

mod patient;
mod schedule;
mod slot;

pub use patient::*;
pub use schedule::*;
pub use slot::*;
