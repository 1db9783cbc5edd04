//! Consultorio Core Library
//!
//! Appointment and patient management for a single medical office.
//! Single-user and single-process: state lives in whole-file JSON
//! snapshots and every operation is synchronous.
//!
//! # Modules
//!
//! - [`store`]: JSON snapshot persistence plus the patient registry,
//!   slot ledger and schedule configuration operations
//! - [`models`]: domain types (Patient, Slot, ScheduleConfig)
//! - [`calendar`]: working days and appointment-date validation
//! - [`reports`]: daily/monthly text reports over assigned slots
//! - [`validation`]: field format rules
//!
//! # Slot lifecycle
//!
//! ```text
//! generate_month ──► open slot ──assign──► assigned slot
//!                        ▲                      │
//!                        └───────cancel─────────┘
//! ```
//!
//! Slots are generated once per (month, year) and never deleted;
//! cancellation returns a slot to the open pool unchanged.

pub mod calendar;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
pub mod validation;

pub use error::{Error, Result};
pub use models::{Patient, PatientField, ScheduleConfig, Slot, ALLOWED_INTERVALS};
pub use reports::{DailyReport, MonthlyReport, ReportEntry};
pub use store::{GenerationSummary, Store};
