//! Menu flows, one module per area of the system.

pub mod patients;
pub mod reports;
pub mod schedule;
pub mod slots;

use consultorio_core::Error;

/// Spanish one-liner for every recoverable core error.
pub fn describe(err: &Error) -> String {
    match err {
        Error::Validation(_) => "❌ Dato inválido".to_string(),
        Error::Duplicate(_) => "❌ Ya existe un paciente con ese DNI".to_string(),
        Error::NotFound(_) => "❌ No se encontró el registro solicitado".to_string(),
        Error::AlreadyGenerated { month, year } => {
            format!("⚠️ Ya fueron generados los turnos del mes {month:02} año {year}")
        }
        Error::HasDependents(_) => {
            "❌ No se puede eliminar. El paciente tiene turnos asignados".to_string()
        }
        Error::Io(_) | Error::Json(_) => format!("❌ Error de datos: {err}"),
    }
}
