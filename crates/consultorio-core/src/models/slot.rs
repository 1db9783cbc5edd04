//! Appointment slots.

use serde::{Deserialize, Serialize};

/// A single bookable time unit on a specific date.
///
/// A slot is available iff `patient_dni` is empty. Assignment and
/// cancellation are the only state transitions; slots are never deleted
/// individually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// DNI of the assigned patient, empty when open
    pub patient_dni: String,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`, zero-padded
    pub time: String,
    /// Denormalized display name, empty when open
    pub patient_name: String,
}

impl Slot {
    /// A fresh, unassigned slot.
    pub fn open(date: String, time: String) -> Self {
        Self {
            patient_dni: String::new(),
            date,
            time,
            patient_name: String::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.patient_dni.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_slot_is_available() {
        let slot = Slot::open("05/03/2025".into(), "09:00".into());
        assert!(slot.is_available());
        assert!(slot.patient_name.is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let slot = Slot::open("05/03/2025".into(), "09:00".into());
        let json = serde_json::to_value(&slot).unwrap();
        assert!(json.get("patientDni").is_some());
        assert!(json.get("patientName").is_some());
    }
}
