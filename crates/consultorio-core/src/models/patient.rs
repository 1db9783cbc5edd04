//! Patient records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation;

/// A registered patient, keyed externally by DNI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// First name, title-cased
    #[serde(rename = "name")]
    pub first_name: String,
    /// Last name, title-cased
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Contact phone
    pub phone: String,
    /// Contact email, lower-cased
    pub email: String,
}

/// The mutable fields of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientField {
    FirstName,
    LastName,
    Phone,
    Email,
}

impl Patient {
    /// Validate and normalize the field values into a new record.
    pub fn new(first_name: &str, last_name: &str, phone: &str, email: &str) -> Result<Self> {
        let mut patient = Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
        };
        patient.set(PatientField::FirstName, first_name)?;
        patient.set(PatientField::LastName, last_name)?;
        patient.set(PatientField::Phone, phone)?;
        patient.set(PatientField::Email, email)?;
        Ok(patient)
    }

    /// Validate, normalize and apply a single field value.
    pub fn set(&mut self, field: PatientField, value: &str) -> Result<()> {
        let value = value.trim();
        match field {
            PatientField::FirstName => {
                if !validation::is_valid_name(value) {
                    return Err(Error::Validation(
                        "first name must be at least 2 letters/spaces".into(),
                    ));
                }
                self.first_name = validation::title_case(value);
            }
            PatientField::LastName => {
                if !validation::is_valid_name(value) {
                    return Err(Error::Validation(
                        "last name must be at least 2 letters/spaces".into(),
                    ));
                }
                self.last_name = validation::title_case(value);
            }
            PatientField::Phone => {
                if !validation::is_valid_phone(value) {
                    return Err(Error::Validation("invalid phone number".into()));
                }
                self.phone = value.to_string();
            }
            PatientField::Email => {
                if !validation::is_valid_email(value) {
                    return Err(Error::Validation("invalid email address".into()));
                }
                self.email = value.to_lowercase();
            }
        }
        Ok(())
    }

    /// Display name used when assigning slots.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_fields() {
        let patient =
            Patient::new("juan carlos", "PEREZ", "11-4567-8901", "JC@Example.COM").unwrap();
        assert_eq!(patient.first_name, "Juan Carlos");
        assert_eq!(patient.last_name, "Perez");
        assert_eq!(patient.email, "jc@example.com");
        assert_eq!(patient.full_name(), "Juan Carlos Perez");
    }

    #[test]
    fn test_new_rejects_bad_fields() {
        assert!(Patient::new("J", "Perez", "11-4567-8901", "a@b.com").is_err());
        assert!(Patient::new("Juan", "Perez", "123", "a@b.com").is_err());
        assert!(Patient::new("Juan", "Perez", "11-4567-8901", "no-email").is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let patient = Patient::new("Ana", "Gomez", "11 2233 4455", "ana@example.com").unwrap();
        let json = serde_json::to_value(&patient).unwrap();
        assert!(json.get("name").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("first_name").is_none());
    }
}
