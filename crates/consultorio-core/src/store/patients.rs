//! Patient registry operations.

use std::collections::BTreeMap;

use super::{Store, PATIENTS_DOC};
use crate::error::{Error, Result};
use crate::models::{Patient, PatientField};
use crate::validation;

impl Store {
    pub(crate) fn load_patients(&self) -> Result<BTreeMap<String, Patient>> {
        match self.read_document(PATIENTS_DOC)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BTreeMap::new()),
        }
    }

    pub(crate) fn save_patients(&self, patients: &BTreeMap<String, Patient>) -> Result<()> {
        self.write_document(PATIENTS_DOC, &serde_json::to_string_pretty(patients)?)
    }

    /// Register a new patient under `dni`.
    pub fn create_patient(
        &self,
        dni: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        email: &str,
    ) -> Result<Patient> {
        if !validation::is_valid_dni(dni) {
            return Err(Error::Validation("DNI must be 7-8 digits".into()));
        }
        let patient = Patient::new(first_name, last_name, phone, email)?;

        let mut patients = self.load_patients()?;
        if patients.contains_key(dni) {
            return Err(Error::Duplicate(format!("patient {dni}")));
        }
        patients.insert(dni.to_string(), patient.clone());
        self.save_patients(&patients)?;
        tracing::debug!(dni, "patient registered");
        Ok(patient)
    }

    /// Update a single field. An empty value (after trimming) is a no-op.
    pub fn update_patient(&self, dni: &str, field: PatientField, value: &str) -> Result<Patient> {
        let mut patients = self.load_patients()?;
        let patient = patients
            .get_mut(dni)
            .ok_or_else(|| Error::NotFound(format!("patient {dni}")))?;

        if value.trim().is_empty() {
            return Ok(patient.clone());
        }
        patient.set(field, value)?;
        let updated = patient.clone();
        self.save_patients(&patients)?;
        tracing::debug!(dni, ?field, "patient updated");
        Ok(updated)
    }

    /// Remove a patient. Blocked while any slot references the DNI.
    pub fn delete_patient(&self, dni: &str) -> Result<()> {
        let mut patients = self.load_patients()?;
        if !patients.contains_key(dni) {
            return Err(Error::NotFound(format!("patient {dni}")));
        }
        if self.has_any_slot(dni)? {
            return Err(Error::HasDependents(dni.to_string()));
        }
        patients.remove(dni);
        self.save_patients(&patients)?;
        tracing::debug!(dni, "patient deleted");
        Ok(())
    }

    /// Read-only snapshot of a patient record.
    pub fn get_patient(&self, dni: &str) -> Result<Option<Patient>> {
        Ok(self.load_patients()?.get(dni).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleConfig;

    fn setup_store() -> Store {
        Store::open_in_memory()
    }

    fn register(store: &Store, dni: &str) -> Patient {
        store
            .create_patient(dni, "Ana", "Gomez", "11-2233-4455", "ana@example.com")
            .unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let store = setup_store();
        register(&store, "12345678");

        let patient = store.get_patient("12345678").unwrap().unwrap();
        assert_eq!(patient.first_name, "Ana");
        assert_eq!(patient.email, "ana@example.com");
        assert!(store.get_patient("87654321").unwrap().is_none());
    }

    #[test]
    fn test_create_duplicate_dni() {
        let store = setup_store();
        register(&store, "12345678");

        let err = store
            .create_patient("12345678", "Otra", "Persona", "11-9988-7766", "o@p.com")
            .unwrap_err();
        assert!(matches!(err, Error::Duplicate(_)));
    }

    #[test]
    fn test_create_invalid_dni() {
        let store = setup_store();
        let err = store
            .create_patient("123456", "Ana", "Gomez", "11-2233-4455", "ana@example.com")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_update_field() {
        let store = setup_store();
        register(&store, "12345678");

        let updated = store
            .update_patient("12345678", PatientField::LastName, "lopez")
            .unwrap();
        assert_eq!(updated.last_name, "Lopez");
        assert_eq!(
            store.get_patient("12345678").unwrap().unwrap().last_name,
            "Lopez"
        );
    }

    #[test]
    fn test_update_empty_value_is_noop() {
        let store = setup_store();
        register(&store, "12345678");

        let unchanged = store
            .update_patient("12345678", PatientField::Phone, "   ")
            .unwrap();
        assert_eq!(unchanged.phone, "11-2233-4455");
    }

    #[test]
    fn test_update_invalid_value() {
        let store = setup_store();
        register(&store, "12345678");

        let err = store
            .update_patient("12345678", PatientField::Email, "no-email")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_update_missing_patient() {
        let store = setup_store();
        let err = store
            .update_patient("12345678", PatientField::Phone, "11-2233-4455")
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_delete_patient() {
        let store = setup_store();
        register(&store, "12345678");

        store.delete_patient("12345678").unwrap();
        assert!(store.get_patient("12345678").unwrap().is_none());
        assert!(matches!(
            store.delete_patient("12345678").unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn test_delete_blocked_by_assigned_slot() {
        let store = setup_store();
        let patient = register(&store, "12345678");

        let config = ScheduleConfig::new(9, 10, 30).unwrap();
        store.generate_month(3, 2025, &config).unwrap();
        let (slot_id, _) = store.available_slots("03/03/2025").unwrap()[0].clone();
        store
            .assign_slot(&slot_id, "12345678", &patient.full_name())
            .unwrap();

        assert!(matches!(
            store.delete_patient("12345678").unwrap_err(),
            Error::HasDependents(_)
        ));

        // Cancellation clears the reference, after which deletion succeeds.
        store.cancel_slot(&slot_id).unwrap();
        store.delete_patient("12345678").unwrap();
    }
}
