//! Schedule configuration storage.

use super::{Store, SCHEDULE_DOC};
use crate::error::Result;
use crate::models::ScheduleConfig;

impl Store {
    /// Validate and persist the configuration, overwriting any previous one.
    pub fn set_schedule(
        &self,
        start_hour: u32,
        end_hour: u32,
        interval_minutes: u32,
    ) -> Result<ScheduleConfig> {
        let config = ScheduleConfig::new(start_hour, end_hour, interval_minutes)?;
        self.write_document(SCHEDULE_DOC, &serde_json::to_string_pretty(&config)?)?;
        tracing::debug!(start_hour, end_hour, interval_minutes, "schedule configured");
        Ok(config)
    }

    /// The current configuration, if one was ever saved.
    pub fn schedule(&self) -> Result<Option<ScheduleConfig>> {
        match self.read_document(SCHEDULE_DOC)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_unset_schedule_is_none() {
        let store = Store::open_in_memory();
        assert!(store.schedule().unwrap().is_none());
    }

    #[test]
    fn test_set_then_read() {
        let store = Store::open_in_memory();
        store.set_schedule(9, 17, 30).unwrap();

        let config = store.schedule().unwrap().unwrap();
        assert_eq!(config, ScheduleConfig::new(9, 17, 30).unwrap());
    }

    #[test]
    fn test_set_overwrites_previous() {
        let store = Store::open_in_memory();
        store.set_schedule(9, 17, 30).unwrap();
        store.set_schedule(8, 12, 15).unwrap();

        let config = store.schedule().unwrap().unwrap();
        assert_eq!(config.start_hour, 8);
        assert_eq!(config.interval_minutes, 15);
    }

    #[test]
    fn test_invalid_configuration_not_persisted() {
        let store = Store::open_in_memory();
        let err = store.set_schedule(9, 9, 30).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(store.schedule().unwrap().is_none());
    }
}
