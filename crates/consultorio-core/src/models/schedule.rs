//! Schedule configuration and the daily time grid.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Intervals offered by the configuration menu.
pub const ALLOWED_INTERVALS: [u32; 3] = [15, 20, 30];

/// Singleton working-hours configuration used when generating a month.
///
/// Changing it never retroactively affects already-generated slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// First slot starts at this hour, minute 00
    pub start_hour: u32,
    /// No slot starts at or after this hour
    pub end_hour: u32,
    /// Minutes between consecutive slots
    pub interval_minutes: u32,
}

impl ScheduleConfig {
    pub fn new(start_hour: u32, end_hour: u32, interval_minutes: u32) -> Result<Self> {
        if !(1..=23).contains(&start_hour) {
            return Err(Error::Validation("start hour must be 1-23".into()));
        }
        if end_hour <= start_hour || end_hour > 23 {
            return Err(Error::Validation(
                "end hour must be greater than start hour, at most 23".into(),
            ));
        }
        if !ALLOWED_INTERVALS.contains(&interval_minutes) {
            return Err(Error::Validation("interval must be 15, 20 or 30 minutes".into()));
        }
        Ok(Self {
            start_hour,
            end_hour,
            interval_minutes,
        })
    }

    /// Ordered `HH:MM` strings from `start_hour:00`, stepping by the
    /// interval, stopping strictly before `end_hour:00`. Minute overflow
    /// rolls into the hour.
    pub fn time_grid(&self) -> Vec<String> {
        let mut grid = Vec::new();
        let mut hour = self.start_hour;
        let mut minutes = 0;
        while hour < self.end_hour {
            grid.push(format!("{hour:02}:{minutes:02}"));
            minutes += self.interval_minutes;
            if minutes >= 60 {
                hour += 1;
                minutes = 0;
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_bounds() {
        assert!(ScheduleConfig::new(0, 17, 30).is_err());
        assert!(ScheduleConfig::new(24, 25, 30).is_err());
        assert!(ScheduleConfig::new(9, 9, 30).is_err());
        assert!(ScheduleConfig::new(9, 24, 30).is_err());
        assert!(ScheduleConfig::new(9, 17, 45).is_err());
        assert!(ScheduleConfig::new(9, 17, 30).is_ok());
    }

    #[test]
    fn test_time_grid_half_hour() {
        let grid = ScheduleConfig::new(9, 17, 30).unwrap().time_grid();
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.first().unwrap(), "09:00");
        assert_eq!(grid.last().unwrap(), "16:30");
    }

    #[test]
    fn test_time_grid_rolls_minutes_into_hour() {
        let grid = ScheduleConfig::new(9, 11, 20).unwrap().time_grid();
        assert_eq!(
            grid,
            vec!["09:00", "09:20", "09:40", "10:00", "10:20", "10:40"]
        );
    }

    #[test]
    fn test_wire_field_names() {
        let config = ScheduleConfig::new(9, 17, 15).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("startHour").is_some());
        assert!(json.get("endHour").is_some());
        assert!(json.get("intervalMinutes").is_some());
    }
}
