//! Calendar helpers: working days, appointment-date checks, display format.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Format a date the way the whole system displays it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// All Monday-Friday dates of a month as `DD/MM/YYYY` strings, in order.
pub fn working_days(month: u32, year: i32) -> Result<Vec<String>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::Validation(format!("invalid month/year: {month}/{year}")))?;

    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| d.weekday().num_days_from_monday() < 5)
        .map(format_date)
        .collect())
}

/// Validate a proposed appointment date: it must exist on the calendar and
/// must not be earlier than `today` (today itself is allowed).
pub fn validate_appointment_date(
    day: u32,
    month: u32,
    year: i32,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Validation(format!("invalid date: {day}/{month}/{year}")))?;
    if date < today {
        return Err(Error::Validation("date is earlier than today".into()));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_working_days_february_leap_year() {
        let days = working_days(2, 2024).unwrap();
        assert_eq!(days.len(), 21);
        assert_eq!(days.first().unwrap(), "01/02/2024");
        assert_eq!(days.last().unwrap(), "29/02/2024");

        for day in &days {
            let parsed = NaiveDate::parse_from_str(day, "%d/%m/%Y").unwrap();
            assert_ne!(parsed.weekday(), Weekday::Sat);
            assert_ne!(parsed.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_working_days_invalid_month() {
        assert!(working_days(0, 2025).is_err());
        assert!(working_days(13, 2025).is_err());
    }

    #[test]
    fn test_appointment_date_rejects_impossible_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(validate_appointment_date(31, 4, 2025, today).is_err());
        assert!(validate_appointment_date(29, 2, 2025, today).is_err());
    }

    #[test]
    fn test_appointment_date_rejects_past_allows_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(validate_appointment_date(9, 3, 2025, today).is_err());
        assert!(validate_appointment_date(10, 3, 2025, today).is_ok());
        assert!(validate_appointment_date(11, 3, 2025, today).is_ok());
    }
}
