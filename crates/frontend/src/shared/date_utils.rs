//! Date formatting for tables and forms.

use chrono::{DateTime, NaiveDate};

/// `2009-03-15` -> `15/03/2009`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_optional_date(date: Option<&NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// ISO timestamp from the backend to `dd/mm/yyyy hh:mm`; unparseable input
/// is returned as is.
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Parses the `yyyy-mm-dd` value of a date input; blank means no date.
pub fn parse_input_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date: {value}"))
}

/// Value for a date input.
pub fn to_input_date(date: Option<&NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_first() {
        let date = NaiveDate::from_ymd_opt(2009, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15/03/2009");
        assert_eq!(format_optional_date(None), "");
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(format_timestamp("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn input_date_round_trip() {
        let parsed = parse_input_date("2010-01-31").unwrap();
        assert_eq!(to_input_date(parsed.as_ref()), "2010-01-31");
        assert_eq!(parse_input_date(" ").unwrap(), None);
        assert!(parse_input_date("31/01/2010").is_err());
    }
}
