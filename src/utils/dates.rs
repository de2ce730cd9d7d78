use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{ClientError, ClientResult};

/// Wire format of every date exchanged with the server
pub const WIRE_FORMAT: &str = "%Y-%m-%d";
/// Display format used in notices and tables
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// First working day after a vacation of `days` calendar days.
///
/// Saturday moves to Monday (+2), Sunday moves to Monday (+1). A single
/// correction step: holidays are not modelled.
pub fn return_date(start: NaiveDate, days: u32) -> ClientResult<NaiveDate> {
    let candidate = start
        .checked_add_days(Days::new(days.into()))
        .ok_or_else(|| ClientError::validation("Vacation end date is out of range."))?;

    let shift = match candidate.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };

    candidate
        .checked_add_days(Days::new(shift))
        .ok_or_else(|| ClientError::validation("Vacation end date is out of range."))
}

/// Rejects start dates strictly before `today` (local midnight).
pub fn ensure_not_past(start: NaiveDate, today: NaiveDate) -> ClientResult<()> {
    if start < today {
        return Err(ClientError::validation(
            "The vacation start date cannot be earlier than today.",
        ));
    }
    Ok(())
}

pub fn parse_wire(raw: &str) -> ClientResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), WIRE_FORMAT)
        .map_err(|_| ClientError::validation(format!("Invalid date `{}`, expected YYYY-MM-DD.", raw.trim())))
}

pub fn to_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// `YYYY-MM-DD` -> `DD/MM/YYYY`; anything else is returned untouched.
pub fn display_wire(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => raw.to_string(),
    }
}

/// Chart axis labels: `YYYY-MM` -> `MM/YYYY`; anything else is returned untouched.
pub fn month_label(raw: &str) -> String {
    match raw.split_once('-') {
        Some((year, month)) if !month.contains('-') => format!("{}/{}", month, year),
        _ => raw.to_string(),
    }
}
