use chrono::{Datelike, Local, NaiveDate};

use crate::error::{CalendarError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parses a strict `YYYY-MM-DD` key. Chrono alone would also accept
/// unpadded forms like `2024-1-5`, which never match a zero-padded key.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(CalendarError::InvalidDate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(input.to_string()))
}

pub fn validate_year(year: i32) -> Result<i32> {
    if (1..=9999).contains(&year) {
        Ok(year)
    } else {
        Err(CalendarError::InvalidYear(year))
    }
}

/// Every date from January 1 to December 31 of `year`, ascending.
/// Yields nothing for years chrono cannot represent.
pub fn year_dates(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |d| d.year() == year)
}

pub fn days_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .map(|d| d.ordinal())
        .unwrap_or(0)
}

/// Sunday = 0 .. Saturday = 6
pub fn weekday_row(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn month_abbrev(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
}

pub fn current_year() -> i32 {
    Local::now().year()
}
