//! ISO-8601 text forms for dates, times and datetimes.
//!
//! Formatting always produces the canonical form:
//!
//! | Type            | Form                              |
//! |-----------------|-----------------------------------|
//! | `NaiveDate`     | `YYYY-MM-DD`                      |
//! | `NaiveTime`     | `HH:MM:SS` or `HH:MM:SS.ffffff`   |
//! | `NaiveDateTime` | `YYYY-MM-DDTHH:MM:SS[.ffffff]`    |
//!
//! Parsing additionally accepts times without seconds (`HH:MM`) and a space
//! instead of `T` between date and time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";
const SHORT_TIME_FORMAT: &str = "%H:%M";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMATS[0]).to_string()
}

pub fn parse_date(s: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}

pub fn parse_time(s: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, SHORT_TIME_FORMAT))
}

pub fn parse_datetime(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATETIME_FORMATS[1]))
}
