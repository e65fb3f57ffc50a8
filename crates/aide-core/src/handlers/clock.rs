//! Wall-clock replies

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// `HH:MM:SS`, zero padded
pub fn format_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%H:%M:%S").to_string()
}

/// `YYYY-MM-DD`
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%Y-%m-%d").to_string()
}

pub fn get_time() -> String {
    format!("Current time: {}", format_time(&Local::now()))
}

pub fn get_date() -> String {
    format!("Current date: {}", format_date(&Local::now()))
}
