//! `YYYYMMDD` integer date stamps, as carried in output metadata.

use chrono::{Datelike, Local, NaiveDate};

/// Encode `date` as a `YYYYMMDD` integer, e.g. 2024-03-07 → `20240307`.
pub fn date_stamp(date: NaiveDate) -> u32 {
    u32::try_from(date.year()).unwrap_or(0) * 10_000 + date.month() * 100 + date.day()
}

/// Today's date in the local timezone as a `YYYYMMDD` integer.
pub fn today_stamp() -> u32 {
    date_stamp(Local::now().date_naive())
}
