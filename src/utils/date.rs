//! Date/time parsing and the display formats used across views and reports.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.into()))
}

pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(s.into()))
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// `22.09.2025`: work history tables and reports.
pub fn display_date(d: NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

/// `22/09/2025`: todo list meta line.
pub fn todo_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// `22 Sep, 25 Monday`
pub fn calendar_title(d: NaiveDate) -> String {
    d.format("%d %b, %y %A").to_string()
}

/// `Tasks for Sep 22`
pub fn tasks_heading(d: NaiveDate) -> String {
    format!("Tasks for {}", d.format("%b %d"))
}

/// `20250922`: export file names.
pub fn report_stamp(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}
