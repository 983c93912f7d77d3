use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::utils::date::{first_of_month, month_last_day, parse_date};
use chrono::NaiveDate;

/// Inclusive date window used by the work history and the exports.
/// A missing bound is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Default view: first day of the current month up to today.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self::between(first_of_month(today), today)
    }

    /// "All works": everything up to today.
    pub fn up_to(today: NaiveDate) -> Self {
        Self::new(None, Some(today))
    }

    /// Dates are compared as zero-padded `YYYY-MM-DD` keys, which orders
    /// exactly like the calendar.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let key = iso(date);
        self.start.is_none_or(|s| iso(s) <= key) && self.end.is_none_or(|e| key <= iso(e))
    }

    /// `2025-12-01 to 2025-12-31`, as printed in report headers.
    pub fn label(&self) -> String {
        let start = self.start.map(iso).unwrap_or_default();
        let end = self.end.map(iso).unwrap_or_default();
        format!("{start} to {end}")
    }

    /// Parse a period expression:
    /// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    /// - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    pub fn from_period(p: &str) -> AppResult<Self> {
        let p = p.trim();

        if let Some((start_raw, end_raw)) = p.split_once(':') {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(invalid(p, "start and end must have the same format"));
            }
            let (d1, _) = period_bounds(start)?;
            let (_, d2) = period_bounds(end)?;
            return Ok(Self::between(d1, d2));
        }

        let (d1, d2) = period_bounds(p)?;
        Ok(Self::between(d1, d2))
    }
}

fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn invalid(p: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("{p} ({why})"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if !p.is_ascii() {
        return Err(invalid(p, "unsupported period format"));
    }

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let b = p.as_bytes();
            if b[4] != b'-' || !b[..4].iter().chain(&b[5..]).all(u8::is_ascii_digit) {
                return Err(invalid(p, "expected YYYY-MM"));
            }
            let y: i32 = p[0..4].parse().map_err(|_| invalid(p, "invalid year"))?;
            let m: u32 = p[5..7].parse().map_err(|_| invalid(p, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(p, "invalid month"))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(p, "invalid month"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(p, "invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported period format")),
    }
}

/// Entries inside `range`, keeping the input order.
pub fn filter_by_range<'a>(works: &'a [WorkEntry], range: &DateRange) -> Vec<&'a WorkEntry> {
    works.iter().filter(|w| range.contains(w.date)).collect()
}
