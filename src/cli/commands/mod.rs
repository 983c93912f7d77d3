pub mod auth;
pub mod config;
pub mod day;
pub mod export;
pub mod init;
pub mod log;
pub mod overview;
pub mod todo;
pub mod work;

use crate::auth::SessionGate;
use crate::cli::parser::RangeArgs;
use crate::config::Config;
use crate::core::range::DateRange;
use crate::errors::AppResult;
use crate::models::Identity;
use crate::store::Store;
use crate::utils::date::{first_of_month, parse_date};
use chrono::NaiveDate;

/// Open the store and the signed-in identity, or fail with `NotSignedIn`.
pub(crate) fn signed_in(cfg: &Config) -> AppResult<(Store, Identity)> {
    let gate = SessionGate::load(&cfg.session_file())?;
    let identity = gate.require()?.clone();
    let store = Store::open(&cfg.database)?;
    Ok((store, identity))
}

pub(crate) fn open_gate(cfg: &Config) -> AppResult<(Store, SessionGate)> {
    let store = Store::open(&cfg.database)?;
    let gate = SessionGate::load(&cfg.session_file())?;
    Ok((store, gate))
}

/// `--all` → everything up to today, `--period` → that period, `--from` /
/// `--to` → given bounds with month-to-date defaults, nothing → month to
/// date.
pub(crate) fn resolve_range(args: &RangeArgs, today: NaiveDate) -> AppResult<DateRange> {
    if args.all {
        return Ok(DateRange::up_to(today));
    }
    if let Some(p) = &args.period {
        return DateRange::from_period(p);
    }

    let start = match &args.from {
        Some(s) => parse_date(s)?,
        None => first_of_month(today),
    };
    let end = match &args.to {
        Some(s) => parse_date(s)?,
        None => today,
    };
    Ok(DateRange::between(start, end))
}
