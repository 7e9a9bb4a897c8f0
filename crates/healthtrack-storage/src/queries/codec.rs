//! Text encodings for timestamps, dates, and enums stored in SQLite.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};

use healthtrack_core::errors::{HealthTrackResult, StorageError};

/// Current time at the precision that survives a round trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width RFC 3339 (microseconds, `Z`) so text order is time order.
pub fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_timestamp(column: &str, value: &str) -> HealthTrackResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| invalid(column, value))
}

pub fn encode_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn decode_date(column: &str, value: &str) -> HealthTrackResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid(column, value))
}

/// Parse any `FromStr` column value (statuses, roles, genders).
pub fn decode_enum<T: FromStr>(column: &str, value: &str) -> HealthTrackResult<T> {
    value.parse().map_err(|_| invalid(column, value))
}

fn invalid(column: &str, value: &str) -> healthtrack_core::HealthTrackError {
    StorageError::InvalidData {
        column: column.to_string(),
        value: value.to_string(),
    }
    .into()
}
