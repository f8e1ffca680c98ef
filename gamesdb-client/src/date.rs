//! Release date parsing.
//!
//! TheGamesDB emits release dates as `MM/DD/YYYY`, but older entries only
//! carry a year. Both forms are accepted; an empty field means "unknown".

use chrono::NaiveDate;

use crate::error::DateError;

/// Format of a fully specified release date (month first).
const FULL_DATE_FORMAT: &str = "%m/%d/%Y";

/// What to do with a release date that matches neither accepted format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePolicy {
    /// Fail the whole decode with a [`DateError`].
    #[default]
    Strict,
    /// Log a warning and treat the date as absent.
    Lenient,
}

/// Parse a release date field.
///
/// Tries `MM/DD/YYYY` first, then a bare four-digit year (which yields
/// January 1st of that year). An empty string is not an error.
pub fn parse_release_date(value: &str) -> Result<Option<NaiveDate>, DateError> {
    if value.is_empty() {
        return Ok(None);
    }

    parse_full_date(value)
        .or_else(|| parse_year_only(value))
        .map(Some)
        .ok_or_else(|| DateError {
            value: value.to_string(),
        })
}

/// Parse a release date, applying `policy` when both formats fail.
pub fn decode_release_date(
    value: &str,
    policy: DatePolicy,
) -> Result<Option<NaiveDate>, DateError> {
    match (parse_release_date(value), policy) {
        (Err(e), DatePolicy::Lenient) => {
            log::warn!("Ignoring release date: {e}");
            Ok(None)
        }
        (result, _) => result,
    }
}

/// `MM/DD/YYYY` with exactly two-digit month and day.
fn parse_full_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 2 || i == 5 { *b == b'/' } else { b.is_ascii_digit() });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, FULL_DATE_FORMAT).ok()
}

fn parse_year_only(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = value.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

#[cfg(test)]
#[path = "tests/date_tests.rs"]
mod tests;
