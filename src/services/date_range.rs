//! Dashboard period resolution.
//!
//! A period name (or an explicit custom range) resolves to an inclusive
//! `[start, end]` window relative to a caller-supplied "now", so resolution
//! stays a pure function that tests can pin.

use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;

/// Inclusive aggregation window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Explicit bounds supplied for the `custom` period. Both are required;
/// deserialized from separate optional query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CustomRange {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Resolve a period name to a concrete window.
///
/// Unknown period names degrade to `month` with a warning rather than failing
/// the whole dashboard. A `custom` period with a missing bound is a 400.
pub fn resolve_range(
    period: &str,
    custom: Option<&CustomRange>,
    now: DateTime<Utc>,
) -> Result<DateRange, AppError> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();

    match period {
        "today" => Ok(DateRange {
            start: midnight,
            end: now,
        }),
        "yesterday" => Ok(DateRange {
            start: midnight - Duration::days(1),
            end: midnight - Duration::milliseconds(1),
        }),
        "week" => Ok(DateRange {
            start: midnight - Duration::days(7),
            end: now,
        }),
        "month" => Ok(DateRange {
            start: sub_months(midnight, 1)?,
            end: now,
        }),
        "year" => Ok(DateRange {
            start: sub_months(midnight, 12)?,
            end: now,
        }),
        "custom" => {
            let custom = custom.copied().unwrap_or_default();
            match (custom.start_date, custom.end_date) {
                (Some(start), Some(end)) => Ok(DateRange { start, end }),
                _ => Err(AppError::Validation(
                    "custom period requires both start_date and end_date".to_string(),
                )),
            }
        }
        other => {
            tracing::warn!(period = %other, "Unknown dashboard period, defaulting to month");
            Ok(DateRange {
                start: sub_months(midnight, 1)?,
                end: now,
            })
        }
    }
}

/// Calendar-aware month subtraction; chrono clamps day-of-month overflow
/// (e.g. Mar 31 − 1 month = Feb 28/29).
fn sub_months(instant: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>, AppError> {
    instant
        .checked_sub_months(Months::new(months))
        .ok_or_else(|| AppError::Internal("date range underflow".to_string()))
}
