use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use humansize::{BINARY, format_size};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Largest unit first; the first unit that fits at least once wins.
const UNITS: &[(i64, &str)] = &[
    (YEAR, "year"),
    (MONTH, "month"),
    (WEEK, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
    (1, "second"),
];

/// Byte count in IEC units with one decimal, e.g. `4.0 KiB`.
///
/// Counts below one KiB are exact and printed without a fraction.
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    format_size(bytes, BINARY.decimal_places(1).decimal_zeroes(1))
}

/// `t` as a chrono timestamp, clamped to chrono's representable range.
///
/// Filesystems happily store mtimes far outside that range.
pub fn utc_from_system_time(t: SystemTime) -> DateTime<Utc> {
    let (secs, nanos) = match t.duration_since(UNIX_EPOCH) {
        Ok(after) => (
            i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
            after.subsec_nanos(),
        ),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).map_or(i64::MIN, |s| -s);
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs.saturating_sub(1), 1_000_000_000 - n),
            }
        }
    };

    DateTime::from_timestamp(secs, nanos).unwrap_or(if secs < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Elapsed time between `then` and `now`, e.g. `3 days ago`.
///
/// Values are floored, so an older `then` never renders as a shorter
/// elapsed time than a newer one.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let (future, secs) = if delta < 0 {
        (true, delta.saturating_neg())
    } else {
        (false, delta)
    };

    if secs < 1 {
        return "now".to_owned();
    }

    let (unit_secs, unit) = UNITS
        .iter()
        .copied()
        .find(|(unit_secs, _)| secs >= *unit_secs)
        .unwrap_or((1, "second"));

    let value = secs / unit_secs;
    let plural = if value == 1 { "" } else { "s" };

    if future {
        format!("in {value} {unit}{plural}")
    } else {
        format!("{value} {unit}{plural} ago")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
