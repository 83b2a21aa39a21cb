use std::time::Instant;

use time::{OffsetDateTime, format_description::well_known::Iso8601};

/// Instant the process started serving from.
///
/// Captured once before the listener is bound and only read afterwards,
/// so uptime values are comparable across requests.
#[derive(Debug, Clone, Copy)]
pub struct Startup {
    instant: Instant,
}

impl Startup {
    pub fn capture() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    /// Monotonic, never negative.
    pub fn elapsed_seconds(&self) -> f64 {
        self.instant.elapsed().as_secs_f64()
    }
}

/// `"<H> hours, <M> minutes"`.
///
/// Seconds are dropped and hours never roll over into days.
pub fn format_human(elapsed_seconds: f64) -> String {
    let total = elapsed_seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{hours} hours, {minutes} minutes")
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Current UTC time as ISO-8601, e.g. `2025-08-01T12:34:56.123456789Z`.
pub fn now_iso8601() -> String {
    OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME_OFFSET)
        .inspect_err(|e| {
            tracing::warn!(
                "unable to format OffsetDateTime::now_utc() as Iso8601 :: {:?}",
                e
            )
        })
        .unwrap_or_default()
}
