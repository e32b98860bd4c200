//! Hour-value helpers: formatting fractional hours and validating the
//! cycle-hours form field.

use crate::errors::{AppError, AppResult};

/// Upper bound of the 8-day cycle, in hours.
pub const CYCLE_MAX_HOURS: f64 = 70.0;

/// Format an hour total the way it appears on the sheet: no trailing
/// decimals for whole numbers (8.0 → "8", 5.5 → "5.5").
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}

/// Validate the cycle-used-hours field before it goes on the wire.
pub fn validate_cycle_hours(hours: f64) -> AppResult<f64> {
    if !hours.is_finite() || hours < 0.0 || hours > CYCLE_MAX_HOURS {
        return Err(AppError::InvalidHours(format!(
            "{hours} (expected 0-{CYCLE_MAX_HOURS})"
        )));
    }
    Ok(hours)
}
