//! Wall-clock helpers shared by creation stamping and age display.

use std::time::{SystemTime, UNIX_EPOCH};

const MINUTE_SECS: i64 = 60;
const HOUR_SECS: i64 = 60 * 60;
const DAY_SECS: i64 = 24 * 60 * 60;

/// Current time in epoch seconds.
pub fn now_epoch_secs() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        // Pre-epoch clocks only happen on badly misconfigured systems;
        // treat them as the epoch itself rather than panicking.
        Err(_) => 0,
    }
}

/// Formats an age in seconds the way list rows display it.
pub fn format_relative_age(age_secs: i64) -> String {
    if age_secs < MINUTE_SECS {
        return "just now".to_string();
    }
    if age_secs < HOUR_SECS {
        return format!("{}m ago", age_secs / MINUTE_SECS);
    }
    if age_secs < DAY_SECS {
        return format!("{}h ago", age_secs / HOUR_SECS);
    }
    format!("{}d ago", age_secs / DAY_SECS)
}
