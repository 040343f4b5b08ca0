use std::time::Duration;

/// Converts a duration to seconds rounded to three decimal places.
pub fn round_secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).round() / 1000.0
}
