//! Speed, pace and distance conversions.

use crate::laps::types::Interval;

/// Minutes per hour, the only unit factor the converters need.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Convert a speed in km/h to a pace in minutes per km.
///
/// Returns `None` for a zero or negative speed.
pub fn speed_to_pace(speed_kmh: f64) -> Option<f64> {
    if speed_kmh > 0.0 {
        Some(MINUTES_PER_HOUR / speed_kmh)
    } else {
        None
    }
}

/// Distance in km covered by an interval.
pub fn distance_for(interval: &Interval) -> f64 {
    interval.speed * (interval.duration / MINUTES_PER_HOUR)
}

/// Average pace for a time/distance pair, `None` when no distance was covered.
pub fn average_pace(minutes: f64, distance_km: f64) -> Option<f64> {
    if distance_km > 0.0 {
        Some(minutes / distance_km)
    } else {
        None
    }
}

/// Parse an `M:SS` pace string into decimal minutes.
///
/// Surrounding whitespace is ignored and anything after the first `M:SS`
/// prefix (such as a ` /km` suffix) is left unread.
pub fn parse_pace(text: &str) -> Option<f64> {
    let text = text.trim();
    let (minutes, rest) = text.split_once(':')?;
    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let seconds: String = rest.chars().take_while(char::is_ascii_digit).take(2).collect();
    if seconds.is_empty() {
        return None;
    }

    let minutes: f64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    Some(minutes + seconds / 60.0)
}
