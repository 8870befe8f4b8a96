//! Time calculation utilities for transition animations

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now`
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its full duration by `now`
#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Columns the track is shifted left for an offset in percent of one slide width
#[inline]
pub fn offset_to_columns(offset_percent: f64, width: u16) -> u16 {
    let cols = (-offset_percent / 100.0 * width as f64).round();
    cols.clamp(0.0, width as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, -100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, -100.0, 0.5) + 50.0).abs() < 0.001);
        assert!((lerp(-100.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(320);
        assert!((progress_at(start, duration, start) - 0.0).abs() < 0.001);
        assert!(
            (progress_at(start, duration, start + Duration::from_millis(160)) - 0.5).abs() < 0.001
        );
        assert!(
            (progress_at(start, duration, start + Duration::from_secs(5)) - 1.0).abs() < 0.001
        );
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress_at(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
        assert!(is_complete_at(start, Duration::ZERO, start));
    }

    #[test]
    fn test_offset_to_columns() {
        assert_eq!(offset_to_columns(0.0, 80), 0);
        assert_eq!(offset_to_columns(-50.0, 80), 40);
        assert_eq!(offset_to_columns(-100.0, 80), 80);
        assert_eq!(offset_to_columns(-150.0, 80), 80);
        assert_eq!(offset_to_columns(-33.3, 3), 1);
    }
}
