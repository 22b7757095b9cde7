//! Degree formatting for coordinate display.
//!
//! Converts a decimal-degree value into the two display strings the
//! cursor overlay shows per axis:
//!
//! - Decimal: `"45.5 Lon"`
//! - Degrees/minutes/seconds: `"45° 30' 0.0\" Lon"`
//!
//! The DMS decomposition truncates toward zero, so the sign appears
//! only on the degrees field. Seconds are rounded to 4 decimal places
//! and deliberately not normalized: a value that rounds to exactly
//! `60.0` seconds stays `60.0` rather than carrying into minutes.

use std::fmt;

/// Which geographic axis a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Latitude (north-south).
    Lat,
    /// Longitude (east-west).
    Lon,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lat => write!(f, "Lat"),
            Self::Lon => write!(f, "Lon"),
        }
    }
}

/// A decimal-degree value decomposed into degrees, minutes and seconds.
///
/// Derived from one component of a transformed point; never constructed
/// from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsValue {
    /// Whole degrees, truncated toward zero. Carries the sign.
    pub degrees: i64,
    /// Whole minutes of the fractional part, always non-negative.
    pub minutes: i64,
    /// Remaining seconds, rounded to 4 decimal places, non-negative.
    pub seconds: f64,
}

impl DmsValue {
    /// Decompose a decimal-degree value.
    ///
    /// Truncation toward zero keeps the sign on the degrees field only;
    /// minutes and seconds are magnitudes of the fractional remainder.
    pub fn from_decimal_degrees(value: f64) -> Self {
        let degrees = value.trunc();
        let minutes_full = value.fract().abs() * 60.0;
        let minutes = minutes_full.trunc();
        let seconds = round_to_4dp(minutes_full.fract() * 60.0);
        Self {
            degrees: degrees as i64,
            minutes: minutes as i64,
            seconds,
        }
    }
}

impl fmt::Display for DmsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\u{b0} {}' {}\"",
            self.degrees,
            self.minutes,
            render_degrees(self.seconds)
        )
    }
}

/// Format one decimal-degree value for display.
///
/// Returns `(decimal_string, dms_string)`, e.g. for `(45.5, Axis::Lon)`:
/// `("45.5 Lon", "45° 30' 0.0\" Lon")`.
///
/// The domain of `value` is unrestricted; callers supply values already
/// bounded by the upstream transform, but nothing here assumes that.
pub fn format_degrees(value: f64, axis: Axis) -> (String, String) {
    let decimal = format!("{} {}", render_degrees(value), axis);
    let dms = format!("{} {}", DmsValue::from_decimal_degrees(value), axis);
    (decimal, dms)
}

/// Render a float the way the displays expect: integral finite values
/// keep one decimal place (`900.0`, not `900`), everything else uses the
/// shortest round-trip form.
fn render_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Round half away from zero to 4 decimal places.
#[inline]
fn round_to_4dp(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_latitude() {
        let (decimal, dms) = format_degrees(0.0, Axis::Lat);
        assert_eq!(decimal, "0.0 Lat");
        assert_eq!(dms, "0\u{b0} 0' 0.0\" Lat");
    }

    #[test]
    fn test_format_half_degree_longitude() {
        let (decimal, dms) = format_degrees(45.5, Axis::Lon);
        assert_eq!(decimal, "45.5 Lon");
        assert_eq!(dms, "45\u{b0} 30' 0.0\" Lon", "0.5° is exactly 30 minutes");
    }

    #[test]
    fn test_format_negative_longitude_sign_on_degrees_only() {
        // San Francisco longitude
        let (decimal, dms) = format_degrees(-122.4194, Axis::Lon);
        assert_eq!(decimal, "-122.4194 Lon");

        let value = DmsValue::from_decimal_degrees(-122.4194);
        assert_eq!(value.degrees, -122, "degrees truncate toward zero");
        assert_eq!(value.minutes, 25, "minutes carry no sign");
        assert!(
            (value.seconds - 9.84).abs() < 0.01,
            "seconds should be ~9.84, got {}",
            value.seconds
        );
        assert_eq!(dms, "-122\u{b0} 25' 9.84\" Lon");
    }

    #[test]
    fn test_format_integral_value_keeps_decimal_point() {
        let (decimal, dms) = format_degrees(900.0, Axis::Lat);
        assert_eq!(decimal, "900.0 Lat");
        assert_eq!(dms, "900\u{b0} 0' 0.0\" Lat");
    }

    #[test]
    fn test_format_is_pure() {
        let first = format_degrees(12.3456, Axis::Lat);
        let second = format_degrees(12.3456, Axis::Lat);
        assert_eq!(first, second, "same input must yield identical strings");
    }

    #[test]
    fn test_small_negative_value_loses_sign_in_dms() {
        // trunc(-0.5) is -0.0, which renders as 0; the decimal string
        // still carries the sign. Preserved behavior, not a bug to fix.
        let value = DmsValue::from_decimal_degrees(-0.5);
        assert_eq!(value.degrees, 0);
        assert_eq!(value.minutes, 30);
        assert_eq!(value.seconds, 0.0);
    }

    #[test]
    fn test_seconds_rounding_to_4dp() {
        // 10.51 + 1/3600 of a degree lands on fractional seconds
        let value = DmsValue::from_decimal_degrees(10.0 + 30.123456 / 3600.0);
        assert_eq!(value.degrees, 10);
        assert_eq!(value.minutes, 0);
        assert!(
            (value.seconds - 30.1235).abs() < 1e-9,
            "4-decimal rounding expected, got {}",
            value.seconds
        );
    }

    #[test]
    fn test_seconds_near_sixty_not_normalized() {
        // 59.99999 seconds rounds to 60.0 and stays there; no carry
        // into minutes. Known quirk kept from the original behavior.
        let value = DmsValue::from_decimal_degrees(10.0 + 59.99999 / 3600.0);
        assert_eq!(value.minutes, 0);
        assert_eq!(value.seconds, 60.0);
    }
}
