//! Duration type for energy/power arithmetic
//!
//! A signed time span with nanosecond resolution. Energy and power only ever
//! look at it in hours, but it keeps full resolution so that spans built from
//! minutes convert exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

/// A time span with nanosecond precision
///
/// Can be negative, which happens when a negative energy is divided by a
/// positive power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration {
    nanos: i128,
}

impl Duration {
    /// Whole hours; the only span the energy/power relation ever produces
    pub fn from_hours(hours: i64) -> Self {
        Self { nanos: i128::from(hours) * NANOS_PER_HOUR }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self { nanos: i128::from(minutes) * NANOS_PER_MINUTE }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Whole hours, truncated toward zero
    pub fn as_hours(&self) -> i64 {
        (self.nanos / NANOS_PER_HOUR) as i64
    }

    /// Fractional hours
    pub fn in_hours(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_HOUR as f64
    }

    pub fn is_zero(&self) -> bool {
        self.nanos == 0
    }

    pub fn neg(&self) -> Self {
        Self { nanos: -self.nanos }
    }

    pub fn add(&self, other: &Duration) -> Self {
        Self { nanos: self.nanos + other.nanos }
    }

    pub fn sub(&self, other: &Duration) -> Self {
        Self { nanos: self.nanos - other.nanos }
    }
}

/// `[-]HH:MM:SS`, hours not wrapped into days
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.nanos < 0 { "-" } else { "" };
        let total_secs = self.nanos.abs() / NANOS_PER_SECOND;
        write!(
            f,
            "{}{:02}:{:02}:{:02}",
            sign,
            total_secs / 3600,
            (total_secs % 3600) / 60,
            total_secs % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hours_round_trips() {
        let d = Duration::from_hours(3);
        assert_eq!(d.as_hours(), 3);
        assert_eq!(d.in_hours(), 3.0);
    }

    #[test]
    fn test_fractional_hours() {
        let d = Duration::from_minutes(90);
        assert_eq!(d.as_hours(), 1);
        assert!((d.in_hours() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative() {
        let d = Duration::from_hours(-2);
        assert_eq!(d.neg(), Duration::from_hours(2));
        assert_eq!(d.in_hours(), -2.0);
        assert_eq!(Duration::from_minutes(-90).as_hours(), -1);
    }

    #[test]
    fn test_add_sub() {
        let a = Duration::from_hours(1);
        let b = Duration::from_minutes(30);
        assert_eq!(a.add(&b), Duration::from_minutes(90));
        assert_eq!(a.sub(&b), Duration::from_minutes(30));
        assert!(a.sub(&a).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::from_hours(2).to_string(), "02:00:00");
        assert_eq!(Duration::from_hours(-1).to_string(), "-01:00:00");
        assert_eq!(Duration::from_hours(26).to_string(), "26:00:00");
        assert_eq!(Duration::from_minutes(75).to_string(), "01:15:00");
        assert_eq!(Duration::zero().to_string(), "00:00:00");
    }
}
