//! Power, stored in watts

use std::ops::Mul;
use std::sync::LazyLock;
use tracing::trace;
use wattage_core::Duration;
use crate::{Energy, Kind, Magnitude, Quantity, QuantityKind, SymbolTable};

static SYMBOLS: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::new(Watt::BASE_SYMBOL));

/// Kind marker for power
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Watt;

impl Kind for Watt {
    const KIND: QuantityKind = QuantityKind::Power;
    const BASE_SYMBOL: &'static str = "W";
    const DEFAULT_MAGNITUDE: Magnitude = Magnitude::Unit;

    fn symbols() -> &'static SymbolTable {
        &SYMBOLS
    }
}

/// Power, defaulting to watts
pub type Power = Quantity<Watt>;

impl Power {
    /// Energy delivered when running for `duration`
    pub fn over(&self, duration: &Duration) -> Energy {
        let energy = Energy::from_raw(self.value() * duration.in_hours());
        trace!(power = self.value(), hours = duration.in_hours(), energy = energy.value(), "power over duration");
        energy
    }
}

impl Mul<Duration> for Power {
    type Output = Energy;

    fn mul(self, rhs: Duration) -> Energy {
        self.over(&rhs)
    }
}

impl Mul<Power> for Duration {
    type Output = Energy;

    fn mul(self, rhs: Power) -> Energy {
        rhs.over(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_times_duration() {
        let p = Power::new(2.0, "kW").unwrap();
        let e = p * Duration::from_hours(3);
        assert_eq!(e, Energy::new(6.0, "kWh").unwrap());
        assert_eq!(e.to_string(), "6 kWh");
    }

    #[test]
    fn test_duration_times_power() {
        let p = Power::new(500.0, "W").unwrap();
        let e = Duration::from_minutes(90) * p;
        assert_eq!(e.convert_to("Wh").unwrap(), 750.0);
    }

    #[test]
    fn test_scalar_multiply_still_applies() {
        let p = Power::new(3.0, "kW").unwrap();
        assert_eq!((p * 2.0).convert_to("kW").unwrap(), 6.0);
    }

    #[test]
    fn test_zero_duration() {
        let p = Power::new(3.0, "kW").unwrap();
        assert!((p * Duration::zero()).is_zero());
    }
}
