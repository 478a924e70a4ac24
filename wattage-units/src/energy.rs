//! Energy, stored in watt-hours

use std::ops::Div;
use std::sync::LazyLock;
use tracing::trace;
use wattage_core::Duration;
use crate::{Kind, Magnitude, Power, Quantity, QuantityKind, SymbolTable};

static SYMBOLS: LazyLock<SymbolTable> = LazyLock::new(|| SymbolTable::new(WattHour::BASE_SYMBOL));

/// Kind marker for energy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WattHour;

impl Kind for WattHour {
    const KIND: QuantityKind = QuantityKind::Energy;
    const BASE_SYMBOL: &'static str = "Wh";
    const DEFAULT_MAGNITUDE: Magnitude = Magnitude::Thousand;

    fn symbols() -> &'static SymbolTable {
        &SYMBOLS
    }
}

/// Energy, defaulting to kilowatt-hours
pub type Energy = Quantity<WattHour>;

impl Energy {
    /// Average power when spread over `duration`
    pub fn per(&self, duration: &Duration) -> Power {
        Power::from_raw(self.value() / duration.in_hours())
    }

    /// How long `power` takes to deliver this energy, in whole hours
    ///
    /// The fractional hour is truncated toward zero: 5 kWh at 2 kW is 2 h.
    /// A zero power gives a non-finite quotient, which saturates.
    pub fn duration_at(&self, power: &Power) -> Duration {
        let hours = self.value() / power.value();
        trace!(energy = self.value(), power = power.value(), hours, "energy at power");
        Duration::from_hours(hours.trunc() as i64)
    }
}

impl Div<Duration> for Energy {
    type Output = Power;

    fn div(self, rhs: Duration) -> Power {
        self.per(&rhs)
    }
}

impl Div<Power> for Energy {
    type Output = Duration;

    fn div(self, rhs: Power) -> Duration {
        self.duration_at(&rhs)
    }
}
