//! Wattage Units - Typed Energy and Power
//!
//! Quantities keep one canonical value (watts, watt-hours) and resolve unit
//! symbols through a shared magnitude table spanning femto to quadrillion.
//!
//! - `Power`: "fW" .. "PW", defaults to W
//! - `Energy`: "fWh" .. "PWh", defaults to kWh
//!
//! Power × Duration = Energy, Energy ÷ Duration = Power and
//! Energy ÷ Power = Duration (whole hours). Any other mix of kinds is
//! rejected: at compile time through the operator traits, or at runtime
//! through [`Value`].

mod magnitude;
mod symbols;
mod quantity;
mod energy;
mod power;
mod value;
mod parse;
mod error;

pub use magnitude::Magnitude;
pub use symbols::SymbolTable;
pub use quantity::{Kind, Quantity, QuantityKind, PRECISION};
pub use energy::{Energy, WattHour};
pub use power::{Power, Watt};
pub use value::Value;
pub use parse::split_quantity;
pub use error::{QuantityError, codes};

pub use wattage_core::Duration;
