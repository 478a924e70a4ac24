//! Quantity type - a scaled value of one kind
//!
//! A `Quantity<K>` stores a single `f64` at canonical scale (exponent 0 of
//! the kind's base unit). Unit symbols are resolved through the kind's
//! symbol table on the way in and on the way out; arithmetic only ever sees
//! the canonical value.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};
use tracing::debug;
use wattage_core::number_to_human;
use crate::{Magnitude, QuantityError, SymbolTable, Value};

/// Significant digits used by `Display` when no precision is given
pub const PRECISION: u32 = 4;

/// Runtime tag for a quantity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Energy,
    Power,
}

impl QuantityKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Energy => "Energy",
            QuantityKind::Power => "Power",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A concrete quantity kind: base symbol, default magnitude and symbol table
pub trait Kind: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const KIND: QuantityKind;
    /// Base letters every symbol of this kind ends with
    const BASE_SYMBOL: &'static str;
    /// Magnitude used when no unit is given
    const DEFAULT_MAGNITUDE: Magnitude;

    fn symbols() -> &'static SymbolTable;
}

/// A physical quantity of kind `K`, stored at canonical scale
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Quantity<K: Kind> {
    value: f64,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: Kind> Quantity<K> {
    /// Create from a value expressed in `unit`
    pub fn new(value: f64, unit: &str) -> Result<Self, QuantityError> {
        let magnitude = Self::resolve(unit)?;
        Ok(Self::with_magnitude(value, magnitude))
    }

    /// Create from a value expressed in the kind's default unit
    pub fn in_default_unit(value: f64) -> Self {
        Self::with_magnitude(value, K::DEFAULT_MAGNITUDE)
    }

    pub fn with_magnitude(value: f64, magnitude: Magnitude) -> Self {
        Self::from_raw(magnitude.to_canonical(value))
    }

    /// Create from a canonical value (watts, watt-hours)
    pub fn from_raw(value: f64) -> Self {
        Quantity { value, kind: PhantomData }
    }

    pub fn zero() -> Self {
        Self::from_raw(0.0)
    }

    /// Canonical value
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    pub fn kind() -> QuantityKind {
        K::KIND
    }

    /// Symbol of the default unit, e.g. "kWh"
    pub fn default_unit() -> &'static str {
        K::symbols().symbol(K::DEFAULT_MAGNITUDE)
    }

    /// Every symbol this kind accepts, smallest magnitude first
    pub fn symbols() -> impl Iterator<Item = &'static str> {
        K::symbols().symbols()
    }

    /// Value expressed in `unit`
    pub fn convert_to(&self, unit: &str) -> Result<f64, QuantityError> {
        let magnitude = Self::resolve(unit)?;
        Ok(self.in_magnitude(magnitude))
    }

    pub fn in_magnitude(&self, magnitude: Magnitude) -> f64 {
        magnitude.from_canonical(self.value)
    }

    /// Render at the best-fitting magnitude with `precision` significant digits
    pub fn to_human(&self, precision: u32) -> String {
        number_to_human(self.value, K::symbols().exponent_table(), precision)
    }

    /// Add a same-kind quantity or an exact zero
    pub fn checked_add(&self, rhs: &Value) -> Result<Self, QuantityError> {
        self.additive("add", rhs).map(|other| Self::from_raw(self.value + other))
    }

    /// Subtract a same-kind quantity or an exact zero
    pub fn checked_sub(&self, rhs: &Value) -> Result<Self, QuantityError> {
        self.additive("subtract", rhs).map(|other| Self::from_raw(self.value - other))
    }

    /// Canonical value of an additive operand
    fn additive(&self, op: &'static str, rhs: &Value) -> Result<f64, QuantityError> {
        if let Some(other) = rhs.as_quantity::<K>() {
            return Ok(other.value);
        }
        match rhs {
            Value::Number(n) if *n == 0.0 => Ok(0.0),
            Value::Number(_) => {
                debug!(op, kind = K::KIND.name(), "rejected non-zero bare number");
                Err(QuantityError::NonZeroScalar { op, kind: K::KIND.name() })
            }
            other => {
                debug!(op, lhs = K::KIND.name(), rhs = other.type_name(), "rejected operand");
                Err(QuantityError::incompatible(op, K::KIND.name(), other.type_name()))
            }
        }
    }

    fn resolve(unit: &str) -> Result<Magnitude, QuantityError> {
        K::symbols().magnitude(unit).ok_or_else(|| {
            debug!(unit, kind = K::KIND.name(), "unknown unit symbol");
            QuantityError::invalid_unit(unit, K::KIND.name())
        })
    }
}

impl<K: Kind> Default for Quantity<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: Kind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().map(|p| p as u32).unwrap_or(PRECISION);
        write!(f, "{}", self.to_human(precision))
    }
}

impl<K: Kind> fmt::Debug for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", K::KIND.name(), self)
    }
}

// Across kinds, equality is false and ordering is None.

impl<K: Kind, L: Kind> PartialEq<Quantity<L>> for Quantity<K> {
    fn eq(&self, other: &Quantity<L>) -> bool {
        K::KIND == L::KIND && self.value == other.value
    }
}

impl<K: Kind, L: Kind> PartialOrd<Quantity<L>> for Quantity<K> {
    fn partial_cmp(&self, other: &Quantity<L>) -> Option<Ordering> {
        if K::KIND != L::KIND {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl<K: Kind> Add for Quantity<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.value + rhs.value)
    }
}

impl<K: Kind> Sub for Quantity<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.value - rhs.value)
    }
}

impl<K: Kind> Neg for Quantity<K> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.value)
    }
}

impl<K: Kind> Mul<f64> for Quantity<K> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_raw(self.value * rhs)
    }
}

impl<K: Kind> Div<f64> for Quantity<K> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_raw(self.value / rhs)
    }
}

impl<K: Kind> Sum for Quantity<K> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Energy, Power};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_construct_with_unit() {
        let p = Power::new(1.0, "kW").unwrap();
        assert_eq!(p.value(), 1000.0);

        let e = Energy::new(2.5, "MWh").unwrap();
        assert_eq!(e.value(), 2_500_000.0);
    }

    #[test]
    fn test_default_units() {
        assert_eq!(Power::default_unit(), "W");
        assert_eq!(Energy::default_unit(), "kWh");
        assert_eq!(Power::in_default_unit(5.0).value(), 5.0);
        assert_eq!(Energy::in_default_unit(5.0).value(), 5000.0);
    }

    #[test]
    fn test_invalid_unit() {
        let err = Power::new(5.0, "xyz").unwrap_err();
        assert_eq!(err, QuantityError::invalid_unit("xyz", "Power"));

        // a symbol of the other kind is just as foreign
        assert!(Power::new(5.0, "kWh").is_err());
        assert!(Energy::new(5.0, "kW").is_err());
    }

    #[test]
    fn test_convert_to() {
        let p = Power::new(1.0, "kW").unwrap();
        assert_eq!(p.convert_to("W").unwrap(), 1000.0);
        assert!(approx(p.convert_to("MW").unwrap(), 0.001));
        assert!(p.convert_to("Wh").is_err());
    }

    #[test]
    fn test_round_trip_every_symbol() {
        for symbol in Power::symbols() {
            let p = Power::new(3.7, symbol).unwrap();
            assert!(approx(p.convert_to(symbol).unwrap(), 3.7), "{}", symbol);
        }
        for symbol in Energy::symbols() {
            let e = Energy::new(-42.125, symbol).unwrap();
            assert!(approx(e.convert_to(symbol).unwrap(), -42.125), "{}", symbol);
        }
    }

    #[test]
    fn test_checked_add() {
        let a = Power::new(5.0, "kW").unwrap();
        let b = Power::new(3.0, "kW").unwrap();
        let sum = a.checked_add(&Value::from(b)).unwrap();
        assert_eq!(sum, Power::new(8.0, "kW").unwrap());
    }

    #[test]
    fn test_checked_add_zero_is_identity() {
        let a = Power::new(5.0, "kW").unwrap();
        assert_eq!(a.checked_add(&Value::Number(0.0)).unwrap(), a);
        assert_eq!(a.checked_sub(&Value::Number(0.0)).unwrap(), a);
    }

    #[test]
    fn test_checked_add_rejects_bare_number() {
        let a = Power::new(5.0, "kW").unwrap();
        let err = a.checked_add(&Value::Number(1.0)).unwrap_err();
        assert_eq!(err, QuantityError::NonZeroScalar { op: "add", kind: "Power" });
        assert!(err.is_incompatible_operand());
    }

    #[test]
    fn test_checked_add_rejects_other_kind() {
        let a = Power::new(5.0, "kW").unwrap();
        let e = Energy::new(1.0, "kWh").unwrap();
        let err = a.checked_sub(&Value::from(e)).unwrap_err();
        assert_eq!(err, QuantityError::incompatible("subtract", "Power", "Energy"));
    }

    #[test]
    fn test_operators() {
        let a = Power::new(6.0, "kW").unwrap();
        let b = Power::new(2.0, "kW").unwrap();
        assert_eq!((a - b).convert_to("kW").unwrap(), 4.0);
        assert_eq!((a * 2.0).convert_to("kW").unwrap(), 12.0);
        assert_eq!((a / 4.0).convert_to("kW").unwrap(), 1.5);
        assert_eq!((-a).value(), -6000.0);
    }

    #[test]
    fn test_cross_kind_comparison() {
        let p = Power::new(1000.0, "W").unwrap();
        let e = Energy::new(1.0, "kWh").unwrap();
        assert_eq!(p.value(), e.value());
        assert!(p != e);
        assert_eq!(p.partial_cmp(&e), None);
    }

    #[test]
    fn test_ordering() {
        let small = Power::new(1.0, "kW").unwrap();
        let big = Power::new(2.0, "kW").unwrap();
        assert!(small < big);
        assert_eq!(small.partial_cmp(&big), Some(Ordering::Less));
    }

    #[test]
    fn test_sum() {
        let total: Energy = [1.0, 2.0, 3.5]
            .iter()
            .map(|v| Energy::in_default_unit(*v))
            .sum();
        assert_eq!(total, Energy::new(6.5, "kWh").unwrap());
    }

    #[test]
    fn test_is_zero() {
        assert!(Power::zero().is_zero());
        assert!(Power::default().is_zero());
        assert!(!Power::from_raw(1e-20).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Power::new(1.5, "kW").unwrap().to_string(), "1.5 kW");
        assert_eq!(Energy::new(1234.5, "Wh").unwrap().to_string(), "1.235 kWh");
        assert_eq!(format!("{:.2}", Power::new(1234.0, "W").unwrap()), "1.2 kW");
    }

    #[test]
    fn test_debug() {
        let p = Power::new(2.0, "MW").unwrap();
        assert_eq!(format!("{:?}", p), "Power(2 MW)");
    }
}
