//! Runtime-typed operands
//!
//! `Value` is the closed set of things that can meet a quantity in an
//! arithmetic expression when the operand types are only known at runtime.
//! Each operator matches the (left, right) pair exhaustively; anything not
//! listed is an `IncompatibleOperand` error.

use std::cmp::Ordering;
use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wattage_core::Duration;
use crate::{Energy, Kind, Power, Quantity, QuantityError, QuantityKind};

/// A bare number, a quantity, or a duration
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Number(f64),
    Energy(Energy),
    Power(Power),
    Duration(Duration),
}

impl Value {
    // ========== Accessors ==========

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_energy(&self) -> Option<&Energy> {
        match self {
            Value::Energy(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_power(&self) -> Option<&Power> {
        match self {
            Value::Power(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Value::Duration(d) => Some(d),
            _ => None,
        }
    }

    /// The quantity of kind `K`, if this value holds one
    pub fn as_quantity<K: Kind>(&self) -> Option<Quantity<K>> {
        match (self, K::KIND) {
            (Value::Energy(e), QuantityKind::Energy) => Some(Quantity::from_raw(e.value())),
            (Value::Power(p), QuantityKind::Power) => Some(Quantity::from_raw(p.value())),
            _ => None,
        }
    }

    /// Kind tag for quantity values
    pub fn kind(&self) -> Option<QuantityKind> {
        match self {
            Value::Energy(_) => Some(QuantityKind::Energy),
            Value::Power(_) => Some(QuantityKind::Power),
            _ => None,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Energy(_) => "Energy",
            Value::Power(_) => "Power",
            Value::Duration(_) => "Duration",
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Number(n) => *n == 0.0,
            Value::Energy(e) => e.is_zero(),
            Value::Power(p) => p.is_zero(),
            Value::Duration(d) => d.is_zero(),
        }
    }

    // ========== Coercion ==========

    /// Promote a bare left-hand number to the kind of `target`
    ///
    /// The number is taken at canonical scale. Returns `None` when `target`
    /// is not a quantity.
    pub fn coerce(n: f64, target: &Value) -> Option<Value> {
        match target {
            Value::Energy(_) => Some(Value::Energy(Energy::from_raw(n))),
            Value::Power(_) => Some(Value::Power(Power::from_raw(n))),
            Value::Number(_) | Value::Duration(_) => None,
        }
    }

    /// Promote a bare left-hand number so the operator can be retried
    fn promote(op: &'static str, n: f64, target: &Value) -> Result<Value, QuantityError> {
        Self::coerce(n, target).ok_or_else(|| Self::reject(op, &Value::Number(n), target))
    }

    fn reject(op: &'static str, lhs: &Value, rhs: &Value) -> QuantityError {
        debug!(op, lhs = lhs.type_name(), rhs = rhs.type_name(), "rejected operand");
        QuantityError::incompatible(op, lhs.type_name(), rhs.type_name())
    }

    // ========== Arithmetic ==========

    pub fn add(&self, rhs: &Value) -> Result<Value, QuantityError> {
        match (self, rhs) {
            (Value::Energy(e), _) => e.checked_add(rhs).map(Value::Energy),
            (Value::Power(p), _) => p.checked_add(rhs).map(Value::Power),
            (Value::Number(n), Value::Energy(_) | Value::Power(_)) => {
                Self::promote("add", *n, rhs)?.add(rhs)
            }
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Duration(a), Value::Duration(b)) => Ok(Value::Duration(a.add(b))),
            (Value::Number(_), Value::Duration(_))
            | (Value::Duration(_), Value::Number(_) | Value::Energy(_) | Value::Power(_)) => {
                Err(Self::reject("add", self, rhs))
            }
        }
    }

    pub fn sub(&self, rhs: &Value) -> Result<Value, QuantityError> {
        match (self, rhs) {
            (Value::Energy(e), _) => e.checked_sub(rhs).map(Value::Energy),
            (Value::Power(p), _) => p.checked_sub(rhs).map(Value::Power),
            (Value::Number(n), Value::Energy(_) | Value::Power(_)) => {
                Self::promote("subtract", *n, rhs)?.sub(rhs)
            }
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (Value::Duration(a), Value::Duration(b)) => Ok(Value::Duration(a.sub(b))),
            (Value::Number(_), Value::Duration(_))
            | (Value::Duration(_), Value::Number(_) | Value::Energy(_) | Value::Power(_)) => {
                Err(Self::reject("subtract", self, rhs))
            }
        }
    }

    pub fn mul(&self, rhs: &Value) -> Result<Value, QuantityError> {
        match (self, rhs) {
            (Value::Power(p), Value::Duration(d)) | (Value::Duration(d), Value::Power(p)) => {
                Ok(Value::Energy(p.over(d)))
            }
            (Value::Energy(e), Value::Number(n)) => Ok(Value::Energy(*e * *n)),
            (Value::Power(p), Value::Number(n)) => Ok(Value::Power(*p * *n)),
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            // a promoted left number is a quantity, and quantity × quantity is undefined
            (Value::Number(_), Value::Energy(_) | Value::Power(_) | Value::Duration(_))
            | (Value::Energy(_), Value::Energy(_) | Value::Power(_) | Value::Duration(_))
            | (Value::Power(_), Value::Energy(_) | Value::Power(_))
            | (Value::Duration(_), Value::Number(_) | Value::Energy(_) | Value::Duration(_)) => {
                Err(Self::reject("multiply", self, rhs))
            }
        }
    }

    pub fn div(&self, rhs: &Value) -> Result<Value, QuantityError> {
        match (self, rhs) {
            (Value::Energy(e), Value::Duration(d)) => Ok(Value::Power(e.per(d))),
            (Value::Energy(e), Value::Power(p)) => {
                if p.is_zero() {
                    debug!(energy = e.value(), "energy divided by zero power");
                    return Err(QuantityError::DivisionByZero { kind: "Energy" });
                }
                Ok(Value::Duration(e.duration_at(p)))
            }
            (Value::Energy(e), Value::Number(n)) => Ok(Value::Energy(*e / *n)),
            (Value::Power(p), Value::Number(n)) => Ok(Value::Power(*p / *n)),
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            (Value::Energy(_), Value::Energy(_))
            | (Value::Power(_), Value::Energy(_) | Value::Power(_) | Value::Duration(_))
            | (Value::Number(_), Value::Energy(_) | Value::Power(_) | Value::Duration(_))
            | (Value::Duration(_), _) => Err(Self::reject("divide", self, rhs)),
        }
    }

    pub fn neg(&self) -> Value {
        match self {
            Value::Number(n) => Value::Number(-n),
            Value::Energy(e) => Value::Energy(-*e),
            Value::Power(p) => Value::Power(-*p),
            Value::Duration(d) => Value::Duration(d.neg()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Energy(a), Value::Energy(b)) => a.partial_cmp(b),
            (Value::Power(a), Value::Power(b)) => a.partial_cmp(b),
            (Value::Duration(a), Value::Duration(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl<K: Kind> From<Quantity<K>> for Value {
    fn from(q: Quantity<K>) -> Self {
        match K::KIND {
            QuantityKind::Energy => Value::Energy(Energy::from_raw(q.value())),
            QuantityKind::Power => Value::Power(Power::from_raw(q.value())),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({:?})", n),
            Value::Energy(e) => fmt::Debug::fmt(e, f),
            Value::Power(p) => fmt::Debug::fmt(p, f),
            Value::Duration(d) => write!(f, "Duration({})", d),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Energy(e) => fmt::Display::fmt(e, f),
            Value::Power(p) => fmt::Display::fmt(p, f),
            Value::Duration(d) => write!(f, "{}", d),
        }
    }
}
