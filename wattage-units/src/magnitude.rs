//! Magnitude table
//!
//! Every quantity kind shares one decimal-exponent scale. Each point on it
//! has a human name ("thousand"), an SI prefix name ("kilo") and a prefix
//! letter ("k") used to build unit symbols. Only these eleven exponents exist.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A named power of ten
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Unit,
    Thousand,
    Million,
    Billion,
    Trillion,
    Quadrillion,
}

impl Magnitude {
    /// All magnitudes, smallest first
    pub const ALL: [Magnitude; 11] = [
        Magnitude::Femto,
        Magnitude::Pico,
        Magnitude::Nano,
        Magnitude::Micro,
        Magnitude::Milli,
        Magnitude::Unit,
        Magnitude::Thousand,
        Magnitude::Million,
        Magnitude::Billion,
        Magnitude::Trillion,
        Magnitude::Quadrillion,
    ];

    /// Decimal exponent
    pub const fn exponent(self) -> i32 {
        match self {
            Magnitude::Femto => -15,
            Magnitude::Pico => -12,
            Magnitude::Nano => -9,
            Magnitude::Micro => -6,
            Magnitude::Milli => -3,
            Magnitude::Unit => 0,
            Magnitude::Thousand => 3,
            Magnitude::Million => 6,
            Magnitude::Billion => 9,
            Magnitude::Trillion => 12,
            Magnitude::Quadrillion => 15,
        }
    }

    /// Prefix letter for unit symbols (µ is U+00B5, the micro sign)
    pub const fn prefix(self) -> &'static str {
        match self {
            Magnitude::Femto => "f",
            Magnitude::Pico => "p",
            Magnitude::Nano => "n",
            Magnitude::Micro => "µ",
            Magnitude::Milli => "m",
            Magnitude::Unit => "",
            Magnitude::Thousand => "k",
            Magnitude::Million => "M",
            Magnitude::Billion => "G",
            Magnitude::Trillion => "T",
            Magnitude::Quadrillion => "P",
        }
    }

    /// Human-scale name
    pub const fn name(self) -> &'static str {
        match self {
            Magnitude::Femto => "femto",
            Magnitude::Pico => "pico",
            Magnitude::Nano => "nano",
            Magnitude::Micro => "micro",
            Magnitude::Milli => "milli",
            Magnitude::Unit => "unit",
            Magnitude::Thousand => "thousand",
            Magnitude::Million => "million",
            Magnitude::Billion => "billion",
            Magnitude::Trillion => "trillion",
            Magnitude::Quadrillion => "quadrillion",
        }
    }

    /// SI prefix name
    pub const fn si_name(self) -> &'static str {
        match self {
            Magnitude::Femto => "femto",
            Magnitude::Pico => "pico",
            Magnitude::Nano => "nano",
            Magnitude::Micro => "micro",
            Magnitude::Milli => "milli",
            Magnitude::Unit => "unit",
            Magnitude::Thousand => "kilo",
            Magnitude::Million => "mega",
            Magnitude::Billion => "giga",
            Magnitude::Trillion => "tera",
            Magnitude::Quadrillion => "peta",
        }
    }

    /// Look up by exponent
    pub fn from_exponent(exponent: i32) -> Option<Magnitude> {
        Self::ALL.into_iter().find(|m| m.exponent() == exponent)
    }

    /// Look up by human name or SI prefix name
    ///
    /// "mili" is accepted for milli, matching the spelling older number
    /// formatting tables use.
    pub fn from_name(name: &str) -> Option<Magnitude> {
        if name == "mili" {
            return Some(Magnitude::Milli);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name || m.si_name() == name)
    }

    /// Prefixed unit symbol for a base symbol, e.g. `Thousand.symbol("W") == "kW"`
    pub fn symbol(self, base: &str) -> String {
        format!("{}{}", self.prefix(), base)
    }

    /// 10^exponent
    pub fn factor(self) -> f64 {
        10_f64.powi(self.exponent())
    }

    /// Bring a value expressed in this magnitude down to exponent 0
    pub fn to_canonical(self, value: f64) -> f64 {
        let exp = self.exponent();
        if exp >= 0 {
            value * 10_f64.powi(exp)
        } else {
            value / 10_f64.powi(-exp)
        }
    }

    /// Express a canonical value in this magnitude
    pub fn from_canonical(self, raw: f64) -> f64 {
        let exp = self.exponent();
        if exp >= 0 {
            raw / 10_f64.powi(exp)
        } else {
            raw * 10_f64.powi(-exp)
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::Unit
    }
}
