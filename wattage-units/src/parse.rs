//! Quantity string parsing - "5 kW", "1.5kWh", "-20 mW"

use std::str::FromStr;
use crate::{Kind, Quantity, QuantityError};

/// Split a quantity string into its number and unit parts
///
/// The unit part is empty when the string is a bare number.
pub fn split_quantity(s: &str) -> Result<(f64, &str), QuantityError> {
    let s = s.trim();

    // Find where the number ends and unit begins
    let mut split_pos = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e' || c == 'E' {
            split_pos = i + c.len_utf8();
        } else {
            break;
        }
    }

    if split_pos == 0 {
        return Err(QuantityError::Parse(format!("no number found in: {}", s)));
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    let value = num_str
        .parse::<f64>()
        .map_err(|_| QuantityError::Parse(format!("invalid number: {}", num_str)))?;

    Ok((value, unit_str))
}

impl<K: Kind> FromStr for Quantity<K> {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_quantity(s)?;
        if unit.is_empty() {
            return Ok(Self::in_default_unit(value));
        }
        Self::new(value, unit)
    }
}
