//! Per-kind unit symbol tables
//!
//! A kind's symbols are its base letters behind each magnitude prefix
//! ("fW" .. "PW"). Each kind builds its table once and keeps it in a static.

use std::collections::HashMap;
use crate::Magnitude;

/// Symbols of one quantity kind, indexed both ways
#[derive(Debug)]
pub struct SymbolTable {
    /// Indexed by position in `Magnitude::ALL`
    symbols: Vec<String>,
    lookup: HashMap<String, Magnitude>,
    /// (exponent, symbol) pairs for human-readable rendering
    exponents: Vec<(i32, String)>,
}

impl SymbolTable {
    pub fn new(base: &'static str) -> Self {
        let mut table = SymbolTable {
            symbols: Vec::with_capacity(Magnitude::ALL.len()),
            lookup: HashMap::new(),
            exponents: Vec::with_capacity(Magnitude::ALL.len()),
        };

        for magnitude in Magnitude::ALL {
            let symbol = magnitude.symbol(base);
            table.lookup.insert(symbol.clone(), magnitude);
            table.exponents.push((magnitude.exponent(), symbol.clone()));
            table.symbols.push(symbol);
        }

        // Greek mu and ASCII u for micro
        table.alias(&format!("\u{3bc}{}", base), Magnitude::Micro);
        table.alias(&format!("u{}", base), Magnitude::Micro);
        table
    }

    fn alias(&mut self, alias: &str, magnitude: Magnitude) {
        self.lookup.insert(alias.to_string(), magnitude);
    }

    /// Symbol for a magnitude
    pub fn symbol(&self, magnitude: Magnitude) -> &str {
        &self.symbols[magnitude as usize]
    }

    /// Magnitude for a symbol or alias
    pub fn magnitude(&self, symbol: &str) -> Option<Magnitude> {
        self.lookup.get(symbol).copied()
    }

    /// Canonical symbols, smallest magnitude first
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.as_str())
    }

    /// (exponent, symbol) pairs, smallest magnitude first
    pub fn exponent_table(&self) -> &[(i32, String)] {
        &self.exponents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_symbols() {
        let table = SymbolTable::new("W");
        let symbols: Vec<&str> = table.symbols().collect();
        assert_eq!(
            symbols,
            vec!["fW", "pW", "nW", "µW", "mW", "W", "kW", "MW", "GW", "TW", "PW"]
        );
    }

    #[test]
    fn test_symbol_round_trip() {
        let table = SymbolTable::new("Wh");
        for magnitude in Magnitude::ALL {
            let symbol = table.symbol(magnitude).to_string();
            assert_eq!(table.magnitude(&symbol), Some(magnitude));
        }
    }

    #[test]
    fn test_micro_aliases() {
        let table = SymbolTable::new("W");
        assert_eq!(table.magnitude("µW"), Some(Magnitude::Micro));
        assert_eq!(table.magnitude("\u{3bc}W"), Some(Magnitude::Micro));
        assert_eq!(table.magnitude("uW"), Some(Magnitude::Micro));
        // aliases never show up as canonical symbols
        assert_eq!(table.symbol(Magnitude::Micro), "µW");
    }

    #[test]
    fn test_foreign_symbols_rejected() {
        let table = SymbolTable::new("W");
        assert_eq!(table.magnitude("kWh"), None);
        assert_eq!(table.magnitude("kw"), None);
        assert_eq!(table.magnitude(""), None);
    }

    #[test]
    fn test_exponent_table() {
        let table = SymbolTable::new("Wh");
        assert_eq!(table.exponent_table().len(), 11);
        assert_eq!(table.exponent_table()[6], (3, "kWh".to_string()));
    }
}
