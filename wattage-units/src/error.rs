//! Errors raised by quantity construction and arithmetic

use thiserror::Error;

/// Machine-readable error codes
pub mod codes {
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const INCOMPATIBLE_OPERAND: &str = "INCOMPATIBLE_OPERAND";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
}

/// Error type for quantity operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("invalid unit '{symbol}' for {kind}")]
    InvalidUnit { symbol: String, kind: &'static str },

    #[error("cannot {op} a non-zero bare number to {kind}")]
    NonZeroScalar { op: &'static str, kind: &'static str },

    #[error("cannot {op} {lhs} by {rhs}")]
    IncompatibleOperand {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("division of {kind} by zero")]
    DivisionByZero { kind: &'static str },

    #[error("invalid quantity: {0}")]
    Parse(String),
}

impl QuantityError {
    pub fn invalid_unit(symbol: impl Into<String>, kind: &'static str) -> Self {
        Self::InvalidUnit { symbol: symbol.into(), kind }
    }

    pub fn incompatible(op: &'static str, lhs: &'static str, rhs: &'static str) -> Self {
        Self::IncompatibleOperand { op, lhs, rhs }
    }

    /// Error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => codes::INVALID_UNIT,
            Self::NonZeroScalar { .. } | Self::IncompatibleOperand { .. } => codes::INCOMPATIBLE_OPERAND,
            Self::DivisionByZero { .. } => codes::DIV_ZERO,
            Self::Parse(_) => codes::PARSE_ERROR,
        }
    }

    /// True for every operand-type violation, bare numbers included
    pub fn is_incompatible_operand(&self) -> bool {
        self.code() == codes::INCOMPATIBLE_OPERAND
    }
}
