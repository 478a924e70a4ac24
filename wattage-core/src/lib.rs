//! Wattage Core - Collaborator types
//!
//! This crate provides the pieces the quantity library leans on but does not
//! own:
//! - `Duration`: signed time span, read in hours by energy/power arithmetic
//! - `number`: significant-figure rounding and magnitude-aware rendering

mod duration;
pub mod number;

pub use duration::Duration;
pub use number::{format_significant, number_to_human, round_significant};
