//! Numeric constants for area reporting (internal).
//!
//! Policy
//! - Fixed constants, not runtime configuration. Areas are reported with two
//!   decimals everywhere, so there is exactly one scale.

/// Multiplier used by truncating rounding: two decimal digits.
pub(crate) const AREA_SCALE: f64 = 100.0;
