// ============================================================================
// Domain Models Module
// The decimal value, its declared type, and the reserved sentinel patterns
// ============================================================================

pub mod config;
pub mod decimal;
pub mod sentinel;

pub use config::{is_wide_precision, DecimalType, MAX_NARROW_PRECISION, MAX_PRECISION};
pub use decimal::{Decimal, Storage};
pub use sentinel::{is_wide_sentinel, NARROW_CLAMP_MIN, WIDE_EMPTY, WIDE_MIN_LEGAL, WIDE_NULL};
