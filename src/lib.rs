// ============================================================================
// Columnar Decimal Library
// Dual-width fixed-point DECIMAL values and arithmetic for a columnar engine
// ============================================================================

//! # Columnar Decimal
//!
//! Fixed-point `DECIMAL(precision, scale)` values stored in a 64-bit integer
//! (precision up to 18) or a 128-bit integer (precision 19 to 38).
//!
//! ## Features
//!
//! - **Explicit width tag** chosen once at construction
//! - **Arithmetic generic over width and overflow policy**, selected at the call site
//! - **Scale-aware comparison** forming one total order across scales and widths
//! - **Reserved NULL/EMPTY sentinels** that checked arithmetic never produces
//! - **Exact text layout** with zero padding and no exponent notation
//!
//! ## Example
//!
//! ```rust
//! use columnar_decimal::prelude::*;
//!
//! let price = Decimal::narrow(1999, 2, 10)?; // 19.99
//! let qty = Decimal::narrow(3, 0, 10)?;
//!
//! // Checked multiply at the narrow width
//! let total = multiply::<i64, Checked>(price, qty, DecimalType::new(18, 2)?)?;
//! assert_eq!(total.to_string(), "59.97");
//!
//! // Values compare by magnitude, whatever their scale
//! assert_eq!(total, Decimal::narrow(59_970, 3, 10)?);
//! # Ok::<(), DecimalError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{is_wide_precision, Decimal, DecimalType, Storage};
    pub use crate::engine::{add, compare, divide, multiply, subtract};
    pub use crate::interfaces::NarrowSentinels;
    pub use crate::numeric::{
        CheckMode, Checked, DecimalError, DecimalResult, Operation, StorageWidth, Unchecked, Width,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_equal_same_scale() {
        let l = Decimal::narrow(420, 10, 18).unwrap();
        let r = Decimal::narrow(420, 10, 18).unwrap();
        assert!(l == r);
    }

    #[test]
    fn test_equal_different_scale() {
        let l = Decimal::narrow(420, 11, 18).unwrap();
        let r = Decimal::narrow(42, 10, 18).unwrap();
        assert!(l == r);
    }

    #[test]
    fn test_wide_addition_without_check() {
        let l = Decimal::wide(42, 38, 38).unwrap();
        let r = Decimal::wide(420, 38, 38).unwrap();
        let result = add::<i128, Unchecked>(l, r, DecimalType::wide_max(38)).unwrap();
        assert_eq!(result.wide_value(), 462);
    }

    #[test]
    fn test_wide_addition_with_check_overflows() {
        let l = Decimal::wide(i128::MAX - 1, 0, 38).unwrap();
        let r = Decimal::wide(i128::MAX - 1, 0, 38).unwrap();
        let err = add::<i128, Checked>(l, r, DecimalType::wide_max(0)).unwrap_err();
        assert_eq!(err.to_string(), "Decimal::addition<int128> produces an overflow");
    }

    #[test]
    fn test_wide_division_with_check_overflows() {
        let l = Decimal::wide(i128::MIN, 0, 38).unwrap();
        let r = Decimal::wide(-1, 0, 38).unwrap();
        let err = divide::<i128, Checked>(l, r, DecimalType::wide_max(0)).unwrap_err();
        assert_eq!(
            err,
            DecimalError::Overflow {
                op: Operation::Division,
                width: Width::Wide
            }
        );
    }

    #[test]
    fn test_to_string_wide() {
        let whole = Decimal::wide(123_000, 0, 38).unwrap();
        assert_eq!(whole.to_string(), "123000");
        let fraction = Decimal::wide(123_000, 10, 38).unwrap();
        assert_eq!(fraction.to_string(), "0.0000123000");
    }

    #[test]
    fn test_add_then_subtract_recovers() {
        let ty = DecimalType::new(20, 4).unwrap();
        let l = Decimal::narrow(-1_234_567, 3, 12).unwrap();
        let r = Decimal::wide(98_765_432_100, 6, 20).unwrap();
        let sum = l.checked_add(r, ty).unwrap();
        let back = sum.checked_sub(r, ty).unwrap();
        assert_eq!(back, l);
    }

    #[test]
    fn test_widened_average_formats_through_wide_store() {
        // an average widened to 128 bits keeps its column's precision
        let avg = Decimal::wide(1_234_567_890_123, 6, 10).unwrap();
        assert_eq!(avg.to_string_with(true), "1234567.890123");
        assert_eq!(avg.to_string_with(false), avg.to_string_with(true));
    }
}
