// ============================================================================
// Storage Width
// The integer axis decimal arithmetic is generic over (i64 or i128)
// ============================================================================

use super::errors::{DecimalError, DecimalResult, Width};
use super::pow10::{scale_divisor_narrow, scale_divisor_wide};
use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingSub};
use std::fmt::{Debug, Display};

/// Signed integer type a decimal is stored and computed in.
///
/// Implemented for `i64` (narrow) and `i128` (wide). Rounding, overflow
/// checks and arithmetic are written once against this trait.
pub trait StorageWidth:
    PrimInt + Signed + WrappingAdd + WrappingSub + WrappingMul + Debug + Display + Send + Sync + 'static
{
    /// Which width this is, for error reporting.
    const WIDTH: Width;

    /// 10^scale at this width.
    fn scale_divisor(scale: i32) -> DecimalResult<Self>;

    /// Lossless promotion to 128 bits.
    fn widen(self) -> i128;

    /// Narrowing from 128 bits; `None` if the value does not fit.
    fn narrow_from(value: i128) -> Option<Self>;

    /// Division that maps the `MIN / -1` case to `MIN` instead of panicking.
    fn wrapping_quotient(self, rhs: Self) -> Self;
}

impl StorageWidth for i64 {
    const WIDTH: Width = Width::Narrow;

    #[inline]
    fn scale_divisor(scale: i32) -> DecimalResult<Self> {
        scale_divisor_narrow(scale)
    }

    #[inline]
    fn widen(self) -> i128 {
        self as i128
    }

    #[inline]
    fn narrow_from(value: i128) -> Option<Self> {
        i64::try_from(value).ok()
    }

    #[inline]
    fn wrapping_quotient(self, rhs: Self) -> Self {
        self.wrapping_div(rhs)
    }
}

impl StorageWidth for i128 {
    const WIDTH: Width = Width::Wide;

    #[inline]
    fn scale_divisor(scale: i32) -> DecimalResult<Self> {
        scale_divisor_wide(scale)
    }

    #[inline]
    fn widen(self) -> i128 {
        self
    }

    #[inline]
    fn narrow_from(value: i128) -> Option<Self> {
        Some(value)
    }

    #[inline]
    fn wrapping_quotient(self, rhs: Self) -> Self {
        self.wrapping_div(rhs)
    }
}

/// Bring a 128-bit raw value down to `W`, reporting `op` on failure.
#[inline]
pub(crate) fn fit<W: StorageWidth>(value: i128, op: super::errors::Operation) -> DecimalResult<W> {
    W::narrow_from(value).ok_or_else(|| DecimalError::overflow(op, W::WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::errors::Operation;

    #[test]
    fn test_width_tags() {
        assert_eq!(<i64 as StorageWidth>::WIDTH, Width::Narrow);
        assert_eq!(<i128 as StorageWidth>::WIDTH, Width::Wide);
    }

    #[test]
    fn test_scale_divisor_per_width() {
        assert_eq!(<i64 as StorageWidth>::scale_divisor(3), Ok(1000));
        assert!(<i64 as StorageWidth>::scale_divisor(20).is_err());
        assert_eq!(
            <i128 as StorageWidth>::scale_divisor(20),
            Ok(100_000_000_000_000_000_000)
        );
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(<i64 as StorageWidth>::narrow_from(42), Some(42));
        assert_eq!(
            <i64 as StorageWidth>::narrow_from(i64::MAX as i128 + 1),
            None
        );
        assert_eq!(
            fit::<i64>(i128::MIN, Operation::Conversion),
            Err(DecimalError::Overflow {
                op: Operation::Conversion,
                width: Width::Narrow
            })
        );
        assert_eq!(fit::<i128>(i128::MIN, Operation::Conversion), Ok(i128::MIN));
    }

    #[test]
    fn test_wrapping_quotient() {
        assert_eq!(i64::MIN.wrapping_quotient(-1), i64::MIN);
        assert_eq!(i128::MIN.wrapping_quotient(-1), i128::MIN);
        assert_eq!(7i64.wrapping_quotient(-2), -3);
    }
}
