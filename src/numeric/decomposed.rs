// ============================================================================
// Decomposed Value
// Integral/fractional split of a raw stored integer, with rounding policies
// ============================================================================

use super::errors::DecimalResult;
use super::width::StorageWidth;

/// A raw stored integer split by `10^scale`.
///
/// `integral = value / divisor` and `fractional = value % divisor` use
/// truncating division, so the fractional part carries the dividend's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecomposedValue<W: StorageWidth> {
    divisor: W,
    integral: W,
    fractional: W,
}

impl<W: StorageWidth> DecomposedValue<W> {
    /// Split `value` by the divisor for `scale`.
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if `scale` has no divisor at this width.
    #[inline]
    pub fn new(value: W, scale: i32) -> DecimalResult<Self> {
        let divisor = W::scale_divisor(scale)?;
        Ok(Self::with_divisor(value, divisor))
    }

    /// Split `value` by an already-resolved power of ten.
    #[inline]
    pub fn with_divisor(value: W, divisor: W) -> Self {
        Self {
            divisor,
            integral: value / divisor,
            fractional: value % divisor,
        }
    }

    #[inline]
    pub fn divisor(&self) -> W {
        self.divisor
    }

    #[inline]
    pub fn integral(&self) -> W {
        self.integral
    }

    #[inline]
    pub fn fractional(&self) -> W {
        self.fractional
    }

    /// Round to nearest, ties away from zero.
    #[inline]
    pub fn round(&self) -> W {
        if self.half_or_more_up() {
            self.integral + W::one()
        } else if self.half_or_more_down() {
            self.integral - W::one()
        } else {
            self.integral
        }
    }

    /// Round to nearest for values already known to be non-negative.
    #[inline]
    pub fn round_positive_only(&self) -> W {
        if self.half_or_more_up() {
            self.integral + W::one()
        } else {
            self.integral
        }
    }

    /// Round toward negative infinity.
    #[inline]
    pub fn floor(&self) -> W {
        if self.fractional < W::zero() {
            self.integral - W::one()
        } else {
            self.integral
        }
    }

    /// Round toward positive infinity.
    #[inline]
    pub fn ceil(&self) -> W {
        if self.fractional > W::zero() {
            self.integral + W::one()
        } else {
            self.integral
        }
    }

    // 2 * fractional >= divisor, written so that 10^38 never doubles
    #[inline]
    fn half_or_more_up(&self) -> bool {
        self.fractional > W::zero() && self.fractional >= self.divisor - self.fractional
    }

    // 2 * fractional <= -divisor
    #[inline]
    fn half_or_more_down(&self) -> bool {
        self.fractional < W::zero() && -self.fractional >= self.divisor + self.fractional
    }
}
