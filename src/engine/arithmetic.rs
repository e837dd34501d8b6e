// ============================================================================
// Decimal Arithmetic
// add/subtract/multiply/divide, generic over storage width and check mode
// ============================================================================
//
// Every entry point is instantiated with one `StorageWidth` and one
// `CheckMode`. Operands of either width are brought to `W` first; a wide
// operand that does not fit a narrow computation is an overflow.

use crate::domain::{is_wide_sentinel, Decimal, DecimalType};
use crate::numeric::{
    fit, CheckMode, Checked, DecimalError, DecimalResult, DecomposedValue, MultiplicationOverflowCheck,
    MultiplyPolicy, Operation, OverflowPolicy, StorageWidth, Width, MAX_NARROW_SCALE, MAX_SCALE,
};

// ============================================================================
// Scale alignment helpers
// ============================================================================

#[inline]
fn operand<W: StorageWidth>(d: &Decimal) -> DecimalResult<W> {
    fit(d.raw(), Operation::Conversion)
}

/// `x * 10^diff` under the mode's multiplication policy.
///
/// Multipliers beyond the width's power table are applied in steps, so the
/// policy alone decides: unchecked modes wrap, checked modes report
/// `Overflow { Rescale }`.
fn scale_up<W: StorageWidth, P: MultiplyPolicy>(x: W, diff: i32) -> DecimalResult<W> {
    let largest = match W::WIDTH {
        Width::Narrow => MAX_NARROW_SCALE,
        Width::Wide => MAX_SCALE,
    };
    let mut value = x;
    let mut remaining = diff;
    while remaining > 0 && !value.is_zero() {
        let step = remaining.min(largest);
        value = P::multiply_as(Operation::Rescale, value, W::scale_divisor(step)?)?;
        remaining -= step;
    }
    Ok(value)
}

/// `x / 10^diff`, rounded half away from zero.
fn scale_down_rounded<W: StorageWidth>(x: W, diff: i32) -> DecimalResult<W> {
    if diff == 0 {
        return Ok(x);
    }
    if diff > MAX_SCALE {
        return Ok(W::zero());
    }
    let rounded = DecomposedValue::<i128>::new(x.widen(), diff)?.round();
    fit(rounded, Operation::Rescale)
}

/// `x / 10^diff`, truncated toward zero.
fn scale_down_truncated<W: StorageWidth>(x: W, diff: i32) -> DecimalResult<W> {
    if diff == 0 {
        return Ok(x);
    }
    if diff > MAX_SCALE {
        return Ok(W::zero());
    }
    let truncated = DecomposedValue::<i128>::new(x.widen(), diff)?.integral();
    fit(truncated, Operation::Rescale)
}

/// Bring `x` from `from` to `to` scale: multiply going up, round going down.
fn align<W: StorageWidth, P: MultiplyPolicy>(x: W, from: u8, to: u8) -> DecimalResult<W> {
    let diff = i32::from(to) - i32::from(from);
    if diff >= 0 {
        scale_up::<W, P>(x, diff)
    } else {
        scale_down_rounded(x, -diff)
    }
}

fn finish<W: StorageWidth, M: CheckMode>(
    value: W,
    op: Operation,
    result_ty: DecimalType,
) -> DecimalResult<Decimal> {
    if M::REJECTS_SENTINELS && W::WIDTH == Width::Wide && is_wide_sentinel(value.widen()) {
        return Err(DecimalError::overflow(op, Width::Wide));
    }
    Decimal::from_width(value, result_ty)
}

// ============================================================================
// Entry points
// ============================================================================

/// `l + r` at `result_ty.scale`, computed at width `W`.
///
/// # Errors
/// `Overflow` from the mode's checks, domain errors from `result_ty`.
pub fn add<W: StorageWidth, M: CheckMode>(
    l: Decimal,
    r: Decimal,
    result_ty: DecimalType,
) -> DecimalResult<Decimal> {
    result_ty.validate()?;
    let x = align::<W, M::Mul>(operand::<W>(&l)?, l.scale(), result_ty.scale)?;
    let y = align::<W, M::Mul>(operand::<W>(&r)?, r.scale(), result_ty.scale)?;
    M::Add::check(x, y)?;
    finish::<W, M>(x.wrapping_add(&y), Operation::Addition, result_ty)
}

/// `l - r` at `result_ty.scale`, computed at width `W`.
pub fn subtract<W: StorageWidth, M: CheckMode>(
    l: Decimal,
    r: Decimal,
    result_ty: DecimalType,
) -> DecimalResult<Decimal> {
    result_ty.validate()?;
    let x = align::<W, M::Mul>(operand::<W>(&l)?, l.scale(), result_ty.scale)?;
    let y = align::<W, M::Mul>(operand::<W>(&r)?, r.scale(), result_ty.scale)?;
    M::Sub::check(x, y)?;
    finish::<W, M>(x.wrapping_sub(&y), Operation::Subtraction, result_ty)
}

/// `l * r` at `result_ty.scale`, computed at width `W`.
///
/// When `result_ty.scale` is below `l.scale + r.scale` the product is
/// truncated, so callers pick a result scale that keeps the digits they need.
pub fn multiply<W: StorageWidth, M: CheckMode>(
    l: Decimal,
    r: Decimal,
    result_ty: DecimalType,
) -> DecimalResult<Decimal> {
    result_ty.validate()?;
    let x = operand::<W>(&l)?;
    let y = operand::<W>(&r)?;
    if x.is_zero() || y.is_zero() {
        return Decimal::from_width(W::zero(), result_ty);
    }

    let product = M::Mul::multiply(x, y)?;
    let product_scale = i32::from(l.scale()) + i32::from(r.scale());
    let diff = i32::from(result_ty.scale) - product_scale;
    let value = if diff >= 0 {
        scale_up::<W, M::Mul>(product, diff)?
    } else {
        scale_down_truncated(product, -diff)?
    };
    finish::<W, M>(value, Operation::Multiplication, result_ty)
}

/// `l / r` at `result_ty.scale`, computed at width `W`.
///
/// The dividend is rescaled by `10^(result.scale + r.scale - l.scale)` and
/// then divided (truncating) by `r`'s raw value. A zero dividend yields zero
/// without looking at the divisor; a zero divisor also yields zero.
pub fn divide<W: StorageWidth, M: CheckMode>(
    l: Decimal,
    r: Decimal,
    result_ty: DecimalType,
) -> DecimalResult<Decimal> {
    result_ty.validate()?;
    let x = operand::<W>(&l)?;
    if x.is_zero() {
        return Decimal::from_width(W::zero(), result_ty);
    }
    let y = operand::<W>(&r)?;
    if y.is_zero() {
        tracing::trace!(dividend = %l.raw(), "decimal division by zero divisor yields zero");
        return Decimal::from_width(W::zero(), result_ty);
    }

    let exp = i32::from(result_ty.scale) + i32::from(r.scale()) - i32::from(l.scale());
    let dividend = if exp >= 0 {
        scale_up::<W, M::Mul>(x, exp)?
    } else {
        scale_down_truncated(x, -exp)?
    };
    M::Div::check(dividend, y)?;
    finish::<W, M>(dividend.wrapping_quotient(y), Operation::Division, result_ty)
}

// ============================================================================
// Runtime-width conveniences
// ============================================================================

impl Decimal {
    /// Checked `self + rhs`, at the width `ty` selects.
    pub fn checked_add(self, rhs: Decimal, ty: DecimalType) -> DecimalResult<Decimal> {
        match ty.width() {
            Width::Narrow => add::<i64, Checked>(self, rhs, ty),
            Width::Wide => add::<i128, Checked>(self, rhs, ty),
        }
    }

    /// Checked `self - rhs`, at the width `ty` selects.
    pub fn checked_sub(self, rhs: Decimal, ty: DecimalType) -> DecimalResult<Decimal> {
        match ty.width() {
            Width::Narrow => subtract::<i64, Checked>(self, rhs, ty),
            Width::Wide => subtract::<i128, Checked>(self, rhs, ty),
        }
    }

    /// Checked `self * rhs`, at the width `ty` selects.
    pub fn checked_mul(self, rhs: Decimal, ty: DecimalType) -> DecimalResult<Decimal> {
        match ty.width() {
            Width::Narrow => multiply::<i64, Checked>(self, rhs, ty),
            Width::Wide => multiply::<i128, Checked>(self, rhs, ty),
        }
    }

    /// Checked `self / rhs`, at the width `ty` selects.
    pub fn checked_div(self, rhs: Decimal, ty: DecimalType) -> DecimalResult<Decimal> {
        match ty.width() {
            Width::Narrow => divide::<i64, Checked>(self, rhs, ty),
            Width::Wide => divide::<i128, Checked>(self, rhs, ty),
        }
    }

    /// The same magnitude at another scale and precision.
    ///
    /// Scaling up is an overflow-checked multiply; scaling down rounds half
    /// away from zero.
    ///
    /// # Errors
    /// `Overflow` if the rescaled value does not fit the target width.
    pub fn rescale(self, ty: DecimalType) -> DecimalResult<Decimal> {
        ty.validate()?;
        let raw = align::<i128, MultiplicationOverflowCheck>(self.raw(), self.scale(), ty.scale)?;
        Decimal::from_raw(raw, ty)
    }
}
