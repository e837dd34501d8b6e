// ============================================================================
// Overflow Policies
// Pluggable operand/result checks, selected per call at compile time
// ============================================================================

use super::errors::{DecimalError, DecimalResult, Operation};
use super::width::StorageWidth;

/// A pure predicate over two operands of one storage width.
///
/// Implementors are zero-sized; the arithmetic entry points are instantiated
/// with one policy per operation so no branch on the policy survives codegen.
pub trait OverflowPolicy: Send + Sync + 'static {
    /// Validate `x <op> y` at width `W`.
    fn check<W: StorageWidth>(x: W, y: W) -> DecimalResult<()>;
}

/// Policies that can also produce the product they validated.
pub trait MultiplyPolicy: OverflowPolicy {
    /// Multiply, reporting a failure as `op`.
    fn multiply_as<W: StorageWidth>(op: Operation, x: W, y: W) -> DecimalResult<W>;

    #[inline]
    fn multiply<W: StorageWidth>(x: W, y: W) -> DecimalResult<W> {
        Self::multiply_as(Operation::Multiplication, x, y)
    }
}

/// Never fails; results wrap around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOverflowCheck;

impl OverflowPolicy for NoOverflowCheck {
    #[inline]
    fn check<W: StorageWidth>(_x: W, _y: W) -> DecimalResult<()> {
        Ok(())
    }
}

impl MultiplyPolicy for NoOverflowCheck {
    #[inline]
    fn multiply_as<W: StorageWidth>(_op: Operation, x: W, y: W) -> DecimalResult<W> {
        Ok(x.wrapping_mul(&y))
    }
}

/// Rejects `x + y` outside `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditionOverflowCheck;

impl OverflowPolicy for AdditionOverflowCheck {
    #[inline]
    fn check<W: StorageWidth>(x: W, y: W) -> DecimalResult<()> {
        let zero = W::zero();
        if (y > zero && x > W::max_value() - y) || (y < zero && x < W::min_value() - y) {
            return Err(DecimalError::overflow(Operation::Addition, W::WIDTH));
        }
        Ok(())
    }
}

/// Rejects `x - y` outside `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubtractionOverflowCheck;

impl OverflowPolicy for SubtractionOverflowCheck {
    #[inline]
    fn check<W: StorageWidth>(x: W, y: W) -> DecimalResult<()> {
        let zero = W::zero();
        if (y > zero && x < W::min_value() + y) || (y < zero && x > W::max_value() + y) {
            return Err(DecimalError::overflow(Operation::Subtraction, W::WIDTH));
        }
        Ok(())
    }
}

/// Rejects the one pair whose quotient does not fit: `MIN / -1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivisionOverflowCheck;

impl OverflowPolicy for DivisionOverflowCheck {
    #[inline]
    fn check<W: StorageWidth>(x: W, y: W) -> DecimalResult<()> {
        if x == W::min_value() && y == -W::one() {
            return Err(DecimalError::overflow(Operation::Division, W::WIDTH));
        }
        Ok(())
    }
}

/// Reconstruction check: the wrapped product divided by one operand must
/// give back the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplicationOverflowCheck;

impl OverflowPolicy for MultiplicationOverflowCheck {
    #[inline]
    fn check<W: StorageWidth>(x: W, y: W) -> DecimalResult<()> {
        Self::multiply(x, y).map(|_| ())
    }
}

impl MultiplyPolicy for MultiplicationOverflowCheck {
    #[inline]
    fn multiply_as<W: StorageWidth>(op: Operation, x: W, y: W) -> DecimalResult<W> {
        let product = x.wrapping_mul(&y);
        if x.is_zero() {
            return Ok(product);
        }
        // checked_div is None for MIN / -1, which is itself an overflowed product
        match product.checked_div(&x) {
            Some(back) if back == y => Ok(product),
            _ => Err(DecimalError::overflow(op, W::WIDTH)),
        }
    }
}

/// Compile-time choice of one policy per arithmetic operation.
pub trait CheckMode: Send + Sync + 'static {
    type Add: OverflowPolicy;
    type Sub: OverflowPolicy;
    type Mul: MultiplyPolicy;
    type Div: OverflowPolicy;

    /// Whether results that land on a reserved sentinel are rejected.
    const REJECTS_SENTINELS: bool;
}

/// Every operation checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checked;

impl CheckMode for Checked {
    type Add = AdditionOverflowCheck;
    type Sub = SubtractionOverflowCheck;
    type Mul = MultiplicationOverflowCheck;
    type Div = DivisionOverflowCheck;

    const REJECTS_SENTINELS: bool = true;
}

/// Wraparound accepted everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchecked;

impl CheckMode for Unchecked {
    type Add = NoOverflowCheck;
    type Sub = NoOverflowCheck;
    type Mul = NoOverflowCheck;
    type Div = NoOverflowCheck;

    const REJECTS_SENTINELS: bool = false;
}
