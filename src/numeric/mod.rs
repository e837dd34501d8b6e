// ============================================================================
// Numeric Module
// Width-generic building blocks for fixed-point decimal arithmetic
// ============================================================================
//
// This module provides:
// - POW10_NARROW / POW10_WIDE and ScaleDivisor: exact powers of ten
// - StorageWidth: the i64/i128 axis arithmetic is generic over
// - DecomposedValue<W>: integral/fractional split with round/floor/ceil
// - Overflow policies and the Checked/Unchecked modes that bundle them
// - Float128: extended-range bridge for wide <-> native float conversion
// - DecimalError: error types for all of the above
//
// Design principles:
// - No floating-point exponentiation; every table is a const
// - One implementation per algorithm, parameterized over width
// - Policies are types, chosen at the call site, never runtime flags

mod decomposed;
mod errors;
mod float128;
mod overflow;
mod pow10;
mod width;

pub use decomposed::DecomposedValue;
pub use errors::{DecimalError, DecimalResult, Operation, Width};
pub use float128::Float128;
pub use overflow::{
    AdditionOverflowCheck, CheckMode, Checked, DivisionOverflowCheck, MultiplicationOverflowCheck,
    MultiplyPolicy, NoOverflowCheck, OverflowPolicy, SubtractionOverflowCheck, Unchecked,
};
pub use pow10::{
    pow10_wide, scale_divisor_narrow, scale_divisor_wide, ScaleDivisor, MAX_NARROW_SCALE, MAX_SCALE,
    POW10_NARROW, POW10_WIDE,
};
pub use width::StorageWidth;

pub(crate) use width::fit;
