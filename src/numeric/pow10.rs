// ============================================================================
// Powers of Ten
// Exact scale multipliers/divisors for both storage widths
// ============================================================================

use super::errors::{DecimalError, DecimalResult};

/// Largest scale whose power of ten fits the narrow (64-bit) table.
pub const MAX_NARROW_SCALE: i32 = 18;

/// Largest supported scale (and precision).
pub const MAX_SCALE: i32 = 38;

/// Compute 10^n at compile time
const fn pow10_i64(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

const fn pow10_i128(n: u32) -> i128 {
    let mut result: i128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

const fn narrow_table() -> [i64; 19] {
    let mut table = [0i64; 19];
    let mut i = 0;
    while i < table.len() {
        table[i] = pow10_i64(i as u32);
        i += 1;
    }
    table
}

const fn wide_table() -> [i128; 20] {
    let mut table = [0i128; 20];
    let mut i = 0;
    while i < table.len() {
        table[i] = pow10_i128((i + 19) as u32);
        i += 1;
    }
    table
}

/// 10^0 ..= 10^18
pub const POW10_NARROW: [i64; 19] = narrow_table();

/// 10^19 ..= 10^38
pub const POW10_WIDE: [i128; 20] = wide_table();

/// Power-of-ten divisor for a scale, carried at the width that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDivisor {
    Narrow(i64),
    Wide(i128),
}

impl ScaleDivisor {
    /// Look up 10^scale. Negative scales must be negated by the caller first.
    pub fn for_scale(scale: i32) -> DecimalResult<Self> {
        match scale {
            0..=MAX_NARROW_SCALE => Ok(ScaleDivisor::Narrow(POW10_NARROW[scale as usize])),
            19..=MAX_SCALE => Ok(ScaleDivisor::Wide(POW10_WIDE[(scale - 19) as usize])),
            _ => Err(DecimalError::ScaleOutOfRange(scale)),
        }
    }

    /// The divisor promoted to 128 bits.
    #[inline]
    pub const fn widen(self) -> i128 {
        match self {
            ScaleDivisor::Narrow(d) => d as i128,
            ScaleDivisor::Wide(d) => d,
        }
    }
}

/// 10^scale at 128 bits for a scale already validated to `0..=38`.
///
/// # Panics
/// If `scale > 38`.
#[inline]
pub fn pow10_wide(scale: u8) -> i128 {
    match scale {
        0..=18 => POW10_NARROW[scale as usize] as i128,
        _ => POW10_WIDE[scale as usize - 19],
    }
}

/// 10^scale as a 64-bit value; fails for scales beyond the narrow table.
#[inline]
pub fn scale_divisor_narrow(scale: i32) -> DecimalResult<i64> {
    match ScaleDivisor::for_scale(scale)? {
        ScaleDivisor::Narrow(d) => Ok(d),
        ScaleDivisor::Wide(_) => Err(DecimalError::ScaleOutOfRange(scale)),
    }
}

/// 10^scale as a 128-bit value.
#[inline]
pub fn scale_divisor_wide(scale: i32) -> DecimalResult<i128> {
    ScaleDivisor::for_scale(scale).map(ScaleDivisor::widen)
}
