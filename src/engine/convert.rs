// ============================================================================
// Decimal Conversions
// Rounding to integers, native floats, rust_decimal interop, column bytes
// ============================================================================

use crate::domain::{Decimal, DecimalType, Storage, NARROW_CLAMP_MIN, WIDE_MIN_LEGAL};
use crate::numeric::{
    fit, pow10_wide, DecimalError, DecimalResult, DecomposedValue, Float128, Operation, Width,
};
use arrayvec::ArrayVec;

/// Column bytes of one value: 1, 2, 4 or 8 for narrow, 16 for wide.
pub type NativeBytes = ArrayVec<u8, 16>;

// ============================================================================
// Integers
// ============================================================================

impl Decimal {
    #[inline]
    fn decomposed(&self) -> DecomposedValue<i128> {
        DecomposedValue::with_divisor(self.raw(), pow10_wide(self.scale()))
    }

    /// Nearest `i64`, ties away from zero.
    ///
    /// # Errors
    /// `Overflow` if the rounded value does not fit.
    pub fn round_to_i64(&self) -> DecimalResult<i64> {
        fit(self.decomposed().round(), Operation::Conversion)
    }

    pub fn floor_to_i64(&self) -> DecimalResult<i64> {
        fit(self.decomposed().floor(), Operation::Conversion)
    }

    pub fn ceil_to_i64(&self) -> DecimalResult<i64> {
        fit(self.decomposed().ceil(), Operation::Conversion)
    }

    /// Nearest `i128`, ties away from zero. Always fits.
    pub fn round_to_i128(&self) -> i128 {
        self.decomposed().round()
    }

    pub fn floor_to_i128(&self) -> i128 {
        self.decomposed().floor()
    }

    pub fn ceil_to_i128(&self) -> i128 {
        self.decomposed().ceil()
    }

    /// Nearest `u64`; negative inputs give 0 and results above `u64::MAX`
    /// saturate.
    pub fn round_to_u64(&self) -> u64 {
        if self.is_negative() {
            return 0;
        }
        clamp_u64(self.decomposed().round_positive_only())
    }

    pub fn floor_to_u64(&self) -> u64 {
        clamp_u64(self.decomposed().floor())
    }

    pub fn ceil_to_u64(&self) -> u64 {
        clamp_u64(self.decomposed().ceil())
    }

    /// Nearest `u128`; negative inputs give 0.
    pub fn round_to_u128(&self) -> u128 {
        if self.is_negative() {
            return 0;
        }
        clamp_u128(self.decomposed().round_positive_only())
    }

    pub fn floor_to_u128(&self) -> u128 {
        clamp_u128(self.decomposed().floor())
    }

    pub fn ceil_to_u128(&self) -> u128 {
        clamp_u128(self.decomposed().ceil())
    }
}

#[inline]
fn clamp_u64(value: i128) -> u64 {
    if value < 0 {
        0
    } else {
        u64::try_from(value).unwrap_or(u64::MAX)
    }
}

#[inline]
fn clamp_u128(value: i128) -> u128 {
    u128::try_from(value).unwrap_or(0)
}

// ============================================================================
// Floating point
// ============================================================================

impl Decimal {
    /// `raw / 10^scale` as a double. Wide values go through [`Float128`].
    pub fn to_f64(&self) -> f64 {
        match self.storage() {
            Storage::Narrow(v) => v as f64 / pow10_wide(self.scale()) as f64,
            Storage::Wide(v) => Float128::from_ratio(v, pow10_wide(self.scale())).to_f64(),
        }
    }

    /// `raw / 10^scale` as a float.
    pub fn to_f32(&self) -> f32 {
        match self.storage() {
            Storage::Narrow(v) => (v as f64 / pow10_wide(self.scale()) as f64) as f32,
            Storage::Wide(v) => Float128::from_ratio(v, pow10_wide(self.scale())).to_f32(),
        }
    }

    /// Nearest value of type `ty`, ties away from zero.
    ///
    /// Out-of-range inputs (infinities included) clamp to the width's range.
    /// A narrow clamp stops one above `i64::MIN`, the NULL marker, and may
    /// land on the empty-row marker; a wide clamp excludes both wide
    /// sentinels.
    ///
    /// # Errors
    /// `InvalidInput` for NaN.
    pub fn from_f64(value: f64, ty: DecimalType) -> DecimalResult<Decimal> {
        ty.validate()?;
        let exact = Float128::from_f64(value).ok_or(DecimalError::InvalidInput)?;
        let raw = exact.scale_by_pow10(i32::from(ty.scale)).round().to_i128();
        let raw = match ty.width() {
            Width::Narrow => raw.clamp(i128::from(NARROW_CLAMP_MIN), i128::from(i64::MAX)),
            Width::Wide => raw.max(WIDE_MIN_LEGAL),
        };
        Decimal::from_raw(raw, ty)
    }
}

// ============================================================================
// rust_decimal interop
// ============================================================================

impl Decimal {
    /// Convert for APIs that speak `rust_decimal`.
    ///
    /// # Errors
    /// `Overflow` when the value needs more than 96 bits of mantissa or a
    /// scale above 28.
    pub fn to_rust_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.raw(), u32::from(self.scale()))
            .map_err(|_| DecimalError::overflow(Operation::Conversion, self.width()))
    }

    /// Bring a `rust_decimal` value into type `ty`, rounding half away from
    /// zero when `ty` keeps fewer fractional digits.
    pub fn from_rust_decimal(value: rust_decimal::Decimal, ty: DecimalType) -> DecimalResult<Decimal> {
        // rust_decimal scales never exceed 28 and mantissas stay below 2^96
        let scale = u8::try_from(value.scale()).map_err(|_| DecimalError::InvalidInput)?;
        Decimal::wide(value.mantissa(), scale, 38)?.rescale(ty)
    }
}

// ============================================================================
// Column bytes
// ============================================================================

impl Decimal {
    /// Host-order bytes as the column store lays them out.
    ///
    /// The byte width follows the declared precision whatever the storage
    /// tag, so a wide intermediate typed `DECIMAL(10,2)` is written as 8 bytes.
    ///
    /// # Errors
    /// `Overflow` if the value does not fit its column's byte width.
    pub fn to_native_bytes(&self) -> DecimalResult<NativeBytes> {
        let ty = self.decimal_type();
        let overflow = || DecimalError::overflow(Operation::Conversion, ty.width());
        let raw = self.raw();
        let mut out = NativeBytes::new();
        match ty.storage_bytes() {
            1 => out.extend(i8::try_from(raw).map_err(|_| overflow())?.to_ne_bytes()),
            2 => out.extend(i16::try_from(raw).map_err(|_| overflow())?.to_ne_bytes()),
            4 => out.extend(i32::try_from(raw).map_err(|_| overflow())?.to_ne_bytes()),
            8 => out.extend(i64::try_from(raw).map_err(|_| overflow())?.to_ne_bytes()),
            _ => out.extend(raw.to_ne_bytes()),
        }
        Ok(out)
    }

    /// Decode one value of type `ty` from host-order column bytes.
    ///
    /// # Errors
    /// `InvalidInput` unless `bytes.len() == ty.storage_bytes()`.
    pub fn from_native_bytes(bytes: &[u8], ty: DecimalType) -> DecimalResult<Decimal> {
        ty.validate()?;
        if bytes.len() != ty.storage_bytes() {
            return Err(DecimalError::InvalidInput);
        }
        let raw = match bytes.len() {
            1 => i128::from(i8::from_ne_bytes([bytes[0]])),
            2 => i128::from(i16::from_ne_bytes(array(bytes)?)),
            4 => i128::from(i32::from_ne_bytes(array(bytes)?)),
            8 => i128::from(i64::from_ne_bytes(array(bytes)?)),
            _ => i128::from_ne_bytes(array(bytes)?),
        };
        Decimal::from_raw(raw, ty)
    }
}

#[inline]
fn array<const N: usize>(bytes: &[u8]) -> DecimalResult<[u8; N]> {
    bytes.try_into().map_err(|_| DecimalError::InvalidInput)
}
