// ============================================================================
// Decimal Value
// Dual-width fixed-point value: one tagged integer store plus scale/precision
// ============================================================================

use super::config::{DecimalType, MAX_NARROW_PRECISION, MAX_PRECISION};
use super::sentinel::{WIDE_EMPTY, WIDE_NULL};
use crate::interfaces::NarrowSentinels;
use crate::numeric::{fit, DecimalError, DecimalResult, Operation, StorageWidth, Width, MAX_SCALE};

/// The authoritative integer store of a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// 64-bit store (precision 1..=18)
    Narrow(i64),
    /// 128-bit store (precision 19..=38, or a widened intermediate)
    Wide(i128),
}

impl Storage {
    #[inline]
    pub fn width(&self) -> Width {
        match self {
            Storage::Narrow(_) => Width::Narrow,
            Storage::Wide(_) => Width::Wide,
        }
    }

    /// Stored integer promoted to 128 bits.
    #[inline]
    pub fn widen(&self) -> i128 {
        match *self {
            Storage::Narrow(v) => v as i128,
            Storage::Wide(v) => v,
        }
    }
}

/// A fixed-point decimal: `raw × 10^-scale`.
///
/// The store is tagged once at construction. A narrow tag always carries a
/// precision of at most 18; a wide tag may carry any precision, because
/// widened intermediates (for example averages) keep the narrow-looking
/// precision of their source column.
///
/// Equality and ordering compare logical magnitude across scales and
/// widths, so `4.20` (raw 420, scale 2) equals `4.2` (raw 42, scale 1).
///
/// # Example
/// ```
/// use columnar_decimal::prelude::*;
///
/// let ty = DecimalType::new(10, 2)?;
/// let price = Decimal::from_raw(1999, ty)?;
/// assert_eq!(price.to_string(), "19.99");
/// # Ok::<(), DecimalError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    storage: Storage,
    scale: u8,
    precision: u8,
}

// ============================================================================
// Construction
// ============================================================================

impl Decimal {
    /// Narrow-tagged value.
    ///
    /// # Errors
    /// `PrecisionOutOfRange` unless `1 <= precision <= 18`,
    /// `ScaleOutOfRange` for scales beyond 38.
    pub fn narrow(value: i64, scale: u8, precision: u8) -> DecimalResult<Self> {
        if precision == 0 || precision > MAX_NARROW_PRECISION {
            return Err(DecimalError::PrecisionOutOfRange(precision));
        }
        check_scale(scale)?;
        Ok(Self {
            storage: Storage::Narrow(value),
            scale,
            precision,
        })
    }

    /// Wide-tagged value.
    ///
    /// # Errors
    /// `PrecisionOutOfRange` unless `1 <= precision <= 38`,
    /// `ScaleOutOfRange` for scales beyond 38.
    pub fn wide(value: i128, scale: u8, precision: u8) -> DecimalResult<Self> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(DecimalError::PrecisionOutOfRange(precision));
        }
        check_scale(scale)?;
        Ok(Self {
            storage: Storage::Wide(value),
            scale,
            precision,
        })
    }

    /// Value stored at the width `ty` selects.
    ///
    /// # Errors
    /// Domain errors from `ty`, or `Overflow` when a narrow type is given a
    /// raw value outside the 64-bit range.
    pub fn from_raw(raw: i128, ty: DecimalType) -> DecimalResult<Self> {
        ty.validate()?;
        match ty.width() {
            Width::Narrow => Self::narrow(fit(raw, Operation::Conversion)?, ty.scale, ty.precision),
            Width::Wide => Self::wide(raw, ty.scale, ty.precision),
        }
    }

    /// Zero at the width `ty` selects.
    pub fn zero(ty: DecimalType) -> DecimalResult<Self> {
        Self::from_raw(0, ty)
    }

    /// Wide NULL marker.
    pub fn wide_null(scale: u8, precision: u8) -> DecimalResult<Self> {
        Self::wide(WIDE_NULL, scale, precision)
    }

    /// Wide empty-slot marker.
    pub fn wide_empty(scale: u8, precision: u8) -> DecimalResult<Self> {
        Self::wide(WIDE_EMPTY, scale, precision)
    }

    /// Value computed at width `W`, tagged with `W` and typed as `ty`.
    pub(crate) fn from_width<W: StorageWidth>(value: W, ty: DecimalType) -> DecimalResult<Self> {
        match W::WIDTH {
            Width::Narrow => Self::narrow(
                fit(value.widen(), Operation::Conversion)?,
                ty.scale,
                ty.precision,
            ),
            Width::Wide => Self::wide(value.widen(), ty.scale, ty.precision),
        }
    }
}

fn check_scale(scale: u8) -> DecimalResult<()> {
    if i32::from(scale) > MAX_SCALE {
        return Err(DecimalError::ScaleOutOfRange(i32::from(scale)));
    }
    Ok(())
}

// ============================================================================
// Accessors
// ============================================================================

impl Decimal {
    #[inline]
    pub fn scale(&self) -> u8 {
        self.scale
    }

    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[inline]
    pub fn storage(&self) -> Storage {
        self.storage
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.storage.width()
    }

    #[inline]
    pub fn is_wide(&self) -> bool {
        matches!(self.storage, Storage::Wide(_))
    }

    /// Declared type of this value.
    #[inline]
    pub fn decimal_type(&self) -> DecimalType {
        DecimalType {
            precision: self.precision,
            scale: self.scale,
        }
    }

    /// The narrow store.
    ///
    /// # Panics
    /// If the value is wide-tagged; reading the other store is a bug.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> i64 {
        match self.storage {
            Storage::Narrow(v) => v,
            Storage::Wide(_) => panic!("narrow store read on a wide decimal"),
        }
    }

    /// The wide store.
    ///
    /// # Panics
    /// If the value is narrow-tagged.
    #[inline]
    #[track_caller]
    pub fn wide_value(&self) -> i128 {
        match self.storage {
            Storage::Wide(v) => v,
            Storage::Narrow(_) => panic!("wide store read on a narrow decimal"),
        }
    }

    #[inline]
    pub fn as_narrow(&self) -> Option<i64> {
        match self.storage {
            Storage::Narrow(v) => Some(v),
            Storage::Wide(_) => None,
        }
    }

    #[inline]
    pub fn as_wide(&self) -> Option<i128> {
        match self.storage {
            Storage::Wide(v) => Some(v),
            Storage::Narrow(_) => None,
        }
    }

    /// Stored integer promoted to 128 bits, whatever the tag.
    #[inline]
    pub fn raw(&self) -> i128 {
        self.storage.widen()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw() == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.raw() < 0
    }

    /// -1, 0 or 1
    #[inline]
    pub fn signum(&self) -> i32 {
        self.raw().signum() as i32
    }
}

// ============================================================================
// Sentinels
// ============================================================================

impl Decimal {
    /// True for a wide value holding the NULL pattern. Narrow values are
    /// never NULL by this test; use [`Decimal::is_null_with`].
    #[inline]
    pub fn is_null(&self) -> bool {
        self.as_wide() == Some(WIDE_NULL)
    }

    /// True for a wide value holding the empty-slot pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_wide() == Some(WIDE_EMPTY)
    }

    /// NULL test at any width, asking `sentinels` for the narrow marker of
    /// this column's byte width.
    pub fn is_null_with(&self, sentinels: &dyn NarrowSentinels) -> bool {
        match self.storage {
            Storage::Wide(v) => v == WIDE_NULL,
            Storage::Narrow(v) => v == sentinels.null_value(self.decimal_type().storage_bytes()),
        }
    }

    /// Empty-slot test at any width.
    pub fn is_empty_with(&self, sentinels: &dyn NarrowSentinels) -> bool {
        match self.storage {
            Storage::Wide(v) => v == WIDE_EMPTY,
            Storage::Narrow(v) => v == sentinels.empty_value(self.decimal_type().storage_bytes()),
        }
    }
}
