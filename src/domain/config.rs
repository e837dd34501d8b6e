// ============================================================================
// Decimal Type Configuration
// Declared precision/scale of a DECIMAL column and the facts derived from it
// ============================================================================

use crate::numeric::{DecimalError, DecimalResult, Width, MAX_NARROW_SCALE, MAX_SCALE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest precision held in the narrow (64-bit) store.
pub const MAX_NARROW_PRECISION: u8 = MAX_NARROW_SCALE as u8;

/// Largest supported precision.
pub const MAX_PRECISION: u8 = MAX_SCALE as u8;

/// True for precisions that select the 128-bit store.
#[inline]
pub const fn is_wide_precision(precision: u8) -> bool {
    precision > MAX_NARROW_PRECISION && precision <= MAX_PRECISION
}

// ============================================================================
// Decimal Type
// ============================================================================

/// `DECIMAL(precision, scale)` as declared on a column or computed for an
/// intermediate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalType {
    /// Total significant digits (1..=38)
    pub precision: u8,

    /// Digits right of the decimal point (0..=38)
    pub scale: u8,
}

impl DecimalType {
    /// Create a validated type.
    ///
    /// # Errors
    /// `PrecisionOutOfRange` or `ScaleOutOfRange` when either is unsupported.
    pub fn new(precision: u8, scale: u8) -> DecimalResult<Self> {
        let ty = Self { precision, scale };
        ty.validate()?;
        Ok(ty)
    }

    /// Builder method: set precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: set scale
    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> DecimalResult<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(DecimalError::PrecisionOutOfRange(self.precision));
        }
        if self.scale > MAX_PRECISION {
            return Err(DecimalError::ScaleOutOfRange(i32::from(self.scale)));
        }
        Ok(())
    }

    /// Storage width selected by precision.
    #[inline]
    pub fn width(&self) -> Width {
        if is_wide_precision(self.precision) {
            Width::Wide
        } else {
            Width::Narrow
        }
    }

    #[inline]
    pub fn is_wide(&self) -> bool {
        self.width() == Width::Wide
    }

    /// Bytes one value occupies in columnar storage.
    pub fn storage_bytes(&self) -> usize {
        match self.precision {
            0..=2 => 1,
            3..=4 => 2,
            5..=9 => 4,
            10..=18 => 8,
            _ => 16,
        }
    }

    /// Largest raw magnitude the declared precision admits (`10^p - 1`).
    pub fn max_raw(&self) -> DecimalResult<i128> {
        Ok(crate::numeric::scale_divisor_wide(i32::from(self.precision))? - 1)
    }
}

impl Default for DecimalType {
    fn default() -> Self {
        Self::system_default()
    }
}

// ============================================================================
// Preset Types (Factory Methods)
// ============================================================================

impl DecimalType {
    /// `DECIMAL(10, 0)`, the SQL default when no precision is declared
    pub fn system_default() -> Self {
        Self {
            precision: 10,
            scale: 0,
        }
    }

    /// Widest narrow type, `DECIMAL(18, scale)`
    pub fn narrow_max(scale: u8) -> Self {
        Self {
            precision: MAX_NARROW_PRECISION,
            scale,
        }
    }

    /// Widest wide type, `DECIMAL(38, scale)`
    pub fn wide_max(scale: u8) -> Self {
        Self {
            precision: MAX_PRECISION,
            scale,
        }
    }

    /// Money columns: `DECIMAL(19, 4)`
    pub fn currency() -> Self {
        Self {
            precision: 19,
            scale: 4,
        }
    }
}
