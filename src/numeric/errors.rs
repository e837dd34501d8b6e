// ============================================================================
// Numeric Errors
// Error types for fixed-point decimal operations
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Storage width a decimal operation ran at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 64-bit signed store (precision 1..=18)
    Narrow,
    /// 128-bit signed store (precision 19..=38)
    Wide,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Narrow => write!(f, "int64"),
            Width::Wide => write!(f, "int128"),
        }
    }
}

/// Operation that raised an overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// Scale multiplication while aligning an operand to another scale
    Rescale,
    /// Conversion into a narrower integer or decimal representation
    Conversion,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Rescale => "scale multiplication",
            Operation::Conversion => "conversion",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during decimal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DecimalError {
    /// An overflow check rejected the operands or the result.
    #[error("Decimal::{op}<{width}> produces an overflow")]
    Overflow { op: Operation, width: Width },

    /// Requested scale is outside 0..=38.
    #[error("scale {0} is outside the supported range 0..=38")]
    ScaleOutOfRange(i32),

    /// Declared precision is outside 1..=38.
    #[error("precision {0} is outside the supported range 1..=38")]
    PrecisionOutOfRange(u8),

    /// Input text or bytes could not be interpreted as a decimal.
    #[error("invalid input: could not parse decimal value")]
    InvalidInput,
}

impl DecimalError {
    /// Build an overflow error and record it at debug level.
    pub(crate) fn overflow(op: Operation, width: Width) -> Self {
        tracing::debug!(%op, %width, "decimal overflow check failed");
        DecimalError::Overflow { op, width }
    }

    /// Returns true for the overflow family of errors.
    pub fn is_overflow(&self) -> bool {
        matches!(self, DecimalError::Overflow { .. })
    }

    /// Returns true for scale/precision domain errors.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            DecimalError::ScaleOutOfRange(_) | DecimalError::PrecisionOutOfRange(_)
        )
    }
}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecimalError::Overflow {
                op: Operation::Addition,
                width: Width::Wide
            }
            .to_string(),
            "Decimal::addition<int128> produces an overflow"
        );
        assert_eq!(
            DecimalError::ScaleOutOfRange(40).to_string(),
            "scale 40 is outside the supported range 0..=38"
        );
    }

    #[test]
    fn test_error_classification() {
        let overflow = DecimalError::overflow(Operation::Division, Width::Narrow);
        assert!(overflow.is_overflow());
        assert!(!overflow.is_domain());
        assert!(DecimalError::PrecisionOutOfRange(0).is_domain());
        assert!(!DecimalError::InvalidInput.is_overflow());
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            DecimalError::ScaleOutOfRange(-1),
            DecimalError::ScaleOutOfRange(-1)
        );
        assert_ne!(
            DecimalError::ScaleOutOfRange(-1),
            DecimalError::ScaleOutOfRange(39)
        );
    }
}
