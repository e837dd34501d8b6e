// ============================================================================
// Float128 Bridge
// Extended-range floating values for converting 128-bit decimals to and from
// native floats, with clamping at the target type's range boundaries
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::str::FromStr;

/// Significant digits kept after the decimal point while parsing.
pub const MAX_PARSE_DIGITS: usize = 37;

/// Largest decimal exponent a quad-precision float can carry.
pub const MAX_EXPONENT10: i64 = 4932;

/// Smallest decimal exponent (subnormals included) before flushing to zero.
pub const MIN_EXPONENT10: i64 = -4965;

/// A finite exact value or a signed infinity.
///
/// Finite values are exact rationals, so the power, modulo and parse
/// routines never lose digits on their own; rounding only happens when a
/// value is clamped into a native type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Float128 {
    Finite(BigRational),
    Infinity { negative: bool },
}

impl Float128 {
    pub fn zero() -> Self {
        Float128::Finite(BigRational::zero())
    }

    pub fn from_i128(value: i128) -> Self {
        Float128::Finite(BigRational::from_integer(BigInt::from(value)))
    }

    /// `numer / denom`; a zero denominator yields a signed infinity.
    pub fn from_ratio(numer: i128, denom: i128) -> Self {
        if denom == 0 {
            return Float128::Infinity {
                negative: numer < 0,
            };
        }
        Float128::Finite(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// Exact value of a native double. NaN has no representation.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_infinite() {
            return Some(Float128::Infinity {
                negative: value < 0.0,
            });
        }
        BigRational::from_float(value).map(Float128::Finite)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Float128::Infinity { .. })
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Float128::Finite(r) => r.is_negative(),
            Float128::Infinity { negative } => *negative,
        }
    }

    /// `self^n` for an integral exponent.
    pub fn pown(&self, n: i32) -> Self {
        match self {
            Float128::Finite(r) => {
                if r.is_zero() && n < 0 {
                    Float128::Infinity { negative: false }
                } else {
                    Float128::Finite(r.pow(n))
                }
            }
            Float128::Infinity { negative } => match n {
                0 => Float128::Finite(BigRational::one()),
                n if n < 0 => Float128::zero(),
                n => Float128::Infinity {
                    negative: *negative && n % 2 != 0,
                },
            },
        }
    }

    /// Multiply by `10^exp`.
    pub fn scale_by_pow10(&self, exp: i32) -> Self {
        match self {
            Float128::Finite(r) => {
                let ten = Float128::Finite(BigRational::from_integer(BigInt::from(10)));
                match ten.pown(exp) {
                    Float128::Finite(p) => Float128::Finite(r * p),
                    inf => inf,
                }
            }
            inf => inf.clone(),
        }
    }

    /// Floating remainder of `self / rhs`, truncated quotient, sign of `self`.
    ///
    /// `None` where the result is undefined: a zero divisor or an infinite
    /// dividend.
    pub fn fmod(&self, rhs: &Self) -> Option<Self> {
        match (self, rhs) {
            (Float128::Infinity { .. }, _) => None,
            (Float128::Finite(x), Float128::Infinity { .. }) => Some(Float128::Finite(x.clone())),
            (Float128::Finite(x), Float128::Finite(y)) => {
                if y.is_zero() {
                    return None;
                }
                let quotient = (x / y).trunc();
                Some(Float128::Finite(x - quotient * y))
            }
        }
    }

    /// Round to the nearest integer, ties away from zero.
    pub fn round(&self) -> Self {
        match self {
            Float128::Finite(r) => Float128::Finite(r.round()),
            inf => inf.clone(),
        }
    }

    /// Truncating conversion, clamped to `[i128::MIN, i128::MAX]`.
    pub fn to_i128(&self) -> i128 {
        match self {
            Float128::Finite(r) => r.to_integer().to_i128().unwrap_or_else(|| {
                if r.is_negative() {
                    i128::MIN
                } else {
                    i128::MAX
                }
            }),
            Float128::Infinity { negative: true } => i128::MIN,
            Float128::Infinity { negative: false } => i128::MAX,
        }
    }

    /// Truncating conversion, clamped to `[i64::MIN, i64::MAX]`.
    pub fn to_i64(&self) -> i64 {
        let wide = self.to_i128();
        i64::try_from(wide).unwrap_or(if wide < 0 { i64::MIN } else { i64::MAX })
    }

    /// Truncating conversion, clamped to `[0, u64::MAX]`.
    pub fn to_u64(&self) -> u64 {
        if self.is_negative() {
            return 0;
        }
        u64::try_from(self.to_i128()).unwrap_or(u64::MAX)
    }

    /// Nearest double, clamped to `[-f64::MAX, f64::MAX]`.
    pub fn to_f64(&self) -> f64 {
        let value = match self {
            Float128::Finite(r) => r.to_f64().unwrap_or(if r.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Float128::Infinity { negative: true } => f64::NEG_INFINITY,
            Float128::Infinity { negative: false } => f64::INFINITY,
        };
        value.clamp(-f64::MAX, f64::MAX)
    }

    /// Nearest float, clamped to `[-f32::MAX, f32::MAX]`.
    pub fn to_f32(&self) -> f32 {
        (self.to_f64() as f32).clamp(-f32::MAX, f32::MAX)
    }
}

impl FromStr for Float128 {
    type Err = DecimalError;

    /// Optional sign, `inf`/`nan` (both read as infinity), digits with an
    /// optional point, then an optional `e`/`E` exponent. An empty string is
    /// zero.
    fn from_str(s: &str) -> DecimalResult<Self> {
        if s.is_empty() {
            return Ok(Float128::zero());
        }

        let (negative, body) = match s.as_bytes()[0] {
            b'+' => (false, &s[1..]),
            b'-' => (true, &s[1..]),
            _ => (false, s),
        };

        if matches!(body, "nan" | "NaN" | "NAN" | "inf" | "Inf" | "INF") {
            return Ok(Float128::Infinity { negative });
        }

        let bytes = body.as_bytes();
        let mut pos = 0;
        let mut digits = BigInt::zero();
        let mut digits_seen = 0usize;
        let mut exponent: i64 = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            digits = digits * 10 + (bytes[pos] - b'0');
            digits_seen += 1;
            pos += 1;
        }
        let mut any_digit = pos > 0;

        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                digits = digits * 10 + (bytes[pos] - b'0');
                exponent -= 1;
                pos += 1;
                any_digit = true;
                digits_seen += 1;
                if digits_seen > MAX_PARSE_DIGITS {
                    break;
                }
            }
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }

        if !any_digit {
            return Err(DecimalError::InvalidInput);
        }

        if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
            pos += 1;
            let negative_exp = match bytes.get(pos) {
                Some(b'+') => {
                    pos += 1;
                    false
                }
                Some(b'-') => {
                    pos += 1;
                    true
                }
                _ => false,
            };
            let mut e2: i64 = 0;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                e2 = e2.saturating_mul(10).saturating_add(i64::from(bytes[pos] - b'0'));
                pos += 1;
            }
            exponent = exponent.saturating_add(if negative_exp { -e2 } else { e2 });
        }

        if pos != bytes.len() {
            return Err(DecimalError::InvalidInput);
        }

        if digits.is_zero() {
            return Ok(Float128::zero());
        }

        // decimal exponent of the leading digit
        let magnitude = digits.to_string().len() as i64 - 1 + exponent;
        if magnitude > MAX_EXPONENT10 {
            return Ok(Float128::Infinity { negative });
        }
        if magnitude < MIN_EXPONENT10 {
            return Ok(Float128::zero());
        }

        let signed = if negative { -digits } else { digits };
        // bounded by the magnitude checks above
        let exp = exponent as i32;
        Ok(Float128::Finite(BigRational::from_integer(signed)).scale_by_pow10(exp))
    }
}
