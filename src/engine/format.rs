// ============================================================================
// Decimal Text Formatting
// Client-visible text layout and the parser that reads it back
// ============================================================================
//
// Layout: optional '-', the absolute value's digits left-padded with zeros to
// at least scale + 1 digits, and a '.' exactly scale digits from the right
// (no point at scale 0). No exponent, no grouping, trailing zeros kept.

use crate::domain::{Decimal, DecimalType, MAX_PRECISION};
use crate::numeric::{DecimalError, DecimalResult, Operation};
use arrayvec::ArrayString;
use std::fmt;
use std::str::FromStr;

/// Longest possible text: sign, 39 digits of `i128::MIN`, and a point.
pub const MAX_TEXT_LEN: usize = 42;

/// Stack buffer holding one formatted decimal.
pub type DecimalText = ArrayString<MAX_TEXT_LEN>;

fn write_digits(out: &mut DecimalText, negative: bool, magnitude: u128, scale: usize) {
    let mut digits = [b'0'; 39];
    let mut len = 0;
    let mut rest = magnitude;
    while rest > 0 {
        digits[digits.len() - 1 - len] = b'0' + (rest % 10) as u8;
        rest /= 10;
        len += 1;
    }
    // zero-padded so there is always a digit before the point
    let len = len.max(scale + 1);
    let digits = &digits[digits.len() - len..];

    if negative {
        out.push('-');
    }
    let point = len - scale;
    for (i, &d) in digits.iter().enumerate() {
        if scale > 0 && i == point {
            out.push('.');
        }
        out.push(char::from(d));
    }
}

impl Decimal {
    /// Format into a stack buffer.
    ///
    /// `force_wide` is accepted for callers that used to pick the 128-bit
    /// store by hand. The width tag is explicit and every store is read
    /// promoted to 128 bits, so the flag never changes the text.
    pub fn to_text(&self, _force_wide: bool) -> DecimalText {
        let raw = self.raw();
        let mut out = DecimalText::new();
        write_digits(&mut out, raw < 0, raw.unsigned_abs(), usize::from(self.scale()));
        out
    }

    /// Owned text; see [`Decimal::to_text`].
    pub fn to_string_with(&self, force_wide: bool) -> String {
        self.to_text(force_wide).to_string()
    }

    /// Read text written in the formatting layout (sign, digits, optional
    /// point and fraction) into type `ty`.
    ///
    /// Fractional digits beyond `ty.scale` round half away from zero.
    ///
    /// # Errors
    /// `InvalidInput` for malformed text, `Overflow` when the value needs
    /// more digits than `ty.precision`.
    pub fn parse(text: &str, ty: DecimalType) -> DecimalResult<Decimal> {
        ty.validate()?;
        let parts = split_number(text)?;
        let overflow = || DecimalError::overflow(Operation::Conversion, ty.width());
        let scale = usize::from(ty.scale);

        let mut magnitude: i128 = 0;
        let kept = parts.fraction.len().min(scale);
        for &d in parts
            .integer
            .iter()
            .chain(parts.fraction[..kept].iter())
        {
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(d - b'0')))
                .ok_or_else(overflow)?;
        }
        for _ in kept..scale {
            magnitude = magnitude.checked_mul(10).ok_or_else(overflow)?;
        }
        if parts.fraction.get(scale).is_some_and(|&d| d >= b'5') {
            magnitude = magnitude.checked_add(1).ok_or_else(overflow)?;
        }

        if magnitude > ty.max_raw()? {
            return Err(overflow());
        }
        let raw = if parts.negative { -magnitude } else { magnitude };
        Decimal::from_raw(raw, ty)
    }
}

struct NumberParts<'a> {
    negative: bool,
    integer: &'a [u8],
    fraction: &'a [u8],
}

fn split_number(text: &str) -> DecimalResult<NumberParts<'_>> {
    let bytes = text.as_bytes();
    let (negative, body) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let (integer, fraction) = match body.iter().position(|&b| b == b'.') {
        Some(i) => (&body[..i], &body[i + 1..]),
        None => (body, &body[body.len()..]),
    };
    let all_digits = |s: &[u8]| s.iter().all(u8::is_ascii_digit);
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
        return Err(DecimalError::InvalidInput);
    }
    Ok(NumberParts {
        negative,
        integer,
        fraction,
    })
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Scale is the number of fractional digits; precision is the count of
    /// significant integer digits plus the scale.
    fn from_str(s: &str) -> DecimalResult<Self> {
        let parts = split_number(s)?;
        let scale = parts.fraction.len();
        if scale > usize::from(MAX_PRECISION) {
            return Err(DecimalError::ScaleOutOfRange(scale as i32));
        }
        let significant = parts
            .integer
            .iter()
            .skip_while(|&&d| d == b'0')
            .count();
        let precision = (significant + scale).max(1);
        if precision > usize::from(MAX_PRECISION) {
            return Err(DecimalError::PrecisionOutOfRange(
                precision.min(usize::from(u8::MAX)) as u8,
            ));
        }
        Decimal::parse(s, DecimalType::new(precision as u8, scale as u8)?)
    }
}
