// ============================================================================
// Sentinel Registry
// Reserved 128-bit magnitudes marking SQL NULL and empty storage slots
// ============================================================================
//
// Only the wide sentinels live here. Narrow columns reserve one magic value
// per byte width, and those are defined by the type-dispatch layer; see
// `interfaces::NarrowSentinels`.

/// Bit pattern marking a NULL wide decimal.
pub const WIDE_NULL: i128 = i128::MIN;

/// Bit pattern marking an empty (never written) wide slot.
pub const WIDE_EMPTY: i128 = i128::MIN + 1;

/// Smallest wide value that is real data.
pub const WIDE_MIN_LEGAL: i128 = i128::MIN + 2;

/// Lowest value a float-to-narrow clamp returns. Only the 8-byte NULL
/// marker (`i64::MIN`) is skipped; the empty-row marker is allowed.
pub const NARROW_CLAMP_MIN: i64 = i64::MIN + 1;

/// True if `raw` is one of the reserved wide patterns.
#[inline]
pub const fn is_wide_sentinel(raw: i128) -> bool {
    raw == WIDE_NULL || raw == WIDE_EMPTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_patterns() {
        assert!(is_wide_sentinel(WIDE_NULL));
        assert!(is_wide_sentinel(WIDE_EMPTY));
        assert!(!is_wide_sentinel(WIDE_MIN_LEGAL));
        assert!(!is_wide_sentinel(0));
        assert_eq!(WIDE_NULL.to_ne_bytes(), i128::MIN.to_ne_bytes());
    }
}
