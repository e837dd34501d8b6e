// ============================================================================
// Narrow Sentinel Interface
// Contract for the type-dispatch layer that owns per-width NULL/EMPTY markers
// ============================================================================

/// Source of the narrow-width NULL and EMPTY markers.
///
/// Narrow decimal columns are stored as 1, 2, 4 or 8 byte integers and each
/// width reserves its own magic values. Those values belong to the column
/// type handlers, not to the decimal engine, so the engine asks through this
/// trait instead of hard-coding them.
pub trait NarrowSentinels: Send + Sync {
    /// NULL marker for a column of `width_bytes`, sign-extended to 64 bits.
    fn null_value(&self, width_bytes: usize) -> i64;

    /// EMPTY marker for a column of `width_bytes`, sign-extended to 64 bits.
    fn empty_value(&self, width_bytes: usize) -> i64;

    /// True if `value` is either marker at this width.
    fn is_reserved(&self, value: i64, width_bytes: usize) -> bool {
        value == self.null_value(width_bytes) || value == self.empty_value(width_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal registry: MIN is NULL, MIN + 1 is EMPTY.
    struct MockSentinels;

    impl NarrowSentinels for MockSentinels {
        fn null_value(&self, width_bytes: usize) -> i64 {
            match width_bytes {
                1 => i8::MIN.into(),
                2 => i16::MIN.into(),
                4 => i32::MIN.into(),
                _ => i64::MIN,
            }
        }

        fn empty_value(&self, width_bytes: usize) -> i64 {
            self.null_value(width_bytes) + 1
        }
    }

    #[test]
    fn test_reserved_by_width() {
        let registry = MockSentinels;
        assert!(registry.is_reserved(-128, 1));
        assert!(registry.is_reserved(-127, 1));
        assert!(!registry.is_reserved(-126, 1));
        assert!(!registry.is_reserved(-128, 2));
        assert!(registry.is_reserved(i64::MIN + 1, 8));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let registry: Box<dyn NarrowSentinels> = Box::new(MockSentinels);
        assert_eq!(registry.null_value(4), i32::MIN as i64);
    }
}
