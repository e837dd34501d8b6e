// ============================================================================
// Decimal Comparison
// Scale-aware three-way compare and the single total order built on it
// ============================================================================

use crate::domain::Decimal;
use crate::numeric::{pow10_wide, DecomposedValue};
use std::cmp::Ordering;

/// Three-way compare of logical magnitudes: -1, 0 or 1.
///
/// Each side is split by its own scale; integral parts decide unless equal,
/// then the fractional remainders are brought to the larger scale and
/// compared. No floating point is involved.
pub fn compare(l: &Decimal, r: &Decimal) -> i32 {
    let left = DecomposedValue::with_divisor(l.raw(), pow10_wide(l.scale()));
    let right = DecomposedValue::with_divisor(r.raw(), pow10_wide(r.scale()));

    match left.integral().cmp(&right.integral()) {
        Ordering::Less => return -1,
        Ordering::Greater => return 1,
        Ordering::Equal => {}
    }

    // |fractional| < 10^scale, so lifting to the larger scale stays below 10^38
    let mut lf = left.fractional();
    let mut rf = right.fractional();
    if l.scale() < r.scale() {
        lf *= pow10_wide(r.scale() - l.scale());
    } else if r.scale() < l.scale() {
        rf *= pow10_wide(l.scale() - r.scale());
    }

    match lf.cmp(&rf) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale() == other.scale() {
            // narrow sides are promoted by raw()
            self.raw().cmp(&other.raw())
        } else {
            compare(self, other).cmp(&0)
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}
