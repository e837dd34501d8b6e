// ============================================================================
// Interfaces Module
// Contracts implemented by collaborators outside the decimal engine
// ============================================================================

mod narrow_sentinels;

pub use narrow_sentinels::NarrowSentinels;
