// ============================================================================
// Engine Module
// Decimal arithmetic, comparison, conversion and text formatting
// ============================================================================

pub mod arithmetic;
mod compare;
mod convert;
mod format;

pub use arithmetic::{add, divide, multiply, subtract};
pub use compare::compare;
pub use convert::NativeBytes;
pub use format::{DecimalText, MAX_TEXT_LEN};
