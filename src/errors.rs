//! Error type for the checked (`try_*`) half of the API.
//!
//! The sentinel functions never surface these; they map every `Err` to their
//! documented fallback value.

/// Why a bit range, byte lane or copy request was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Low bit index is below 0 or above 63.
    #[error("low bit index {0} is outside 0..=63")]
    LowOutOfRange(i32),
    /// High bit index is below 0 or above 63.
    #[error("high bit index {0} is outside 0..=63")]
    HighOutOfRange(i32),
    /// High bit index is below the low bit index.
    #[error("bit range is reversed (low {low}, high {high})")]
    Reversed { low: i32, high: i32 },
    /// Byte lane index is outside 0..=7.
    #[error("byte index {0} is outside 0..=7")]
    ByteOutOfRange(i32),
    /// A copy of zero or a negative number of bits.
    #[error("copy length {0} is not positive")]
    EmptyCopy(i32),
}
