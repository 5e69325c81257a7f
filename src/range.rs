//! Validated inclusive bit ranges within a [crate::Word].

use std::fmt;

use crate::{
    errors::RangeError,
    word::{BYTE_BITS, MAX_BIT, WORD_BITS, WORD_BYTES},
};

/// An inclusive run of bits `[low, high]` with `0 <= low <= high <= 63`.
///
/// Only the checked constructors can build one, so every `BitRange` in hand
/// is safe to shift by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRange {
    low: u32,
    high: u32,
}

impl BitRange {
    /// All 64 bits.
    pub const FULL: BitRange = BitRange {
        low: 0,
        high: MAX_BIT,
    };

    /// Builds `[low, high]`. Rejects `low < 0`, `high > 63` and `high < low`.
    pub fn new(low: i32, high: i32) -> Result<Self, RangeError> {
        if low < 0 {
            return Err(RangeError::LowOutOfRange(low));
        }
        if high > MAX_BIT as i32 {
            return Err(RangeError::HighOutOfRange(high));
        }
        if high < low {
            return Err(RangeError::Reversed { low, high });
        }

        Ok(BitRange {
            low: low as u32,
            high: high as u32,
        })
    }

    /// Builds the `length`-bit range starting at `low`, i.e. `[low, low + length - 1]`.
    pub fn spanning(low: i32, length: i32) -> Result<Self, RangeError> {
        if !(0..=MAX_BIT as i32).contains(&low) {
            return Err(RangeError::LowOutOfRange(low));
        }
        if length < 1 {
            return Err(RangeError::EmptyCopy(length));
        }

        // i64 so that huge lengths cannot wrap past the bound check
        let high = i64::from(low) + i64::from(length) - 1;
        if high > i64::from(MAX_BIT) {
            return Err(RangeError::HighOutOfRange(
                i32::try_from(high).unwrap_or(i32::MAX),
            ));
        }

        Ok(BitRange {
            low: low as u32,
            high: high as u32,
        })
    }

    /// The 8 bits of byte lane `byte_index` (0 = least significant lane).
    pub fn byte_lane(byte_index: i32) -> Result<Self, RangeError> {
        if !(0..WORD_BYTES as i32).contains(&byte_index) {
            return Err(RangeError::ByteOutOfRange(byte_index));
        }

        let low = byte_index as u32 * BYTE_BITS;
        Ok(BitRange {
            low,
            high: low + BYTE_BITS - 1,
        })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Number of bits covered, 1 through 64.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.high - self.low + 1
    }

    /// True when the range covers the whole word.
    pub fn is_full(&self) -> bool {
        self.len() == WORD_BITS
    }

    pub fn contains(&self, bit: u32) -> bool {
        (self.low..=self.high).contains(&bit)
    }

    /// Ones across the range, zeros elsewhere.
    pub fn mask(&self) -> u64 {
        // `1 << 64` is not a valid shift, so the full word is handled on its own
        if self.is_full() {
            return u64::MAX;
        }

        ((1u64 << self.len()) - 1) << self.low
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
