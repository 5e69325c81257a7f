//! Serializable bit range description.
//!
//! A [BitRangeDef] is what a config file or JSON message carries. It holds raw,
//! unchecked indices and only becomes a [BitRange] through `TryFrom`, which
//! applies the usual range validation.

use serde::{Deserialize, Serialize};

use crate::{errors::RangeError, range::BitRange};

/// Unvalidated inclusive bit range, `{ "low": 8, "high": 15 }`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct BitRangeDef {
    /// Lowest bit of the range (0 = least significant).
    pub low: i32,
    /// Highest bit of the range, inclusive.
    pub high: i32,
}

impl TryFrom<BitRangeDef> for BitRange {
    type Error = RangeError;

    fn try_from(value: BitRangeDef) -> Result<Self, Self::Error> {
        BitRange::new(value.low, value.high)
    }
}

impl From<BitRange> for BitRangeDef {
    fn from(value: BitRange) -> Self {
        BitRangeDef {
            low: value.low() as i32,
            high: value.high() as i32,
        }
    }
}
