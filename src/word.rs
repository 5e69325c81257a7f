//! The 64-bit [Word] and its byte lanes.
//!
//! Lane 0 is the least significant byte, lane 7 the most significant.

use tracing::trace;

use crate::{
    bits::{clear, extract, fill},
    errors::RangeError,
    range::BitRange,
};

/// A 64-bit container, read either as a raw bit pattern or as a two's-complement integer.
pub type Word = u64;

pub const WORD_BITS: u32 = Word::BITS;
pub const BYTE_BITS: u32 = u8::BITS;
pub const WORD_BYTES: usize = (WORD_BITS / BYTE_BITS) as usize;
/// Index of the most significant bit.
pub const MAX_BIT: u32 = WORD_BITS - 1;
/// Index of the two's-complement sign bit.
pub const SIGN_BIT: u32 = MAX_BIT;

/// Combines 8 bytes into a word, `bytes[0]` becoming the least significant byte.
///
/// ```
/// let word = wordbits::build_word([0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0]);
/// assert_eq!(word, 0xf0debc9a78563412);
/// ```
pub fn build_word(bytes: [u8; WORD_BYTES]) -> Word {
    Word::from_le_bytes(bytes)
}

/// Splits a word back into its lanes; the inverse of [build_word].
pub fn split_word(word: Word) -> [u8; WORD_BYTES] {
    word.to_le_bytes()
}

/// Byte lane `byte_index` of `source`, right-justified.
pub fn try_get_byte(source: Word, byte_index: i32) -> Result<Word, RangeError> {
    Ok(extract(source, BitRange::byte_lane(byte_index)?))
}

/// Byte lane `byte_index` of `source`, right-justified. Returns 0 for a lane outside 0..=7.
pub fn get_byte(source: Word, byte_index: i32) -> Word {
    try_get_byte(source, byte_index).unwrap_or_else(|err| {
        trace!(byte_index, %err, "byte lane rejected, returning zero");
        0
    })
}

/// `source` with lane `byte_index` set to 0xff.
pub fn try_set_byte(source: Word, byte_index: i32) -> Result<Word, RangeError> {
    Ok(fill(source, BitRange::byte_lane(byte_index)?))
}

/// `source` with lane `byte_index` set to 0xff. Returns `source` unchanged for a lane outside 0..=7.
pub fn set_byte(source: Word, byte_index: i32) -> Word {
    try_set_byte(source, byte_index).unwrap_or_else(|err| {
        trace!(byte_index, %err, "byte lane rejected, returning source");
        source
    })
}

/// `source` with lane `byte_index` set to 0x00.
pub fn try_clear_byte(source: Word, byte_index: i32) -> Result<Word, RangeError> {
    Ok(clear(source, BitRange::byte_lane(byte_index)?))
}

/// `source` with lane `byte_index` set to 0x00. Returns `source` unchanged for a lane outside 0..=7.
pub fn clear_byte(source: Word, byte_index: i32) -> Word {
    try_clear_byte(source, byte_index).unwrap_or_else(|err| {
        trace!(byte_index, %err, "byte lane rejected, returning source");
        source
    })
}
