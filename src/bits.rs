//! Bit-range extraction, fill, clear and copy on a single [Word].
//!
//! Bit 0 is the least significant bit, bit 63 the sign bit. Each operation
//! comes in two forms: a `try_*` version that reports a rejected range as a
//! [RangeError], and a plain version that never fails and falls back to a
//! fixed value instead. The fallbacks differ on purpose:
//!
//! - [get_bits] returns 0,
//! - [set_bits], [clear_bits] and [copy_bits] return their input word unchanged.

use tracing::trace;

use crate::{errors::RangeError, range::BitRange, word::MAX_BIT, Word};

/// Bits `range` of `source`, shifted down so that bit `range.low()` lands at bit 0.
pub fn extract(source: Word, range: BitRange) -> Word {
    // drop everything above `high`, then bring `low` down to bit 0
    let shifted = source << (MAX_BIT - range.high());
    shifted >> (MAX_BIT - (range.high() - range.low()))
}

/// `source` with every bit of `range` set to 1.
pub fn fill(source: Word, range: BitRange) -> Word {
    source | range.mask()
}

/// `source` with every bit of `range` set to 0.
pub fn clear(source: Word, range: BitRange) -> Word {
    source & !range.mask()
}

pub fn try_get_bits(source: Word, low: i32, high: i32) -> Result<Word, RangeError> {
    Ok(extract(source, BitRange::new(low, high)?))
}

/// Bits `low` through `high` (inclusive) of `source`, right-justified.
///
/// Returns 0 when `low < 0`, `high > 63` or `high < low`.
///
/// ```
/// assert_eq!(wordbits::get_bits(0x8877665544332211, 4, 11), 0x21);
/// assert_eq!(wordbits::get_bits(0x8877665544332211, 11, 4), 0);
/// ```
pub fn get_bits(source: Word, low: i32, high: i32) -> Word {
    try_get_bits(source, low, high).unwrap_or_else(|err| {
        trace!(low, high, %err, "bit range rejected, returning zero");
        0
    })
}

pub fn try_set_bits(source: Word, low: i32, high: i32) -> Result<Word, RangeError> {
    Ok(fill(source, BitRange::new(low, high)?))
}

/// `source` with bits `low` through `high` set to 1.
///
/// Returns `source` unchanged when `low < 0`, `high > 63` or `high < low`.
pub fn set_bits(source: Word, low: i32, high: i32) -> Word {
    try_set_bits(source, low, high).unwrap_or_else(|err| {
        trace!(low, high, %err, "bit range rejected, returning source");
        source
    })
}

pub fn try_clear_bits(source: Word, low: i32, high: i32) -> Result<Word, RangeError> {
    Ok(clear(source, BitRange::new(low, high)?))
}

/// `source` with bits `low` through `high` set to 0.
///
/// Returns `source` unchanged when `low < 0`, `high > 63` or `high < low`.
pub fn clear_bits(source: Word, low: i32, high: i32) -> Word {
    try_clear_bits(source, low, high).unwrap_or_else(|err| {
        trace!(low, high, %err, "bit range rejected, returning source");
        source
    })
}

/// Copies `length` bits of `source` starting at `src_low` into `dest` starting at `dst_low`.
///
/// Both the source and destination fields must lie within bits 0..=63 and
/// `length` must be at least 1.
pub fn try_copy_bits(
    source: Word,
    dest: Word,
    src_low: i32,
    dst_low: i32,
    length: i32,
) -> Result<Word, RangeError> {
    let src = BitRange::spanning(src_low, length)?;
    let dst = BitRange::spanning(dst_low, length)?;

    let field = extract(source, src) << dst.low();
    Ok(clear(dest, dst) | field)
}

/// Copies `length` bits of `source` starting at `src_low` into `dest` starting at `dst_low`
/// and returns the modified `dest`.
///
/// Returns `dest` unchanged when either field leaves bits 0..=63, and when
/// `length` is zero or negative (nothing to copy).
///
/// ```
/// let dest = wordbits::copy_bits(0x1122334455667788, 0x8877665544332211, 0, 8, 8);
/// assert_eq!(dest, 0x8877665544338811);
/// ```
pub fn copy_bits(source: Word, dest: Word, src_low: i32, dst_low: i32, length: i32) -> Word {
    try_copy_bits(source, dest, src_low, dst_low, length).unwrap_or_else(|err| {
        trace!(src_low, dst_low, length, %err, "copy rejected, returning dest");
        dest
    })
}
