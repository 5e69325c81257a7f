//! # wordbits
//!
//! Bit manipulation on fixed 64-bit words: extract, set, clear and copy bit
//! ranges, work with byte lanes, assemble a word from bytes, and check
//! two's-complement addition and subtraction for overflow.
//!
//! Every function is pure and total. Out-of-range indices never panic; they
//! produce a fixed fallback value instead (0 for [get_bits] and [get_byte], the
//! unchanged input for the setters, clearers and [copy_bits]). The `try_*`
//! variants report the same rejections as a [RangeError].
//!
//! ## Example
//!
//! ```
//! use wordbits::{build_word, clear_bits, copy_bits, get_bits, set_byte};
//!
//! let word = build_word([0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
//! assert_eq!(word, 0x1122334455667788);
//!
//! assert_eq!(get_bits(word, 0, 7), 0x88);
//! assert_eq!(clear_bits(word, 0x30, 0x3f), 0x0000334455667788);
//! assert_eq!(set_byte(0x0, 3), 0x00000000ff000000);
//! assert_eq!(copy_bits(word, 0, 0, 0, 64), word);
//!
//! // reversed range: zero from the getter, no-op from the setter
//! assert_eq!(get_bits(word, 7, 0), 0);
//! assert_eq!(clear_bits(word, 7, 0), word);
//! ```

pub mod bits;
pub mod errors;
pub mod overflow;
pub mod range;
#[cfg(feature = "serde")]
pub mod serde;
pub mod word;

pub use bits::{
    clear, clear_bits, copy_bits, extract, fill, get_bits, set_bits, try_clear_bits,
    try_copy_bits, try_get_bits, try_set_bits,
};
pub use errors::RangeError;
pub use overflow::{add_would_overflow, is_negative, sign, sub_would_overflow};
pub use range::BitRange;
pub use word::{
    build_word, clear_byte, get_byte, set_byte, split_word, try_clear_byte, try_get_byte,
    try_set_byte, Word,
};
