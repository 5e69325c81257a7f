//! Sign and overflow checks for words read as 64-bit two's-complement integers.

use crate::{word::SIGN_BIT, Word};

/// The sign bit of `source`: 1 when negative as two's complement, 0 otherwise.
pub fn sign(source: Word) -> u8 {
    (source >> SIGN_BIT) as u8
}

pub fn is_negative(source: Word) -> bool {
    sign(source) == 1
}

/// True when `op1 + op2` overflows 64-bit two's-complement arithmetic.
///
/// Overflow needs both operands to share a sign and the wrapped sum to carry
/// the other sign; mixed-sign sums are always representable.
///
/// ```
/// use wordbits::add_would_overflow;
///
/// assert!(add_would_overflow(0x7fffffffffffffff, 0x7fffffffffffffff));
/// assert!(!add_would_overflow(0x8000000000000000, 0x7fffffffffffffff));
/// ```
pub fn add_would_overflow(op1: Word, op2: Word) -> bool {
    let sum = op1.wrapping_add(op2);

    sign(op1) == sign(op2) && sign(sum) != sign(op1)
}

/// True when `op2 - op1` overflows 64-bit two's-complement arithmetic.
///
/// Note the operand order: `op1` is subtracted from `op2`.
///
/// ```
/// use wordbits::sub_would_overflow;
///
/// // (i64::MIN + 3) - 4 wraps to a large positive value
/// assert!(sub_would_overflow(4, 0x8000000000000003));
/// assert!(!sub_would_overflow(0x8000000000000000, 0x8000000000000000));
/// ```
pub fn sub_would_overflow(op1: Word, op2: Word) -> bool {
    let difference = op2.wrapping_sub(op1);

    match (sign(op1), sign(op2), sign(difference)) {
        // negative minus non-negative came out non-negative
        (0, 1, 0) => true,
        // non-negative minus negative came out negative
        (1, 0, 1) => true,
        _ => false,
    }
}
