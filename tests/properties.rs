use proptest::prelude::*;
use wordbits::{
    add_would_overflow, build_word, clear_bits, copy_bits, get_bits, get_byte, set_bits, sign,
    split_word, sub_would_overflow,
};

/// A valid `(low, high)` pair with `0 <= low <= high <= 63`.
fn valid_range() -> impl Strategy<Value = (i32, i32)> {
    (0i32..64).prop_flat_map(|low| (Just(low), low..64))
}

/// A `(low, high)` pair that fails at least one bound.
fn invalid_range() -> impl Strategy<Value = (i32, i32)> {
    prop_oneof![
        (i32::MIN..0, any::<i32>()),
        (any::<i32>(), 64..=i32::MAX),
        (1i32..64).prop_flat_map(|low| (Just(low), 0..low)),
    ]
}

proptest! {
    #[test]
    fn prop_get_byte_reads_built_lanes(bytes in any::<[u8; 8]>()) {
        let word = build_word(bytes);
        for (i, &byte) in bytes.iter().enumerate() {
            prop_assert_eq!(get_byte(word, i as i32), u64::from(byte));
        }
        prop_assert_eq!(split_word(word), bytes);
    }

    #[test]
    fn prop_get_bits_fits_range(word in any::<u64>(), (low, high) in valid_range()) {
        let width = (high - low + 1) as u32;
        let value = get_bits(word, low, high);
        if width < 64 {
            prop_assert!(value < 1u64 << width);
        } else {
            prop_assert_eq!(value, word);
        }
    }

    #[test]
    fn prop_set_and_clear_are_idempotent(word in any::<u64>(), (low, high) in valid_range()) {
        let set = set_bits(word, low, high);
        prop_assert_eq!(set_bits(set, low, high), set);

        let cleared = clear_bits(word, low, high);
        prop_assert_eq!(clear_bits(cleared, low, high), cleared);
    }

    #[test]
    fn prop_clear_after_set(word in any::<u64>(), (low, high) in valid_range()) {
        prop_assert_eq!(
            clear_bits(set_bits(word, low, high), low, high),
            clear_bits(word, low, high)
        );
    }

    #[test]
    fn prop_set_range_reads_back_as_ones(word in any::<u64>(), (low, high) in valid_range()) {
        let width = (high - low + 1) as u32;
        let ones = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        prop_assert_eq!(get_bits(set_bits(word, low, high), low, high), ones);
    }

    #[test]
    fn prop_set_and_clear_leave_other_bits(word in any::<u64>(), (low, high) in valid_range()) {
        let outside = !set_bits(0, low, high);
        prop_assert_eq!(set_bits(word, low, high) & outside, word & outside);
        prop_assert_eq!(clear_bits(word, low, high) & outside, word & outside);
    }

    #[test]
    fn prop_invalid_ranges_fall_back(word in any::<u64>(), (low, high) in invalid_range()) {
        prop_assert_eq!(get_bits(word, low, high), 0);
        prop_assert_eq!(set_bits(word, low, high), word);
        prop_assert_eq!(clear_bits(word, low, high), word);
    }

    #[test]
    fn prop_full_width_copy_is_source(source in any::<u64>(), dest in any::<u64>()) {
        prop_assert_eq!(copy_bits(source, dest, 0, 0, 64), source);
    }

    #[test]
    fn prop_copy_bits_moves_one_field(
        source in any::<u64>(),
        dest in any::<u64>(),
        src_low in 0i32..64,
        dst_low in 0i32..64,
        length in 1i32..=64,
    ) {
        let result = copy_bits(source, dest, src_low, dst_low, length);
        if src_low + length > 64 || dst_low + length > 64 {
            prop_assert_eq!(result, dest);
        } else {
            let dst_high = dst_low + length - 1;
            prop_assert_eq!(
                get_bits(result, dst_low, dst_high),
                get_bits(source, src_low, src_low + length - 1)
            );
            prop_assert_eq!(
                clear_bits(result, dst_low, dst_high),
                clear_bits(dest, dst_low, dst_high)
            );
        }
    }

    #[test]
    fn prop_sign_is_top_bit(word in any::<u64>()) {
        prop_assert_eq!(sign(word) == 1, (word as i64) < 0);
    }

    #[test]
    fn prop_overflow_matches_i64(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(add_would_overflow(a, b), (a as i64).checked_add(b as i64).is_none());
        prop_assert_eq!(sub_would_overflow(a, b), (b as i64).checked_sub(a as i64).is_none());
    }
}

#[test]
fn test_overflow_samples() {
    assert!(add_would_overflow(0x8000000000000000, 0x8000000000000000));
    assert!(add_would_overflow(0x7fffffffffffffff, 0x7fffffffffffffff));
    assert!(!add_would_overflow(1, 0x7ffffffffffffffe));
    assert!(!sub_would_overflow(0x8000000000000000, 0x8000000000000000));
}

#[test]
fn test_concrete_scenario() {
    assert_eq!(get_bits(0x1122334455667788, 0, 7), 0x88);
    assert_eq!(wordbits::set_byte(0x0, 3), 0x00000000ff000000);
    assert_eq!(clear_bits(0x1122334455667788, 0x30, 0x3f), 0x0000334455667788);
}
