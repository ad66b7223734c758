// Property tests for the wraparound engine

use overflow_arena::arena::wrap::{bit_pattern, wrap_signed, wrap_unsigned, Wide};
use proptest::prelude::*;

const CATALOG_WIDTHS: [u32; 3] = [8, 16, 32];

#[test]
fn test_edges_for_catalog_widths() {
    for bits in CATALOG_WIDTHS {
        let modulus: Wide = 1 << bits;
        let half: Wide = 1 << (bits - 1);

        // unsigned max + 1 -> 0, 0 - 1 -> max
        assert_eq!(wrap_unsigned(modulus - 1 + 1, bits), 0, "bits {}", bits);
        assert_eq!(wrap_unsigned(0 - 1, bits), modulus - 1, "bits {}", bits);

        // signed max + 1 -> min, min - 1 -> max
        assert_eq!(wrap_signed(half - 1 + 1, bits), -half, "bits {}", bits);
        assert_eq!(wrap_signed(-half - 1, bits), half - 1, "bits {}", bits);
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(wrap_unsigned(256, 8), 0);
    assert_eq!(wrap_unsigned(-1, 8), 255);
    assert_eq!(wrap_signed(128, 8), -128);
    assert_eq!(wrap_signed(-129, 8), 127);
}

proptest! {
    /// Values already in range are left alone
    #[test]
    fn prop_in_range_is_identity(
        bits_idx in 0usize..3,
        raw in any::<i64>(),
    ) {
        let bits = CATALOG_WIDTHS[bits_idx];
        let modulus: Wide = 1 << bits;
        let half: Wide = 1 << (bits - 1);

        let unsigned_value = (raw as Wide).rem_euclid(modulus);
        prop_assert_eq!(wrap_unsigned(unsigned_value, bits), unsigned_value);

        let signed_value = unsigned_value - half;
        prop_assert_eq!(wrap_signed(signed_value, bits), signed_value);
    }

    /// Signed and unsigned views share the same bit pattern
    #[test]
    fn prop_signed_and_unsigned_agree_on_bits(
        bits in 1u32..=63,
        value in any::<i64>(),
    ) {
        let value = value as Wide * 3;
        let modulus: Wide = 1 << bits;

        let unsigned = wrap_unsigned(value, bits);
        let signed = wrap_signed(value, bits);

        prop_assert_eq!(signed.rem_euclid(modulus), unsigned);
        prop_assert_eq!(bit_pattern(signed, bits), bit_pattern(unsigned, bits));
    }

    /// Results always land inside the representable range
    #[test]
    fn prop_results_are_in_range(
        bits in 1u32..=63,
        value in any::<i64>(),
    ) {
        let value = value as Wide;
        let half: Wide = 1 << (bits - 1);

        let unsigned = wrap_unsigned(value, bits);
        prop_assert!((0..(half * 2)).contains(&unsigned));

        let signed = wrap_signed(value, bits);
        prop_assert!((-half..half).contains(&signed));
    }

    /// Folding matches what a native truncating cast does
    #[test]
    fn prop_matches_native_casts(value in any::<i64>()) {
        let wide = value as Wide;
        prop_assert_eq!(wrap_signed(wide, 8), value as i8 as Wide);
        prop_assert_eq!(wrap_unsigned(wide, 8), value as u8 as Wide);
        prop_assert_eq!(wrap_signed(wide, 16), value as i16 as Wide);
        prop_assert_eq!(wrap_unsigned(wide, 16), value as u16 as Wide);
        prop_assert_eq!(wrap_signed(wide, 32), value as i32 as Wide);
        prop_assert_eq!(wrap_unsigned(wide, 32), value as u32 as Wide);
        prop_assert_eq!(wrap_unsigned(wide, 64), value as u64 as Wide);
    }

    /// Wrapping is idempotent
    #[test]
    fn prop_wrap_is_idempotent(
        bits in 1u32..=63,
        value in any::<i64>(),
    ) {
        let value = value as Wide * 5;
        let once = wrap_signed(value, bits);
        prop_assert_eq!(wrap_signed(once, bits), once);
        let once = wrap_unsigned(value, bits);
        prop_assert_eq!(wrap_unsigned(once, bits), once);
    }
}
