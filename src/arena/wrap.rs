//! Wraparound engine
//!
//! Folds a value held in the wide accumulator back into an N-bit word, the way
//! two's-complement hardware truncates an out-of-range result.
//!
//! # Why a wide accumulator
//!
//! Overflowing a narrow signed integer is undefined behavior in C and a panic in
//! debug Rust. Every arena operation is therefore evaluated in [`Wide`], which can
//! hold `start ± 1` and `start * 2` for any 64-bit start without overflowing, and
//! the wrap is computed explicitly with modulus arithmetic.
//!
//! # Supported widths
//!
//! - Unsigned: 1..=64 bits. 64 is folded by reinterpreting as `u64`, since
//!   `2^64` is handled as its own case rather than through the generic modulus.
//! - Signed: 1..=63 bits.
//!
//! Any other width passes the value through unchanged. The catalog refuses to
//! build types with such widths, so this path is never reached in a game.

/// The wide accumulator all arena arithmetic runs in
pub type Wide = i128;

/// Largest width [`wrap_unsigned`] folds
pub const MAX_UNSIGNED_BITS: u32 = 64;

/// Largest width [`wrap_signed`] folds
pub const MAX_SIGNED_BITS: u32 = 63;

/// Whether `bits` is a width the engine can fold for the given signedness
pub fn is_supported_width(bits: u32, signed: bool) -> bool {
    let max = if signed {
        MAX_SIGNED_BITS
    } else {
        MAX_UNSIGNED_BITS
    };
    (1..=max).contains(&bits)
}

/// Reduce `value` modulo `2^bits`, giving a result in `[0, 2^bits - 1]`.
pub fn wrap_unsigned(value: Wide, bits: u32) -> Wide {
    if bits == MAX_UNSIGNED_BITS {
        // Truncating cast keeps the low 64 bits
        return Wide::from(value as u64);
    }
    if !is_supported_width(bits, false) {
        return value;
    }

    let modulus: Wide = 1 << bits;
    value.rem_euclid(modulus)
}

/// Reinterpret `value` as an N-bit two's-complement word, giving a result in
/// `[-2^(bits-1), 2^(bits-1) - 1]`.
pub fn wrap_signed(value: Wide, bits: u32) -> Wide {
    if !is_supported_width(bits, true) {
        return value;
    }

    let modulus: Wide = 1 << bits;
    let mut wrapped = value % modulus;
    if wrapped < 0 {
        wrapped += modulus;
    }

    let sign_bit: Wide = 1 << (bits - 1);
    if wrapped & sign_bit != 0 {
        wrapped -= modulus;
    }
    wrapped
}

/// Wrap with the representation chosen by `signed`
#[inline]
pub fn wrap(value: Wide, bits: u32, signed: bool) -> Wide {
    if signed {
        wrap_signed(value, bits)
    } else {
        wrap_unsigned(value, bits)
    }
}

/// Binary digits of the N-bit word holding `value`, most significant bit first.
///
/// Signed and unsigned views of a value share this pattern. `bits` is clamped
/// to 1..=64.
pub fn bit_pattern(value: Wide, bits: u32) -> String {
    let bits = bits.clamp(1, MAX_UNSIGNED_BITS);
    let word = wrap_unsigned(value, bits) as u128;
    format!("{:0width$b}", word, width = bits as usize)
}
