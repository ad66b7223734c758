//! Advanced pitfalls
//!
//! Demonstrations that go beyond a single wrapped operation:
//!
//! - intermediate overflow: `n! / (r! (n-r)!)` overflows 64 bits long before the
//!   answer does, while multiplying and dividing one term at a time stays small
//! - floating-point approximation of binomials too large for any integer type
//! - float precision loss
//! - signed/unsigned reinterpretation of the same bit pattern

use crate::arena::wrap::{bit_pattern, wrap_unsigned, Wide};
use crate::console::theme::Painter;
use crate::console::write_heading;
use std::io::{self, Write};

/// `n!` in 64-bit arithmetic, wrapping the way unsigned hardware multiplication does.
///
/// Exact up to `20!`; `21!` already exceeds `u64::MAX`.
pub fn factorial_wrapping(n: u64) -> u64 {
    (2..=n).fold(1u64, |acc, i| acc.wrapping_mul(i))
}

/// `C(n, r)` straight from the factorial formula, with every product wrapping.
///
/// `None` if the wrapped denominator is zero.
pub fn binomial_naive(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let denominator = factorial_wrapping(r).wrapping_mul(factorial_wrapping(n - r));
    factorial_wrapping(n).checked_div(denominator)
}

/// `C(n, r)` by cancellation: `result = result * (n - r + i) / i` for `i` in `1..=r`.
///
/// Each step's division is exact, so intermediates stay close to the answer.
/// `None` if an intermediate product still exceeds 64 bits.
pub fn binomial_safe(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);

    let mut result: u64 = 1;
    for i in 1..=r {
        result = result.checked_mul(n - r + i)? / i;
    }
    Some(result)
}

/// `C(n, r)` by the cancellation method in `f64`: never overflows for sane inputs,
/// but picks up rounding error.
pub fn binomial_f64(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);

    (1..=r).fold(1.0, |acc, i| acc * (n - r + i) as f64 / i as f64)
}

/// `0.1` added to itself `times` times in `f64`
pub fn repeated_tenths(times: u32) -> f64 {
    (0..times).fold(0.0, |acc, _| acc + 0.1)
}

/// Round-trip an integer through `f32`, which has a 24-bit significand
pub fn through_f32(value: i32) -> i32 {
    value as f32 as i32
}

pub fn write_pitfalls<O: Write>(out: &mut O, painter: &Painter) -> io::Result<()> {
    write_heading(out, painter, "Pitfall: intermediate overflow")?;
    writeln!(out, "C(n, r) = n! / (r! (n-r)!) can fit in 64 bits even when n! does not.")?;
    match binomial_naive(52, 6) {
        Some(value) => writeln!(
            out,
            "Factorial formula, C(52, 6): {}",
            painter.error(&value.to_string())
        )?,
        None => writeln!(
            out,
            "Factorial formula, C(52, 6): {}",
            painter.error("division by zero after wrapping")
        )?,
    }
    match binomial_safe(52, 6) {
        Some(value) => writeln!(
            out,
            "One term at a time, C(52, 6): {}",
            painter.success(&value.to_string())
        )?,
        None => writeln!(out, "One term at a time, C(52, 6): overflow")?,
    }
    writeln!(
        out,
        "Too big for any integer, C(200, 20) ~ {}",
        painter.number(&format!("{:.6e}", binomial_f64(200, 20)))
    )?;

    write_heading(out, painter, "Pitfall: float precision")?;
    let sum = 0.1 + 0.2;
    writeln!(
        out,
        "0.1 + 0.2 = {:.17} (== 0.3 is {})",
        sum,
        sum == 0.3
    )?;
    let tenths = repeated_tenths(10);
    writeln!(
        out,
        "0.1 added ten times = {:.17} (== 1.0 is {})",
        tenths,
        tenths == 1.0
    )?;
    writeln!(
        out,
        "16777217 stored in a float reads back as {}",
        painter.error(&through_f32(16_777_217).to_string())
    )?;

    write_heading(out, painter, "Pitfall: signed vs unsigned")?;
    let minus_one: Wide = -1;
    writeln!(
        out,
        "-1 as int32_t and {} as uint32_t share the bits {}",
        painter.error(&wrap_unsigned(minus_one, 32).to_string()),
        bit_pattern(minus_one, 32)
    )?;
    writeln!(out, "So a comparison like -1 < 1u quietly compares 4294967295 < 1.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_wrapping() {
        assert_eq!(factorial_wrapping(0), 1);
        assert_eq!(factorial_wrapping(5), 120);
        assert_eq!(factorial_wrapping(20), 2_432_902_008_176_640_000);
        // 21! = 51090942171709440000, reduced mod 2^64
        assert_eq!(
            factorial_wrapping(21),
            (51_090_942_171_709_440_000u128 % (1u128 << 64)) as u64
        );
    }

    #[test]
    fn test_naive_binomial_is_wrong_for_52_choose_6() {
        let naive = binomial_naive(52, 6).unwrap();
        assert_ne!(naive, 20_358_520);
        // Exact while the factorials still fit
        assert_eq!(binomial_naive(20, 10), Some(184_756));
    }

    #[test]
    fn test_safe_binomial() {
        assert_eq!(binomial_safe(52, 6), Some(20_358_520));
        assert_eq!(binomial_safe(52, 46), Some(20_358_520));
        assert_eq!(binomial_safe(10, 0), Some(1));
        assert_eq!(binomial_safe(3, 5), Some(0));
        assert_eq!(binomial_safe(200, 20), None);
    }

    #[test]
    fn test_f64_binomial_approximates() {
        let exact = 1.613_587_787_967_350_1e27_f64;
        let approx = binomial_f64(200, 20);
        assert!(((approx - exact) / exact).abs() < 1e-9);
        assert_eq!(binomial_f64(52, 6), 20_358_520.0);
    }

    #[test]
    fn test_float_precision() {
        assert_ne!(repeated_tenths(10), 1.0);
        assert_eq!(through_f32(16_777_217), 16_777_216);
        assert_eq!(through_f32(16_777_216), 16_777_216);
    }

    #[test]
    fn test_write_pitfalls() {
        let mut out = Vec::new();
        write_pitfalls(&mut out, &Painter::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("One term at a time, C(52, 6): 20358520"));
        assert!(text.contains("(== 0.3 is false)"));
        assert!(text.contains("4294967295 as uint32_t"));
        assert!(text.contains(&"1".repeat(32)));
    }
}
