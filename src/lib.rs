//! # Introduction
//!
//! Overflow Arena is a console quiz about fixed-width integers. Each round shows
//! a simulated type (`int8_t`, `uint32_t`, ...), a start value right next to one
//! of its limits, and an operation (`+1`, `-1`, `*2`). The player guesses what
//! the type holds afterwards.
//!
//! ## Pipeline
//!
//! ```text
//! TypeCatalog → Round → Operation (wide accumulator) → wrap → score
//! ```
//!
//! 1. [`arena::wrap`]: the wraparound engine. Results are computed in an
//!    `i128` accumulator and folded into N bits with explicit modulus
//!    arithmetic, never by overflowing a narrow native integer.
//! 2. [`arena::catalog`]: the simulated types and their exact bounds.
//! 3. [`arena::round`]: boundary-adjacent round generation.
//! 4. [`arena::game`]: the guess loop and its score tally.
//! 5. [`console`]: the main menu, quick tour and limits table.
//! 6. [`pitfalls`]: intermediate overflow and float precision demos.
//! 7. [`config`]: command-line options.

pub mod arena;
pub mod config;
pub mod console;
pub mod pitfalls;
