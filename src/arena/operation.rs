//! Arena operations
//!
//! Each round applies one [`Operation`] to its start value. Operations are
//! evaluated in the wide accumulator and never overflow there.

use super::wrap::Wide;
use std::fmt;

/// The arithmetic step applied in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Increment,
    Decrement,
    Double,
}

impl Operation {
    /// All operations, in the order the generator indexes them
    pub const ALL: [Operation; 3] = [
        Operation::Increment,
        Operation::Decrement,
        Operation::Double,
    ];

    /// Evaluate the operation in the wide accumulator
    #[inline]
    pub fn apply(self, value: Wide) -> Wide {
        match self {
            Operation::Increment => value + 1,
            Operation::Decrement => value - 1,
            Operation::Double => value * 2,
        }
    }

    /// Symbol shown in the round prompt
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Increment => "+1",
            Operation::Decrement => "-1",
            Operation::Double => "*2",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
