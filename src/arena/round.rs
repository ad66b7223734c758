//! Round generation and resolution
//!
//! A round pairs a simulated type with an operation and a start value one unit
//! inside one of the type's edges. Whether the operation actually crosses that
//! edge depends on the draw: `Decrement` from `min + 1` lands on `min` without
//! wrapping. Such rounds are kept for variety and resolve with plain arithmetic.

use super::catalog::{SimulatedType, TypeCatalog};
use super::operation::Operation;
use super::wrap::{bit_pattern, Wide};
use rand::Rng;
use tracing::debug;

/// Which representable edge a round starts next to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Min,
    Max,
}

/// One quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub ty: SimulatedType,
    pub operation: Operation,
    pub start: Wide,
    /// `start` as the type stores it. Equal to `start` for generated rounds.
    pub wrapped_start: Wide,
}

/// Ground truth for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The operation's result before folding
    pub wide_after: Wide,
    /// The value the simulated type actually holds afterwards
    pub final_value: Wide,
    wrapped: bool,
}

impl Resolution {
    /// Check if the result left the representable range and was folded back
    pub fn wrapped(&self) -> bool {
        self.wrapped
    }
}

impl Round {
    pub fn new(ty: SimulatedType, operation: Operation, start: Wide) -> Self {
        let wrapped_start = ty.wrap(start);
        Round {
            ty,
            operation,
            start,
            wrapped_start,
        }
    }

    /// Build a round starting one unit inside `boundary`
    pub fn near(ty: SimulatedType, operation: Operation, boundary: Boundary) -> Self {
        let start = match boundary {
            Boundary::Max => ty.max() - 1,
            Boundary::Min => ty.min() + 1,
        };
        Round::new(ty, operation, start)
    }

    /// Draw a round uniformly over types, operations and edges
    pub fn generate<R: Rng>(catalog: &TypeCatalog, rng: &mut R) -> Self {
        let ty = catalog.choose(rng).clone();
        let operation = Operation::ALL[rng.gen_range(0..Operation::ALL.len())];
        let boundary = if rng.gen_bool(0.5) {
            Boundary::Max
        } else {
            Boundary::Min
        };

        let round = Round::near(ty, operation, boundary);
        debug!(
            ty = round.ty.name(),
            op = round.operation.symbol(),
            start = %round.start,
            ?boundary,
            "generated round"
        );
        round
    }

    /// Apply the operation in the wide accumulator and fold the result into the type
    pub fn resolve(&self) -> Resolution {
        let wide_after = self.operation.apply(self.wrapped_start);
        Resolution {
            wide_after,
            final_value: self.ty.wrap(wide_after),
            wrapped: !self.ty.contains(wide_after),
        }
    }

    /// Bit pattern of the resolved value at the type's width
    pub fn result_bits(&self) -> String {
        bit_pattern(self.resolve().final_value, self.ty.bits())
    }
}
