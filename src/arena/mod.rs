//! Overflow simulation and the quiz built on it
//!
//! - [`wrap`]: the wraparound engine, folding wide results into N-bit words
//! - [`catalog`]: the simulated integer types and their bounds
//! - [`operation`]: the arithmetic step applied in a round
//! - [`round`]: boundary-adjacent round generation and resolution
//! - [`game`]: the interactive loop and its score tally
//! - [`errors`]: error types
//!
//! # Data Flow
//!
//! ```text
//! TypeCatalog → Round::generate → Round::resolve (wrap) → GameSession::record
//! ```

pub mod catalog;
pub mod errors;
pub mod game;
pub mod operation;
pub mod round;
pub mod wrap;

pub use catalog::{SimulatedType, TypeCatalog};
pub use errors::ArenaError;
pub use game::{Arena, GameSession};
pub use operation::Operation;
pub use round::Round;
