//! Error types for the arena
//!
//! This module defines [`ArenaError`], which covers everything that can go wrong
//! outside of user input: console I/O failures, catalog construction, and
//! command-line configuration.
//!
//! Malformed guesses and menu choices are never errors. They are handled where
//! they are read by printing a message and prompting again. End of input is a
//! termination signal, not an error either.

use std::io;
use thiserror::Error;

/// Errors raised by the arena, its catalog, and the console
#[derive(Debug, Error)]
pub enum ArenaError {
    /// Reading from or writing to the console failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A simulated type was declared with a width the wraparound engine cannot fold into
    #[error("unsupported width for {name}: {bits} bits ({signedness})")]
    UnsupportedWidth {
        name: String,
        bits: u32,
        signedness: &'static str,
    },

    /// A type name that is not in the catalog
    #[error("unknown type '{name}' (known types: {known})")]
    UnknownType { name: String, known: String },

    /// A catalog with no entries cannot generate rounds
    #[error("type catalog is empty")]
    EmptyCatalog,

    /// Bad command-line argument
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}
