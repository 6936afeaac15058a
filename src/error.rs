//! Error type shared by the fallible codec operations.
//!
//! Most unusual input is recovered in place (short stores are replaced by
//! a fresh allocation, bad digits end the parse). Only the cases below are
//! surfaced to the caller.

use thiserror::Error;

/// Errors returned by fallible `Int64` operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Int64Error {
    /// The 8-byte window starting at `offset` does not fit in the store.
    #[error("8-byte window at offset {offset} exceeds store of {len} bytes")]
    OutOfBounds { offset: usize, len: usize },

    /// The radix is outside `2..=36`.
    #[error("radix {0} is outside the supported range 2..=36")]
    InvalidRadix(u32),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Int64Error>;
