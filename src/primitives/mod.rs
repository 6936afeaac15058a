//! Word-level primitives
//!
//! A 64-bit value is handled as a pair of 32-bit words. Every operation
//! here keeps its intermediate results below 2^53, so the same arithmetic
//! stays exact on hosts whose only number type is a double.
//!
//! Current primitives include:
//! - `Words`: the `(high, low)` pair and its split arithmetic
//! - `wrap_word`: reduction of an arbitrary `f64` to a 32-bit word

mod words;

pub use words::{BIT32, Words, wrap_word};
