//! Conversions between `Int64` and other representations
//!
//! Each submodule covers one representation:
//! - `string`: arbitrary-radix digit strings
//! - `number`: `f64` host numbers (lossy beyond 2^53)
//! - `buffer`: the three backing-storage kinds and raw byte copies
//! - `json`: the `serde` form, which is the number form

pub mod buffer;
#[cfg(feature = "serde")]
mod json;
pub mod number;
pub mod string;
