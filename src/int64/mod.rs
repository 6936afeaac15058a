//! 64-bit integer values over a backing store
//!
//! This module defines the generic value type `Int64<V, S>` shared by the
//! four exported kinds, together with:
//! - the named constructors (view, words, number, digits, raw bytes)
//! - the positional construction dispatcher
//! - the string, number and buffer conversions
//!
//! A value is written exactly once, when it is constructed. Every other
//! operation only reads the store.

mod conv;
mod core;
mod dispatch;

pub use conv::buffer::copy_raw;
pub use conv::string::Parsed;
pub use self::core::Int64;
pub use dispatch::{Arg, Constructed, Placement, Written};
