//! Portable fixed-width 64-bit integers over plain byte stores
//!
//! This crate reads and writes signed and unsigned 64-bit integers as
//! exactly 8 contiguous bytes inside a caller-chosen backing store, in
//! big-endian or little-endian order.
//!
//! All arithmetic on a value is carried out on two 32-bit words whose
//! intermediate results never exceed 2^53, and numeric conversion targets
//! `f64`. Values beyond 53 bits of magnitude therefore convert to numbers
//! approximately; digit strings and raw bytes stay exact.
//!
//! # Module overview
//!
//! - `primitives`
//!   The 32-bit word pair and the split arithmetic used by the codecs
//!   (digit accumulation, division by a radix, two's-complement negation).
//!
//! - `layout`
//!   The byte-position table mapping byte significance to physical offsets
//!   inside the 8-byte window for each endianness.
//!
//! - `variant`
//!   The four exported kinds: `Uint64BE`, `Int64BE`, `Uint64LE` and
//!   `Int64LE`, all sharing the generic `Int64` core.
//!
//! - `store`
//!   The three backing-storage kinds (plain arrays, `bytes` buffers and
//!   fixed binary arrays) and the `Store`/`StoreMut` traits over them.
//!
//! - `int64`
//!   The value type, its constructors, the positional construction
//!   dispatcher and the string, number and buffer conversions.
//!
//! # Example
//!
//! ```
//! use int64::{Int64BE, Int64LE, StorageKind};
//!
//! let be = Int64BE::with_words(0x0123_4567, 0x89ab_cdef, StorageKind::Array);
//! assert_eq!(be.as_bytes(), &[0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
//!
//! let le = Int64LE::with_number(-1.0, StorageKind::Buffer);
//! assert_eq!(le.to_string(), "-1");
//! assert_eq!(le.to_buffer(true).as_ref(), &[0xff; 8]);
//! ```
//!
//! # Design goals
//!
//! - One write per value, at construction; reads only afterwards
//! - No hidden global state: every allocation names its storage kind
//! - Bit-exact byte layouts for both endiannesses
//! - Zero-copy conversions whenever the store already has the right shape

mod error;

pub mod int64;
pub mod layout;
pub mod primitives;
pub mod store;
pub mod variant;

pub use error::{Int64Error, Result};
pub use int64::{Arg, Constructed, Int64, Parsed, Placement, Written, copy_raw};
pub use store::{Storage, StorageKind, Store, StoreMut};
pub use variant::{Descriptor, Int64BE, Int64LE, Uint64BE, Uint64LE, Variant};
