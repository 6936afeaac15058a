//! Positional construction dispatcher
//!
//! Some callers hold construction arguments whose shape is only known at
//! run time (decoded from a script, a config file or a foreign call).
//! [`Int64::construct`] accepts them as a sequence of [`Arg`]s and
//! resolves, in this order:
//!
//! 1. `(store, offset)`: a view over existing bytes, nothing written;
//! 2. `(store, offset, value, radix or low word)`: a view plus one write;
//! 3. `(value, radix or low word)`: one write into a fresh store.
//!
//! A store is accepted only when the 8-byte window at the offset fits in
//! it. A rejected store is replaced by a fresh zeroed one, and the
//! outcome says so. Code that knows its argument shapes should call the
//! named constructors instead.

use tracing::{debug, trace};

use crate::error::Result;
use crate::int64::Int64;
use crate::int64::conv::buffer::copy_raw;
use crate::int64::conv::number::decompose;
use crate::int64::conv::string::{self, Parsed};
use crate::primitives::{Words, wrap_word};
use crate::store::{Storage, StorageKind, Store, WIDTH};
use crate::variant::Variant;

/// One positional construction argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg<'a> {
    /// A backing store. As first argument it is the candidate store; as
    /// value it is a source of 8 raw bytes.
    Store(Storage),
    /// A number: an offset, a value, a radix or a 32-bit word depending
    /// on its position.
    Number(f64),
    /// A digit string value.
    Str(&'a str),
    /// A borrowed source of 8 raw bytes.
    Bytes(&'a [u8]),
}

impl From<Storage> for Arg<'_> {
    fn from(store: Storage) -> Self {
        Arg::Store(store)
    }
}

impl From<f64> for Arg<'_> {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

impl From<u32> for Arg<'_> {
    fn from(n: u32) -> Self {
        Arg::Number(f64::from(n))
    }
}

impl From<i32> for Arg<'_> {
    fn from(n: i32) -> Self {
        Arg::Number(f64::from(n))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(digits: &'a str) -> Self {
        Arg::Str(digits)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(source: &'a [u8]) -> Self {
        Arg::Bytes(source)
    }
}

/// Where the value's store came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The caller's store was used in place.
    Viewed,
    /// No store was given; a fresh one was allocated.
    Allocated,
    /// The caller's store was too short for the offset; a fresh zeroed
    /// one was allocated instead and the remaining arguments ignored.
    Rejected,
}

/// What the construction wrote.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Written {
    /// Nothing: a view over existing bytes.
    Nothing,
    /// Zero, for an absent, zero or `NaN` value.
    Zero,
    /// Explicit `(high, low)` words.
    Words,
    /// A decomposed number.
    Number,
    /// A digit string, with how much of it was parsed.
    Digits(Parsed),
    /// 8 raw bytes copied from another sequence.
    Bytes,
}

/// A value built by [`Int64::construct`] and how it was built.
#[derive(Clone, Debug)]
pub struct Constructed<V: Variant> {
    pub value: Int64<V, Storage>,
    pub placement: Placement,
    pub written: Written,
}

/// Reads a position argument as an offset.
///
/// Negative and non-finite numbers cannot address a store; non-numeric
/// arguments count as offset 0.
fn offset_of(arg: Option<Arg<'_>>) -> Option<usize> {
    match arg {
        Some(Arg::Number(n)) if n.is_finite() && n >= 0.0 => Some(n.trunc() as usize),
        Some(Arg::Number(_)) => None,
        _ => Some(0),
    }
}

/// Reads a radix argument; anything but a number means 10.
fn radix_of(arg: Option<&Arg<'_>>) -> u32 {
    match arg {
        Some(Arg::Number(n)) if n.is_finite() && *n >= 0.0 => n.trunc() as u32,
        _ => 10,
    }
}

/// The 8 bytes of `source` at `source_offset`, if they are all there.
fn raw_window(source: &[u8], source_offset: Option<&Arg<'_>>) -> Option<[u8; 8]> {
    let source_offset = match source_offset {
        Some(&Arg::Number(n)) if n.is_finite() && n >= 0.0 => n.trunc() as usize,
        Some(Arg::Number(_)) => return None,
        _ => 0,
    };

    source_offset.checked_add(WIDTH).filter(|&end| end <= source.len())?;

    let mut out = [0u8; 8];
    copy_raw(&mut out, 0, source, source_offset);

    Some(out)
}

/// The write a value argument calls for, resolved before touching the
/// store.
enum Plan {
    Nothing,
    Zero,
    Words(Words),
    Significant([u8; 8]),
    Digits(Words, Parsed),
    Raw([u8; 8]),
}

impl Plan {
    fn resolve(value: Option<Arg<'_>>, tail: Option<Arg<'_>>) -> Result<Self> {
        let plan = match value {
            None => Plan::Nothing,
            Some(Arg::Str(digits)) => {
                let (words, parsed) = string::parse(digits, string::radix(radix_of(tail.as_ref()))?);
                Plan::Digits(words, parsed)
            }
            Some(Arg::Bytes(source)) => raw_window(source, tail.as_ref()).map_or(Plan::Zero, Plan::Raw),
            Some(Arg::Store(source)) => raw_window(source.as_slice(), tail.as_ref()).map_or(Plan::Zero, Plan::Raw),
            Some(Arg::Number(high)) => match tail {
                Some(Arg::Number(low)) => Plan::Words(Words::new(wrap_word(high), wrap_word(low))),
                _ if high > 0.0 || high < 0.0 => Plan::Significant(decompose(high)),
                _ => Plan::Zero,
            },
        };

        Ok(plan)
    }
}

impl<V: Variant> Int64<V, Storage> {
    /// Builds a value from positional arguments.
    ///
    /// `kind` is the storage kind of any store this call allocates. A
    /// number followed by another number is read as explicit `(high, low)`
    /// words; a digit string takes an optional radix (default 10); a byte
    /// source takes an optional offset into it. A byte source shorter than
    /// 8 bytes from that offset writes zero.
    ///
    /// # Errors
    /// [`crate::Int64Error::InvalidRadix`] when a digit string comes with a
    /// radix outside `2..=36` (0 means 10).
    pub fn construct<'a, I>(args: I, kind: StorageKind) -> Result<Constructed<V>>
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        let mut args = args.into_iter();

        let (store, offset, placement, plan) = match args.next() {
            None => (Storage::allocate(kind), 0, Placement::Allocated, Plan::Zero),
            Some(Arg::Store(store)) => match offset_of(args.next()) {
                Some(offset) if store.fits(offset) => {
                    let plan = Plan::resolve(args.next(), args.next())?;
                    (store, offset, Placement::Viewed, plan)
                }
                offset => {
                    debug!(
                        variant = V::DESCRIPTOR.name,
                        len = store.as_slice().len(),
                        ?offset,
                        "store too short for offset, allocating a fresh one"
                    );
                    (Storage::allocate(kind), 0, Placement::Rejected, Plan::Zero)
                }
            },
            Some(value) => {
                let plan = Plan::resolve(Some(value), args.next())?;
                (Storage::allocate(kind), 0, Placement::Allocated, plan)
            }
        };

        trace!(variant = V::DESCRIPTOR.name, ?placement, offset, "constructing value");

        let (value, written) = match plan {
            Plan::Nothing => (Self::from_view(store, offset), Written::Nothing),
            Plan::Zero if placement == Placement::Viewed => (
                Self::write(store, offset, |bytes| V::TABLE.write(bytes, offset, Words::ZERO)),
                Written::Zero,
            ),
            Plan::Zero => (Self::from_view(store, offset), Written::Zero),
            Plan::Words(words) => (
                Self::write(store, offset, |bytes| V::TABLE.write(bytes, offset, words)),
                Written::Words,
            ),
            Plan::Significant(significant) => (
                Self::write(store, offset, |bytes| {
                    V::TABLE.write_significant(bytes, offset, significant)
                }),
                Written::Number,
            ),
            Plan::Digits(words, parsed) => (
                Self::write(store, offset, |bytes| V::TABLE.write(bytes, offset, words)),
                Written::Digits(parsed),
            ),
            Plan::Raw(raw) => (
                Self::write(store, offset, |bytes| copy_raw(bytes, offset, &raw, 0)),
                Written::Bytes,
            ),
        };

        Ok(Constructed {
            value,
            placement,
            written,
        })
    }
}
