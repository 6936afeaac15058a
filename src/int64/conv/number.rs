//! Conversions between `Int64` and `f64`
//!
//! `f64` holds integers exactly only up to 2^53, so `to_number` is
//! approximate for larger magnitudes. This is part of the contract and is
//! not corrected: use `to_string_radix` or `to_words` for exact output.

use crate::int64::Int64;
use crate::primitives::BIT32;
use crate::store::{Storage, StorageKind, Store, StoreMut};
use crate::variant::Variant;

/// Lowest byte of `trunc(value)`, for `value >= 0`.
///
/// Non-finite input yields zero.
fn low_byte(value: f64) -> u8 {
    (value.trunc() % 256.0) as u8
}

/// Splits `value` into 8 bytes, most significant first.
///
/// Positive values take byte `i` (counting from the least significant) as
/// `trunc(value / 256^i) mod 256`. Negative values decompose `value + 1`
/// and complement every byte, which is the two's complement of the
/// truncated value, so values in `(-1, 0)` give -1. Zero, `NaN` and
/// positive infinity give zero, negative infinity gives -1. Magnitudes of
/// 2^64 and more wrap.
pub(crate) fn decompose(value: f64) -> [u8; 8] {
    let mut out = [0u8; 8];

    if value > 0.0 {
        let mut rest = value;

        for byte in out.iter_mut().rev() {
            *byte = low_byte(rest);
            rest /= 256.0;
        }
    } else if value < 0.0 {
        let mut rest = value + 1.0;

        for byte in out.iter_mut().rev() {
            *byte = low_byte(-rest) ^ 0xFF;
            rest /= 256.0;
        }
    }

    out
}

impl<V: Variant, S: StoreMut> Int64<V, S> {
    /// Writes the integer part of `value` at `offset` of `store`.
    ///
    /// # Panics
    /// Panics when the window does not fit in the store.
    pub fn from_number_in(store: S, offset: usize, value: f64) -> Self {
        let significant = decompose(value);

        Self::write(store, offset, |bytes| {
            V::TABLE.write_significant(bytes, offset, significant)
        })
    }
}

impl<V: Variant> Int64<V, Storage> {
    /// Writes the integer part of `value` into a fresh 8-byte store of
    /// `kind`.
    pub fn with_number(value: f64, kind: StorageKind) -> Self {
        Self::from_number_in(Storage::allocate(kind), 0, value)
    }
}

impl<V: Variant, S: Store> Int64<V, S> {
    /// The value as an `f64`.
    ///
    /// Exact while the magnitude is below 2^53, rounded to the nearest
    /// `f64` beyond that: the unsigned maximum `2^64 - 1` reads as
    /// `18446744073709551616.0`.
    pub fn to_number(&self) -> f64 {
        let words = self.words();

        let high = if V::DESCRIPTOR.signed {
            f64::from(words.high as i32)
        } else {
            f64::from(words.high)
        };

        if high != 0.0 {
            high * BIT32 as f64 + f64::from(words.low)
        } else {
            f64::from(words.low)
        }
    }

    /// JSON form of the value, identical to [`Int64::to_number`].
    pub fn to_json(&self) -> f64 {
        self.to_number()
    }
}
