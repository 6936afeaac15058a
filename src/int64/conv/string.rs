//! Conversions between `Int64` and digit strings
//!
//! Parsing and formatting work on the two 32-bit words only, so every
//! intermediate result stays below 2^53 for any radix up to 36. Parsing
//! is lenient: it stops at the first character that is not a digit of the
//! radix and reports where it stopped.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use tracing::debug;

use crate::error::{Int64Error, Result};
use crate::int64::Int64;
use crate::primitives::Words;
use crate::store::{Storage, StorageKind, Store, StoreMut};
use crate::variant::Variant;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Outcome of parsing a digit string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    /// Bytes of the input consumed, including a leading `-`.
    pub consumed: usize,

    /// True when parsing stopped at an invalid character before the end of
    /// the input.
    pub truncated: bool,
}

impl Parsed {
    /// The unparsed tail of `input`.
    pub fn remainder<'a>(&self, input: &'a str) -> &'a str {
        &input[self.consumed..]
    }
}

/// Validates a radix; `0` stands for 10.
pub(crate) fn radix(radix: u32) -> Result<u32> {
    match radix {
        0 => Ok(10),
        2..=36 => Ok(radix),
        _ => Err(Int64Error::InvalidRadix(radix)),
    }
}

/// Parses `input` into words. `radix` must already be validated.
pub(crate) fn parse(input: &str, radix: u32) -> (Words, Parsed) {
    let (negative, body) = match input.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, input),
    };

    let mut words = Words::ZERO;
    let mut consumed = input.len() - body.len();

    for ch in body.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };

        words = words.mul_add(radix, digit);
        consumed += ch.len_utf8();
    }

    let truncated = consumed < input.len();
    if truncated {
        debug!(input, consumed, "digit string truncated at first invalid character");
    }

    if negative {
        words = words.negate();
    }

    (words, Parsed { consumed, truncated })
}

/// Formats words as digits of `radix`. `radix` must already be validated.
pub(crate) fn format(words: Words, signed: bool, radix: u32) -> String {
    let negative = signed && words.is_negative();
    let mut words = if negative { words.negate() } else { words };

    let mut reversed = Vec::with_capacity(64);

    loop {
        let (quotient, digit) = words.div_rem(radix);

        reversed.push(DIGITS[digit as usize]);
        words = quotient;

        if words.is_zero() {
            break;
        }
    }

    if negative {
        reversed.push(b'-');
    }

    reversed.iter().rev().map(|&b| char::from(b)).collect()
}

impl<V: Variant, S: StoreMut> Int64<V, S> {
    /// Parses `digits` in `radix` into the window at `offset` of `store`.
    ///
    /// An optional leading `-` negates the value. Parsing stops at the
    /// first character that is not a digit of `radix`; the returned
    /// [`Parsed`] tells how much of the input was used. Values wider than
    /// 64 bits wrap.
    ///
    /// # Errors
    /// [`Int64Error::InvalidRadix`] when `radix` is neither `0` (meaning
    /// 10) nor in `2..=36`.
    ///
    /// # Panics
    /// Panics when the window does not fit in the store.
    pub fn from_str_in(store: S, offset: usize, digits: &str, radix: u32) -> Result<(Self, Parsed)> {
        let (words, parsed) = parse(digits, self::radix(radix)?);

        let value = Self::write(store, offset, |bytes| V::TABLE.write(bytes, offset, words));

        Ok((value, parsed))
    }
}

impl<V: Variant> Int64<V, Storage> {
    /// Parses `digits` in `radix` into a fresh 8-byte store of `kind`.
    ///
    /// See [`Int64::from_str_in`] for the parsing rules.
    pub fn with_str(digits: &str, radix: u32, kind: StorageKind) -> Result<(Self, Parsed)> {
        Self::from_str_in(Storage::allocate(kind), 0, digits, radix)
    }
}

impl<V: Variant, S: Store> Int64<V, S> {
    /// Formats the value in `radix`, with a leading `-` for negative
    /// values of signed kinds. Digits above 9 are lowercase letters.
    ///
    /// # Errors
    /// [`Int64Error::InvalidRadix`] when `radix` is neither `0` (meaning
    /// 10) nor in `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        Ok(format(self.words(), V::DESCRIPTOR.signed, self::radix(radix)?))
    }
}

impl<V: Variant, S: Store> Display for Int64<V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = format(self.words(), V::DESCRIPTOR.signed, 10);

        match digits.strip_prefix('-') {
            Some(magnitude) => f.pad_integral(false, "", magnitude),
            None => f.pad_integral(true, "", &digits),
        }
    }
}

/// Parses a decimal string into an `Array` store, truncating silently at
/// the first invalid character.
impl<V: Variant> FromStr for Int64<V, Storage> {
    type Err = Int64Error;

    fn from_str(digits: &str) -> Result<Self> {
        Self::with_str(digits, 10, StorageKind::Array).map(|(value, _)| value)
    }
}
