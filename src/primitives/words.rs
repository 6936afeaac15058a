//! The `(high, low)` word pair and its 32-bit-halved arithmetic.

/// 2^32, the weight of the high word.
pub const BIT32: u64 = 1 << 32;

/// A 64-bit two's-complement value split into two 32-bit words.
///
/// `high` holds bits 32..64 and `low` bits 0..32. The pair carries no
/// sign of its own; signedness is decided by the variant reading it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Words {
    pub high: u32,
    pub low: u32,
}

impl Words {
    /// The all-zero pair.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// True when the sign bit of `high` is set.
    pub const fn is_negative(self) -> bool {
        self.high & 0x8000_0000 != 0
    }

    /// Two's-complement negation of the pair.
    ///
    /// `high` is inverted; when `low` is zero the carry of the `+1` moves
    /// into `high`, otherwise `low` becomes `2^32 - low`.
    pub const fn negate(self) -> Self {
        let high = !self.high;

        if self.low != 0 {
            Self::new(high, (BIT32 - self.low as u64) as u32)
        } else {
            Self::new(high.wrapping_add(1), 0)
        }
    }

    /// Appends one digit: `self * radix + digit`, wrapping modulo 2^64.
    ///
    /// With `radix <= 36` both partial products stay below 2^38.
    pub const fn mul_add(self, radix: u32, digit: u32) -> Self {
        let low = self.low as u64 * radix as u64 + digit as u64;
        let high = self.high as u64 * radix as u64 + low / BIT32;

        Self::new((high % BIT32) as u32, (low % BIT32) as u32)
    }

    /// Divides the pair by `radix`, returning the quotient and remainder.
    ///
    /// This is one step of long division over the two words: the
    /// remainder of the high word is carried into the low word before it
    /// is divided. `radix` must be non-zero.
    pub const fn div_rem(self, radix: u32) -> (Self, u32) {
        let radix = radix as u64;
        let carried = (self.high as u64 % radix) * BIT32 + self.low as u64;

        let quotient = Self::new((self.high as u64 / radix) as u32, (carried / radix) as u32);

        (quotient, (carried % radix) as u32)
    }
}

impl From<(u32, u32)> for Words {
    fn from((high, low): (u32, u32)) -> Self {
        Self::new(high, low)
    }
}

impl From<Words> for (u32, u32) {
    fn from(words: Words) -> Self {
        (words.high, words.low)
    }
}

/// Reduces an `f64` to a 32-bit word the way a 32-bit integer store does.
///
/// The value is truncated toward zero and taken modulo 2^32. `NaN` and the
/// infinities become zero.
pub fn wrap_word(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }

    value.trunc().rem_euclid(BIT32 as f64) as u32
}
