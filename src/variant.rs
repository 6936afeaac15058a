//! Variant registry
//!
//! The four exported kinds differ only in two flags: byte order and sign
//! interpretation. Each kind is a zero-sized marker implementing
//! [`Variant`], and the exported names are aliases of the shared generic
//! [`Int64`] core.

use crate::int64::Int64;
use crate::layout::{ByteTable, Endian};
use crate::store::Storage;

/// Constant description of an exported kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// Exported name, e.g. `"Int64BE"`.
    pub name: &'static str,
    pub endian: Endian,
    pub signed: bool,
}

/// Compile-time parameters of one value kind.
pub trait Variant: Copy + Send + Sync + 'static {
    /// Byte order, sign interpretation and name of the kind.
    const DESCRIPTOR: Descriptor;

    /// Byte-position table, derived once from the byte order.
    const TABLE: ByteTable = ByteTable::new(Self::DESCRIPTOR.endian);
}

macro_rules! variant {
    ($(#[$doc:meta])* $marker:ident, $alias:ident, $endian:expr, $signed:expr) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $marker;

        impl Variant for $marker {
            const DESCRIPTOR: Descriptor = Descriptor {
                name: stringify!($alias),
                endian: $endian,
                signed: $signed,
            };
        }

        $(#[$doc])*
        pub type $alias<S = Storage> = Int64<$marker, S>;
    };
}

variant!(
    /// Unsigned, most-significant byte first.
    BigEndianUnsigned,
    Uint64BE,
    Endian::Big,
    false
);

variant!(
    /// Signed two's complement, most-significant byte first.
    BigEndianSigned,
    Int64BE,
    Endian::Big,
    true
);

variant!(
    /// Unsigned, least-significant byte first.
    LittleEndianUnsigned,
    Uint64LE,
    Endian::Little,
    false
);

variant!(
    /// Signed two's complement, least-significant byte first.
    LittleEndianSigned,
    Int64LE,
    Endian::Little,
    true
);
