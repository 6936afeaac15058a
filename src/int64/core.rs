//! The generic value type
//!
//! `Int64<V, S>` is a view of the 8-byte window at `offset` inside the
//! store `S`, read according to the variant `V`. The variant is fixed by
//! the type, so all values of one exported kind share the same byte
//! table and sign interpretation.
//!
//! Caller-supplied stores are held as given: a `&[u8]` or a shared
//! `Bytes` keeps aliasing the caller's memory. Stores allocated by the
//! `with_*` constructors are owned by the value until handed out.

use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use tracing::trace;

use crate::error::{Int64Error, Result};
use crate::primitives::Words;
use crate::store::{Storage, StorageKind, Store, StoreMut, WIDTH};
use crate::variant::{Descriptor, Variant};

/// A 64-bit integer stored as 8 bytes of a backing store.
#[derive(Clone, Copy)]
pub struct Int64<V, S = Storage> {
    store: S,
    offset: usize,
    variant: PhantomData<V>,
}

/// Checks that the 8-byte window at `offset` fits in `store`.
pub(crate) fn bounds<S: Store>(store: &S, offset: usize) -> Result<()> {
    if store.fits(offset) {
        Ok(())
    } else {
        Err(Int64Error::OutOfBounds {
            offset,
            len: store.as_slice().len(),
        })
    }
}

impl<V: Variant, S: Store> Int64<V, S> {
    /// Views the 8 bytes at `offset` of an existing store. Nothing is
    /// written.
    ///
    /// # Panics
    /// Panics when the window does not fit in the store.
    pub fn from_view(store: S, offset: usize) -> Self {
        if let Err(err) = bounds(&store, offset) {
            panic!("{err}");
        }

        Self::new_unchecked(store, offset)
    }

    /// Fallible form of [`Int64::from_view`].
    pub fn try_from_view(store: S, offset: usize) -> Result<Self> {
        bounds(&store, offset)?;

        Ok(Self::new_unchecked(store, offset))
    }

    pub(crate) fn new_unchecked(store: S, offset: usize) -> Self {
        Int64 {
            store,
            offset,
            variant: PhantomData,
        }
    }

    /// Descriptor of this value's kind.
    pub fn descriptor(&self) -> Descriptor {
        V::DESCRIPTOR
    }

    /// True when this value's kind is `W`.
    pub fn is_variant<W: Variant>(&self) -> bool {
        V::DESCRIPTOR == W::DESCRIPTOR
    }

    /// Byte offset of the window inside the store.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hands the backing store out, ending the value.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The 8-byte window in physical order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.store.as_slice()[self.offset..self.offset + WIDTH]
    }

    /// The same store read as another kind.
    pub fn reinterpret<W: Variant>(self) -> Int64<W, S> {
        Int64::new_unchecked(self.store, self.offset)
    }

    pub(crate) fn words(&self) -> Words {
        V::TABLE.read(self.store.as_slice(), self.offset)
    }

    /// The exact `(high, low)` 32-bit words of the value.
    pub fn to_words(&self) -> (u32, u32) {
        self.words().into()
    }
}

impl<V: Variant, S: StoreMut> Int64<V, S> {
    /// Performs the single construction write into the window at `offset`.
    ///
    /// # Panics
    /// Panics when the window does not fit in the store.
    pub(crate) fn write(mut store: S, offset: usize, write: impl FnOnce(&mut [u8])) -> Self {
        if let Err(err) = bounds(&store, offset) {
            panic!("{err}");
        }

        store.write_with(write);

        Self::new_unchecked(store, offset)
    }

    /// Writes explicit 32-bit words at `offset` of `store`.
    ///
    /// # Panics
    /// Panics when the window does not fit in the store.
    pub fn from_words(store: S, offset: usize, high: u32, low: u32) -> Self {
        Self::write(store, offset, |bytes| {
            V::TABLE.write(bytes, offset, Words::new(high, low))
        })
    }
}

impl<V: Variant> Int64<V, Storage> {
    /// Zero in a fresh 8-byte store of `kind`.
    pub fn zeroed(kind: StorageKind) -> Self {
        trace!(variant = V::DESCRIPTOR.name, "constructing zero");

        Self::new_unchecked(Storage::allocate(kind), 0)
    }

    /// Explicit 32-bit words in a fresh 8-byte store of `kind`.
    pub fn with_words(high: u32, low: u32, kind: StorageKind) -> Self {
        Self::from_words(Storage::allocate(kind), 0, high, low)
    }
}

impl<V: Variant, S: Store> Debug for Int64<V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct(V::DESCRIPTOR.name)
            .field("value", &format_args!("{self}"))
            .field("bytes", &format_args!("{:02x?}", self.as_bytes()))
            .field("offset", &self.offset)
            .field("kind", &self.store.kind())
            .finish()
    }
}

/// Values compare by their 8 bytes, whatever store holds them.
impl<V: Variant, S: Store, T: Store> PartialEq<Int64<V, T>> for Int64<V, S> {
    fn eq(&self, other: &Int64<V, T>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<V: Variant, S: Store> Eq for Int64<V, S> {}

impl<V: Variant, S: Store> Hash for Int64<V, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}
