//! Backing stores
//!
//! A value lives in an 8-byte window of a byte-addressable store. Three
//! storage kinds are supported, each with its own zero-copy behavior in
//! the conversions:
//!
//! - `Array`: plain indexable byte sequences (`Vec<u8>`, `&[u8]`,
//!   `&mut [u8]`)
//! - `Buffer`: platform byte buffers (`bytes::Bytes`, `bytes::BytesMut`)
//! - `ArrayBuffer`: fixed-length binary arrays (`[u8; N]`, `Box<[u8]>`)
//!
//! [`Store`] is the read side every value needs. [`StoreMut`] adds the
//! single write performed at construction. [`Storage`] owns any of the
//! three kinds when the kind is only known at run time.

mod storage;

pub use storage::Storage;

use bytes::{Bytes, BytesMut};
use tracing::debug;

/// Width of the window a value occupies.
pub const WIDTH: usize = 8;

/// The three backing-storage kinds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageKind {
    #[default]
    Array,
    Buffer,
    ArrayBuffer,
}

/// Read access to a backing store.
pub trait Store {
    /// Storage kind of this store.
    fn kind(&self) -> StorageKind;

    /// The whole store as a byte slice.
    fn as_slice(&self) -> &[u8];

    /// The shared handle behind a `Buffer` store, if it has one.
    ///
    /// Only stores backed by a reference-counted `Bytes` can hand out
    /// views of their memory without copying.
    fn shared_buffer(&self) -> Option<&Bytes> {
        None
    }

    /// True when `[offset, offset + 8)` lies inside the store.
    fn fits(&self, offset: usize) -> bool {
        offset
            .checked_add(WIDTH)
            .is_some_and(|end| end <= self.as_slice().len())
    }
}

/// Write access used once, while a value is constructed.
pub trait StoreMut: Store {
    /// Runs `write` over the whole store as a mutable slice.
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R;
}

impl Store for Vec<u8> {
    fn kind(&self) -> StorageKind {
        StorageKind::Array
    }

    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StoreMut for Vec<u8> {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        write(self)
    }
}

impl Store for &[u8] {
    fn kind(&self) -> StorageKind {
        StorageKind::Array
    }

    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl Store for &mut [u8] {
    fn kind(&self) -> StorageKind {
        StorageKind::Array
    }

    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StoreMut for &mut [u8] {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        write(self)
    }
}

impl<const N: usize> Store for [u8; N] {
    fn kind(&self) -> StorageKind {
        StorageKind::ArrayBuffer
    }

    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> StoreMut for [u8; N] {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        write(self)
    }
}

impl Store for Box<[u8]> {
    fn kind(&self) -> StorageKind {
        StorageKind::ArrayBuffer
    }

    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StoreMut for Box<[u8]> {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        write(self)
    }
}

impl Store for Bytes {
    fn kind(&self) -> StorageKind {
        StorageKind::Buffer
    }

    fn as_slice(&self) -> &[u8] {
        self
    }

    fn shared_buffer(&self) -> Option<&Bytes> {
        Some(self)
    }
}

/// Writes in place when this handle is the only one to its memory.
///
/// A handle shared with other owners cannot be written without affecting
/// them, so the write then goes to a private copy and the handle is
/// replaced by it.
impl StoreMut for Bytes {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut unique = match std::mem::take(self).try_into_mut() {
            Ok(unique) => unique,
            Err(shared) => {
                debug!(len = shared.len(), "buffer store is shared, writing a private copy");
                BytesMut::from(&shared[..])
            }
        };

        let out = write(&mut unique);
        *self = unique.freeze();

        out
    }
}

impl Store for BytesMut {
    fn kind(&self) -> StorageKind {
        StorageKind::Buffer
    }

    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StoreMut for BytesMut {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        write(self)
    }
}
