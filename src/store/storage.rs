//! Run-time selected backing store.

use bytes::{Bytes, BytesMut};
use tracing::trace;

use super::{Store, StoreMut, StorageKind, WIDTH};

/// An owned store of any of the three kinds.
///
/// This is the default store of the exported kinds. Allocating
/// constructors always name the kind they want; there is no process-wide
/// preference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Storage {
    Array(Vec<u8>),
    Buffer(Bytes),
    ArrayBuffer(Box<[u8]>),
}

impl Storage {
    /// Allocates a zeroed 8-byte store of `kind`.
    pub fn allocate(kind: StorageKind) -> Self {
        trace!(?kind, "allocating 8-byte store");

        match kind {
            StorageKind::Array => Storage::Array(vec![0; WIDTH]),
            StorageKind::Buffer => Storage::Buffer(BytesMut::zeroed(WIDTH).freeze()),
            StorageKind::ArrayBuffer => Storage::ArrayBuffer(Box::new([0; WIDTH])),
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage::allocate(StorageKind::default())
    }
}

impl Store for Storage {
    fn kind(&self) -> StorageKind {
        match self {
            Storage::Array(_) => StorageKind::Array,
            Storage::Buffer(_) => StorageKind::Buffer,
            Storage::ArrayBuffer(_) => StorageKind::ArrayBuffer,
        }
    }

    fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Array(array) => array,
            Storage::Buffer(buffer) => buffer,
            Storage::ArrayBuffer(array) => array,
        }
    }

    fn shared_buffer(&self) -> Option<&Bytes> {
        match self {
            Storage::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }
}

impl StoreMut for Storage {
    fn write_with<R>(&mut self, write: impl FnOnce(&mut [u8]) -> R) -> R {
        match self {
            Storage::Array(array) => array.write_with(write),
            Storage::Buffer(buffer) => buffer.write_with(write),
            Storage::ArrayBuffer(array) => array.write_with(write),
        }
    }
}

impl From<Vec<u8>> for Storage {
    fn from(array: Vec<u8>) -> Self {
        Storage::Array(array)
    }
}

impl From<Bytes> for Storage {
    fn from(buffer: Bytes) -> Self {
        Storage::Buffer(buffer)
    }
}

impl From<BytesMut> for Storage {
    fn from(buffer: BytesMut) -> Self {
        Storage::Buffer(buffer.freeze())
    }
}

impl From<Box<[u8]>> for Storage {
    fn from(array: Box<[u8]>) -> Self {
        Storage::ArrayBuffer(array)
    }
}

impl<const N: usize> From<[u8; N]> for Storage {
    fn from(array: [u8; N]) -> Self {
        Storage::ArrayBuffer(Box::new(array))
    }
}
