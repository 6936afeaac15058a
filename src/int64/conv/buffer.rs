//! Conversions between `Int64` and the three backing-storage kinds
//!
//! Each `to_*` conversion takes a `raw` flag. With `raw` set, a store that
//! already has the requested kind is handed out without copying: the
//! store itself when it is exactly 8 bytes long, or a shared slice of it
//! for `Bytes`. Without `raw`, or for any other store, the 8 bytes are
//! copied into a fresh container.

use std::borrow::Cow;

use bytes::{Bytes, BytesMut};

use crate::int64::Int64;
use crate::store::{StorageKind, Store, StoreMut, WIDTH};
use crate::variant::Variant;

/// Copies 8 elements of `src` from `src_offset` into `dest` at
/// `dest_offset`, keeping the low 8 bits of each element.
///
/// # Panics
/// Panics when either window is out of bounds.
pub fn copy_raw<T: Copy + Into<u32>>(dest: &mut [u8], dest_offset: usize, src: &[T], src_offset: usize) {
    let dest = &mut dest[dest_offset..dest_offset + WIDTH];
    let src = &src[src_offset..src_offset + WIDTH];

    for (d, &s) in dest.iter_mut().zip(src) {
        *d = (s.into() & 0xFF) as u8;
    }
}

impl<V: Variant, S: StoreMut> Int64<V, S> {
    /// Copies 8 raw bytes of `source` from `source_offset` into the window
    /// at `offset` of `store`. Each element is masked to `0..=255`.
    ///
    /// The bytes are taken in physical order: no endianness conversion is
    /// applied.
    ///
    /// # Panics
    /// Panics when either window is out of bounds.
    pub fn from_bytes_in<T: Copy + Into<u32>>(
        store: S,
        offset: usize,
        source: &[T],
        source_offset: usize,
    ) -> Self {
        Self::write(store, offset, |bytes| copy_raw(bytes, offset, source, source_offset))
    }
}

impl<V: Variant, S: Store> Int64<V, S> {
    /// The 8 bytes as a plain byte sequence.
    ///
    /// Borrows the store itself when `raw` is set and the store is an
    /// 8-byte `Array`; copies otherwise.
    pub fn to_array(&self, raw: bool) -> Cow<'_, [u8]> {
        let store = self.store().as_slice();

        if raw && self.store().kind() == StorageKind::Array && store.len() == WIDTH {
            Cow::Borrowed(store)
        } else {
            Cow::Owned(self.as_bytes().to_vec())
        }
    }

    /// The 8 bytes as a `Bytes` buffer.
    ///
    /// When `raw` is set and the store is a shared `Bytes`, the result
    /// refers to the same memory (the whole handle for an 8-byte store, a
    /// zero-copy slice otherwise). Any other case copies.
    pub fn to_buffer(&self, raw: bool) -> Bytes {
        if raw {
            if let Some(shared) = self.store().shared_buffer() {
                return if shared.len() == WIDTH {
                    shared.clone()
                } else {
                    shared.slice(self.offset()..self.offset() + WIDTH)
                };
            }
        }

        Bytes::copy_from_slice(&self.to_array_buffer(raw)[..])
    }

    /// The 8 bytes as a fixed binary array.
    ///
    /// Borrows the store when `raw` is set and the store is an 8-byte
    /// `ArrayBuffer`; copies otherwise.
    pub fn to_array_buffer(&self, raw: bool) -> Cow<'_, [u8; 8]> {
        if raw && self.store().kind() == StorageKind::ArrayBuffer {
            if let Ok(whole) = <&[u8; 8]>::try_from(self.store().as_slice()) {
                return Cow::Borrowed(whole);
            }
        }

        let mut out = [0u8; 8];
        out.copy_from_slice(self.as_bytes());

        Cow::Owned(out)
    }
}

impl<V: Variant> Int64<V, BytesMut> {
    /// Turns a freshly written mutable buffer into a shareable one.
    pub fn freeze(self) -> Int64<V, Bytes> {
        let offset = self.offset();

        Int64::new_unchecked(self.into_store().freeze(), offset)
    }
}
