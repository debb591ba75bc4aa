//! Position-tracking reader for the decode path.

use crate::error::CodecError;

/// Zero-copy reader over a byte slice.
///
/// A cursor is local to one decode call. Every read either returns the
/// requested bytes and advances, or fails with
/// [`CodecError::BufferUnderflow`] and leaves the position unchanged.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Whether every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unconsumed tail, without advancing.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        self.buf.get(self.pos..).unwrap_or_default()
    }

    /// Consume and return the unconsumed tail.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = self.rest();
        self.pos = self.buf.len();
        rest
    }

    /// Read exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferUnderflow`] if fewer than `len` bytes remain.
    pub fn take(&mut self, len: usize, reading: &'static str) -> Result<&'a [u8], CodecError> {
        let slice = self
            .pos
            .checked_add(len)
            .and_then(|end| self.buf.get(self.pos..end))
            .ok_or(CodecError::BufferUnderflow {
                reading,
                offset: self.pos,
                need: len,
                have: self.remaining(),
            })?;
        self.pos += len;
        Ok(slice)
    }

    /// Read a fixed-size array.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferUnderflow`] if fewer than `N` bytes remain.
    pub fn array<const N: usize>(&mut self, reading: &'static str) -> Result<[u8; N], CodecError> {
        let offset = self.pos;
        let slice = self.take(N, reading)?;
        slice.try_into().map_err(|_| CodecError::BufferUnderflow {
            reading,
            offset,
            need: N,
            have: slice.len(),
        })
    }

    /// Read one byte.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferUnderflow`] at end of input.
    pub fn u8(&mut self, reading: &'static str) -> Result<u8, CodecError> {
        let [byte] = self.array::<1>(reading)?;
        Ok(byte)
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferUnderflow`] if fewer than 4 bytes remain.
    pub fn u32_le(&mut self, reading: &'static str) -> Result<u32, CodecError> {
        self.array(reading).map(u32::from_le_bytes)
    }
}
