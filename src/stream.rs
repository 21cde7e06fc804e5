//! Low-level reading primitives shared by all decoders.
//!
//! [`StreamCursor`] is a random-access little-endian reader over a borrowed
//! byte buffer. Each read either consumes exactly the bytes it promises or
//! returns [`Error::OutOfBounds`] without moving the cursor.

use byteorder::{ByteOrder, LittleEndian};

use crate::{Error, Result};

/// Seekable little-endian reader over an immutable byte buffer.
///
/// Seeking past the end is allowed; the next read reports the overrun.
#[derive(Debug, Clone)]
pub struct StreamCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> StreamCursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Move to an absolute position.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.pos = position;
    }

    /// Current absolute position.
    #[inline]
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the underlying buffer holds no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// The whole underlying buffer, independent of the cursor position.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let slice = self
            .pos
            .checked_add(len)
            .and_then(|end| self.buf.get(self.pos..end))
            .ok_or(Error::OutOfBounds {
                position: self.pos,
                len,
                size: self.buf.len(),
            })?;
        self.pos += len;
        Ok(slice)
    }

    /// Read a little-endian `u32`.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_slice(4)?))
    }

    /// Read a little-endian `i32`.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_slice(4)?))
    }

    /// Read a little-endian IEEE-754 `f32`.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_slice(4)?))
    }

    /// Read exactly `len` bytes into a `Vec`.
    #[inline]
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        Ok(self.read_slice(len)?.to_vec())
    }

    /// Read a `u32` and verify it equals `expected`.
    ///
    /// Returns [`Error::BadSignature`] on mismatch.
    pub fn expect_signature(&mut self, expected: u32) -> Result<()> {
        let found = self.read_u32()?;
        if found != expected {
            return Err(Error::BadSignature { expected, found });
        }
        Ok(())
    }

    /// Read a null-terminated string and advance past its terminator.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. Returns
    /// [`Error::OutOfBounds`] if the cursor is past the end, or
    /// [`Error::UnterminatedName`] if no null byte follows it.
    pub fn read_null_string(&mut self) -> Result<String> {
        let rest = self.buf.get(self.pos..).ok_or(Error::OutOfBounds {
            position: self.pos,
            len: 1,
            size: self.buf.len(),
        })?;
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::UnterminatedName)?;
        let bytes = self.read_slice(len + 1)?;
        Ok(String::from_utf8_lossy(&bytes[..len]).into_owned())
    }

    /// Resolve the null-terminated string at absolute `offset`.
    ///
    /// The cursor position is left untouched.
    pub fn null_string_at(&self, offset: usize) -> Result<String> {
        let mut name = self.clone();
        name.seek(offset);
        name.read_null_string()
    }
}
