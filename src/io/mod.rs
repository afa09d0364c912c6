//! Byte sinks and sources the codec reads from and writes to.
//!
//! Encoders only need to append bytes and decoders only need to pull the next
//! byte, so both sides are expressed as small capability traits. In-memory
//! buffers implement them directly; `std::io` streams go through the adapters
//! in this module.

use std::io::Cursor;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use smallvec::SmallVec;

use crate::error::{Error, Result};

mod ext;
mod streaming;

pub use ext::{VarintReadExt, VarintWriteExt};
pub use streaming::{
    IoSource, read_i32_from_reader, read_i64_from_reader, read_u32_from_reader,
    read_u64_from_reader, write_i32_to_writer, write_i64_to_writer, write_u32_to_writer,
    write_u64_to_writer,
};

/// Destination that encoded bytes are appended to.
pub trait ByteSink {
    /// Appends a single byte.
    fn push_byte(&mut self, byte: u8);

    /// Appends a run of bytes in order.
    fn push_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_byte(byte);
        }
    }
}

/// Source that encoded bytes are consumed from, one at a time.
pub trait ByteSource {
    /// Yields the next byte, or [`Error::UnexpectedEof`] once the source is exhausted.
    fn next_byte(&mut self) -> Result<u8>;
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl ByteSink for BytesMut {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        BufMut::put_u8(self, byte);
    }

    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<const N: usize> ByteSink for SmallVec<[u8; N]> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        (**self).push_byte(byte);
    }

    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) {
        (**self).push_slice(bytes);
    }
}

/// Consuming a byte advances the slice past it.
impl ByteSource for &[u8] {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        let Some((&byte, rest)) = self.split_first() else {
            return Err(Error::UnexpectedEof);
        };
        *self = rest;
        Ok(byte)
    }
}

impl ByteSource for Bytes {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        if !self.has_remaining() {
            return Err(Error::UnexpectedEof);
        }
        Ok(self.get_u8())
    }
}

impl ByteSource for BytesMut {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        if !self.has_remaining() {
            return Err(Error::UnexpectedEof);
        }
        Ok(self.get_u8())
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn next_byte(&mut self) -> Result<u8> {
        let pos = self.position();
        let byte = usize::try_from(pos)
            .ok()
            .and_then(|pos| self.get_ref().as_ref().get(pos).copied())
            .ok_or(Error::UnexpectedEof)?;
        self.set_position(pos + 1);
        Ok(byte)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        (**self).next_byte()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_advances_and_reports_eof() {
        let mut input: &[u8] = &[1, 2];
        assert_eq!(input.next_byte().unwrap(), 1);
        assert_eq!(input, [2]);
        assert_eq!(input.next_byte().unwrap(), 2);
        assert!(input.next_byte().unwrap_err().is_eof());
    }

    #[test]
    fn cursor_source_tracks_position() {
        let mut cursor = Cursor::new(vec![7u8, 8]);
        cursor.set_position(1);
        assert_eq!(cursor.next_byte().unwrap(), 8);
        assert_eq!(cursor.position(), 2);
        assert!(cursor.next_byte().unwrap_err().is_eof());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn bytes_sources_consume_from_front() {
        let mut bytes = Bytes::from_static(&[3, 4]);
        assert_eq!(bytes.next_byte().unwrap(), 3);
        assert_eq!(bytes.len(), 1);

        let mut buf = BytesMut::new();
        buf.push_slice(&[5, 6]);
        buf.push_byte(7);
        assert_eq!(buf.next_byte().unwrap(), 5);
        assert_eq!(&buf[..], &[6, 7]);
    }

    #[test]
    fn sinks_append_in_order() {
        let mut small: SmallVec<[u8; 4]> = SmallVec::new();
        small.push_slice(&[1, 2]);
        small.push_byte(3);
        assert_eq!(small.as_slice(), &[1, 2, 3]);
        assert!(!small.spilled());

        let mut vec = vec![0u8];
        let sink = &mut vec;
        sink.push_byte(9);
        assert_eq!(vec, [0, 9]);
    }
}
