use std::io::{Read, Write};

use tracing::trace;

use crate::encoding::{
    VARINT64_MAX_LEN, decode_i32, decode_i64, decode_u32, decode_u64, encode_u64_into,
    zigzag_encode_32, zigzag_encode_64,
};
use crate::error::{Error, Result};
use crate::io::ByteSource;

/// Adapts a [`Read`] stream into a [`ByteSource`].
///
/// Bytes are pulled one at a time so decoding never reads past the end of a
/// varint; wrap unbuffered streams in a `BufReader` first.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> IoSource<R> {
    /// Wraps the given reader.
    pub fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Total bytes pulled from the reader so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns a mutable reference to the wrapped reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the adapter, yielding the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn next_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        if let Err(err) = self.inner.read_exact(&mut buf) {
            trace!(consumed = self.consumed, error = %err, "varint source read failed");
            return Err(Error::from(err));
        }
        self.consumed += 1;
        Ok(buf[0])
    }
}

/// Reads a u32 varint directly from a reader.
pub fn read_u32_from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<u32> {
    decode_u32(&mut IoSource::new(reader))
}

/// Reads a u64 varint directly from a reader.
pub fn read_u64_from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<u64> {
    decode_u64(&mut IoSource::new(reader))
}

/// Reads a zig-zag i32 varint directly from a reader.
pub fn read_i32_from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
    decode_i32(&mut IoSource::new(reader))
}

/// Reads a zig-zag i64 varint directly from a reader.
pub fn read_i64_from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<i64> {
    decode_i64(&mut IoSource::new(reader))
}

fn write_encoded<W: Write + ?Sized>(writer: &mut W, value: u64) -> Result<usize> {
    let mut buf = [0u8; VARINT64_MAX_LEN];
    let len = encode_u64_into(value, &mut buf);
    if let Err(err) = writer.write_all(&buf[..len]) {
        trace!(len, error = %err, "varint sink write failed");
        return Err(Error::Io(err));
    }
    Ok(len)
}

/// Writes a u32 varint to a writer, returning the number of bytes written.
pub fn write_u32_to_writer<W: Write + ?Sized>(writer: &mut W, value: u32) -> Result<usize> {
    // A u32 widened to u64 encodes to the same bytes.
    write_encoded(writer, u64::from(value))
}

/// Writes a u64 varint to a writer, returning the number of bytes written.
pub fn write_u64_to_writer<W: Write + ?Sized>(writer: &mut W, value: u64) -> Result<usize> {
    write_encoded(writer, value)
}

/// Writes a zig-zag i32 varint to a writer, returning the number of bytes written.
pub fn write_i32_to_writer<W: Write + ?Sized>(writer: &mut W, value: i32) -> Result<usize> {
    write_encoded(writer, u64::from(zigzag_encode_32(value)))
}

/// Writes a zig-zag i64 varint to a writer, returning the number of bytes written.
pub fn write_i64_to_writer<W: Write + ?Sized>(writer: &mut W, value: i64) -> Result<usize> {
    write_encoded(writer, zigzag_encode_64(value))
}
