//! Async helpers that read and write varints over tokio streams.
//!
//! Reads pull one byte at a time, so callers should hand in a buffered reader
//! (`tokio::io::BufReader`) when the underlying stream is a socket or file.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::encoding::{
    VARINT64_MAX_LEN, VarintDecoder, encode_u64_into, zigzag_decode_32, zigzag_decode_64,
    zigzag_encode_32, zigzag_encode_64,
};
use crate::error::{Error, Result};
use crate::types::Width;

async fn read_width<R>(reader: &mut R, width: Width) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut decoder = VarintDecoder::new(width);
    loop {
        let byte = match reader.read_u8().await {
            Ok(byte) => byte,
            Err(err) => {
                trace!(consumed = decoder.consumed(), error = %err, "async varint read failed");
                return Err(Error::from(err));
            }
        };
        if let Some(value) = decoder.push(byte)? {
            return Ok(value);
        }
    }
}

async fn write_encoded<W>(writer: &mut W, value: u64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buf = [0u8; VARINT64_MAX_LEN];
    let len = encode_u64_into(value, &mut buf);
    writer.write_all(&buf[..len]).await.map_err(Error::Io)?;
    Ok(len)
}

/// Reads a u32 varint from an async reader.
pub async fn read_u32<R>(reader: &mut R) -> Result<u32>
where
    R: AsyncRead + Unpin + ?Sized,
{
    Ok(read_width(reader, Width::Bits32).await? as u32)
}

/// Reads a u64 varint from an async reader.
pub async fn read_u64<R>(reader: &mut R) -> Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    read_width(reader, Width::Bits64).await
}

/// Reads a zig-zag i32 varint from an async reader.
pub async fn read_i32<R>(reader: &mut R) -> Result<i32>
where
    R: AsyncRead + Unpin + ?Sized,
{
    Ok(zigzag_decode_32(read_u32(reader).await?))
}

/// Reads a zig-zag i64 varint from an async reader.
pub async fn read_i64<R>(reader: &mut R) -> Result<i64>
where
    R: AsyncRead + Unpin + ?Sized,
{
    Ok(zigzag_decode_64(read_u64(reader).await?))
}

/// Writes a u32 varint to an async writer, returning the number of bytes written.
pub async fn write_u32<W>(writer: &mut W, value: u32) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_encoded(writer, u64::from(value)).await
}

/// Writes a u64 varint to an async writer, returning the number of bytes written.
pub async fn write_u64<W>(writer: &mut W, value: u64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_encoded(writer, value).await
}

/// Writes a zig-zag i32 varint to an async writer, returning the number of bytes written.
pub async fn write_i32<W>(writer: &mut W, value: i32) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_encoded(writer, u64::from(zigzag_encode_32(value))).await
}

/// Writes a zig-zag i64 varint to an async writer, returning the number of bytes written.
pub async fn write_i64<W>(writer: &mut W, value: i64) -> Result<usize>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    write_encoded(writer, zigzag_encode_64(value)).await
}
