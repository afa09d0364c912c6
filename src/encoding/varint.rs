use tracing::debug;

use crate::error::{Error, Result};
use crate::io::{ByteSink, ByteSource};
use crate::types::Width;

/// Maximum number of bytes that a u32 varint can occupy.
pub const VARINT32_MAX_LEN: usize = 5;
/// Maximum number of bytes that a u64 varint can occupy.
pub const VARINT64_MAX_LEN: usize = 10;

/// Encodes `value` into the front of `buf`, returning the number of bytes used.
///
/// This is the allocation-free primitive every other 32-bit encoder goes through.
#[inline]
pub fn encode_u32_into(mut value: u32, buf: &mut [u8; VARINT32_MAX_LEN]) -> usize {
    let mut len = 0;
    while value & !0x7f != 0 {
        buf[len] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        len += 1;
    }
    buf[len] = value as u8;
    len + 1
}

/// Encodes `value` into the front of `buf`, returning the number of bytes used.
#[inline]
pub fn encode_u64_into(mut value: u64, buf: &mut [u8; VARINT64_MAX_LEN]) -> usize {
    let mut len = 0;
    while value & !0x7f != 0 {
        buf[len] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        len += 1;
    }
    buf[len] = value as u8;
    len + 1
}

/// Encodes the given value as an unsigned varint and appends it to `out`.
pub fn encode_u32<S: ByteSink + ?Sized>(value: u32, out: &mut S) -> usize {
    let mut buf = [0u8; VARINT32_MAX_LEN];
    let len = encode_u32_into(value, &mut buf);
    out.push_slice(&buf[..len]);
    len
}

/// Encodes the given value as an unsigned varint and appends it to `out`.
pub fn encode_u64<S: ByteSink + ?Sized>(value: u64, out: &mut S) -> usize {
    let mut buf = [0u8; VARINT64_MAX_LEN];
    let len = encode_u64_into(value, &mut buf);
    out.push_slice(&buf[..len]);
    len
}

/// Encodes `value` into a freshly allocated vector of exactly the encoded length.
pub fn encode_u32_to_vec(value: u32) -> Vec<u8> {
    let mut buf = [0u8; VARINT32_MAX_LEN];
    let len = encode_u32_into(value, &mut buf);
    buf[..len].to_vec()
}

/// Number of bytes [`encode_u32`] would emit for `value`.
#[inline]
pub fn encoded_len_u32(value: u32) -> usize {
    let bits = 32 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Number of bytes [`encode_u64`] would emit for `value`.
#[inline]
pub fn encoded_len_u64(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Push-based varint decoder.
///
/// Bytes are fed one at a time; [`push`](Self::push) yields the value once the
/// terminating byte arrives and resets the decoder so it can be reused for the
/// next value. Useful when input arrives in arbitrary chunks.
#[derive(Debug, Clone, Copy)]
pub struct VarintDecoder {
    width: Width,
    value: u64,
    consumed: usize,
}

impl VarintDecoder {
    /// Creates a decoder for varints of the given width.
    pub const fn new(width: Width) -> Self {
        Self {
            width,
            value: 0,
            consumed: 0,
        }
    }

    /// Width this decoder validates against.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Bytes consumed for the value currently in progress.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns `true` if some bytes of a value have been consumed without a terminator.
    pub fn in_progress(&self) -> bool {
        self.consumed != 0
    }

    /// Discards any partially decoded value.
    pub fn reset(&mut self) {
        self.value = 0;
        self.consumed = 0;
    }

    /// Feeds one byte, returning the decoded value when `byte` terminates it.
    ///
    /// On error the decoder is reset.
    pub fn push(&mut self, byte: u8) -> Result<Option<u64>> {
        let max_len = self.width.max_len();
        let shift = self.consumed * 7;
        self.consumed += 1;

        if byte & 0x80 == 0 {
            if self.consumed == max_len && byte > self.width.last_byte_max() {
                let consumed = self.consumed;
                self.reset();
                return Err(overflow(self.width, consumed));
            }
            let value = self.value | (u64::from(byte) << shift);
            self.reset();
            return Ok(Some(value));
        }

        if self.consumed == max_len {
            self.reset();
            return Err(too_long(self.width));
        }
        self.value |= u64::from(byte & 0x7f) << shift;
        Ok(None)
    }
}

#[cold]
pub(crate) fn too_long(width: Width) -> Error {
    debug!(
        bits = width.bits(),
        max_len = width.max_len(),
        "varint did not terminate"
    );
    Error::malformed(format!(
        "no terminating byte within {} bytes of a {}-bit varint",
        width.max_len(),
        width.bits()
    ))
}

#[cold]
pub(crate) fn overflow(width: Width, consumed: usize) -> Error {
    debug!(bits = width.bits(), consumed, "varint overflows target width");
    Error::malformed(format!(
        "final byte carries bits beyond a {}-bit value",
        width.bits()
    ))
}

fn decode_width<S: ByteSource + ?Sized>(width: Width, input: &mut S) -> Result<u64> {
    let mut decoder = VarintDecoder::new(width);
    loop {
        let byte = input.next_byte()?;
        if let Some(value) = decoder.push(byte)? {
            return Ok(value);
        }
    }
}

/// Decodes a u32 varint from `input`, consuming exactly the bytes of the encoding.
pub fn decode_u32<S: ByteSource + ?Sized>(input: &mut S) -> Result<u32> {
    // The decoder rejects anything wider than 32 bits.
    decode_width(Width::Bits32, input).map(|value| value as u32)
}

/// Decodes a u64 varint from `input`, consuming exactly the bytes of the encoding.
pub fn decode_u64<S: ByteSource + ?Sized>(input: &mut S) -> Result<u64> {
    decode_width(Width::Bits64, input)
}

/// Scans a slice in one pass for the terminating byte and assembles the value.
#[cfg(feature = "simd")]
fn decode_slice_fast(width: Width, input: &[u8]) -> Option<Result<(u64, usize)>> {
    let mask = crate::simd::continuation_mask(input)?;
    let len = (!mask).trailing_zeros() as usize + 1;
    let max_len = width.max_len();
    if len > max_len {
        return Some(Err(too_long(width)));
    }
    if len == max_len && input[len - 1] > width.last_byte_max() {
        return Some(Err(overflow(width, len)));
    }
    let value = input[..len]
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &byte)| acc | (u64::from(byte & 0x7f) << (i * 7)));
    Some(Ok((value, len)))
}

fn decode_slice(width: Width, input: &[u8]) -> Result<(u64, usize)> {
    #[cfg(feature = "simd")]
    if let Some(result) = decode_slice_fast(width, input) {
        return result;
    }
    let mut rest = input;
    let value = decode_width(width, &mut rest)?;
    Ok((value, input.len() - rest.len()))
}

/// Decodes a u32 varint from the front of `input`, returning the value and bytes consumed.
pub fn decode_u32_with_len(input: &[u8]) -> Result<(u32, usize)> {
    decode_slice(Width::Bits32, input).map(|(value, len)| (value as u32, len))
}

/// Decodes a u64 varint from the front of `input`, returning the value and bytes consumed.
pub fn decode_u64_with_len(input: &[u8]) -> Result<(u64, usize)> {
    decode_slice(Width::Bits64, input)
}

/// Decodes a u32 varint from a standalone byte array.
///
/// Trailing bytes after the terminator are ignored. An array that ends before
/// a terminating byte is rejected with [`Error::UnexpectedEof`].
pub fn decode_u32_from_slice(bytes: &[u8]) -> Result<u32> {
    decode_u32_with_len(bytes).map(|(value, _)| value)
}
