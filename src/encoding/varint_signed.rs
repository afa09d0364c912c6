use crate::encoding::varint::{
    decode_u32, decode_u32_with_len, decode_u64, decode_u64_with_len, encode_u32,
    encode_u32_to_vec, encode_u64, encoded_len_u32, encoded_len_u64,
};
use crate::error::Result;
use crate::io::{ByteSink, ByteSource};

/// Maps a signed integer onto the unsigned zig-zag sequence `0, -1, 1, -2, 2, ...`.
#[inline]
pub fn zigzag_encode_32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// 64-bit counterpart of [`zigzag_encode_32`].
#[inline]
pub fn zigzag_encode_64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverts [`zigzag_encode_32`].
#[inline]
pub fn zigzag_decode_32(raw: u32) -> i32 {
    let raw = raw as i32;
    // Arithmetic shifts on the reinterpreted bits; the final XOR restores the
    // top bit so `i32::MIN` and `i32::MAX` come back exactly.
    let temp = (((raw << 31) >> 31) ^ raw) >> 1;
    temp ^ (raw & i32::MIN)
}

/// Inverts [`zigzag_encode_64`].
#[inline]
pub fn zigzag_decode_64(raw: u64) -> i64 {
    let raw = raw as i64;
    let temp = (((raw << 63) >> 63) ^ raw) >> 1;
    temp ^ (raw & i64::MIN)
}

/// Encodes a signed integer using ZigZag + varint encoding.
pub fn encode_i32<S: ByteSink + ?Sized>(value: i32, out: &mut S) -> usize {
    encode_u32(zigzag_encode_32(value), out)
}

/// Encodes a signed integer using ZigZag + varint encoding.
pub fn encode_i64<S: ByteSink + ?Sized>(value: i64, out: &mut S) -> usize {
    encode_u64(zigzag_encode_64(value), out)
}

/// Encodes a signed integer into a freshly allocated vector of exactly the encoded length.
pub fn encode_i32_to_vec(value: i32) -> Vec<u8> {
    encode_u32_to_vec(zigzag_encode_32(value))
}

/// Decodes a signed ZigZag/varint integer.
pub fn decode_i32<S: ByteSource + ?Sized>(input: &mut S) -> Result<i32> {
    decode_u32(input).map(zigzag_decode_32)
}

/// Decodes a signed ZigZag/varint integer.
pub fn decode_i64<S: ByteSource + ?Sized>(input: &mut S) -> Result<i64> {
    decode_u64(input).map(zigzag_decode_64)
}

/// Decodes a signed 32-bit varint from the front of `input`, returning the value and bytes consumed.
pub fn decode_i32_with_len(input: &[u8]) -> Result<(i32, usize)> {
    let (raw, len) = decode_u32_with_len(input)?;
    Ok((zigzag_decode_32(raw), len))
}

/// Decodes a signed 64-bit varint from the front of `input`, returning the value and bytes consumed.
pub fn decode_i64_with_len(input: &[u8]) -> Result<(i64, usize)> {
    let (raw, len) = decode_u64_with_len(input)?;
    Ok((zigzag_decode_64(raw), len))
}

/// Decodes a signed 32-bit varint from a standalone byte array.
pub fn decode_i32_from_slice(bytes: &[u8]) -> Result<i32> {
    decode_i32_with_len(bytes).map(|(value, _)| value)
}

/// Number of bytes [`encode_i32`] would emit for `value`.
#[inline]
pub fn encoded_len_i32(value: i32) -> usize {
    encoded_len_u32(zigzag_encode_32(value))
}

/// Number of bytes [`encode_i64`] would emit for `value`.
#[inline]
pub fn encoded_len_i64(value: i64) -> usize {
    encoded_len_u64(zigzag_encode_64(value))
}
