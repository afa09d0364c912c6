//! Integer widths and the [`Varint`] abstraction over the four supported integer kinds.

use crate::encoding::{
    self, VARINT32_MAX_LEN, VARINT64_MAX_LEN, zigzag_decode_32, zigzag_decode_64,
    zigzag_encode_32, zigzag_encode_64,
};
use crate::error::Result;
use crate::io::{ByteSink, ByteSource};

/// Bit width of the integer a varint decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 32-bit values, at most 5 encoded bytes.
    Bits32,
    /// 64-bit values, at most 10 encoded bytes.
    Bits64,
}

impl Width {
    /// Number of bits in the decoded integer.
    pub const fn bits(self) -> u32 {
        match self {
            Width::Bits32 => 32,
            Width::Bits64 => 64,
        }
    }

    /// Maximum number of bytes a valid encoding may occupy.
    pub const fn max_len(self) -> usize {
        match self {
            Width::Bits32 => VARINT32_MAX_LEN,
            Width::Bits64 => VARINT64_MAX_LEN,
        }
    }

    /// Largest value the byte at position `max_len - 1` may hold.
    pub(crate) const fn last_byte_max(self) -> u8 {
        match self {
            // 32 - 4 * 7 = 4 bits left
            Width::Bits32 => 0x0f,
            // 64 - 9 * 7 = 1 bit left
            Width::Bits64 => 0x01,
        }
    }
}

/// Integer types with a varint encoding.
///
/// Unsigned types use the plain encoding; signed types are zig-zag mapped first
/// so that small magnitudes of either sign stay short.
pub trait Varint: Copy + Sized {
    /// Width the encoding is validated against on decode.
    const WIDTH: Width;
    /// Maximum number of bytes an encoded value occupies.
    const MAX_LEN: usize = Self::WIDTH.max_len();

    /// Appends the encoding of `self` to `out`, returning the number of bytes written.
    fn encode_to<S: ByteSink + ?Sized>(self, out: &mut S) -> usize;

    /// Decodes one value from `input`.
    fn decode_from<S: ByteSource + ?Sized>(input: &mut S) -> Result<Self>;

    /// Decodes one value from the front of `input`, returning it with the bytes consumed.
    fn decode_prefix(input: &[u8]) -> Result<(Self, usize)>;

    /// Number of bytes [`encode_to`](Self::encode_to) would emit.
    fn encoded_len(self) -> usize;
}

impl Varint for u32 {
    const WIDTH: Width = Width::Bits32;

    fn encode_to<S: ByteSink + ?Sized>(self, out: &mut S) -> usize {
        encoding::encode_u32(self, out)
    }

    fn decode_from<S: ByteSource + ?Sized>(input: &mut S) -> Result<Self> {
        encoding::decode_u32(input)
    }

    fn decode_prefix(input: &[u8]) -> Result<(Self, usize)> {
        encoding::decode_u32_with_len(input)
    }

    fn encoded_len(self) -> usize {
        encoding::encoded_len_u32(self)
    }
}

impl Varint for u64 {
    const WIDTH: Width = Width::Bits64;

    fn encode_to<S: ByteSink + ?Sized>(self, out: &mut S) -> usize {
        encoding::encode_u64(self, out)
    }

    fn decode_from<S: ByteSource + ?Sized>(input: &mut S) -> Result<Self> {
        encoding::decode_u64(input)
    }

    fn decode_prefix(input: &[u8]) -> Result<(Self, usize)> {
        encoding::decode_u64_with_len(input)
    }

    fn encoded_len(self) -> usize {
        encoding::encoded_len_u64(self)
    }
}

impl Varint for i32 {
    const WIDTH: Width = Width::Bits32;

    fn encode_to<S: ByteSink + ?Sized>(self, out: &mut S) -> usize {
        zigzag_encode_32(self).encode_to(out)
    }

    fn decode_from<S: ByteSource + ?Sized>(input: &mut S) -> Result<Self> {
        u32::decode_from(input).map(zigzag_decode_32)
    }

    fn decode_prefix(input: &[u8]) -> Result<(Self, usize)> {
        encoding::decode_i32_with_len(input)
    }

    fn encoded_len(self) -> usize {
        encoding::encoded_len_i32(self)
    }
}

impl Varint for i64 {
    const WIDTH: Width = Width::Bits64;

    fn encode_to<S: ByteSink + ?Sized>(self, out: &mut S) -> usize {
        zigzag_encode_64(self).encode_to(out)
    }

    fn decode_from<S: ByteSource + ?Sized>(input: &mut S) -> Result<Self> {
        u64::decode_from(input).map(zigzag_decode_64)
    }

    fn decode_prefix(input: &[u8]) -> Result<(Self, usize)> {
        encoding::decode_i64_with_len(input)
    }

    fn encoded_len(self) -> usize {
        encoding::encoded_len_i64(self)
    }
}
