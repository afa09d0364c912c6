use crate::encoding::{
    decode_i32, decode_i64, decode_u32, decode_u64, encode_i32, encode_i64, encode_u32,
    encode_u64,
};
use crate::error::Result;
use crate::io::{ByteSink, ByteSource};
use crate::types::Varint;

/// Varint writers available on every [`ByteSink`].
///
/// Each method returns the number of bytes appended.
pub trait VarintWriteExt: ByteSink {
    /// Writes a `u32` as a plain varint.
    fn write_unsigned_var_int(&mut self, value: u32) -> usize {
        encode_u32(value, self)
    }

    /// Writes an `i32` as a zig-zag varint.
    fn write_signed_var_int(&mut self, value: i32) -> usize {
        encode_i32(value, self)
    }

    /// Writes a `u64` as a plain varint.
    fn write_unsigned_var_long(&mut self, value: u64) -> usize {
        encode_u64(value, self)
    }

    /// Writes an `i64` as a zig-zag varint.
    fn write_signed_var_long(&mut self, value: i64) -> usize {
        encode_i64(value, self)
    }

    /// Writes any [`Varint`] type.
    fn write_varint<T: Varint>(&mut self, value: T) -> usize {
        value.encode_to(self)
    }
}

impl<S: ByteSink + ?Sized> VarintWriteExt for S {}

/// Varint readers available on every [`ByteSource`].
pub trait VarintReadExt: ByteSource {
    /// Reads a plain varint into a `u32`.
    fn read_unsigned_var_int(&mut self) -> Result<u32> {
        decode_u32(self)
    }

    /// Reads a zig-zag varint into an `i32`.
    fn read_signed_var_int(&mut self) -> Result<i32> {
        decode_i32(self)
    }

    /// Reads a plain varint into a `u64`.
    fn read_unsigned_var_long(&mut self) -> Result<u64> {
        decode_u64(self)
    }

    /// Reads a zig-zag varint into an `i64`.
    fn read_signed_var_long(&mut self) -> Result<i64> {
        decode_i64(self)
    }

    /// Reads any [`Varint`] type.
    fn read_varint<T: Varint>(&mut self) -> Result<T> {
        T::decode_from(self)
    }
}

impl<S: ByteSource + ?Sized> VarintReadExt for S {}

#[cfg(test)]
mod tests {
    use bytes::{Bytes, BytesMut};

    use super::*;

    #[test]
    fn mixed_values_share_one_buffer() {
        let mut out = BytesMut::new();
        out.write_unsigned_var_int(300);
        out.write_signed_var_int(-2);
        out.write_unsigned_var_long(u64::MAX);
        out.write_signed_var_long(i64::MIN);
        out.write_varint(7u32);

        let mut input: Bytes = out.freeze();
        assert_eq!(input.read_unsigned_var_int().unwrap(), 300);
        assert_eq!(input.read_signed_var_int().unwrap(), -2);
        assert_eq!(input.read_unsigned_var_long().unwrap(), u64::MAX);
        assert_eq!(input.read_signed_var_long().unwrap(), i64::MIN);
        assert_eq!(input.read_varint::<u32>().unwrap(), 7);
        assert!(input.read_varint::<u64>().unwrap_err().is_eof());
    }
}
