//! Encoding helpers (varints, zig-zag encoding, etc.).

mod varint;
mod varint_signed;

pub use varint::{
    VARINT32_MAX_LEN, VARINT64_MAX_LEN, VarintDecoder, decode_u32, decode_u32_from_slice,
    decode_u32_with_len, decode_u64, decode_u64_with_len, encode_u32, encode_u32_into,
    encode_u32_to_vec, encode_u64, encode_u64_into, encoded_len_u32, encoded_len_u64,
};
pub use varint_signed::{
    decode_i32, decode_i32_from_slice, decode_i32_with_len, decode_i64, decode_i64_with_len,
    encode_i32, encode_i32_to_vec, encode_i64, encoded_len_i32, encoded_len_i64,
    zigzag_decode_32, zigzag_decode_64, zigzag_encode_32, zigzag_encode_64,
};
