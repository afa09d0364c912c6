#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Varint and zig-zag encode/decode primitives.
pub mod encoding;
/// Shared error and result types.
pub mod error;
/// Byte sinks, byte sources and `std::io` adapters.
pub mod io;
/// Integer widths and the generic [`Varint`] trait.
pub mod types;

#[cfg(feature = "async")]
pub mod async_support;
#[cfg(feature = "serde")]
pub mod serde_support;
#[cfg(feature = "simd")]
mod simd;

pub use encoding::{
    VARINT32_MAX_LEN, VARINT64_MAX_LEN, VarintDecoder, decode_i32, decode_i32_from_slice,
    decode_i64, decode_u32, decode_u32_from_slice, decode_u64, encode_i32, encode_i32_to_vec,
    encode_i64, encode_u32, encode_u32_to_vec, encode_u64,
};
pub use error::{Error, Result};
pub use io::{ByteSink, ByteSource, IoSource, VarintReadExt, VarintWriteExt};
#[cfg(feature = "serde")]
pub use serde_support::VarintBytes;
pub use types::{Varint, Width};
