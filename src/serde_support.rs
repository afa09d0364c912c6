//! Helpers for storing integers as varint byte strings through `serde`.
//!
//! Use [`as_varint`] on a field:
//!
//! ```ignore
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Record {
//!     #[serde(with = "varint_codec::serde_support::as_varint")]
//!     offset: u64,
//! }
//! ```
//!
//! or wrap a value in [`VarintBytes`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::encoding::VARINT64_MAX_LEN;
use crate::types::Varint;

type EncodedBuf = SmallVec<[u8; VARINT64_MAX_LEN]>;

/// `serde(with = ...)` module that (de)serialises a [`Varint`] as its encoded bytes.
pub mod as_varint {
    use super::*;

    /// Serialises `value` as a byte string holding its varint encoding.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Varint,
        S: Serializer,
    {
        let mut buf = EncodedBuf::new();
        value.encode_to(&mut buf);
        serializer.serialize_bytes(&buf)
    }

    /// Deserialises a byte string that must hold exactly one varint.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Varint,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(VarintVisitor(PhantomData))
    }
}

struct VarintVisitor<T>(PhantomData<T>);

impl<T: Varint> VarintVisitor<T> {
    fn decode<E: de::Error>(bytes: &[u8]) -> Result<T, E> {
        let (value, len) = T::decode_prefix(bytes).map_err(E::custom)?;
        if len != bytes.len() {
            return Err(E::invalid_length(bytes.len(), &"exactly one varint"));
        }
        Ok(value)
    }
}

impl<'de, T: Varint> Visitor<'de> for VarintVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a varint of at most {} bytes", T::MAX_LEN)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        Self::decode(v)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<T, A::Error> {
        let mut buf = EncodedBuf::new();
        while let Some(byte) = seq.next_element::<u8>()? {
            if buf.len() == T::MAX_LEN {
                return Err(de::Error::invalid_length(buf.len() + 1, &self));
            }
            buf.push(byte);
        }
        Self::decode(&buf)
    }
}

/// Newtype that serialises its integer as varint bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Varint", deserialize = "T: Varint"))]
pub struct VarintBytes<T>(#[serde(with = "as_varint")] pub T);

impl<T> From<T> for VarintBytes<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
