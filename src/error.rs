use std::fmt;
use std::io;

/// Convenient alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can be produced while decoding varints.
///
/// Encoding never fails: every fixed-width integer has a finite encoding.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Wrapper around standard I/O errors raised by stream adapters.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// The byte sequence is not a valid varint for the requested width: it did
    /// not terminate within the maximum length, or its final byte carries bits
    /// that do not fit the target integer.
    #[error("malformed varint: {0}")]
    MalformedVarint(String),

    /// The source ran out of bytes before a terminating byte was seen.
    #[error("unexpected end of input while decoding varint")]
    UnexpectedEof,
}

impl Error {
    pub(crate) fn malformed<T: fmt::Display>(msg: T) -> Self {
        Self::MalformedVarint(msg.to_string())
    }

    /// Returns `true` if this error reports a malformed (too long or
    /// overflowing) varint.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedVarint(_))
    }

    /// Returns `true` if the input was exhausted mid-varint.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(err)
        }
    }
}
