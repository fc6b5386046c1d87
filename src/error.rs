//! Error types for run-length encoding and decoding.
//!
//! Encoding plain text cannot fail unless [`CodecOptions`](crate::CodecOptions)
//! impose extra restrictions. Decoding fails whenever the encoded buffer does
//! not follow the escape grammar described in [`format`](crate::format).
//!
//! ## Error Categories
//!
//! - **Malformed encodings**: a literal character with no count, a count with
//!   no character, a marker with nothing after it
//! - **Invalid counts**: zero or a numeral that does not fit in `usize`
//! - **Option violations**: non-ASCII input in ASCII-only mode, output limits
//! - **Oversized output**: runs whose total length overflows or cannot be allocated
//! - **I/O and configuration errors**: raised by the reader/writer helpers and the binary
//!
//! Positions are 0-based character offsets into the scanned buffer.
//!
//! ## Examples
//!
//! ```rust
//! use hashrle::{decode, Error};
//!
//! let err = decode("a").unwrap_err();
//! assert!(err.is_malformed());
//! assert!(matches!(err, Error::Malformed { position: 0, .. }));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A character appeared where the grammar does not allow it
    #[error("Invalid encoded sequence at position {position}: {msg}")]
    Malformed { position: usize, msg: String },

    /// The buffer ended in the middle of a token
    #[error("Unexpected end of encoded input at position {position}: expected {expected}")]
    UnexpectedEof { position: usize, expected: String },

    /// A token's numeral is zero or too large
    #[error("Invalid run count '{digits}'")]
    InvalidCount { digits: String },

    /// Non-ASCII character while ASCII-only mode is enabled
    #[error("Non-ASCII character {found:?} at position {position}")]
    NonAscii { position: usize, found: char },

    /// Decoded output would exceed the configured limit
    #[error("Decoded output of {required} characters exceeds the limit of {limit}")]
    LimitExceeded { limit: usize, required: usize },

    /// Invalid invocation or input path
    #[error("Configuration error: {0}")]
    Config(String),

    /// Decoded output cannot be represented or allocated
    #[error("Decoded output is too large: {0}")]
    OutputTooLarge(String),
}

impl Error {
    /// Creates a malformed-encoding error at the given character offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashrle::Error;
    ///
    /// let err = Error::malformed(4, "character without a count");
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    pub fn malformed(position: usize, msg: &str) -> Self {
        Error::Malformed {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(position: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            position,
            expected: expected.to_string(),
        }
    }

    /// Creates an invalid-count error for the given numeral.
    pub fn invalid_count(digits: &str) -> Self {
        Error::InvalidCount {
            digits: digits.to_string(),
        }
    }

    pub fn non_ascii(position: usize, found: char) -> Self {
        Error::NonAscii { position, found }
    }

    pub fn limit_exceeded(limit: usize, required: usize) -> Self {
        Error::LimitExceeded { limit, required }
    }

    /// Creates a configuration error (bad path, bad flags).
    pub fn config(msg: &str) -> Self {
        Error::Config(msg.to_string())
    }

    /// Creates an error for decoded output that overflows `usize` or
    /// cannot be allocated.
    pub fn output_too_large(msg: &str) -> Self {
        Error::OutputTooLarge(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if the error means the encoded buffer itself is invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashrle::Error;
    ///
    /// assert!(Error::unexpected_eof(2, "a run character").is_malformed());
    /// assert!(!Error::io("disk full").is_malformed());
    /// ```
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::Malformed { .. } | Error::UnexpectedEof { .. } | Error::InvalidCount { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_carries_position() {
        let err = Error::malformed(7, "literal character without a count");
        assert_eq!(
            err.to_string(),
            "Invalid encoded sequence at position 7: literal character without a count"
        );
    }

    #[test]
    fn test_classification() {
        assert!(Error::invalid_count("0").is_malformed());
        assert!(!Error::non_ascii(0, 'é').is_malformed());
        assert!(!Error::limit_exceeded(1, 2).is_malformed());
        assert!(!Error::config("bad extension").is_malformed());
        assert!(!Error::output_too_large("overflow").is_malformed());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing")));
    }
}
