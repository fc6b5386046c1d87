//! Configuration options for encoding and decoding.
//!
//! The wire format itself is fixed; [`CodecOptions`] only decides how strict
//! the codec is about its input and how much output it may produce.
//!
//! ## Examples
//!
//! ```rust
//! use hashrle::{decode_with_options, encode_with_options, CodecOptions};
//!
//! let options = CodecOptions::new().with_ascii_only(true);
//! assert!(encode_with_options("naïve", &options).is_err());
//!
//! let options = CodecOptions::new().with_max_decoded_len(5);
//! assert!(decode_with_options("#10a", &options).is_err());
//! ```

/// Configuration options for the codec.
///
/// # Examples
///
/// ```rust
/// use hashrle::CodecOptions;
///
/// // Lenient defaults
/// let options = CodecOptions::new();
/// assert!(options.allow_trailing_newline);
///
/// // ASCII only, no tolerated trailing newline
/// let options = CodecOptions::strict();
/// assert!(options.ascii_only);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecOptions {
    pub ascii_only: bool,
    pub allow_trailing_newline: bool,
    pub max_decoded_len: Option<usize>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            ascii_only: false,
            allow_trailing_newline: true,
            max_decoded_len: None,
        }
    }
}

impl CodecOptions {
    /// Creates default options: any character accepted, a final newline
    /// without a count is ignored on decode, no output limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that accept ASCII only and reject a bare trailing newline.
    #[must_use]
    pub fn strict() -> Self {
        CodecOptions {
            ascii_only: true,
            allow_trailing_newline: false,
            ..Default::default()
        }
    }

    /// Rejects non-ASCII characters on both encode and decode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashrle::CodecOptions;
    ///
    /// let options = CodecOptions::new().with_ascii_only(true);
    /// assert!(options.ascii_only);
    /// ```
    #[must_use]
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    /// Controls whether a final `\n` with no count is ignored when decoding.
    ///
    /// Text editors commonly append one after an encoded file is saved.
    #[must_use]
    pub fn with_trailing_newline(mut self, allow: bool) -> Self {
        self.allow_trailing_newline = allow;
        self
    }

    /// Caps the number of characters a decode may produce.
    ///
    /// The limit is checked against the decoded runs before the output
    /// buffer is allocated.
    #[must_use]
    pub fn with_max_decoded_len(mut self, limit: usize) -> Self {
        self.max_decoded_len = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CodecOptions::default();
        assert!(!options.ascii_only);
        assert!(options.allow_trailing_newline);
        assert_eq!(options.max_decoded_len, None);
    }

    #[test]
    fn test_builder_chain() {
        let options = CodecOptions::strict()
            .with_trailing_newline(true)
            .with_max_decoded_len(64);
        assert!(options.ascii_only);
        assert!(options.allow_trailing_newline);
        assert_eq!(options.max_decoded_len, Some(64));
    }
}
