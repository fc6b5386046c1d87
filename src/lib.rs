//! # hashrle
//!
//! A reversible run-length text codec with `#` escapes.
//!
//! ## What does it do?
//!
//! Text is split into maximal runs of one repeated character and each run is
//! written as its count followed by the character (`aaa` → `3a`). Three cases
//! would make that ambiguous, and each gets an escape marker:
//!
//! - **Long runs** (10 or more): leading `#`, e.g. `#10a`
//! - **Runs of `#`**: trailing `#`, e.g. `3##`
//! - **Runs after a digit run**: leading `#`, e.g. `111aa` → `31#2a`
//!
//! See the [`format`] module for the full grammar.
//!
//! ## Quick Start
//!
//! ```rust
//! use hashrle::{decode, encode};
//!
//! let encoded = encode("aaabccccccccccc");
//! assert_eq!(encoded, "3a1b#11c");
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded, "aaabccccccccccc");
//! ```
//!
//! ## Pipeline
//!
//! Both directions are linear pipelines over fully materialized buffers:
//!
//! ```text
//! encode: text    -> decompose -> Run*          -> Encoder  -> EncodedToken* -> text
//! decode: encoded -> Scanner   -> EncodedToken* -> Decoder  -> Run*          -> text
//! ```
//!
//! Each stage is public, so the runs or tokens can be inspected directly:
//!
//! ```rust
//! use hashrle::{decode_tokens, decompose, encode_runs, scan, Run};
//!
//! let runs = decompose("111aa");
//! assert_eq!(runs, vec![Run::new('1', 3), Run::new('a', 2)]);
//!
//! let tokens = encode_runs(&runs);
//! assert_eq!(tokens[1].to_string(), "#2a");
//!
//! let scanned = scan("31#2a").unwrap();
//! assert_eq!(decode_tokens(&scanned).unwrap(), runs);
//! ```
//!
//! ## Errors
//!
//! Encoding never fails with default options. Decoding rejects malformed
//! input with the character offset of the problem, and never returns a
//! partially decoded buffer.

pub mod de;
pub mod error;
pub mod format;
pub mod options;
pub mod report;
pub mod run;
pub mod scanner;
pub mod ser;
pub mod token;

pub use de::{decode_token, decode_tokens, Decoder};
pub use error::{Error, Result};
pub use options::CodecOptions;
pub use report::{CompressionReport, Mode};
pub use run::{decompose, expand, Run};
pub use scanner::{scan, scan_with_options, Scanner};
pub use ser::{encode_runs, Encoder};
pub use token::{EncodedToken, EscapeCase};

use log::debug;
use std::io;

/// Run-length encodes `text`.
///
/// # Examples
///
/// ```rust
/// use hashrle::encode;
///
/// assert_eq!(encode(""), "");
/// assert_eq!(encode("aaa"), "3a");
/// assert_eq!(encode("###"), "3##");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    let runs = decompose(text);
    let mut encoder = Encoder::with_capacity(text.len().min(runs.len() * 4));
    for run in &runs {
        encoder.push_run(run);
    }
    let encoded = encoder.into_inner();
    debug!(
        "encoded {} bytes ({} runs) into {} bytes",
        text.len(),
        runs.len(),
        encoded.len()
    );
    encoded
}

/// Run-length encodes `text` with custom options.
///
/// # Errors
///
/// Returns [`Error::NonAscii`] if `options.ascii_only` is set and `text`
/// contains a non-ASCII character.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(text: &str, options: &CodecOptions) -> Result<String> {
    if options.ascii_only {
        ensure_ascii(text)?;
    }
    Ok(encode(text))
}

/// Decodes run-length encoded text.
///
/// # Examples
///
/// ```rust
/// use hashrle::decode;
///
/// assert_eq!(decode("#10a").unwrap(), "aaaaaaaaaa");
/// assert!(decode("a").is_err());
/// ```
///
/// # Errors
///
/// Returns a malformed-encoding error (see [`Error::is_malformed`]) if
/// `encoded` does not follow the format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(encoded: &str) -> Result<String> {
    decode_with_options(encoded, &CodecOptions::default())
}

/// Decodes run-length encoded text with custom options.
///
/// # Examples
///
/// ```rust
/// use hashrle::{decode_with_options, CodecOptions, Error};
///
/// let options = CodecOptions::new().with_max_decoded_len(3);
/// assert_eq!(decode_with_options("3a", &options).unwrap(), "aaa");
/// assert!(matches!(
///     decode_with_options("4a", &options),
///     Err(Error::LimitExceeded { .. })
/// ));
/// ```
///
/// # Errors
///
/// Returns an error if the input is malformed, violates `ascii_only`, or
/// would decode to more than `max_decoded_len` characters.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(encoded: &str, options: &CodecOptions) -> Result<String> {
    if options.ascii_only {
        ensure_ascii(encoded)?;
    }
    let mut decoder = Decoder::new(options);
    for token in Scanner::with_options(encoded, options) {
        decoder.push_token(&token?)?;
    }
    debug!(
        "decoded {} bytes into {} characters",
        encoded.len(),
        decoder.decoded_len()
    );
    decoder.into_string()
}

/// Encodes `text` and writes the result to `writer`.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_to_writer<W>(writer: W, text: &str) -> Result<()>
where
    W: io::Write,
{
    encode_to_writer_with_options(writer, text, &CodecOptions::default())
}

/// Encodes `text` with custom options and writes the result to `writer`.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_to_writer_with_options<W>(mut writer: W, text: &str, options: &CodecOptions) -> Result<()>
where
    W: io::Write,
{
    let encoded = encode_with_options(text, options)?;
    writer.write_all(encoded.as_bytes())?;
    Ok(())
}

/// Decodes `encoded` and writes the original text to `writer`.
///
/// Nothing is written if decoding fails.
///
/// # Errors
///
/// Returns an error if the input is malformed or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_to_writer<W>(mut writer: W, encoded: &str) -> Result<()>
where
    W: io::Write,
{
    let decoded = decode(encoded)?;
    writer.write_all(decoded.as_bytes())?;
    Ok(())
}

/// Reads all of `reader` and encodes it.
///
/// The whole input is read before encoding starts.
///
/// # Examples
///
/// ```rust
/// use hashrle::encode_from_reader;
/// use std::io::Cursor;
///
/// let encoded = encode_from_reader(Cursor::new("xxxx")).unwrap();
/// assert_eq!(encoded, "4x");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_from_reader<R>(mut reader: R) -> Result<String>
where
    R: io::Read,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(encode(&text))
}

/// Reads all of `reader` and decodes it.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8, or the
/// input is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader<R>(reader: R) -> Result<String>
where
    R: io::Read,
{
    decode_from_reader_with_options(reader, &CodecOptions::default())
}

/// Reads all of `reader` and decodes it with custom options.
///
/// # Errors
///
/// See [`decode_from_reader`] and [`decode_with_options`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader_with_options<R>(mut reader: R, options: &CodecOptions) -> Result<String>
where
    R: io::Read,
{
    let mut encoded = String::new();
    reader.read_to_string(&mut encoded)?;
    decode_with_options(&encoded, options)
}

fn ensure_ascii(text: &str) -> Result<()> {
    match text.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
        Some((position, found)) => Err(Error::non_ascii(position, found)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let text = "aaabccccccccccc##111\n";
        let encoded = encode(text);
        assert_eq!(decode(&encoded).unwrap(), text);
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_aborts_without_partial_output() {
        let mut out = Vec::new();
        assert!(decode_to_writer(&mut out, "3a2bx").is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_ascii_only() {
        let options = CodecOptions::new().with_ascii_only(true);
        assert_eq!(
            encode_with_options("abé", &options),
            Err(Error::non_ascii(2, 'é'))
        );
        assert!(decode_with_options("3é", &options).is_err());
        assert_eq!(encode_with_options("abc", &options).unwrap(), "1a1b1c");
    }

    #[test]
    fn test_writer_and_reader() {
        let mut buffer = Vec::new();
        encode_to_writer(&mut buffer, "zzzzzzzzzzzz").unwrap();
        assert_eq!(buffer, b"#12z");

        let decoded = decode_from_reader(buffer.as_slice()).unwrap();
        assert_eq!(decoded, "zzzzzzzzzzzz");
    }

    #[test]
    fn test_huge_counts_are_errors_not_panics() {
        let err = decode(&format!("#{}a", usize::MAX)).unwrap_err();
        assert!(matches!(err, Error::OutputTooLarge(_)));

        let half = usize::MAX / 2 + 1;
        let err = decode(&format!("#{half}a#{half}b")).unwrap_err();
        assert!(matches!(err, Error::OutputTooLarge(_)));
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'3', 0xff];
        assert!(matches!(decode_from_reader(bytes), Err(Error::Io(_))));
    }
}
