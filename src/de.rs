//! Run-length decoding.
//!
//! This module turns scanned [`EncodedToken`]s back into [`Run`]s. Markers
//! are pure scan-disambiguation: a token's run is its count and character,
//! whatever markers surround them.
//!
//! ## Usage
//!
//! ```rust
//! use hashrle::{decode, decode_token, scan, Run};
//!
//! let tokens = scan("#10a").unwrap();
//! assert_eq!(decode_token(&tokens[0]).unwrap(), Run::new('a', 10));
//!
//! assert_eq!(decode("3##").unwrap(), "###");
//! ```

use crate::run::Run;
use crate::token::EncodedToken;
use crate::{CodecOptions, Error, Result};

/// Converts one token back into its run.
///
/// # Errors
///
/// Returns [`Error::InvalidCount`] if the token's numeral is zero or does not
/// fit in `usize`. Tokens produced by the scanner are already validated.
pub fn decode_token(token: &EncodedToken) -> Result<Run> {
    Ok(Run::new(token.character, token.count()?))
}

/// Converts every token back into its run, in order.
///
/// # Errors
///
/// See [`decode_token`].
pub fn decode_tokens(tokens: &[EncodedToken]) -> Result<Vec<Run>> {
    tokens.iter().map(decode_token).collect()
}

/// Collects decoded runs and enforces the configured output limit.
///
/// Character and byte totals are checked on every token, so the output
/// buffer is only allocated once its exact size is known to fit.
#[derive(Debug)]
pub struct Decoder {
    runs: Vec<Run>,
    decoded_len: usize,
    decoded_bytes: usize,
    max_decoded_len: Option<usize>,
}

impl Decoder {
    pub fn new(options: &CodecOptions) -> Self {
        Decoder {
            runs: Vec::new(),
            decoded_len: 0,
            decoded_bytes: 0,
            max_decoded_len: options.max_decoded_len,
        }
    }

    /// Decodes `token` and records its run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LimitExceeded`] once the running output length passes
    /// the configured limit, and [`Error::OutputTooLarge`] if the total
    /// overflows `usize`.
    pub fn push_token(&mut self, token: &EncodedToken) -> Result<()> {
        let run = decode_token(token)?;
        let required = self.decoded_len.checked_add(run.count).ok_or_else(|| {
            Error::output_too_large("total run length overflows usize")
        })?;
        if let Some(limit) = self.max_decoded_len {
            if required > limit {
                return Err(Error::limit_exceeded(limit, required));
            }
        }
        let bytes = run
            .count
            .checked_mul(run.character.len_utf8())
            .and_then(|bytes| self.decoded_bytes.checked_add(bytes))
            .ok_or_else(|| Error::output_too_large("total byte length overflows usize"))?;

        self.decoded_len = required;
        self.decoded_bytes = bytes;
        self.runs.push(run);
        Ok(())
    }

    /// Number of characters the decoded runs expand to.
    pub fn decoded_len(&self) -> usize {
        self.decoded_len
    }

    /// Expands the decoded runs into the output text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputTooLarge`] if the output buffer cannot be allocated.
    pub fn into_string(self) -> Result<String> {
        let mut out = String::new();
        out.try_reserve_exact(self.decoded_bytes).map_err(|err| {
            Error::output_too_large(&format!("{} bytes: {}", self.decoded_bytes, err))
        })?;
        for run in &self.runs {
            run.write_to(&mut out);
        }
        Ok(out)
    }
}
