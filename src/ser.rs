//! Run-length encoding.
//!
//! This module provides the [`Encoder`] that turns runs into encoded tokens.
//! It threads a single bit of state from one run to the next: whether the
//! previous run's character was a digit, which forces a leading marker on
//! the following token.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use hashrle::encode;
//!
//! assert_eq!(encode("aaabbbbbbbbbbbb"), "3a#12b");
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use hashrle::{decompose, Encoder};
//!
//! let mut encoder = Encoder::new();
//! for run in decompose("111aa") {
//!     encoder.push_run(&run);
//! }
//! assert_eq!(encoder.into_inner(), "31#2a");
//! ```

use crate::run::Run;
use crate::token::EncodedToken;

/// The run-length encoder.
///
/// Appends the textual form of each pushed run to an internal buffer.
#[derive(Debug, Default)]
pub struct Encoder {
    output: String,
    after_digit: bool,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder whose buffer is pre-sized for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            output: String::with_capacity(capacity),
            after_digit: false,
        }
    }

    /// Converts `run` into its token and advances the carried digit state.
    pub fn encode_run(&mut self, run: &Run) -> EncodedToken {
        let token = EncodedToken::from_run(run, self.after_digit);
        self.after_digit = run.is_digit();
        token
    }

    /// Encodes `run` and appends the token text to the buffer.
    pub fn push_run(&mut self, run: &Run) {
        let token = self.encode_run(run);
        token.write_to(&mut self.output);
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

/// Encodes every run into its token, in order.
#[must_use]
pub fn encode_runs(runs: &[Run]) -> Vec<EncodedToken> {
    let mut encoder = Encoder::new();
    runs.iter().map(|run| encoder.encode_run(run)).collect()
}
