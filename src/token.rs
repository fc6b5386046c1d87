//! Encoded tokens and the escape rules that shape them.
//!
//! An [`EncodedToken`] is the textual serialization of exactly one [`Run`]:
//! an optional leading `#`, the decimal count, the run character, and an
//! optional trailing `#`. Which markers appear is decided by the
//! [`EscapeCase`] predicates, evaluated on the run itself and on whether the
//! previous run's character was a digit.
//!
//! ```rust
//! use hashrle::{EncodedToken, Run};
//!
//! let token = EncodedToken::from_run(&Run::new('a', 12), false);
//! assert_eq!(token.to_string(), "#12a");
//!
//! let token = EncodedToken::from_run(&Run::new('#', 3), false);
//! assert_eq!(token.to_string(), "3##");
//! ```

use crate::run::{Run, MARKER};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// The three situations that require an escape marker.
///
/// Cases are not mutually exclusive: `#12##` is a long run of `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EscapeCase {
    /// Case A: the count needs two or more digits (leading marker).
    LongSequence,
    /// Case B: the run's character is `#` (trailing marker).
    MarkerRun,
    /// Case C: the previous run's character was a digit (leading marker).
    AfterDigit,
}

impl EscapeCase {
    pub const ALL: [EscapeCase; 3] = [
        EscapeCase::LongSequence,
        EscapeCase::MarkerRun,
        EscapeCase::AfterDigit,
    ];

    /// Returns `true` if this case applies to `run`, given whether the
    /// previous run's character was an ASCII digit.
    #[must_use]
    pub const fn applies(self, run: &Run, after_digit: bool) -> bool {
        match self {
            EscapeCase::LongSequence => run.is_long(),
            EscapeCase::MarkerRun => run.is_marker(),
            EscapeCase::AfterDigit => after_digit,
        }
    }

    /// Returns `true` if the case is signaled by a leading marker.
    #[must_use]
    pub const fn is_leading(self) -> bool {
        !matches!(self, EscapeCase::MarkerRun)
    }

    /// Lists every case that applies to `run`.
    pub fn classify(run: &Run, after_digit: bool) -> impl Iterator<Item = EscapeCase> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |case| case.applies(run, after_digit))
    }
}

/// The serialized form of exactly one run.
///
/// `digits` holds the decimal count exactly as it appears in the encoded
/// text; markers carry no decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EncodedToken {
    pub leading_marker: bool,
    pub digits: String,
    pub character: char,
    pub trailing_marker: bool,
}

impl EncodedToken {
    /// Builds the token for `run`.
    ///
    /// `after_digit` is whether the previous run's character was a digit.
    #[must_use]
    pub fn from_run(run: &Run, after_digit: bool) -> Self {
        let leading_marker = EscapeCase::classify(run, after_digit).any(EscapeCase::is_leading);
        EncodedToken {
            leading_marker,
            digits: run.count.to_string(),
            character: run.character,
            trailing_marker: EscapeCase::MarkerRun.applies(run, after_digit),
        }
    }

    /// Parses the count numeral.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCount`] if the numeral is empty, zero, not made
    /// of ASCII digits, or does not fit in `usize`.
    pub fn count(&self) -> Result<usize> {
        if self.digits.is_empty() || !self.digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_count(&self.digits));
        }
        match self.digits.parse::<usize>() {
            Ok(0) | Err(_) => Err(Error::invalid_count(&self.digits)),
            Ok(count) => Ok(count),
        }
    }

    /// Length of the token's textual form, in characters.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        usize::from(self.leading_marker) + self.digits.len() + 1 + usize::from(self.trailing_marker)
    }

    /// Appends the token's textual form to `out`.
    pub fn write_to(&self, out: &mut String) {
        if self.leading_marker {
            out.push(MARKER);
        }
        out.push_str(&self.digits);
        out.push(self.character);
        if self.trailing_marker {
            out.push(MARKER);
        }
    }
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::with_capacity(self.encoded_len());
        self.write_to(&mut text);
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_run_has_no_markers() {
        let token = EncodedToken::from_run(&Run::new('a', 3), false);
        assert!(!token.leading_marker);
        assert!(!token.trailing_marker);
        assert_eq!(token.to_string(), "3a");
        assert_eq!(token.encoded_len(), 2);
    }

    #[test]
    fn test_long_sequence() {
        let token = EncodedToken::from_run(&Run::new('a', 10), false);
        assert_eq!(token.to_string(), "#10a");
    }

    #[test]
    fn test_marker_run() {
        let token = EncodedToken::from_run(&Run::new('#', 3), false);
        assert_eq!(token.to_string(), "3##");
    }

    #[test]
    fn test_after_digit() {
        let token = EncodedToken::from_run(&Run::new('a', 2), true);
        assert_eq!(token.to_string(), "#2a");
    }

    #[test]
    fn test_all_cases_combined() {
        let run = Run::new('#', 15);
        let cases: Vec<_> = EscapeCase::classify(&run, true).collect();
        assert_eq!(cases, EscapeCase::ALL.to_vec());

        let token = EncodedToken::from_run(&run, true);
        assert_eq!(token.to_string(), "#15##");
        assert_eq!(token.encoded_len(), 5);
    }

    #[test]
    fn test_count_rejects_bad_numerals() {
        let mut token = EncodedToken::from_run(&Run::new('a', 3), false);
        assert_eq!(token.count(), Ok(3));

        token.digits = "0".to_string();
        assert!(matches!(token.count(), Err(Error::InvalidCount { .. })));

        token.digits = String::new();
        assert!(token.count().is_err());

        token.digits = "99999999999999999999999999".to_string();
        assert!(token.count().is_err());
    }
}
