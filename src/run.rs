//! Runs of repeated characters.
//!
//! A [`Run`] is a maximal substring of one repeated character. [`decompose`]
//! splits raw text into runs and [`expand`] concatenates them back.
//!
//! ```rust
//! use hashrle::{decompose, expand, Run};
//!
//! let runs = decompose("aaab");
//! assert_eq!(runs, vec![Run::new('a', 3), Run::new('b', 1)]);
//! assert_eq!(expand(&runs), "aaab");
//! ```

use serde::Serialize;

/// Run length from which a run needs the long-sequence escape.
pub const LONG_SEQUENCE_LEN: usize = 10;

/// The escape marker character.
pub const MARKER: char = '#';

/// A maximal substring of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Run {
    pub character: char,
    pub count: usize,
}

impl Run {
    #[must_use]
    pub const fn new(character: char, count: usize) -> Self {
        Run { character, count }
    }

    /// Returns `true` if the run needs at least two digits for its count.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        self.count >= LONG_SEQUENCE_LEN
    }

    /// Returns `true` if the run's character is the escape marker itself.
    #[must_use]
    pub const fn is_marker(&self) -> bool {
        self.character == MARKER
    }

    #[must_use]
    pub const fn is_digit(&self) -> bool {
        self.character.is_ascii_digit()
    }

    /// Appends the run's characters to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.extend(std::iter::repeat(self.character).take(self.count));
    }
}

/// Splits `text` into its ordered sequence of maximal runs.
///
/// Empty input yields an empty sequence. Every input is valid.
#[must_use]
pub fn decompose(text: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for ch in text.chars() {
        match runs.last_mut() {
            Some(last) if last.character == ch => last.count += 1,
            _ => runs.push(Run::new(ch, 1)),
        }
    }

    runs
}

/// Concatenates runs back into text.
///
/// Runs are assumed to fit in memory; use [`Decoder`](crate::Decoder) to
/// check untrusted counts first.
#[must_use]
pub fn expand(runs: &[Run]) -> String {
    let len = runs
        .iter()
        .fold(0usize, |len, run| len.saturating_add(run.count));
    let mut out = String::new();
    // Best effort: a failed reservation just leaves growth to `write_to`.
    let _ = out.try_reserve(len);
    for run in runs {
        run.write_to(&mut out);
    }
    out
}
