//! Scanning encoded text back into tokens.
//!
//! The [`Scanner`] re-derives token boundaries from an encoded buffer. Token
//! lengths are variable and signaled only by embedded `#` markers, so the
//! scanner is a two-state machine driven by a character cursor with
//! lookahead:
//!
//! - **Normal**: a token is either `d<char>` (single-digit count, with
//!   `d##` for a run of `#`) or starts with a leading `#`.
//! - **InLongSequence**: entered after a leading `#`. Digits accumulate until
//!   the run character shows up. When the run character is itself a digit,
//!   the digit string runs straight into it; the following token then always
//!   carries a leading `#`, which is what closes the digit run.
//!
//! Every step advances the cursor by an explicit number of characters.
//!
//! ```rust
//! use hashrle::scan;
//!
//! let tokens = scan("3a#101#2##").unwrap();
//! let text: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
//! assert_eq!(text, vec!["3a", "#101", "#2##"]);
//! ```

use crate::run::MARKER;
use crate::token::EncodedToken;
use crate::{CodecOptions, Error, Result};
use log::trace;

/// A character cursor over the encoded buffer.
///
/// Tracks the 0-based character offset used in error positions.
#[derive(Debug, Clone)]
struct Cursor<'a> {
    rest: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            rest: input,
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Returns `true` if the character under the cursor is the last one.
    fn at_last(&self) -> bool {
        self.peek().is_some() && self.peek_nth(1).is_none()
    }

    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            match self.rest.chars().next() {
                Some(ch) => {
                    self.rest = &self.rest[ch.len_utf8()..];
                    self.position += 1;
                }
                None => break,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Normal,
    /// After a leading marker. `start` is the offset of the first count digit.
    InLongSequence { start: usize, digits: String },
}

/// Outcome of a single scanner step.
enum Step {
    Emit(EncodedToken),
    Continue,
    End,
}

/// The encoded-text scanner.
///
/// Yields tokens in order as an iterator of `Result<EncodedToken>`. After the
/// first error the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    allow_trailing_newline: bool,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &CodecOptions::default())
    }

    pub fn with_options(input: &'a str, options: &CodecOptions) -> Self {
        Scanner {
            cursor: Cursor::new(input),
            state: State::Normal,
            allow_trailing_newline: options.allow_trailing_newline,
            failed: false,
        }
    }

    fn is_trailing_newline(&self, ch: char) -> bool {
        self.allow_trailing_newline && ch == '\n' && self.cursor.at_last()
    }

    fn step(&mut self) -> Result<Step> {
        match std::mem::replace(&mut self.state, State::Normal) {
            State::Normal => self.step_normal(),
            State::InLongSequence { start, digits } => self.step_long(start, digits),
        }
    }

    fn step_normal(&mut self) -> Result<Step> {
        let position = self.cursor.position;
        let Some(ch) = self.cursor.peek() else {
            return Ok(Step::End);
        };

        if ch == MARKER {
            trace!("leading marker at {position}, entering long sequence");
            self.cursor.advance(1);
            self.state = State::InLongSequence {
                start: position + 1,
                digits: String::new(),
            };
            return Ok(Step::Continue);
        }

        if ch.is_ascii_digit() {
            let character = self.cursor.peek_nth(1).ok_or_else(|| {
                Error::unexpected_eof(position + 1, "a run character after the count")
            })?;
            let trailing_marker = character == MARKER && self.cursor.peek_nth(2) == Some(MARKER);
            let token = EncodedToken {
                leading_marker: false,
                digits: ch.to_string(),
                character,
                trailing_marker,
            };
            check_count(&token, position)?;
            self.cursor.advance(if trailing_marker { 3 } else { 2 });
            return Ok(Step::Emit(token));
        }

        if self.is_trailing_newline(ch) {
            trace!("ignoring trailing newline at {position}");
            self.cursor.advance(1);
            return Ok(Step::Continue);
        }

        Err(Error::malformed(
            position,
            "literal character without a preceding count",
        ))
    }

    fn step_long(&mut self, start: usize, mut digits: String) -> Result<Step> {
        let position = self.cursor.position;
        let Some(ch) = self.cursor.peek() else {
            // A digit run as the last token: no following marker closes it.
            return match split_digit_run(digits) {
                Some(token) => {
                    check_count(&token, start)?;
                    Ok(Step::Emit(token))
                }
                None => Err(Error::unexpected_eof(
                    position,
                    "a run count and character after the escape marker",
                )),
            };
        };

        if ch.is_ascii_digit() {
            digits.push(ch);
            self.cursor.advance(1);
            self.state = State::InLongSequence { start, digits };
            return Ok(Step::Continue);
        }

        if digits.is_empty() {
            if self.is_trailing_newline(ch) {
                trace!("discarding trailing newline after marker at {position}");
                self.cursor.advance(1);
                return Ok(Step::Continue);
            }
            return Err(Error::malformed(
                position,
                "escape marker must be followed by a run count",
            ));
        }

        if ch == MARKER {
            if self.cursor.peek_nth(1) == Some(MARKER) {
                // Run of '#' (doubled marker), possibly also long or after a digit.
                let token = EncodedToken {
                    leading_marker: true,
                    digits,
                    character: MARKER,
                    trailing_marker: true,
                };
                check_count(&token, start)?;
                trace!("closed marker run at {start}");
                self.cursor.advance(2);
                return Ok(Step::Emit(token));
            }

            // The '#' is the next token's leading marker, so the digits held
            // both the count and a digit run character.
            let token = split_digit_run(digits).ok_or_else(|| {
                Error::malformed(position, "digit run is missing its count")
            })?;
            check_count(&token, start)?;
            trace!("closed digit run at {start}, re-entering long sequence");
            self.cursor.advance(1);
            self.state = State::InLongSequence {
                start: position + 1,
                digits: String::new(),
            };
            return Ok(Step::Emit(token));
        }

        let token = EncodedToken {
            leading_marker: true,
            digits,
            character: ch,
            trailing_marker: false,
        };
        check_count(&token, start)?;
        trace!("closed long sequence at {start}");
        self.cursor.advance(1);
        Ok(Step::Emit(token))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<EncodedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            match self.step() {
                Ok(Step::Emit(token)) => return Some(Ok(token)),
                Ok(Step::Continue) => continue,
                Ok(Step::End) => return None,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Splits `count ++ digit` into a token for a run of that digit.
fn split_digit_run(mut digits: String) -> Option<EncodedToken> {
    if digits.len() < 2 {
        return None;
    }
    let character = digits.pop()?;
    Some(EncodedToken {
        leading_marker: true,
        digits,
        character,
        trailing_marker: false,
    })
}

fn check_count(token: &EncodedToken, position: usize) -> Result<()> {
    token.count().map(|_| ()).map_err(|_| {
        Error::malformed(
            position,
            "run count must be a positive integer that fits in usize",
        )
    })
}

/// Scans `input` into its ordered sequence of encoded tokens.
///
/// # Errors
///
/// Returns a malformed-encoding error carrying the offending position;
/// nothing is returned for the part scanned before it.
pub fn scan(input: &str) -> Result<Vec<EncodedToken>> {
    Scanner::new(input).collect()
}

/// Scans `input` with the given options.
///
/// # Errors
///
/// See [`scan`].
pub fn scan_with_options(input: &str, options: &CodecOptions) -> Result<Vec<EncodedToken>> {
    Scanner::with_options(input, options).collect()
}
