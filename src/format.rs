//! Encoded Text Format
//!
//! This module documents the run-length text format implemented by this
//! library.
//!
//! # Overview
//!
//! Text is split into maximal runs of one repeated character. Each run is
//! written as its decimal count followed by the character:
//!
//! ```text
//! aaabcc  ->  3a1b2c
//! ```
//!
//! Counts are variable-length and the character may itself be a digit, so
//! three situations would make the encoded text ambiguous. Each is resolved
//! with the marker character `#`.
//!
//! # Escape Cases
//!
//! | Case | Condition | Marker | Example |
//! |------|-----------|--------|---------|
//! | A | count ≥ 10 | leading `#` | `aaaaaaaaaa` → `#10a` |
//! | B | the character is `#` | trailing `#` | `###` → `3##` |
//! | C | the previous run's character is a digit | leading `#` | `111aa` → `31#2a` |
//!
//! Cases combine freely. A token carries at most one leading marker even
//! when both A and C apply:
//!
//! ```text
//! 1 followed by fifteen '#'   ->  11#15##
//! ```
//!
//! Case C is conservative: a digit run forces a marker on its successor even
//! when the digit run's own count is a single digit.
//!
//! # Grammar
//!
//! ```text
//! encoded := token*
//! token   := ['#'] count char ['#']
//! count   := digit+            (no leading '#' means exactly one digit)
//! ```
//!
//! - The leading `#` is present exactly when case A or C applies.
//! - The trailing `#` is present exactly when `char` is `#`.
//! - When `char` is a digit and the token has a leading marker, the count
//!   and the character form one digit string. The token ends where the next
//!   token's leading `#` begins (case C guarantees that marker), or at the
//!   end of the buffer.
//!
//! # Decoding Rules
//!
//! Outside a token with a leading marker, the scanner expects either `#` or
//! a single count digit followed by the character. Any other character is a
//! literal without a count and is rejected with its position, except a
//! single `\n` as the very last character (editors commonly append one), which
//! is ignored unless [`CodecOptions::with_trailing_newline`] disables it.
//!
//! # Round Trip
//!
//! For every text `T`, `decode(encode(T)) == T`. Encoded text is ordinary
//! text, so it may be encoded again; decoding as many times as it was
//! encoded recovers the original.
//!
//! [`CodecOptions::with_trailing_newline`]: crate::CodecOptions::with_trailing_newline

// This module contains only documentation; no implementation code
