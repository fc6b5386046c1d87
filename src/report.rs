//! Before/after size reporting.

use serde::Serialize;
use std::fmt;

/// Direction of a codec invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

/// Byte lengths before and after a codec pass, and the compression ratio.
///
/// The ratio always compares decoded size to encoded size, so it is the
/// same figure whichever direction produced it.
///
/// # Examples
///
/// ```rust
/// use hashrle::{CompressionReport, Mode};
///
/// let report = CompressionReport::new(Mode::Encode, 10, 4);
/// assert_eq!(report.ratio(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionReport {
    pub mode: Mode,
    pub original_len: usize,
    pub new_len: usize,
    ratio: f64,
}

impl CompressionReport {
    #[must_use]
    pub fn new(mode: Mode, original_len: usize, new_len: usize) -> Self {
        let (decoded, encoded) = match mode {
            Mode::Encode => (original_len, new_len),
            Mode::Decode => (new_len, original_len),
        };
        let ratio = if encoded == 0 {
            if decoded == 0 {
                1.0
            } else {
                f64::INFINITY
            }
        } else {
            decoded as f64 / encoded as f64
        };
        CompressionReport {
            mode,
            original_len,
            new_len,
            ratio,
        }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original file length: {}", self.original_len)?;
        writeln!(f, "New length: {}", self.new_len)?;
        write!(f, "Compression ratio: {:.6}", self.ratio)
    }
}
