use std::fmt;

use crate::error::{Error, Result};

/// A 1-based inclusive interval on the loaded sequence.
///
/// `parse_range` is the checked constructor: it guarantees
/// `1 <= start <= end <= len` for the sequence it was given. Values built
/// directly from the fields are not checked, and `splice` panics on one
/// that falls outside its sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Number of bases covered.
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// 0-based half-open bounds for slicing.
    #[inline]
    pub fn to_zero_based(&self) -> (usize, usize) {
        (self.start - 1, self.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Parse `start-end` against a sequence of `seq_len` bases.
pub fn parse_range(seq_len: usize, text: &str) -> Result<Range> {
    let mut parts = text.split('-');
    let (start, end) = match (parts.next(), parts.next(), parts.next()) {
        (Some(s), Some(e), None) => (parse_index(s)?, parse_index(e)?),
        _ => {
            return Err(Error::Range(format!(
                "Range must be two whole numbers separated by '-' (got '{}')",
                text
            )))
        }
    };

    if end < start {
        return Err(Error::Range("End value cannot be smaller than start value".to_string()));
    }
    if start < 1 || end < 1 {
        return Err(Error::Range("DNA indexing starts at 1".to_string()));
    }
    if end > seq_len as i64 {
        return Err(Error::Range(format!(
            "End value exceeds the length of the input sequence's {} bp",
            seq_len
        )));
    }

    Ok(Range {
        start: start as usize,
        end: end as usize,
    })
}

fn parse_index(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| Error::Range(format!("'{}' is not a whole number", s)))
}
