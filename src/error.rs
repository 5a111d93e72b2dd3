//! Range validation for the public entry points.
//!
//! A bad range or middle position is a bug in the caller, not something the algorithms recover
//! from. The entry points therefore panic with the [`RangeError`] message. Callers that build
//! ranges from untrusted input can run [`check_range`] or [`check_rotation`] first and handle the
//! error themselves.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Range;

/// Describes why a range or rotation point does not fit a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The range starts behind its end.
    InvertedRange {
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
    },

    /// The range reaches past the end of the sequence.
    OutOfBounds {
        /// Exclusive end of the range.
        end: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// The rotation point lies outside of `start..=end`.
    MiddleOutOfRange {
        /// The requested rotation point.
        middle: usize,
        /// Inclusive start of the range.
        start: usize,
        /// Exclusive end of the range.
        end: usize,
    },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { start, end } => {
                write!(f, "Invalid range: start {start} is greater than end {end}")
            }
            Self::OutOfBounds { end, len } => {
                write!(f, "Range end {end} out of bounds for sequence of length {len}")
            }
            Self::MiddleOutOfRange { middle, start, end } => {
                write!(f, "Rotation point {middle} outside of range {start}..{end}")
            }
        }
    }
}

impl Error for RangeError {}

/// Checks that `range` is ordered and lies within a sequence of length `len`.
pub fn check_range(len: usize, range: &Range<usize>) -> Result<(), RangeError> {
    if range.start > range.end {
        return Err(RangeError::InvertedRange {
            start: range.start,
            end: range.end,
        });
    }

    if range.end > len {
        return Err(RangeError::OutOfBounds {
            end: range.end,
            len,
        });
    }

    Ok(())
}

/// Same as [`check_range`], and additionally checks `range.start <= middle <= range.end`.
pub fn check_rotation(len: usize, range: &Range<usize>, middle: usize) -> Result<(), RangeError> {
    check_range(len, range)?;

    if middle < range.start || middle > range.end {
        return Err(RangeError::MiddleOutOfRange {
            middle,
            start: range.start,
            end: range.end,
        });
    }

    Ok(())
}

/// Turns a precondition violation into a panic at the public API boundary.
#[inline]
#[track_caller]
pub(crate) fn expect_valid(res: Result<(), RangeError>) {
    if let Err(err) = res {
        panic!("{err}");
    }
}
