//! Common error types and range plumbing.

use core::ops::{Bound, Range, RangeBounds};

/// Coarse classification of a [`SegmentError`].
///
/// Every error maps to exactly one kind, so callers that only care about the
/// failure class can match on [`SegmentError::kind`] instead of the concrete
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A source buffer is required but absent.
    NullSource,
    /// The operation was configured in a way that can never make progress.
    Configuration,
    /// A window would land outside the valid bounds of the buffer or segment.
    OutOfRange,
    /// A bounds-dependent operation was attempted on the invalid segment.
    InvalidOperation,
}

/// Errors reported by segment construction, windowing, splitting, and
/// replacement.
///
/// All checks are performed eagerly at the call site; no operation in this
/// crate produces a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    /// A non-trivial windowing operation was attempted on the invalid
    /// (no-buffer) segment.
    #[error("segment is detached from any buffer")]
    Detached,

    /// A split or replace requires a source with a backing buffer.
    #[error("source has no backing buffer")]
    NoBuffer,

    /// A zero-length delimiter cannot guarantee forward progress.
    #[error("delimiter is empty")]
    EmptyDelimiter,

    /// The start index overflows `usize` after bound adjustment.
    #[error("start index overflows")]
    StartOverflows,

    /// The end index overflows `usize` after bound adjustment.
    #[error("end index overflows")]
    EndOverflows,

    /// The start index is greater than the end index.
    #[error("start index {start} is greater than end index {end}")]
    StartGreaterThanEnd {
        /// Requested start index.
        start: usize,
        /// Requested end index.
        end: usize,
    },

    /// The end index is out of bounds of the window being sliced.
    #[error("end index {end} is out of bounds for window of length {len}")]
    EndOutOfBounds {
        /// Requested end index.
        end: usize,
        /// Length of the sliced window.
        len: usize,
    },

    /// An index lands inside a UTF-8 scalar value.
    #[error("index {index} is not a char boundary")]
    NotCharBoundary {
        /// Offending byte index.
        index: usize,
    },

    /// A string slice does not point into the segment's buffer.
    #[error("slice does not refer into the segment's buffer")]
    NotASubslice,
}

impl SegmentError {
    /// Returns the coarse [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoBuffer => ErrorKind::NullSource,
            Self::EmptyDelimiter => ErrorKind::Configuration,
            Self::Detached => ErrorKind::InvalidOperation,
            Self::StartOverflows
            | Self::EndOverflows
            | Self::StartGreaterThanEnd { .. }
            | Self::EndOutOfBounds { .. }
            | Self::NotCharBoundary { .. }
            | Self::NotASubslice => ErrorKind::OutOfRange,
        }
    }
}

/// Panics with the provided displayable error message.
///
/// # Panics
///
/// Always panics with the provided error message.
#[track_caller]
pub(crate) fn panic_display<T>(e: impl core::fmt::Display) -> T {
    panic!("{e}");
}

/// Converts any generic range into a concrete `Range<usize>` given a length.
///
/// # Errors
///
/// Returns a [`SegmentError`] if the range is invalid.
pub(crate) fn resolve_range(
    range: impl RangeBounds<usize>,
    len: usize,
) -> Result<Range<usize>, SegmentError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(SegmentError::StartOverflows)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(SegmentError::EndOverflows)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    if start > end {
        Err(SegmentError::StartGreaterThanEnd { start, end })
    } else if end > len {
        Err(SegmentError::EndOutOfBounds { end, len })
    } else {
        Ok(Range { start, end })
    }
}
