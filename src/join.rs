//! Recombining sequences of segments into text.
//!
//! Two interleave flavors exist: [`join`] keeps every piece, so joining a
//! [`SplitOptions::NONE`] split with its own delimiter reconstructs the
//! source exactly, and [`join_non_empty`] skips empty pieces so delimiters
//! never double up around them. Both are lazy; [`join_to_string`] is the
//! materializing form and the one allocation point.

use core::iter::FusedIterator;

use crate::common::{panic_display, SegmentError};
use crate::compare::Comparison;
use crate::{Segment, SplitOptions};

/// Interleaves `between` between every adjacent pair of pieces, empty pieces
/// included.
///
/// The result is itself a lazy sequence of segments; nothing is copied.
///
/// # Examples
///
/// ```
/// # use segstr::{join, Segment};
/// let pieces = [Segment::new("a"), Segment::new(""), Segment::new("b")];
/// let parts: Vec<_> = join(pieces, "-").collect();
/// assert_eq!(parts, ["a", "-", "", "-", "b"]);
/// ```
pub fn join<'b, I>(pieces: I, between: impl Into<Segment<'b>>) -> Join<'b, I::IntoIter>
where
    I: IntoIterator<Item = Segment<'b>>,
{
    Join {
        pieces: pieces.into_iter(),
        between: between.into(),
        pending: None,
        started: false,
        skip_empty: false,
    }
}

/// Interleaves `between` between successive non-empty pieces; empty pieces
/// are skipped entirely so delimiters do not double up around them.
///
/// # Examples
///
/// ```
/// # use segstr::{join_non_empty, Segment};
/// let pieces = [Segment::new("a"), Segment::new(""), Segment::new("b")];
/// let parts: Vec<_> = join_non_empty(pieces, "-").collect();
/// assert_eq!(parts, ["a", "-", "b"]);
/// ```
pub fn join_non_empty<'b, I>(pieces: I, between: impl Into<Segment<'b>>) -> Join<'b, I::IntoIter>
where
    I: IntoIterator<Item = Segment<'b>>,
{
    Join {
        pieces: pieces.into_iter(),
        between: between.into(),
        pending: None,
        started: false,
        skip_empty: true,
    }
}

/// Materializes pieces into one owned string with `between` between every
/// adjacent pair.
///
/// This is the allocating counterpart of [`join`]; joining a
/// [`SplitOptions::NONE`] split with its own delimiter reconstructs the
/// source.
///
/// # Examples
///
/// ```
/// # use segstr::{join_to_string, Segment, SplitOptions};
/// let seg = Segment::new("a,b,,c");
/// let rebuilt = join_to_string(seg.split(',', SplitOptions::NONE), ",");
/// assert_eq!(rebuilt, "a,b,,c");
/// ```
pub fn join_to_string<'b, I, S>(pieces: I, between: S) -> String
where
    I: IntoIterator<Item = Segment<'b>>,
    S: AsRef<str>,
{
    let between = between.as_ref();
    let mut out = String::new();
    for (i, piece) in pieces.into_iter().enumerate() {
        if i > 0 {
            out.push_str(between);
        }
        out.push_str(piece.as_str());
    }
    out
}

impl<'b> Segment<'b> {
    /// Replaces every occurrence of `needle` with `replacement`, under a
    /// comparison mode.
    ///
    /// Defined compositionally: the source is split on `needle` with
    /// [`SplitOptions::NONE`] and the pieces are joined back with
    /// `replacement` as the delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::NoBuffer`] on the invalid segment and
    /// [`SegmentError::EmptyDelimiter`] for an empty needle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::{Comparison, Segment};
    /// let seg = Segment::new("Hello world world");
    /// let replaced = seg.try_replace("world", "universe", Comparison::Ordinal)?;
    /// assert_eq!(replaced, "Hello universe universe");
    /// # Ok::<(), segstr::SegmentError>(())
    /// ```
    pub fn try_replace(
        &self,
        needle: &str,
        replacement: &str,
        comparison: Comparison,
    ) -> Result<String, SegmentError> {
        let pieces = self.try_split_str(needle, SplitOptions::NONE, comparison)?;
        Ok(join_to_string(pieces, replacement))
    }

    /// Replaces every occurrence of `needle` with `replacement`.
    ///
    /// # Panics
    ///
    /// Panics on the invalid segment or an empty needle.
    #[must_use]
    #[track_caller]
    pub fn replace(&self, needle: &str, replacement: &str, comparison: Comparison) -> String {
        self.try_replace(needle, replacement, comparison)
            .unwrap_or_else(panic_display)
    }
}

/// Lazy interleaving of a delimiter segment between pieces, produced by
/// [`join`] and [`join_non_empty`].
#[derive(Clone, Debug)]
#[must_use]
pub struct Join<'b, I> {
    pieces: I,
    between: Segment<'b>,
    pending: Option<Segment<'b>>,
    started: bool,
    skip_empty: bool,
}

impl<'b, I> Iterator for Join<'b, I>
where
    I: Iterator<Item = Segment<'b>>,
{
    type Item = Segment<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(piece) = self.pending.take() {
            return Some(piece);
        }
        loop {
            let piece = self.pieces.next()?;
            if self.skip_empty && piece.is_empty() {
                continue;
            }
            if self.started {
                self.pending = Some(piece);
                return Some(self.between);
            }
            self.started = true;
            return Some(piece);
        }
    }
}

impl<'b, I> FusedIterator for Join<'b, I> where I: FusedIterator<Item = Segment<'b>> {}
