//! Lazy segmentation of a buffer by character, sequence, or pattern
//! delimiters.
//!
//! All splits are lazy: segments are produced one at a time as the consumer
//! pulls, and abandoning the iterator early does no work beyond the last
//! pull. Eager materialization is an explicit `.collect::<Vec<_>>()` by the
//! caller.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{BitOr, BitOrAssign};

use regex::Regex;

use crate::common::{panic_display, SegmentError};
use crate::compare::Comparison;
use crate::pattern::{bump, CharFinder, CharPattern, Finder, RegexFinder, StrFinder};
use crate::Segment;

/// Policy controlling what a split does with the segments it produces.
///
/// Combine flags with `|`:
///
/// ```
/// # use segstr::SplitOptions;
/// let options = SplitOptions::REMOVE_EMPTY | SplitOptions::TRIM;
/// assert!(options.removes_empty());
/// assert!(options.trims());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SplitOptions(u8);

impl SplitOptions {
    /// Keep every gap between delimiters, empty ones included.
    pub const NONE: Self = Self(0);

    /// Omit zero-length segments entirely.
    pub const REMOVE_EMPTY: Self = Self(1 << 0);

    /// Whitespace-trim each segment, before the empty check.
    pub const TRIM: Self = Self(1 << 1);

    /// Returns `true` if zero-length segments are omitted.
    #[inline]
    #[must_use]
    pub const fn removes_empty(self) -> bool {
        self.0 & Self::REMOVE_EMPTY.0 != 0
    }

    /// Returns `true` if segments are whitespace-trimmed.
    #[inline]
    #[must_use]
    pub const fn trims(self) -> bool {
        self.0 & Self::TRIM.0 != 0
    }
}

impl BitOr for SplitOptions {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SplitOptions {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SplitOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            return f.write_str("NONE");
        }
        let mut sep = "";
        if self.removes_empty() {
            f.write_str("REMOVE_EMPTY")?;
            sep = " | ";
        }
        if self.trims() {
            f.write_str(sep)?;
            f.write_str("TRIM")?;
        }
        Ok(())
    }
}

impl<'b> Segment<'b> {
    /// Splits this segment around occurrences of a character pattern: a
    /// [`char`], a `&[char]` set, or a `FnMut(char) -> bool` predicate.
    ///
    /// The returned iterator is lazy and restartable (`Clone` keeps an
    /// independent position). With [`SplitOptions::NONE`], splitting an
    /// empty segment yields exactly one empty segment; with
    /// [`SplitOptions::REMOVE_EMPTY`], it yields nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::NoBuffer`] on the invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::{Segment, SplitOptions};
    /// let seg = Segment::new("Hello,there,,I,am,Joe");
    ///
    /// let parts: Vec<_> = seg.try_split(',', SplitOptions::NONE)?.collect();
    /// assert_eq!(parts, ["Hello", "there", "", "I", "am", "Joe"]);
    ///
    /// let parts: Vec<_> = seg.try_split(',', SplitOptions::REMOVE_EMPTY)?.collect();
    /// assert_eq!(parts, ["Hello", "there", "I", "am", "Joe"]);
    /// # Ok::<(), segstr::SegmentError>(())
    /// ```
    pub fn try_split<P>(
        &self,
        pattern: P,
        options: SplitOptions,
    ) -> Result<Split<'b, CharFinder<P>>, SegmentError>
    where
        P: CharPattern,
    {
        if !self.has_value() {
            return Err(SegmentError::NoBuffer);
        }
        Ok(Split::new(*self, CharFinder(pattern), options))
    }

    /// Splits this segment around occurrences of a character pattern.
    ///
    /// # Panics
    ///
    /// Panics on the invalid segment.
    #[track_caller]
    pub fn split<P>(&self, pattern: P, options: SplitOptions) -> Split<'b, CharFinder<P>>
    where
        P: CharPattern,
    {
        self.try_split(pattern, options).unwrap_or_else(panic_display)
    }

    /// Splits this segment around occurrences of a fixed character sequence
    /// under a comparison mode.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::NoBuffer`] on the invalid segment and
    /// [`SegmentError::EmptyDelimiter`] for a zero-length delimiter — both
    /// raised before any segment is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::{Comparison, Segment, SplitOptions};
    /// let seg = Segment::new("oneSTOPtwoStopthree");
    /// let parts: Vec<_> = seg
    ///     .try_split_str("stop", SplitOptions::NONE, Comparison::IgnoreCase)?
    ///     .collect();
    /// assert_eq!(parts, ["one", "two", "three"]);
    /// # Ok::<(), segstr::SegmentError>(())
    /// ```
    pub fn try_split_str<'n>(
        &self,
        delimiter: &'n str,
        options: SplitOptions,
        comparison: Comparison,
    ) -> Result<Split<'b, StrFinder<'n>>, SegmentError> {
        if !self.has_value() {
            return Err(SegmentError::NoBuffer);
        }
        if delimiter.is_empty() {
            return Err(SegmentError::EmptyDelimiter);
        }
        Ok(Split::new(
            *self,
            StrFinder::new(delimiter, comparison),
            options,
        ))
    }

    /// Splits this segment around occurrences of a fixed character sequence.
    ///
    /// # Panics
    ///
    /// Panics on the invalid segment or a zero-length delimiter.
    #[track_caller]
    pub fn split_str<'n>(
        &self,
        delimiter: &'n str,
        options: SplitOptions,
        comparison: Comparison,
    ) -> Split<'b, StrFinder<'n>> {
        self.try_split_str(delimiter, options, comparison)
            .unwrap_or_else(panic_display)
    }

    /// Splits this segment around matches of a regular expression.
    ///
    /// Zero-width matches advance at least one scalar, so the split always
    /// makes progress. The empty-entry policy applies as for the other
    /// splits.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::NoBuffer`] on the invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use regex::Regex;
    /// # use segstr::{Segment, SplitOptions};
    /// let re = Regex::new(r"\s*,\s*").unwrap();
    /// let seg = Segment::new("a , b,c ,  d");
    /// let parts: Vec<_> = seg.try_split_regex(&re, SplitOptions::NONE)?.collect();
    /// assert_eq!(parts, ["a", "b", "c", "d"]);
    /// # Ok::<(), segstr::SegmentError>(())
    /// ```
    pub fn try_split_regex<'r>(
        &self,
        regex: &'r Regex,
        options: SplitOptions,
    ) -> Result<Split<'b, RegexFinder<'r>>, SegmentError> {
        if !self.has_value() {
            return Err(SegmentError::NoBuffer);
        }
        Ok(Split::new(*self, RegexFinder(regex), options))
    }

    /// Splits this segment around matches of a regular expression.
    ///
    /// # Panics
    ///
    /// Panics on the invalid segment.
    #[track_caller]
    pub fn split_regex<'r>(
        &self,
        regex: &'r Regex,
        options: SplitOptions,
    ) -> Split<'b, RegexFinder<'r>> {
        self.try_split_regex(regex, options)
            .unwrap_or_else(panic_display)
    }
}

/// Lazy iterator over the segments between successive delimiter occurrences,
/// produced by [`Segment::try_split`] and friends.
///
/// Restartable: `Clone` keeps an independent position, so a cloned split can
/// be consumed from scratch or in parallel. Fused: once exhausted it stays
/// exhausted.
#[derive(Clone, Debug)]
#[must_use]
pub struct Split<'b, F> {
    source: Segment<'b>,
    finder: F,
    options: SplitOptions,
    cursor: usize,
    search: usize,
    done: bool,
}

impl<'b, F> Split<'b, F> {
    pub(crate) fn new(source: Segment<'b>, finder: F, options: SplitOptions) -> Self {
        Self {
            source,
            finder,
            options,
            cursor: 0,
            search: 0,
            done: false,
        }
    }

    /// Returns the split segment.
    pub const fn source(&self) -> Segment<'b> {
        self.source
    }

    /// Returns the split policy.
    pub const fn options(&self) -> SplitOptions {
        self.options
    }
}

impl<'b, F> Iterator for Split<'b, F>
where
    F: Finder,
{
    type Item = Segment<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        let haystack = self.source.as_str();
        while !self.done {
            let piece = match self.finder.next_match(haystack, self.search) {
                Some(m) => {
                    let piece = self.cursor..m.start;
                    self.cursor = m.end;
                    self.search = if m.is_empty() { bump(haystack, m.end) } else { m.end };
                    piece
                }
                None => {
                    self.done = true;
                    self.cursor..haystack.len()
                }
            };
            let mut segment = self.source.window_rel(piece);
            if self.options.trims() {
                segment = segment.trim();
            }
            if self.options.removes_empty() && segment.is_empty() {
                continue;
            }
            return Some(segment);
        }
        None
    }
}

impl<F> FusedIterator for Split<'_, F> where F: Finder {}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use crate::{Comparison, Segment, SegmentError, SplitOptions};

    fn collect<'b>(split: impl Iterator<Item = Segment<'b>>) -> Vec<&'b str> {
        split.map(|seg| seg.as_str()).collect()
    }

    #[test]
    fn test_split_char() {
        let seg = Segment::new("Hello,there,,I,am,Joe");
        assert_eq!(
            collect(seg.split(',', SplitOptions::NONE)),
            ["Hello", "there", "", "I", "am", "Joe"]
        );
        assert_eq!(
            collect(seg.split(',', SplitOptions::REMOVE_EMPTY)),
            ["Hello", "there", "I", "am", "Joe"]
        );
    }

    #[test]
    fn test_split_offsets() {
        let seg = Segment::new("ab,cd");
        let parts: Vec<_> = seg.split(',', SplitOptions::NONE).collect();
        assert_eq!(parts[0].offset(), 0);
        assert_eq!(parts[1].offset(), 3);
        assert_eq!(parts[1].len(), 2);
    }

    #[test]
    fn test_split_within_window() {
        let seg = Segment::window("xxa,bxx", 2, 3);
        let parts: Vec<_> = seg.split(',', SplitOptions::NONE).collect();
        assert_eq!(parts, ["a", "b"]);
        assert_eq!(parts[1].offset(), 4);
    }

    #[test]
    fn test_split_empty_source() {
        let seg = Segment::new("");
        assert_eq!(collect(seg.split(',', SplitOptions::NONE)), [""]);
        assert!(collect(seg.split(',', SplitOptions::REMOVE_EMPTY)).is_empty());
    }

    #[test]
    fn test_split_edge_delimiters() {
        let seg = Segment::new(",a,");
        assert_eq!(collect(seg.split(',', SplitOptions::NONE)), ["", "a", ""]);
        assert_eq!(collect(seg.split(',', SplitOptions::REMOVE_EMPTY)), ["a"]);

        let seg = Segment::new(",");
        assert_eq!(collect(seg.split(',', SplitOptions::NONE)), ["", ""]);
    }

    #[test]
    fn test_split_char_set_and_predicate() {
        let seg = Segment::new("a-b;c");
        assert_eq!(
            collect(seg.split(&['-', ';'], SplitOptions::NONE)),
            ["a", "b", "c"]
        );
        assert_eq!(
            collect(seg.split(|ch: char| ch.is_ascii_punctuation(), SplitOptions::NONE)),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_split_trim() {
        let seg = Segment::new(" a , b ,, c ");
        assert_eq!(
            collect(seg.split(',', SplitOptions::TRIM)),
            ["a", "b", "", "c"]
        );
        assert_eq!(
            collect(seg.split(',', SplitOptions::TRIM | SplitOptions::REMOVE_EMPTY)),
            ["a", "b", "c"]
        );
        // whitespace-only entries survive without TRIM
        assert_eq!(
            collect(seg.split(',', SplitOptions::REMOVE_EMPTY)),
            [" a ", " b ", " c "]
        );
    }

    #[test]
    fn test_split_invalid_source() {
        let invalid = Segment::invalid();
        assert_eq!(
            invalid.try_split(',', SplitOptions::NONE).unwrap_err(),
            SegmentError::NoBuffer
        );
        assert_eq!(
            invalid
                .try_split_str(",", SplitOptions::NONE, Comparison::Ordinal)
                .unwrap_err(),
            SegmentError::NoBuffer
        );
    }

    #[test]
    fn test_split_str() {
        let seg = Segment::new("one::two::::three");
        assert_eq!(
            collect(seg.split_str("::", SplitOptions::NONE, Comparison::Ordinal)),
            ["one", "two", "", "three"]
        );
        assert_eq!(
            collect(seg.split_str("::", SplitOptions::REMOVE_EMPTY, Comparison::Ordinal)),
            ["one", "two", "three"]
        );
    }

    #[test]
    fn test_split_str_ignore_case() {
        let seg = Segment::new("oneSTOPtwoStopthree");
        assert_eq!(
            collect(seg.split_str("stop", SplitOptions::NONE, Comparison::IgnoreCase)),
            ["one", "two", "three"]
        );
        assert_eq!(
            collect(seg.split_str("stop", SplitOptions::NONE, Comparison::Ordinal)),
            ["oneSTOPtwoStopthree"]
        );
    }

    #[test]
    fn test_split_str_empty_delimiter() {
        let seg = Segment::new("abc");
        let err = seg
            .try_split_str("", SplitOptions::NONE, Comparison::Ordinal)
            .unwrap_err();
        assert_eq!(err, SegmentError::EmptyDelimiter);
    }

    #[test]
    fn test_split_regex() {
        let re = Regex::new(r"\s*,\s*").unwrap();
        let seg = Segment::new("a , b,c ,  d");
        assert_eq!(
            collect(seg.split_regex(&re, SplitOptions::NONE)),
            ["a", "b", "c", "d"]
        );
    }

    #[test]
    fn test_split_regex_empty_entries() {
        let re = Regex::new(",").unwrap();
        let seg = Segment::new("a,,b");
        assert_eq!(collect(seg.split_regex(&re, SplitOptions::NONE)), ["a", "", "b"]);
        assert_eq!(
            collect(seg.split_regex(&re, SplitOptions::REMOVE_EMPTY)),
            ["a", "b"]
        );
    }

    #[test]
    fn test_split_regex_zero_width() {
        // a zero-width match advances at least one scalar
        let re = Regex::new(r"\b").unwrap();
        let seg = Segment::new("hi yo");
        assert_eq!(
            collect(seg.split_regex(&re, SplitOptions::NONE)),
            ["", "hi", " ", "yo", ""]
        );
        assert_eq!(
            collect(seg.split_regex(&re, SplitOptions::REMOVE_EMPTY)),
            ["hi", " ", "yo"]
        );
    }

    #[test]
    fn test_split_multibyte_delimiter() {
        let seg = Segment::new("a→b→c");
        assert_eq!(collect(seg.split('→', SplitOptions::NONE)), ["a", "b", "c"]);
        let parts: Vec<_> = seg.split('→', SplitOptions::NONE).collect();
        assert_eq!(parts[1].offset(), 4);
    }

    #[test]
    fn test_split_restartable() {
        let seg = Segment::new("a,b,c");
        let mut split = seg.split(',', SplitOptions::NONE);
        assert_eq!(split.next().unwrap(), "a");

        let replay = split.clone();
        assert_eq!(collect(split), ["b", "c"]);
        assert_eq!(collect(replay), ["b", "c"]);
    }

    #[test]
    fn test_split_early_abandon() {
        let seg = Segment::new("first,second,third");
        let first = seg.split(',', SplitOptions::NONE).next().unwrap();
        assert_eq!(first, "first");
    }

    #[test]
    fn test_eager_lazy_equivalence() {
        let seg = Segment::new(",a,,bb, c ,");
        for options in [
            SplitOptions::NONE,
            SplitOptions::REMOVE_EMPTY,
            SplitOptions::TRIM,
            SplitOptions::TRIM | SplitOptions::REMOVE_EMPTY,
        ] {
            let eager: Vec<_> = seg.split(',', options).collect();
            let mut lazy = seg.split(',', options);
            let mut pulled = Vec::new();
            while let Some(piece) = lazy.next() {
                pulled.push(piece);
            }
            assert_eq!(eager, pulled, "mismatch for {options:?}");
        }
    }

    #[test]
    fn test_options_debug() {
        assert_eq!(format!("{:?}", SplitOptions::NONE), "NONE");
        assert_eq!(format!("{:?}", SplitOptions::REMOVE_EMPTY), "REMOVE_EMPTY");
        assert_eq!(
            format!("{:?}", SplitOptions::REMOVE_EMPTY | SplitOptions::TRIM),
            "REMOVE_EMPTY | TRIM"
        );
    }
}
