//! Occurrence search and relative views around a match.

use core::iter::FusedIterator;

use regex::Regex;

use crate::compare::{self, Comparison};
use crate::pattern::{bump, Finder, RegexFinder, StrFinder};
use crate::Segment;

impl<'b> Segment<'b> {
    /// Returns the first occurrence of `needle` (ordinal) as a segment
    /// spanning exactly the matched text, or `None`.
    ///
    /// An empty needle always matches with zero length at the window start.
    /// Searching the invalid segment finds nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let text = Segment::new("Hello well how are you");
    /// let m = text.find_first("well how").unwrap();
    /// assert_eq!(m, "well how");
    /// assert_eq!(m.offset(), 6);
    /// assert!(text.find_first("badly").is_none());
    /// ```
    #[must_use]
    pub fn find_first(&self, needle: &str) -> Option<Segment<'b>> {
        self.find_first_with(needle, Comparison::Ordinal)
    }

    /// Returns the first occurrence of `needle` under a comparison mode.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::{Comparison, Segment};
    /// let text = Segment::new("One TWO three");
    /// let m = text.find_first_with("two", Comparison::IgnoreCase).unwrap();
    /// assert_eq!(m, "TWO");
    /// ```
    #[must_use]
    pub fn find_first_with(&self, needle: &str, comparison: Comparison) -> Option<Segment<'b>> {
        let value = self.value()?;
        compare::find_from(value, 0, needle, comparison).map(|range| self.window_rel(range))
    }

    /// Returns the last occurrence of `needle` (ordinal), or `None`.
    ///
    /// An empty needle always matches with zero length at the window end.
    #[must_use]
    pub fn find_last(&self, needle: &str) -> Option<Segment<'b>> {
        self.find_last_with(needle, Comparison::Ordinal)
    }

    /// Returns the last occurrence of `needle` under a comparison mode.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let text = Segment::new("ab ab ab");
    /// assert_eq!(text.find_last("ab").unwrap().offset(), 6);
    /// ```
    #[must_use]
    pub fn find_last_with(&self, needle: &str, comparison: Comparison) -> Option<Segment<'b>> {
        let value = self.value()?;
        compare::rfind(value, needle, comparison).map(|range| self.window_rel(range))
    }

    /// Returns a cursor over successive non-overlapping occurrences of
    /// `needle` (ordinal), left to right.
    ///
    /// The cursor is restartable (`Clone` keeps an independent position) and
    /// fused: once exhausted it stays exhausted, there is no wraparound. An
    /// empty needle matches with zero width at every char boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let seg = Segment::new("aaaa");
    /// let mut hits = seg.occurrences("aa");
    /// assert_eq!(hits.next().unwrap().offset(), 0);
    /// assert_eq!(hits.next().unwrap().offset(), 2);
    /// assert!(hits.next().is_none());
    /// assert!(hits.next().is_none());
    /// ```
    #[must_use]
    pub fn occurrences<'n>(&self, needle: &'n str) -> Occurrences<'b, StrFinder<'n>> {
        self.occurrences_with(needle, Comparison::Ordinal)
    }

    /// Returns a cursor over occurrences of `needle` under a comparison
    /// mode.
    #[must_use]
    pub fn occurrences_with<'n>(
        &self,
        needle: &'n str,
        comparison: Comparison,
    ) -> Occurrences<'b, StrFinder<'n>> {
        Occurrences::new(*self, StrFinder::new(needle, comparison))
    }

    /// Returns a cursor over occurrences of a regular expression.
    ///
    /// Zero-width matches advance at least one scalar, so the cursor always
    /// terminates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use regex::Regex;
    /// # use segstr::Segment;
    /// let re = Regex::new(r"\d+").unwrap();
    /// let seg = Segment::new("a1b22c333");
    /// let hits: Vec<_> = seg.occurrences_regex(&re).collect();
    /// assert_eq!(hits, ["1", "22", "333"]);
    /// ```
    #[must_use]
    pub fn occurrences_regex<'r>(&self, regex: &'r Regex) -> Occurrences<'b, RegexFinder<'r>> {
        Occurrences::new(*self, RegexFinder(regex))
    }

    /// Returns the text strictly before this segment in its buffer.
    ///
    /// The invalid segment yields itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let text = Segment::new("Hello well how are you");
    /// let m = text.find_first("well how").unwrap();
    /// assert_eq!(m.preceding(), "Hello ");
    /// assert_eq!(m.following(), " are you");
    /// ```
    #[must_use]
    pub fn preceding(&self) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => Self::from_raw_parts(buffer, 0, self.offset()),
            None => *self,
        }
    }

    /// Returns at most `max_chars` characters immediately before this
    /// segment, clamped at the buffer start.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let text = Segment::new("Hello well how are you");
    /// let m = text.find_first("well").unwrap();
    /// assert_eq!(m.preceding_bounded(3), "lo ");
    /// assert_eq!(m.preceding_bounded(100), "Hello ");
    /// ```
    #[must_use]
    pub fn preceding_bounded(&self, max_chars: usize) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => {
                let start = back_by_chars(buffer, self.offset(), max_chars);
                Self::from_raw_parts(buffer, start, self.offset() - start)
            }
            None => *self,
        }
    }

    /// Returns the text before this segment together with the segment
    /// itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let text = Segment::new("Hello well how are you");
    /// let m = text.find_first("well how").unwrap();
    /// assert_eq!(m.with_preceding(), "Hello well how");
    /// ```
    #[must_use]
    pub fn with_preceding(&self) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => Self::from_raw_parts(buffer, 0, self.end()),
            None => *self,
        }
    }

    /// Returns this segment widened by at most `max_chars` characters before
    /// it, clamped at the buffer start.
    #[must_use]
    pub fn with_preceding_bounded(&self, max_chars: usize) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => {
                let start = back_by_chars(buffer, self.offset(), max_chars);
                Self::from_raw_parts(buffer, start, self.end() - start)
            }
            None => *self,
        }
    }

    /// Returns the text strictly after this segment in its buffer.
    ///
    /// The invalid segment yields itself.
    #[must_use]
    pub fn following(&self) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => Self::from_raw_parts(buffer, self.end(), buffer.len() - self.end()),
            None => *self,
        }
    }

    /// Returns at most `max_chars` characters immediately after this
    /// segment, clamped at the buffer end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let text = Segment::new("Hello well how are you");
    /// let m = text.find_first("well").unwrap();
    /// assert_eq!(m.following_bounded(4), " how");
    /// assert_eq!(m.following_bounded(100), " how are you");
    /// ```
    #[must_use]
    pub fn following_bounded(&self, max_chars: usize) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => {
                let stop = forward_by_chars(buffer, self.end(), max_chars);
                Self::from_raw_parts(buffer, self.end(), stop - self.end())
            }
            None => *self,
        }
    }

    /// Returns this segment together with the text after it.
    #[must_use]
    pub fn with_following(&self) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => {
                Self::from_raw_parts(buffer, self.offset(), buffer.len() - self.offset())
            }
            None => *self,
        }
    }

    /// Returns this segment widened by at most `max_chars` characters after
    /// it, clamped at the buffer end.
    #[must_use]
    pub fn with_following_bounded(&self, max_chars: usize) -> Segment<'b> {
        match self.buffer() {
            Some(buffer) => {
                let stop = forward_by_chars(buffer, self.end(), max_chars);
                Self::from_raw_parts(buffer, self.offset(), stop - self.offset())
            }
            None => *self,
        }
    }
}

/// Char boundary at most `count` characters before `from`.
fn back_by_chars(buffer: &str, from: usize, count: usize) -> usize {
    let mut start = from;
    for (i, _) in buffer[..from].char_indices().rev().take(count) {
        start = i;
    }
    start
}

/// Char boundary at most `count` characters after `from`.
fn forward_by_chars(buffer: &str, from: usize, count: usize) -> usize {
    buffer[from..]
        .char_indices()
        .nth(count)
        .map_or(buffer.len(), |(i, _)| from + i)
}

/// A restartable cursor over the non-overlapping occurrences of a pattern in
/// a segment, produced by [`Segment::occurrences`] and friends.
///
/// Advancing past the last occurrence yields a terminal not-found state
/// permanently. Independent cursors over the same buffer never interfere.
#[derive(Clone, Debug)]
#[must_use]
pub struct Occurrences<'b, F> {
    source: Segment<'b>,
    finder: F,
    search: usize,
    done: bool,
}

impl<'b, F> Occurrences<'b, F> {
    pub(crate) fn new(source: Segment<'b>, finder: F) -> Self {
        Self {
            source,
            finder,
            search: 0,
            done: !source.has_value(),
        }
    }

    /// Returns the searched segment.
    pub const fn source(&self) -> Segment<'b> {
        self.source
    }
}

impl<'b, F> Iterator for Occurrences<'b, F>
where
    F: Finder,
{
    type Item = Segment<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let haystack = self.source.as_str();
        match self.finder.next_match(haystack, self.search) {
            Some(m) => {
                self.search = if m.is_empty() { bump(haystack, m.end) } else { m.end };
                Some(self.source.window_rel(m))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<F> FusedIterator for Occurrences<'_, F> where F: Finder {}
