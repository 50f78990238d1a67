//! Borrowed, zero-copy string segment.

use core::fmt;
use core::ops::{Range, RangeBounds};

use crate::common::{panic_display, resolve_range, SegmentError};
use crate::pattern::CharPattern;

mod cmp;
mod convert;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

/// A read-only view over a borrowed string buffer, described by a
/// `(buffer, offset, length)` triple.
///
/// A segment never owns character data: it borrows a buffer that must outlive
/// it, which the borrow checker enforces through the `'b` lifetime. Segments
/// are `Copy`; every transformation (narrowing, trimming, boundary moves)
/// returns a new segment over the same buffer and allocates nothing. The only
/// allocating conversion is materializing an owned [`String`] through
/// [`Display`](fmt::Display)/[`ToString`].
///
/// Offsets and lengths are measured in bytes and must lie on [`char`]
/// boundaries; fallible constructors check both.
///
/// # Examples
///
/// ```
/// # use segstr::Segment;
/// let text = "Hello world";
/// let world = Segment::window(text, 6, 5);
/// assert_eq!(world, "world");
/// assert_eq!(world.offset(), 6);
///
/// // Narrowing is relative to the segment's own window.
/// assert_eq!(world.subsegment(1..3), "or");
/// ```
///
/// # The invalid segment
///
/// The distinguished segment without a buffer ([`Segment::invalid`], also the
/// [`Default`]) stands in for an absent value. It reports
/// [`has_value()`](Self::has_value)` == false`, compares equal only to
/// itself, and most operations on it either no-op or fail with an explicit
/// error, as documented per method.
///
/// ```
/// # use segstr::Segment;
/// let none = Segment::invalid();
/// assert!(!none.has_value());
/// assert_eq!(none.value(), None);
/// assert_eq!(none.as_str(), "");
/// ```
#[derive(Clone, Copy)]
pub struct Segment<'b> {
    buffer: Option<&'b str>,
    offset: usize,
    len: usize,
}

impl<'b> Segment<'b> {
    /// Creates the invalid segment, the designated view over no buffer at
    /// all.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let none = Segment::invalid();
    /// assert!(!none.has_value());
    /// assert!(none.is_empty());
    /// ```
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            buffer: None,
            offset: 0,
            len: 0,
        }
    }

    /// Creates a segment spanning the whole buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let s = Segment::new("hello");
    /// assert_eq!(s.len(), 5);
    /// assert_eq!(s.as_str(), "hello");
    /// ```
    #[must_use]
    pub const fn new(buffer: &'b str) -> Self {
        Self {
            buffer: Some(buffer),
            offset: 0,
            len: buffer.len(),
        }
    }

    /// Creates a segment from `start` to the end of the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` exceeds the buffer length or does not lie
    /// on a char boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let s = Segment::try_from_offset("Hello world", 6).unwrap();
    /// assert_eq!(s, "world");
    /// assert!(Segment::try_from_offset("Hello world", 42).is_err());
    /// ```
    pub fn try_from_offset(buffer: &'b str, start: usize) -> Result<Self, SegmentError> {
        let range = resolve_range(start.., buffer.len())?;
        Self::adopt(buffer, range)
    }

    /// Creates a segment from `start` to the end of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `start` exceeds the buffer length or does not lie on a char
    /// boundary.
    #[must_use]
    #[track_caller]
    pub fn from_offset(buffer: &'b str, start: usize) -> Self {
        Self::try_from_offset(buffer, start).unwrap_or_else(panic_display)
    }

    /// Creates a segment viewing `len` bytes of the buffer starting at
    /// `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window exceeds the buffer or either end does
    /// not lie on a char boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let s = Segment::try_window("Hello world", 6, 5).unwrap();
    /// assert_eq!(s, "world");
    ///
    /// // 🦀 is four bytes: a window cannot stop in its middle.
    /// assert!(Segment::try_window("Rust 🦀", 5, 1).is_err());
    /// ```
    pub fn try_window(buffer: &'b str, offset: usize, len: usize) -> Result<Self, SegmentError> {
        let end = offset.checked_add(len).ok_or(SegmentError::EndOverflows)?;
        let range = resolve_range(offset..end, buffer.len())?;
        Self::adopt(buffer, range)
    }

    /// Creates a segment viewing `len` bytes of the buffer starting at
    /// `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the window exceeds the buffer or either end does not lie on
    /// a char boundary.
    #[must_use]
    #[track_caller]
    pub fn window(buffer: &'b str, offset: usize, len: usize) -> Self {
        Self::try_window(buffer, offset, len).unwrap_or_else(panic_display)
    }

    fn adopt(buffer: &'b str, range: Range<usize>) -> Result<Self, SegmentError> {
        if !buffer.is_char_boundary(range.start) {
            Err(SegmentError::NotCharBoundary { index: range.start })
        } else if !buffer.is_char_boundary(range.end) {
            Err(SegmentError::NotCharBoundary { index: range.end })
        } else {
            Ok(Self {
                buffer: Some(buffer),
                offset: range.start,
                len: range.end - range.start,
            })
        }
    }

    /// Builds a segment from parts already known to be valid.
    pub(crate) fn from_raw_parts(buffer: &'b str, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= buffer.len());
        debug_assert!(buffer.is_char_boundary(offset));
        debug_assert!(buffer.is_char_boundary(offset + len));
        Self {
            buffer: Some(buffer),
            offset,
            len,
        }
    }

    /// Narrows by a range relative to this segment's own window, without
    /// re-checking char boundaries. The range must be valid.
    pub(crate) fn window_rel(&self, range: Range<usize>) -> Self {
        debug_assert!(range.end <= self.len);
        match self.buffer {
            Some(buffer) => {
                Self::from_raw_parts(buffer, self.offset + range.start, range.end - range.start)
            }
            None => Self::invalid(),
        }
    }

    /// Returns `true` unless this is the invalid (no-buffer) segment.
    #[inline]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns the length of the viewed text, in bytes, not [`char`]s.
    ///
    /// The invalid segment has length zero.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if this segment views no text.
    ///
    /// Note that the invalid segment is empty but an empty segment is not
    /// necessarily invalid.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the byte offset of this segment's window into its buffer.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the byte offset one past this segment's window.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Returns the whole underlying buffer, or `None` for the invalid
    /// segment.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> Option<&'b str> {
        self.buffer
    }

    /// Returns the viewed text, or `None` for the invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// assert_eq!(Segment::window("abc", 1, 2).value(), Some("bc"));
    /// assert_eq!(Segment::invalid().value(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'b str> {
        self.buffer.map(|b| &b[self.offset..self.offset + self.len])
    }

    /// Returns the viewed text, or `""` for the invalid segment.
    ///
    /// The returned slice borrows the underlying buffer, not the segment, so
    /// it remains usable after the segment goes out of scope.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'b str {
        self.value().unwrap_or("")
    }

    /// Returns a narrower view by a range relative to this segment's own
    /// window, not the underlying buffer's absolute coordinates.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the range exceeds the segment's
    /// length or lands inside a [`char`]. On the invalid segment, any range
    /// other than an empty `0..0` window fails with
    /// [`SegmentError::Detached`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let world = Segment::window("Hello world", 6, 5);
    /// assert_eq!(world.try_subsegment(1..3).unwrap(), "or");
    /// assert_eq!(world.try_subsegment(2..).unwrap(), "rld");
    /// assert!(world.try_subsegment(2..9).is_err());
    /// ```
    pub fn try_subsegment(
        &self,
        range: impl RangeBounds<usize>,
    ) -> Result<Self, SegmentError> {
        let Some(buffer) = self.buffer else {
            return match resolve_range(range, 0) {
                Ok(_) => Ok(Self::invalid()),
                Err(_) => Err(SegmentError::Detached),
            };
        };
        let range = resolve_range(range, self.len)?;
        Self::adopt(buffer, self.offset + range.start..self.offset + range.end)
    }

    /// Returns a narrower view by a range relative to this segment's own
    /// window.
    ///
    /// # Panics
    ///
    /// Panics under the conditions [`try_subsegment`](Self::try_subsegment)
    /// reports as errors.
    #[must_use]
    #[track_caller]
    pub fn subsegment(&self, range: impl RangeBounds<usize>) -> Self {
        self.try_subsegment(range).unwrap_or_else(panic_display)
    }

    /// Returns a view of `len` bytes starting `offset` bytes into this
    /// segment, bounded by the segment's own window.
    ///
    /// # Errors
    ///
    /// Same contract as [`try_subsegment`](Self::try_subsegment) with the
    /// range `offset..offset + len`.
    pub fn try_slice(&self, offset: usize, len: usize) -> Result<Self, SegmentError> {
        let end = offset.checked_add(len).ok_or(SegmentError::EndOverflows)?;
        self.try_subsegment(offset..end)
    }

    /// Returns a view of `len` bytes starting `offset` bytes into this
    /// segment, allowed to extend past the segment's end as long as it stays
    /// within the underlying buffer.
    ///
    /// `offset` itself is still bounded by the segment's window.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `offset` exceeds the segment's
    /// length, the window exceeds the buffer, or either end lands inside a
    /// [`char`]. On the invalid segment, anything but a `(0, 0)` no-op fails
    /// with [`SegmentError::Detached`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let hello = Segment::window("Hello world", 0, 5);
    /// // Within the segment, `try_slice` and `try_slice_into_buffer` agree.
    /// assert_eq!(hello.try_slice_into_buffer(1, 3).unwrap(), "ell");
    /// // Beyond it, only `try_slice_into_buffer` may reach into the buffer.
    /// assert!(hello.try_slice(1, 8).is_err());
    /// assert_eq!(hello.try_slice_into_buffer(1, 8).unwrap(), "ello wor");
    /// assert!(hello.try_slice_into_buffer(1, 42).is_err());
    /// ```
    pub fn try_slice_into_buffer(&self, offset: usize, len: usize) -> Result<Self, SegmentError> {
        let Some(buffer) = self.buffer else {
            return if offset == 0 && len == 0 {
                Ok(Self::invalid())
            } else {
                Err(SegmentError::Detached)
            };
        };
        resolve_range(offset.., self.len)?;
        let start = self.offset + offset;
        let end = start.checked_add(len).ok_or(SegmentError::EndOverflows)?;
        if end > buffer.len() {
            return Err(SegmentError::EndOutOfBounds {
                end,
                len: buffer.len(),
            });
        }
        Self::adopt(buffer, start..end)
    }

    /// Moves the start boundary by `delta` bytes (negative widens toward the
    /// buffer start, positive narrows).
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the new start would fall before the
    /// buffer start or after the segment's end, or lands inside a [`char`];
    /// [`SegmentError::Detached`] on the invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let world = Segment::window("Hello world", 6, 5);
    /// assert_eq!(world.try_offset_start(2).unwrap(), "rld");
    /// assert_eq!(world.try_offset_start(-6).unwrap(), "Hello world");
    /// assert!(world.try_offset_start(-7).is_err());
    /// assert!(world.try_offset_start(6).is_err());
    /// ```
    pub fn try_offset_start(&self, delta: isize) -> Result<Self, SegmentError> {
        let Some(buffer) = self.buffer else {
            return Err(SegmentError::Detached);
        };
        let start = self
            .offset
            .checked_add_signed(delta)
            .ok_or(SegmentError::StartOverflows)?;
        if start > self.end() {
            return Err(SegmentError::StartGreaterThanEnd {
                start,
                end: self.end(),
            });
        }
        if !buffer.is_char_boundary(start) {
            return Err(SegmentError::NotCharBoundary { index: start });
        }
        Ok(Self {
            buffer: Some(buffer),
            offset: start,
            len: self.end() - start,
        })
    }

    /// Moves the start boundary by `delta` bytes.
    ///
    /// # Panics
    ///
    /// Panics under the conditions [`try_offset_start`](Self::try_offset_start)
    /// reports as errors.
    #[must_use]
    #[track_caller]
    pub fn offset_start(&self, delta: isize) -> Self {
        self.try_offset_start(delta).unwrap_or_else(panic_display)
    }

    /// Moves the end boundary by `delta` bytes (positive widens toward the
    /// buffer end, negative narrows).
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the new end would fall before the
    /// segment's start or past the buffer end, or lands inside a [`char`];
    /// [`SegmentError::Detached`] on the invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let hello = Segment::window("Hello world", 0, 5);
    /// assert_eq!(hello.try_offset_end(-2).unwrap(), "Hel");
    /// assert_eq!(hello.try_offset_end(6).unwrap(), "Hello world");
    /// assert!(hello.try_offset_end(7).is_err());
    /// ```
    pub fn try_offset_end(&self, delta: isize) -> Result<Self, SegmentError> {
        let Some(buffer) = self.buffer else {
            return Err(SegmentError::Detached);
        };
        let end = self
            .end()
            .checked_add_signed(delta)
            .ok_or(SegmentError::EndOverflows)?;
        if end < self.offset {
            return Err(SegmentError::StartGreaterThanEnd {
                start: self.offset,
                end,
            });
        }
        if end > buffer.len() {
            return Err(SegmentError::EndOutOfBounds {
                end,
                len: buffer.len(),
            });
        }
        if !buffer.is_char_boundary(end) {
            return Err(SegmentError::NotCharBoundary { index: end });
        }
        Ok(Self {
            buffer: Some(buffer),
            offset: self.offset,
            len: end - self.offset,
        })
    }

    /// Moves the end boundary by `delta` bytes.
    ///
    /// # Panics
    ///
    /// Panics under the conditions [`try_offset_end`](Self::try_offset_end)
    /// reports as errors.
    #[must_use]
    #[track_caller]
    pub fn offset_end(&self, delta: isize) -> Self {
        self.try_offset_end(delta).unwrap_or_else(panic_display)
    }

    /// Re-adopts a string slice carved out of this segment's buffer back
    /// into a segment, by pointer identity.
    ///
    /// This pairs with [`as_str`](Self::as_str): text derived from a
    /// segment through plain `&str` operations can be turned back into a
    /// positioned view without bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::NotASubslice`] if `slice` does not point into
    /// the buffer, [`SegmentError::Detached`] on the invalid segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let seg = Segment::new("Hello world");
    /// let derived = &seg.as_str()[6..];
    /// let world = seg.try_slice_ref(derived).unwrap();
    /// assert_eq!(world.offset(), 6);
    /// assert_eq!(world, "world");
    /// assert!(seg.try_slice_ref("elsewhere").is_err());
    /// ```
    pub fn try_slice_ref(&self, slice: &str) -> Result<Self, SegmentError> {
        let Some(buffer) = self.buffer else {
            return Err(SegmentError::Detached);
        };
        let buf_start = buffer.as_ptr() as usize;
        let start = (slice.as_ptr() as usize)
            .checked_sub(buf_start)
            .ok_or(SegmentError::NotASubslice)?;
        let end = start
            .checked_add(slice.len())
            .ok_or(SegmentError::NotASubslice)?;
        if end > buffer.len() {
            return Err(SegmentError::NotASubslice);
        }
        Self::adopt(buffer, start..end)
    }

    /// Re-adopts a string slice carved out of this segment's buffer back
    /// into a segment.
    ///
    /// # Panics
    ///
    /// Panics under the conditions [`try_slice_ref`](Self::try_slice_ref)
    /// reports as errors.
    #[must_use]
    #[track_caller]
    pub fn slice_ref(&self, slice: &str) -> Self {
        self.try_slice_ref(slice).unwrap_or_else(panic_display)
    }

    /// Trims leading and trailing whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// assert_eq!(Segment::new(" \t xyz ").trim(), "xyz");
    /// ```
    #[must_use]
    pub fn trim(&self) -> Self {
        self.trim_matches(char::is_whitespace)
    }

    /// Trims leading whitespace.
    #[must_use]
    pub fn trim_start(&self) -> Self {
        self.trim_start_matches(char::is_whitespace)
    }

    /// Trims trailing whitespace.
    #[must_use]
    pub fn trim_end(&self) -> Self {
        self.trim_end_matches(char::is_whitespace)
    }

    /// Trims leading and trailing characters matching the pattern: a
    /// [`char`], a `&[char]` set, or a `FnMut(char) -> bool` predicate.
    ///
    /// Scans once from each edge and stops at the first non-matching
    /// character. A fully-trimmed segment is a valid empty segment at the
    /// stopping boundary, never the invalid segment; trimming the invalid
    /// segment is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// let seg = Segment::new("--xy--");
    /// assert_eq!(seg.trim_matches('-'), "xy");
    /// assert_eq!(seg.trim_matches(&['-', 'y']), "x");
    ///
    /// let all = Segment::new("----").trim_matches('-');
    /// assert!(all.has_value());
    /// assert!(all.is_empty());
    /// ```
    #[must_use]
    pub fn trim_matches<P>(&self, mut pattern: P) -> Self
    where
        P: CharPattern,
    {
        let Some(buffer) = self.buffer else {
            return *self;
        };
        let s = self.as_str();
        let mut start = s.len();
        for (i, ch) in s.char_indices() {
            if !pattern.matches(ch) {
                start = i;
                break;
            }
        }
        let mut end = start;
        for (i, ch) in s[start..].char_indices().rev() {
            if !pattern.matches(ch) {
                end = start + i + ch.len_utf8();
                break;
            }
        }
        Self::from_raw_parts(buffer, self.offset + start, end - start)
    }

    /// Trims leading characters matching the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// assert_eq!(Segment::new("xxabxx").trim_start_matches('x'), "abxx");
    /// ```
    #[must_use]
    pub fn trim_start_matches<P>(&self, mut pattern: P) -> Self
    where
        P: CharPattern,
    {
        let Some(buffer) = self.buffer else {
            return *self;
        };
        let s = self.as_str();
        let mut start = s.len();
        for (i, ch) in s.char_indices() {
            if !pattern.matches(ch) {
                start = i;
                break;
            }
        }
        Self::from_raw_parts(buffer, self.offset + start, self.len - start)
    }

    /// Trims trailing characters matching the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Segment;
    /// assert_eq!(Segment::new("xxabxx").trim_end_matches('x'), "xxab");
    /// ```
    #[must_use]
    pub fn trim_end_matches<P>(&self, mut pattern: P) -> Self
    where
        P: CharPattern,
    {
        let Some(buffer) = self.buffer else {
            return *self;
        };
        let s = self.as_str();
        let mut end = 0;
        for (i, ch) in s.char_indices().rev() {
            if !pattern.matches(ch) {
                end = i + ch.len_utf8();
                break;
            }
        }
        Self::from_raw_parts(buffer, self.offset, end)
    }
}

impl fmt::Debug for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("value", &self.value())
            .field("offset", &self.offset)
            .field("len", &self.len)
            .finish()
    }
}

impl fmt::Display for Segment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}
