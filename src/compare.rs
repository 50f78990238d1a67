//! Comparison modes and the mode-carrying comparable view.

use core::ops::Range;

use crate::macros::symmetric_eq;
use crate::Segment;

/// How textual equality and substring search compare characters.
///
/// `IgnoreCase` folds scalar by scalar through [`char::to_lowercase`] — the
/// ordinal-ignore-case rule. No locale-aware collation is performed, and no
/// normalization: one-to-many foldings (`ß` vs `SS`) do not match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Exact scalar-for-scalar comparison.
    #[default]
    Ordinal,
    /// Scalar-wise case-folded comparison.
    IgnoreCase,
}

fn char_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Compares two strings under a comparison mode, without allocating.
pub(crate) fn str_eq(a: &str, b: &str, comparison: Comparison) -> bool {
    match comparison {
        Comparison::Ordinal => a == b,
        Comparison::IgnoreCase => {
            let mut a = a.chars();
            let mut b = b.chars();
            loop {
                match (a.next(), b.next()) {
                    (None, None) => return true,
                    (Some(x), Some(y)) if char_eq(x, y) => {}
                    _ => return false,
                }
            }
        }
    }
}

/// Byte length of the haystack text matched by `needle` at `pos`, which must
/// be a char boundary.
pub(crate) fn match_len_at(
    haystack: &str,
    pos: usize,
    needle: &str,
    comparison: Comparison,
) -> Option<usize> {
    match comparison {
        Comparison::Ordinal => haystack[pos..].starts_with(needle).then_some(needle.len()),
        Comparison::IgnoreCase => {
            let mut hay = haystack[pos..].chars();
            let mut consumed = 0;
            for nc in needle.chars() {
                let hc = hay.next()?;
                if !char_eq(hc, nc) {
                    return None;
                }
                consumed += hc.len_utf8();
            }
            Some(consumed)
        }
    }
}

/// Byte range of the leftmost occurrence of `needle` at or after `from`.
///
/// An empty needle matches with zero width at `from` itself.
pub(crate) fn find_from(
    haystack: &str,
    from: usize,
    needle: &str,
    comparison: Comparison,
) -> Option<Range<usize>> {
    debug_assert!(from <= haystack.len());
    match comparison {
        Comparison::Ordinal => haystack[from..].find(needle).map(|i| {
            let start = from + i;
            start..start + needle.len()
        }),
        Comparison::IgnoreCase => {
            let mut pos = from;
            loop {
                if let Some(len) = match_len_at(haystack, pos, needle, comparison) {
                    return Some(pos..pos + len);
                }
                match haystack[pos..].chars().next() {
                    Some(ch) => pos += ch.len_utf8(),
                    None => return None,
                }
            }
        }
    }
}

/// Byte range of the rightmost occurrence of `needle`.
///
/// An empty needle matches with zero width at the end.
pub(crate) fn rfind(haystack: &str, needle: &str, comparison: Comparison) -> Option<Range<usize>> {
    match comparison {
        Comparison::Ordinal => haystack.rfind(needle).map(|i| i..i + needle.len()),
        Comparison::IgnoreCase => {
            let mut pos = haystack.len();
            loop {
                if let Some(len) = match_len_at(haystack, pos, needle, comparison) {
                    return Some(pos..pos + len);
                }
                if pos == 0 {
                    return None;
                }
                pos -= 1;
                while !haystack.is_char_boundary(pos) {
                    pos -= 1;
                }
            }
        }
    }
}

/// A segment bound to a fixed [`Comparison`] mode.
///
/// Every equality operator and substring query on a comparable view applies
/// the embedded mode, regardless of the type on the other side — a raw
/// `&str`, a [`Segment`], or another `Comparable`. This is how callers get
/// case-insensitive string-like comparison without allocating a normalized
/// copy.
///
/// # Examples
///
/// ```
/// # use segstr::{Comparable, Comparison, Segment};
/// let header = Comparable::new("Content-Length", Comparison::IgnoreCase);
/// assert_eq!(header, "content-length");
/// assert_eq!(header, Segment::new("CONTENT-LENGTH"));
/// assert!(header.contains("length"));
///
/// let exact = Comparable::new("Content-Length", Comparison::Ordinal);
/// assert_ne!(exact, "content-length");
/// ```
///
/// When two comparable views with *different* modes meet, both embedded modes
/// must accept the pairing, which keeps `==` symmetric by construction:
///
/// ```
/// # use segstr::{Comparable, Comparison};
/// let lax = Comparable::new("abc", Comparison::IgnoreCase);
/// let strict = Comparable::new("ABC", Comparison::Ordinal);
/// assert_ne!(lax, strict);
/// assert_ne!(strict, lax);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Comparable<'b> {
    segment: Segment<'b>,
    comparison: Comparison,
}

impl<'b> Comparable<'b> {
    /// Wraps a buffer or segment with a fixed comparison mode.
    pub fn new(source: impl Into<Segment<'b>>, comparison: Comparison) -> Self {
        Self {
            segment: source.into(),
            comparison,
        }
    }

    /// Wraps a buffer or segment for case-insensitive comparison.
    pub fn ignore_case(source: impl Into<Segment<'b>>) -> Self {
        Self::new(source, Comparison::IgnoreCase)
    }

    /// Returns the wrapped segment.
    #[inline]
    #[must_use]
    pub const fn segment(&self) -> Segment<'b> {
        self.segment
    }

    /// Returns the embedded comparison mode.
    #[inline]
    #[must_use]
    pub const fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Returns the wrapped text, `""` for an invalid segment.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'b str {
        self.segment.as_str()
    }

    /// Returns `true` if `needle` occurs in the wrapped text under the
    /// embedded mode. An empty needle is always found.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Comparable;
    /// let c = Comparable::ignore_case("Hello World");
    /// assert!(c.contains("WORLD"));
    /// assert!(!c.contains("worlds"));
    /// ```
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        find_from(self.as_str(), 0, needle, self.comparison).is_some()
    }

    /// Returns `true` if the wrapped text starts with `needle` under the
    /// embedded mode.
    #[must_use]
    pub fn starts_with(&self, needle: &str) -> bool {
        match_len_at(self.as_str(), 0, needle, self.comparison).is_some()
    }

    /// Returns `true` if the wrapped text ends with `needle` under the
    /// embedded mode.
    #[must_use]
    pub fn ends_with(&self, needle: &str) -> bool {
        let hay = self.as_str();
        match self.comparison {
            Comparison::Ordinal => hay.ends_with(needle),
            Comparison::IgnoreCase => {
                let count = needle.chars().count();
                let mut start = hay.len();
                for (i, _) in hay.char_indices().rev().take(count) {
                    start = i;
                }
                hay[start..].chars().count() == count
                    && match_len_at(hay, start, needle, self.comparison) == Some(hay.len() - start)
            }
        }
    }

    /// Returns the first occurrence of `needle` under the embedded mode as a
    /// segment, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segstr::Comparable;
    /// let c = Comparable::ignore_case("one TWO three");
    /// let two = c.find("two").unwrap();
    /// assert_eq!(two, "TWO");
    /// assert_eq!(two.offset(), 4);
    /// ```
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<Segment<'b>> {
        self.segment.find_first_with(needle, self.comparison)
    }
}

fn comparable_eq_segment(a: &Comparable<'_>, b: &Segment<'_>) -> bool {
    match (a.segment.value(), b.value()) {
        (None, None) => true,
        (Some(x), Some(y)) => str_eq(x, y, a.comparison),
        _ => false,
    }
}

fn comparable_eq_str(a: &str, b: &Comparable<'_>) -> bool {
    b.segment.value().is_some_and(|v| str_eq(v, a, b.comparison))
}

fn comparable_eq_str_ref(a: &&str, b: &Comparable<'_>) -> bool {
    comparable_eq_str(a, b)
}

fn comparable_eq_string(a: &String, b: &Comparable<'_>) -> bool {
    comparable_eq_str(a.as_str(), b)
}

fn segment_eq_comparable(a: &Segment<'_>, b: &Comparable<'_>) -> bool {
    comparable_eq_segment(b, a)
}

impl PartialEq for Comparable<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.comparison == other.comparison {
            comparable_eq_segment(self, &other.segment)
        } else {
            comparable_eq_segment(self, &other.segment)
                && comparable_eq_segment(other, &self.segment)
        }
    }
}

symmetric_eq! {
    ['b] (str, Comparable<'b>) = comparable_eq_str;
    ['a, 'b] (&'a str, Comparable<'b>) = comparable_eq_str_ref;
    ['b] (String, Comparable<'b>) = comparable_eq_string;
    ['a, 'b] (Segment<'a>, Comparable<'b>) = segment_eq_comparable;
}
