//! Comparison trait implementations for `Segment`.
//!
//! Two segments are equal iff their viewed texts are equal (ordinal), never
//! by their `(buffer, offset, len)` triples. The invalid segment is equal
//! only to itself.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use std::borrow::Cow;

use super::Segment;
use crate::macros::{symmetric_eq, symmetric_ord};

impl Eq for Segment<'_> {}

impl<'b1, 'b2> PartialEq<Segment<'b1>> for Segment<'b2> {
    #[inline]
    fn eq(&self, other: &Segment<'b1>) -> bool {
        self.value() == other.value()
    }
}

impl Hash for Segment<'_> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

fn eq_str(a: &str, seg: &Segment<'_>) -> bool {
    seg.value().is_some_and(|v| v == a)
}

fn eq_str_ref(a: &&str, seg: &Segment<'_>) -> bool {
    eq_str(a, seg)
}

fn eq_string(a: &String, seg: &Segment<'_>) -> bool {
    eq_str(a.as_str(), seg)
}

fn eq_cow(a: &Cow<'_, str>, seg: &Segment<'_>) -> bool {
    eq_str(a.as_ref(), seg)
}

symmetric_eq! {
    ['b] (str, Segment<'b>) = eq_str;
    ['a, 'b] (&'a str, Segment<'b>) = eq_str_ref;
    ['b] (String, Segment<'b>) = eq_string;
    ['a, 'b] (Cow<'a, str>, Segment<'b>) = eq_cow;
}

impl Ord for Segment<'_> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl<'b1, 'b2> PartialOrd<Segment<'b1>> for Segment<'b2> {
    #[inline]
    fn partial_cmp(&self, other: &Segment<'b1>) -> Option<Ordering> {
        Some(self.value().cmp(&other.value()))
    }
}

fn cmp_str(a: &str, seg: &Segment<'_>) -> Option<Ordering> {
    seg.value().map(|v| a.cmp(v))
}

fn cmp_str_ref(a: &&str, seg: &Segment<'_>) -> Option<Ordering> {
    cmp_str(a, seg)
}

fn cmp_string(a: &String, seg: &Segment<'_>) -> Option<Ordering> {
    cmp_str(a.as_str(), seg)
}

symmetric_ord! {
    ['b] (str, Segment<'b>) = cmp_str;
    ['a, 'b] (&'a str, Segment<'b>) = cmp_str_ref;
    ['b] (String, Segment<'b>) = cmp_string;
}
