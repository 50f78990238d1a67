//! Conversion trait implementations for `Segment`.

use super::Segment;

impl Default for Segment<'_> {
    /// The invalid segment.
    #[inline]
    fn default() -> Self {
        Self::invalid()
    }
}

impl<'b> From<&'b str> for Segment<'b> {
    /// Views the whole buffer.
    #[inline]
    fn from(buffer: &'b str) -> Self {
        Self::new(buffer)
    }
}

impl<'b> From<Option<&'b str>> for Segment<'b> {
    /// Views the whole buffer, or the invalid segment for `None`.
    #[inline]
    fn from(buffer: Option<&'b str>) -> Self {
        buffer.map_or_else(Self::invalid, Self::new)
    }
}

impl<'b> From<&Segment<'b>> for Segment<'b> {
    #[inline]
    fn from(segment: &Segment<'b>) -> Self {
        *segment
    }
}

impl AsRef<str> for Segment<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Segment<'_>> for String {
    /// Copies the viewed text into an owned string (`""` for the invalid
    /// segment). This is the allocating conversion.
    #[inline]
    fn from(segment: Segment<'_>) -> Self {
        segment.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::Segment;

    #[test]
    fn test_from_str() {
        let seg = Segment::from("abc");
        assert_eq!(seg.len(), 3);
        assert_eq!(seg.offset(), 0);
    }

    #[test]
    fn test_from_option() {
        assert!(!Segment::from(None).has_value());
        assert_eq!(Segment::from(Some("abc")), "abc");
    }

    #[test]
    fn test_default() {
        assert!(!Segment::default().has_value());
    }

    #[test]
    fn test_into_string() {
        let seg = Segment::window("Hello world", 6, 5);
        assert_eq!(String::from(seg), "world");
        assert_eq!(seg.to_string(), "world");
        assert_eq!(String::from(Segment::invalid()), "");
    }

    #[test]
    fn test_as_ref() {
        fn takes_str(s: impl AsRef<str>) -> usize {
            s.as_ref().len()
        }
        assert_eq!(takes_str(Segment::new("abcd")), 4);
    }
}
