use crate::{ErrorKind, Segment, SegmentError};

#[test]
fn test_new() {
    let seg = Segment::new("0123456789");
    assert!(seg.has_value());
    assert_eq!(seg.offset(), 0);
    assert_eq!(seg.len(), 10);
    assert_eq!(seg.end(), 10);
    assert_eq!(seg.as_str(), "0123456789");
    assert_eq!(seg.buffer(), Some("0123456789"));
}

#[test]
fn test_invalid() {
    let seg = Segment::invalid();
    assert!(!seg.has_value());
    assert!(seg.is_empty());
    assert_eq!(seg.len(), 0);
    assert_eq!(seg.offset(), 0);
    assert_eq!(seg.value(), None);
    assert_eq!(seg.as_str(), "");
    assert_eq!(seg.buffer(), None);
}

#[test]
fn test_empty() {
    let seg = Segment::new("");
    assert!(seg.has_value());
    assert!(seg.is_empty());
    assert_eq!(seg.value(), Some(""));
}

#[test]
fn test_try_from_offset() {
    let seg = Segment::try_from_offset("Hello world", 6).unwrap();
    assert_eq!(seg, "world");
    assert_eq!(seg.offset(), 6);

    let seg = Segment::try_from_offset("Hello world", 11).unwrap();
    assert!(seg.is_empty());
    assert!(seg.has_value());

    let err = Segment::try_from_offset("Hello world", 12).unwrap_err();
    assert_eq!(err, SegmentError::StartGreaterThanEnd { start: 12, end: 11 });
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_try_window() {
    let buffer = "Hello world";
    let seg = Segment::try_window(buffer, 6, 5).unwrap();
    assert_eq!(seg, "world");

    let seg = Segment::try_window(buffer, 0, 0).unwrap();
    assert!(seg.is_empty());

    let err = Segment::try_window(buffer, 6, 6).unwrap_err();
    assert_eq!(err, SegmentError::EndOutOfBounds { end: 12, len: 11 });

    let err = Segment::try_window(buffer, usize::MAX, 2).unwrap_err();
    assert_eq!(err, SegmentError::EndOverflows);
}

#[test]
fn test_try_window_char_boundary() {
    let buffer = "Rust 🦀!";

    let err = Segment::try_window(buffer, 6, 1).unwrap_err();
    assert_eq!(err, SegmentError::NotCharBoundary { index: 6 });

    let err = Segment::try_window(buffer, 5, 2).unwrap_err();
    assert_eq!(err, SegmentError::NotCharBoundary { index: 7 });

    let seg = Segment::try_window(buffer, 5, 4).unwrap();
    assert_eq!(seg, "🦀");
}

#[test]
#[should_panic(expected = "end index 12 is out of bounds")]
fn test_window_panic() {
    let _ = Segment::window("Hello world", 6, 6);
}

#[test]
fn test_value_borrows_buffer() {
    let buffer = String::from("Hello world");
    let text;
    {
        let seg = Segment::window(&buffer, 6, 5);
        text = seg.as_str();
    }
    // the slice outlives the segment, borrowing only the buffer
    assert_eq!(text, "world");
    assert_eq!(text.as_ptr(), buffer[6..].as_ptr());
}

#[test]
fn test_subsegment() {
    let world = Segment::window("Hello world", 6, 5);

    assert_eq!(world.try_subsegment(..).unwrap(), "world");
    assert_eq!(world.try_subsegment(1..3).unwrap(), "or");
    assert_eq!(world.try_subsegment(2..).unwrap(), "rld");
    assert_eq!(world.try_subsegment(..=1).unwrap(), "wo");

    // relative to the window, not the buffer
    let sub = world.try_subsegment(1..3).unwrap();
    assert_eq!(sub.offset(), 7);

    let err = world.try_subsegment(2..9).unwrap_err();
    assert_eq!(err, SegmentError::EndOutOfBounds { end: 9, len: 5 });

    let err = world.try_subsegment(4..2).unwrap_err();
    assert_eq!(err, SegmentError::StartGreaterThanEnd { start: 4, end: 2 });
}

#[test]
fn test_subsegment_nested() {
    let seg = Segment::new("0123456789");
    let sub = seg.subsegment(2..8).subsegment(1..4).subsegment(1..);
    assert_eq!(sub, "45");
    assert_eq!(sub.offset(), 4);
}

#[test]
fn test_subsegment_invalid() {
    let invalid = Segment::invalid();

    // the empty no-op window is accepted
    let sub = invalid.try_subsegment(0..0).unwrap();
    assert!(!sub.has_value());
    let sub = invalid.try_subsegment(..).unwrap();
    assert!(!sub.has_value());

    // anything else is an invalid operation
    let err = invalid.try_subsegment(0..1).unwrap_err();
    assert_eq!(err, SegmentError::Detached);
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    assert_eq!(invalid.try_subsegment(1..).unwrap_err(), SegmentError::Detached);
}

#[test]
fn test_try_slice() {
    let hello = Segment::window("Hello world", 0, 5);
    assert_eq!(hello.try_slice(1, 3).unwrap(), "ell");
    assert_eq!(hello.try_slice(5, 0).unwrap(), "");
    assert_eq!(
        hello.try_slice(1, 8).unwrap_err(),
        SegmentError::EndOutOfBounds { end: 9, len: 5 }
    );
    assert_eq!(
        hello.try_slice(1, usize::MAX).unwrap_err(),
        SegmentError::EndOverflows
    );
}

#[test]
fn test_try_slice_into_buffer() {
    let hello = Segment::window("Hello world", 0, 5);

    // within the segment, behaves like `try_slice`
    assert_eq!(hello.try_slice_into_buffer(1, 3).unwrap(), "ell");

    // beyond the segment's end but within the buffer
    assert_eq!(hello.try_slice_into_buffer(1, 8).unwrap(), "ello wor");
    assert_eq!(hello.try_slice_into_buffer(5, 6).unwrap(), " world");

    // beyond the buffer
    assert_eq!(
        hello.try_slice_into_buffer(1, 11).unwrap_err(),
        SegmentError::EndOutOfBounds { end: 12, len: 11 }
    );

    // the offset itself stays bounded by the segment
    assert!(hello.try_slice_into_buffer(6, 0).is_err());

    // invalid segment: only the trivial no-op
    assert!(!Segment::invalid().try_slice_into_buffer(0, 0).unwrap().has_value());
    assert_eq!(
        Segment::invalid().try_slice_into_buffer(0, 1).unwrap_err(),
        SegmentError::Detached
    );
}

#[test]
fn test_offset_start() {
    let world = Segment::window("Hello world", 6, 5);

    assert_eq!(world.try_offset_start(2).unwrap(), "rld");
    assert_eq!(world.try_offset_start(-6).unwrap(), "Hello world");
    assert_eq!(world.try_offset_start(5).unwrap(), "");
    assert_eq!(world.try_offset_start(5).unwrap().offset(), 11);

    assert_eq!(
        world.try_offset_start(-7).unwrap_err(),
        SegmentError::StartOverflows
    );
    assert_eq!(
        world.try_offset_start(6).unwrap_err(),
        SegmentError::StartGreaterThanEnd { start: 12, end: 11 }
    );
    assert_eq!(
        Segment::invalid().try_offset_start(0).unwrap_err(),
        SegmentError::Detached
    );
}

#[test]
fn test_offset_end() {
    let hello = Segment::window("Hello world", 0, 5);

    assert_eq!(hello.try_offset_end(-2).unwrap(), "Hel");
    assert_eq!(hello.try_offset_end(6).unwrap(), "Hello world");
    assert_eq!(hello.try_offset_end(-5).unwrap(), "");

    assert_eq!(
        hello.try_offset_end(7).unwrap_err(),
        SegmentError::EndOutOfBounds { end: 12, len: 11 }
    );
    assert_eq!(
        hello.try_offset_end(-6).unwrap_err(),
        SegmentError::EndOverflows
    );
    assert_eq!(
        Segment::invalid().try_offset_end(0).unwrap_err(),
        SegmentError::Detached
    );
}

#[test]
fn test_offset_boundaries_chars() {
    let seg = Segment::try_from_offset("a🦀b", 5).unwrap();
    assert_eq!(seg, "b");

    assert_eq!(
        seg.try_offset_start(-1).unwrap_err(),
        SegmentError::NotCharBoundary { index: 4 }
    );
    assert_eq!(seg.try_offset_start(-4).unwrap(), "🦀b");

    let a = Segment::window("a🦀b", 0, 1);
    assert_eq!(
        a.try_offset_end(1).unwrap_err(),
        SegmentError::NotCharBoundary { index: 2 }
    );
    assert_eq!(a.try_offset_end(4).unwrap(), "a🦀");
}

#[test]
fn test_slice_ref() {
    let seg = Segment::new("Hello world");
    let derived = &seg.as_str()[6..];

    let world = seg.try_slice_ref(derived).unwrap();
    assert_eq!(world.offset(), 6);
    assert_eq!(world.len(), 5);
    assert_eq!(world, "world");

    let err = seg.try_slice_ref("elsewhere").unwrap_err();
    assert_eq!(err, SegmentError::NotASubslice);

    assert_eq!(
        Segment::invalid().try_slice_ref("x").unwrap_err(),
        SegmentError::Detached
    );
}

#[test]
fn test_slice_ref_from_str_ops() {
    // pairs with plain `&str` machinery: derive with std, re-adopt after
    let seg = Segment::new("key=value");
    let (_, v) = seg.as_str().split_once('=').unwrap();
    let value = seg.slice_ref(v);
    assert_eq!(value.offset(), 4);
    assert_eq!(value, "value");
}

#[test]
fn test_trim() {
    assert_eq!(Segment::new("  xyz  ").trim(), "xyz");
    assert_eq!(Segment::new("  xyz  ").trim_start(), "xyz  ");
    assert_eq!(Segment::new("  xyz  ").trim_end(), "  xyz");
    assert_eq!(Segment::new("xyz").trim(), "xyz");
}

#[test]
fn test_trim_mixed_whitespace_set() {
    // a single-char trim stops at the first non-member; mixed whitespace
    // needs a set (or the whitespace predicate)
    let seg = Segment::new(" \t xyz ");
    assert_eq!(seg.trim_matches(' '), "\t xyz");
    assert_eq!(seg.trim_matches(&[' ', '\t']), "xyz");
    assert_eq!(seg.trim(), "xyz");
}

#[test]
fn test_trim_matches() {
    let seg = Segment::new("--xy--");
    assert_eq!(seg.trim_matches('-'), "xy");
    assert_eq!(seg.trim_start_matches('-'), "xy--");
    assert_eq!(seg.trim_end_matches('-'), "--xy");
    assert_eq!(seg.trim_matches(&['-', 'y']), "x");
    assert_eq!(seg.trim_matches(|ch: char| ch == '-'), "xy");
}

#[test]
fn test_trim_all() {
    let all = Segment::new("----").trim_matches('-');
    assert!(all.has_value());
    assert!(all.is_empty());
    // trim_start scans off the whole window and stops at its end
    assert_eq!(Segment::new("----").trim_start_matches('-').offset(), 4);
    // trim_end stops at the start
    assert_eq!(Segment::new("----").trim_end_matches('-').offset(), 0);
}

#[test]
fn test_trim_idempotent() {
    let seg = Segment::new("  a b  ");
    assert_eq!(seg.trim().trim(), seg.trim());
    assert_eq!(seg.trim_matches(' ').trim_matches(' '), seg.trim_matches(' '));
}

#[test]
fn test_trim_invalid() {
    let invalid = Segment::invalid();
    assert!(!invalid.trim().has_value());
    assert!(!invalid.trim_start_matches('-').has_value());
    assert!(!invalid.trim_end_matches('-').has_value());
}

#[test]
fn test_trim_preserves_position() {
    let seg = Segment::window("a  b  c", 1, 5);
    let trimmed = seg.trim();
    assert_eq!(trimmed, "b");
    assert_eq!(trimmed.offset(), 3);
}

#[test]
fn test_fmt() {
    let seg = Segment::window("Hello world", 6, 5);
    assert_eq!(format!("{seg}"), "world");
    assert_eq!(
        format!("{seg:?}"),
        "Segment { value: Some(\"world\"), offset: 6, len: 5 }"
    );

    let invalid = Segment::invalid();
    assert_eq!(format!("{invalid}"), "");
    assert_eq!(
        format!("{invalid:?}"),
        "Segment { value: None, offset: 0, len: 0 }"
    );
}
