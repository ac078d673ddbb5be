use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_half_open() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(10));
    assert!(!span.contains(20));
    assert!(Span::point(4).is_empty());
}

#[test]
fn test_merge_covers_both() {
    assert_eq!(Span::new(10, 20).merge(Span::new(15, 30)), Span::new(10, 30));
    assert_eq!(Span::new(15, 30).merge(Span::point(3)), Span::new(3, 30));
}

#[test]
fn test_contains_span_includes_boundary_points() {
    let parent = Span::new(4, 20);
    assert!(parent.contains_span(Span::new(4, 20)));
    assert!(parent.contains_span(Span::point(20)));
    assert!(!parent.contains_span(Span::new(3, 12)));
    assert!(!parent.contains_span(Span::new(12, 21)));
}

#[test]
fn test_text() {
    let source = "accept construct";
    assert_eq!(Span::new(7, 16).text(source), "construct");
    assert_eq!(Span::new(7, 99).text(source), "");
}

#[test]
fn test_offsets_beyond_u32() {
    let large = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..large),
        Err(SpanError { offset: large })
    );
    let msg = SpanError { offset: large }.to_string();
    assert!(msg.contains("0x100000000"), "{msg}");
}

#[test]
fn test_debug_matches_display() {
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}
