//! Integration tests for jsonlit-common crate.

use jsonlit_common::{BytePos, Span, VirtualChar, VirtualCharSequence};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
    assert_eq!(Span::from_len(5, 3), Span::from_usize(5, 8));
}

#[test]
fn test_span_is_empty() {
    assert!(Span::empty_at(BytePos(7)).is_empty());
    assert!(!Span::from_usize(5, 10).is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_byte_pos_offset() {
    let pos = BytePos(10);
    assert_eq!(pos.offset(5), BytePos(15));
    assert_eq!(usize::from(pos), 10);
}

#[test]
fn test_identity_sequence_at_base() {
    let chars = VirtualCharSequence::from_str_at("[1]", 9);
    assert_eq!(chars.len(), 3);
    assert_eq!(chars[0].span, Span::from_len(9, 1));
    assert_eq!(chars[2].span, Span::from_len(11, 1));
    assert_eq!(chars.end_position(), BytePos(12));
    assert_eq!(chars.text(), "[1]");
}

#[test]
fn test_empty_sequence_ends_at_base() {
    let chars = VirtualCharSequence::from_str_at("", 10);
    assert!(chars.is_empty());
    assert_eq!(chars.end_position(), BytePos(10));
}

#[test]
fn test_host_escapes_keep_source_spans() {
    // `"a\tb"` in host source: the tab is two source characters.
    let chars = VirtualCharSequence::from_chars(vec![
        VirtualChar::new('a', Span::from_len(1, 1)),
        VirtualChar::new('\t', Span::from_len(2, 2)),
        VirtualChar::new('b', Span::from_len(4, 1)),
    ]);
    assert_eq!(chars.text(), "a\tb");
    assert_eq!(VirtualChar::span_of(&chars[1..]), Some(Span::from_usize(2, 5)));
    assert_eq!(chars.end_position(), BytePos(5));
}

#[test]
fn test_collect_sequence() {
    let chars: VirtualCharSequence = "xy"
        .char_indices()
        .map(|(i, ch)| VirtualChar::new(ch, Span::from_len(i, 1)))
        .collect();
    assert_eq!(VirtualChar::text_of(&chars), "xy");
    assert!(chars[0].is_letter_or_digit());
}
