use super::*;

#[test]
fn decodes_pairs_in_order() {
    let pts = decode("(0, 1) (2, 3)").unwrap();
    assert_eq!(pts, vec![Point::new(0, 1), Point::new(2, 3)]);
}

#[test]
fn nil_only_decodes_to_empty_set() {
    assert_eq!(decode("nil").unwrap(), vec![]);
    assert_eq!(decode("(nil, (nil, nil))").unwrap(), vec![]);
}

#[test]
fn blank_input_is_decode_error() {
    for raw in ["", "   ", "\n\t"] {
        let err = decode(raw).unwrap_err();
        assert!(matches!(err, PlotError::Decode(_)), "{raw:?} -> {err}");
    }
}

#[test]
fn odd_token_count_is_decode_error() {
    let err = decode("1 2 3").unwrap_err();
    assert!(matches!(err, PlotError::Decode(ref m) if m.contains("odd")));
}

#[test]
fn malformed_token_is_reported_with_position() {
    let err = decode("(1, 2) (x, 4)").unwrap_err();
    let PlotError::Decode(msg) = err else {
        panic!("expected decode error");
    };
    assert!(msg.contains("#3"), "{msg}");
    assert!(msg.contains("'x'"), "{msg}");
}

#[test]
fn integers_wider_than_i64_decode() {
    let pts = decode("(99999999999999999999, 1)").unwrap();
    assert_eq!(pts, vec![Point::new(99_999_999_999_999_999_999, 1)]);

    let pts = decode("(-99999999999999999999, 1)").unwrap();
    assert_eq!(pts, vec![Point::new(-99_999_999_999_999_999_999, 1)]);
}

#[test]
fn integer_beyond_i128_is_out_of_range() {
    let huge = "1".repeat(50);
    let err = decode(&format!("({huge}, 1)")).unwrap_err();
    let PlotError::Decode(msg) = err else {
        panic!("expected decode error");
    };
    assert!(msg.contains("out of range"), "{msg}");
    assert!(!msg.contains("not an integer"), "{msg}");
}

#[test]
fn signed_tokens_parse() {
    let pts = decode("(-2, +3) (4, -5)").unwrap();
    assert_eq!(pts, vec![Point::new(-2, 3), Point::new(4, -5)]);
}

#[test]
fn separators_and_nil_glued_to_digits_are_stripped() {
    // `nil` and `|` are removed wherever they appear, even without surrounding spaces.
    let pts = decode("(1|2,nil3,4nil)").unwrap();
    assert_eq!(pts, vec![Point::new(1, 2), Point::new(3, 4)]);
}

#[test]
fn nested_layers_flatten_into_one_stream() {
    let raw = "((((0, -3), ((-1, -3), nil)), (((1, -3), nil), (((0, 1), nil), nil))))";
    let pts = decode(raw).unwrap();
    assert_eq!(
        pts,
        vec![
            Point::new(0, -3),
            Point::new(-1, -3),
            Point::new(1, -3),
            Point::new(0, 1),
        ]
    );
}

#[test]
fn duplicates_are_preserved() {
    let pts = decode("(1, 1) (1, 1)").unwrap();
    assert_eq!(pts.len(), 2);
}

#[test]
fn tokenize_counts_every_integer() {
    assert_eq!(tokenize("(0, ((1, nil), 2))").unwrap(), vec![0, 1, 2]);
}
