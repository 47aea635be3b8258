//! Integration tests for whole-document polygon conversion
//!
//! These exercise the rewrite through the public API: polygon replacement,
//! attribute preservation, pass-through fidelity for markup the rewriter
//! does not own, and the skip cases that leave a polygon in place.

use poly2path::convert;
use pretty_assertions::assert_eq;

#[test]
fn test_converts_every_polygon_in_document_order() {
    let source = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
        r#"<polygon points="0,0 4,0 4,4"/>"#,
        r#"<rect x="1" y="1" width="2" height="2"/>"#,
        r#"<g><polygon points="5,5 6,5 6,6"/></g>"#,
        r#"<polygon points="7,7 8,8"/>"#,
        "</svg>",
    );

    let expected = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg">"#,
        r#"<path d="M0,0 H4 V4 Z"/>"#,
        r#"<rect x="1" y="1" width="2" height="2"/>"#,
        r#"<g><path d="M5,5 H6 V6 Z"/></g>"#,
        r#"<path d="M7,7 L8,8 Z"/>"#,
        "</svg>",
    );

    assert_eq!(convert(source).unwrap(), expected);
}

#[test]
fn test_polygon_count_becomes_path_count() {
    let source = r#"<svg><polygon points="0,0 1,0"/><polygon points="2,2 3,3"/></svg>"#;
    let converted = convert(source).unwrap();

    assert_eq!(converted.matches("<polygon").count(), 0);
    assert_eq!(converted.matches("<path").count(), 2);
}

#[test]
fn test_copies_attributes_verbatim_minus_points() {
    let source = r#"<svg><polygon points="1,1 2,2 3,3" fill="red" id="p1"/></svg>"#;
    let converted = convert(source).unwrap();

    assert_eq!(
        converted,
        r#"<svg><path d="M1,1 L2,2 L3,3 Z" fill="red" id="p1"/></svg>"#
    );
    assert!(!converted.contains("points"));
}

#[test]
fn test_preserves_surrounding_markup_byte_for_byte() {
    let source = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "<!DOCTYPE svg>",
        "<!-- drawing -->",
        r#"<svg viewBox="0 0 10 10">"#,
        "<title>a &amp; b</title>",
        r#"<polygon points="0,0 10,0 10,10 0,10"/>"#,
        "<text>untouched</text>",
        "</svg>",
    );

    let converted = convert(source).unwrap();
    let expected = source.replace(
        r#"<polygon points="0,0 10,0 10,10 0,10"/>"#,
        r#"<path d="M0,0 H10 V10 H0 Z"/>"#,
    );
    assert_eq!(converted, expected);
}

#[test]
fn test_second_run_is_identity() {
    let source = concat!(
        r#"<svg><polygon points="0,0 3,0 3,3" fill="green"/>"#,
        r#"<polygon points="  "/>"#,
        "</svg>",
    );

    let once = convert(source).unwrap();
    let twice = convert(&once).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_blank_points_leaves_polygon_alone() {
    let source = r#"<svg><polygon points="   " fill="red"/></svg>"#;
    assert_eq!(convert(source).unwrap(), source);
}

#[test]
fn test_absent_points_leaves_polygon_alone() {
    let source = r#"<svg><polygon fill="red"/></svg>"#;
    assert_eq!(convert(source).unwrap(), source);
}

#[test]
fn test_unusable_points_leaves_polygon_alone() {
    let source = r#"<svg><polygon points="none of this parses"/></svg>"#;
    assert_eq!(convert(source).unwrap(), source);
}

#[test]
fn test_start_end_polygon_converts_and_drops_children() {
    let source = concat!(
        r#"<svg><polygon points="0,0 1,1"><title>gone</title></polygon>"#,
        "<rect/></svg>",
    );
    assert_eq!(
        convert(source).unwrap(),
        r#"<svg><path d="M0,0 L1,1 Z"/><rect/></svg>"#
    );
}

#[test]
fn test_start_end_polygon_without_children_converts() {
    let source = r#"<svg><polygon points="0,0 0,5 5,5"></polygon></svg>"#;
    assert_eq!(
        convert(source).unwrap(),
        r#"<svg><path d="M0,0 V5 H5 Z"/></svg>"#
    );
}

#[test]
fn test_unconverted_polygon_keeps_its_children() {
    let source = r#"<svg><polygon points=""><title>kept</title></polygon></svg>"#;
    assert_eq!(convert(source).unwrap(), source);
}

#[test]
fn test_tag_match_is_exact() {
    // XML tag names are case-sensitive and namespace prefixes are part of
    // the qualified name; neither of these is a polygon to the rewriter.
    let source = r#"<svg><POLYGON points="0,0 1,1"/><svg:polygon points="2,2 3,3"/></svg>"#;
    assert_eq!(convert(source).unwrap(), source);
}

#[test]
fn test_single_point_polygon_converts_to_move_and_close() {
    let source = r#"<svg><polygon points="5,7"/></svg>"#;
    assert_eq!(convert(source).unwrap(), r#"<svg><path d="M5,7 Z"/></svg>"#);
}

#[test]
fn test_unescapes_points_before_tokenizing() {
    // A character reference in the attribute separates the pairs once
    // unescaped; the digits inside the reference must not leak into the
    // coordinates.
    let source = "<svg><polygon points=\"0,0&#10;10,10\"/></svg>";
    assert_eq!(
        convert(source).unwrap(),
        r#"<svg><path d="M0,0 L10,10 Z"/></svg>"#
    );
}

#[test]
fn test_copied_attribute_values_stay_escaped() {
    let source = r#"<svg><polygon points="1,1 2,2" title="a &amp; b"/></svg>"#;
    assert_eq!(
        convert(source).unwrap(),
        r#"<svg><path d="M1,1 L2,2 Z" title="a &amp; b"/></svg>"#
    );
}

#[test]
fn test_decimal_and_negative_coordinates_survive_unrounded() {
    let source = r#"<svg><polygon points="-1.50,0 2.25,0 2.25,3.75"/></svg>"#;
    assert_eq!(
        convert(source).unwrap(),
        r#"<svg><path d="M-1.50,0 H2.25 V3.75 Z"/></svg>"#
    );
}
