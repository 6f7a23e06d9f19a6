//! Integration tests for reading-order reconstruction and HTML rendering.

use serde_json::json;
use unlayout::render::{to_html, RenderOptions};
use unlayout::{parse_value, Document, ElementRef};

fn parse(value: serde_json::Value) -> Document {
    parse_value(value).unwrap()
}

fn body(doc: &Document) -> String {
    let html = to_html(doc, &RenderOptions::default()).unwrap();
    let start = html.find("<body>").unwrap() + "<body>".len();
    let end = html.rfind("</body>").unwrap();
    html[start..end].to_string()
}

fn region(page: u32, y: f64) -> serde_json::Value {
    json!({"pageNumber": page, "polygon": [0.0, y, 100.0, y, 100.0, y + 10.0, 0.0, y + 10.0]})
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = parse(json!({
        "paragraphs": [
            {"role": "title", "content": "Card Agreement", "spans": [{"offset": 0, "length": 14}]},
            {"content": "- Purchases", "boundingRegions": [region(1, 300.0)]},
            {"content": "- Cash advances", "boundingRegions": [region(1, 300.0)]},
            {"content": "Annual Fee"},
            {"content": "$0"}
        ],
        "tables": [{
            "rowCount": 1, "columnCount": 2,
            "cells": [
                {"rowIndex": 0, "columnIndex": 0, "content": "APR"},
                {"rowIndex": 0, "columnIndex": 1, "content": "19.99%"}
            ],
            "boundingRegions": [region(1, 300.0)]
        }],
        "figures": [{"id": "1.1", "boundingRegions": [region(1, 300.0)]}]
    }));

    let first = to_html(&doc, &RenderOptions::default()).unwrap();
    for _ in 0..5 {
        assert_eq!(to_html(&doc, &RenderOptions::default()).unwrap(), first);
    }
}

#[test]
fn test_span_order_beats_geometry() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "Second", "spans": [{"offset": 50, "length": 6}], "boundingRegions": [region(1, 10.0)]},
            {"content": "First", "spans": [{"offset": 10, "length": 5}], "boundingRegions": [region(3, 700.0)]}
        ]
    }));

    assert_eq!(body(&doc), "<p>First</p><p>Second</p>");
}

#[test]
fn test_paragraphs_inside_tables_are_dropped() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "Rates", "spans": [{"offset": 0, "length": 5}]},
            {"content": "APR", "spans": [{"offset": 10, "length": 3}]},
            {"content": "straddles the end", "spans": [{"offset": 25, "length": 20}]},
            {"content": "After", "spans": [{"offset": 50, "length": 5}]}
        ],
        "tables": [{
            "rowCount": 1, "columnCount": 1,
            "cells": [{"rowIndex": 0, "columnIndex": 0, "content": "APR"}],
            "spans": [{"offset": 8, "length": 22}]
        }]
    }));

    assert_eq!(
        body(&doc),
        "<p>Rates</p><table><tbody><tr><th>APR</th></tr></tbody></table><p>After</p>"
    );
}

#[test]
fn test_paragraphs_without_spans_are_never_contained() {
    let doc = parse(json!({
        "paragraphs": [{"content": "Floating"}],
        "tables": [{"rowCount": 0, "columnCount": 0, "spans": [{"offset": 0, "length": 100}]}]
    }));

    assert_eq!(body(&doc), "<p>Floating</p>");
}

#[test]
fn test_consecutive_bullets_form_one_list() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "- a", "spans": [{"offset": 0, "length": 3}]},
            {"content": "- b", "spans": [{"offset": 4, "length": 3}]},
            {"content": "· c", "spans": [{"offset": 8, "length": 3}]},
            {"content": "Done", "spans": [{"offset": 12, "length": 4}]}
        ]
    }));

    assert_eq!(
        body(&doc),
        "<ul><li>a</li><li>b</li><li>c</li></ul><p>Done</p>"
    );
}

#[test]
fn test_key_value_pairing() {
    let paired = parse(json!({
        "paragraphs": [
            {"content": "Annual Fee", "spans": [{"offset": 0, "length": 10}]},
            {"content": "$50", "spans": [{"offset": 11, "length": 3}]}
        ]
    }));
    assert_eq!(
        body(&paired),
        "<table><tbody><tr><th>Annual Fee</th><td>$50</td></tr></tbody></table>"
    );

    let unpaired = parse(json!({
        "paragraphs": [
            {"content": "Summary", "spans": [{"offset": 0, "length": 7}]},
            {"content": "See details below", "spans": [{"offset": 8, "length": 17}]}
        ]
    }));
    assert_eq!(body(&unpaired), "<p>Summary</p><p>See details below</p>");
}

#[test]
fn test_section_cycle_terminates() {
    let doc = parse(json!({
        "paragraphs": [{"content": "Zero"}, {"content": "One"}],
        "sections": [
            {"elements": ["/sections/1", "/paragraphs/0"]},
            {"elements": ["/sections/0", "/paragraphs/1"]}
        ]
    }));

    let order = unlayout::sequence(&doc);
    assert_eq!(
        order.sections.elements(),
        &[ElementRef::Paragraph(1), ElementRef::Paragraph(0)]
    );
    assert_eq!(body(&doc), "<p>One</p><p>Zero</p>");
}

#[test]
fn test_geometry_fallback_chain() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "Lower", "boundingRegions": [region(2, 200.0)]},
            {"content": "Upper", "boundingRegions": [region(2, 100.0)]},
            {"content": "Anchored late", "spans": [{"offset": 400, "length": 13}], "boundingRegions": [region(3, 500.0)]},
            {"content": "Anchored early", "spans": [{"offset": 0, "length": 14}], "boundingRegions": [region(2, 900.0)]}
        ]
    }));

    assert_eq!(
        body(&doc),
        "<p>Anchored early</p><p>Anchored late</p><p>Upper</p><p>Lower</p>"
    );
}

#[test]
fn test_table_rendering() {
    let doc = parse(json!({
        "tables": [{
            "rowCount": 2, "columnCount": 2,
            "cells": [
                {"rowIndex": 0, "columnIndex": 0, "content": "A"},
                {"rowIndex": 0, "columnIndex": 1, "content": "B"},
                {"rowIndex": 1, "columnIndex": 0, "content": "1"},
                {"rowIndex": 1, "columnIndex": 1, "content": "2"}
            ]
        }]
    }));

    assert_eq!(
        body(&doc),
        "<table><tbody><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></tbody></table>"
    );
}

#[test]
fn test_text_is_escaped() {
    let doc = parse(json!({
        "paragraphs": [{"content": "<script>alert('x')</script>"}],
        "figures": [{"id": "<id>", "caption": {"content": "A & B"}, "spans": [{"offset": 5, "length": 1}]}]
    }));

    let html = body(&doc);
    assert!(html.contains("<figure id=\"&lt;id&gt;\">A &amp; B</figure>"));
    assert!(html.contains("<p>&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;</p>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_figure_captions_are_not_repeated() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "Intro", "spans": [{"offset": 0, "length": 5}]},
            {"content": " Figure 1: Rates over time ", "spans": [{"offset": 200, "length": 25}]}
        ],
        "figures": [{
            "id": "1",
            "caption": {"content": "Figure 1: Rates over time"},
            "spans": [{"offset": 50, "length": 10}]
        }]
    }));

    assert_eq!(
        body(&doc),
        "<p>Intro</p><figure id=\"1\">Figure 1: Rates over time</figure>"
    );
}

#[test]
fn test_malformed_positions_are_tolerated() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "Negative", "spans": [{"offset": -5, "length": 3}], "boundingRegions": [{"pageNumber": null, "polygon": null}]},
            {"content": "Valid", "spans": [{"offset": 1, "length": 5}]}
        ],
        "sections": [{"elements": ["/sections/42", "bogus", "/paragraphs/x"]}]
    }));

    assert_eq!(body(&doc), "<p>Valid</p><p>Negative</p>");
}

#[test]
fn test_wrongly_typed_positions_degrade_ordering_only() {
    let doc = parse(json!({
        "paragraphs": [
            {"content": "Keep me", "boundingRegions": [{"pageNumber": 1, "polygon": [0.0, null, 1.0, 2.0]}]},
            {"content": "Float offset", "spans": [{"offset": 3.0, "length": 2}]},
            {"content": "String page", "spans": [{"offset": "7", "length": 2}], "boundingRegions": [{"pageNumber": "1", "polygon": "nope"}]},
            {"content": "Anchored", "spans": [{"offset": 0, "length": 8}]}
        ],
        "tables": [{"rowCount": 1.5, "columnCount": 1, "cells": [{"rowIndex": 0, "columnIndex": 0, "content": "x"}]}]
    }));

    assert_eq!(doc.paragraphs.len(), 4);
    assert_eq!(
        body(&doc),
        "<p>Anchored</p><p>Keep me</p><p>Float offset</p><p>String page</p>"
    );
}
