//! Integration tests for message decoding, quote segmentation, and render
//! selection.

use std::path::Path;

use mailview::model::message::{DecodedMessage, MessageSource};
use mailview::model::plan::RenderPlan;
use mailview::parser::mime::{decode, decode_source};
use mailview::parser::qp::decode_qp;
use mailview::parser::quote::segment;
use mailview::render::select_render;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

// ─── Multipart decoding ─────────────────────────────────────────────

#[test]
fn test_decode_multipart_fixture() {
    let msg = decode(&fixture("multipart.eml"));
    assert_eq!(msg.text_body.as_deref().map(str::trim_end), Some("Hello"));
    assert_eq!(
        msg.html_body.as_deref().map(str::trim_end),
        Some("<p>Hello</p>")
    );
}

#[test]
fn test_multipart_selects_html_frame() {
    let msg = decode(&fixture("multipart.eml"));
    match select_render(&msg) {
        RenderPlan::HtmlFrame { html } => assert_eq!(html.trim_end(), "<p>Hello</p>"),
        other => panic!("expected HtmlFrame, got {other:?}"),
    }
}

#[test]
fn test_decode_quoted_printable_fixture() {
    let msg = decode(&fixture("quoted_printable.eml"));
    assert_eq!(
        msg.text_body.as_deref().map(str::trim_end),
        Some("Café con leche")
    );
    assert_eq!(msg.html_body, None);
}

// ─── Single-part decoding ───────────────────────────────────────────

#[test]
fn test_decode_single_part_fixture() {
    let msg = decode(&fixture("single_part.eml"));
    assert_eq!(msg.text_body.as_deref(), Some("Just text"));
    assert_eq!(msg.html_body, None);
    assert!(matches!(
        select_render(&msg),
        RenderPlan::SegmentedText { .. }
    ));
}

// ─── Pre-decoded JSON input ─────────────────────────────────────────

#[test]
fn test_predecoded_json_fixture() {
    let decoded: DecodedMessage =
        serde_json::from_str(&fixture("predecoded.json")).expect("valid pre-decoded JSON");
    assert_eq!(decoded.html_body, None);

    let msg = decode_source(MessageSource::PreDecoded(decoded));
    match select_render(&msg) {
        RenderPlan::SegmentedText { split } => {
            assert_eq!(split.main_lines, vec!["Thanks!"]);
            assert_eq!(
                split.quoted_lines,
                vec!["On Mon, Jan 1 wrote:", "> previous message"]
            );
        }
        other => panic!("expected SegmentedText, got {other:?}"),
    }
}

// ─── Quote segmentation ─────────────────────────────────────────────

#[test]
fn test_segment_reply_fixture() {
    let split = segment(fixture("reply.txt").trim_end());
    assert_eq!(split.main_lines, vec!["Thanks!"]);
    assert_eq!(
        split.quoted_lines,
        vec!["On Mon, Jan 1 wrote:", "> previous message"]
    );
    assert_eq!(split.main_text(), "Thanks!");
    assert_eq!(
        split.quoted_text(),
        "On Mon, Jan 1 wrote:\n> previous message"
    );
}

#[test]
fn test_segment_no_markers_keeps_everything_main() {
    let text = "a plain message\nwith two lines";
    let split = segment(text);
    assert_eq!(split.main_lines, vec!["a plain message", "with two lines"]);
    assert!(split.quoted_lines.is_empty());
}

#[test]
fn test_segment_reconstruction() {
    let text = "hi\nsome context\nOn Fri, Bob wrote:\n> old stuff\n\nsig";
    let split = segment(text);
    let mut rebuilt = split.main_lines.clone();
    rebuilt.extend(split.quoted_lines.clone());
    assert_eq!(rebuilt.join("\n"), text);
}

// ─── End-to-end fallbacks ───────────────────────────────────────────

#[test]
fn test_empty_bodies_render_unavailable() {
    let msg = DecodedMessage::default();
    assert_eq!(select_render(&msg), RenderPlan::Unavailable);
}

#[test]
fn test_boundary_with_no_matching_parts_renders_unavailable() {
    let raw = "Content-Type: multipart/mixed; boundary=\"x\"\r\n\r\n\
               --x\r\nContent-Type: image/png\r\n\r\nPNG\r\n--x--\r\n";
    let msg = decode(raw);
    assert_eq!(select_render(&msg), RenderPlan::Unavailable);
}

#[test]
fn test_decode_qp_examples() {
    assert_eq!(decode_qp(""), "");
    assert_eq!(decode_qp("Caf=C3=A9"), "Café");
    assert_eq!(decode_qp("line one=\r\nline two"), "line oneline two");
}

#[test]
fn test_decode_message_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("msg.eml");
    std::fs::write(&path, "Content-Type: text/plain\r\n\r\nfrom disk").unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    let msg = decode(&raw);
    assert_eq!(msg.text_body.as_deref(), Some("from disk"));
}

#[test]
fn test_render_plan_json_output() {
    let msg = decode(&fixture("multipart.eml"));
    let plan = select_render(&msg);
    let json = serde_json::to_string(&plan).expect("serialize plan");
    assert!(json.contains("\"kind\":\"html_frame\""));
}
