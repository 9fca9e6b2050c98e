//! MIME message decoding: boundary detection, part splitting, and body
//! extraction.
//!
//! Decoding never fails. A message with no recognizable structure decodes
//! to empty bodies and the caller renders a placeholder instead.

use tracing::debug;

use super::qp::decode_qp;
use crate::model::message::{DecodedMessage, MessageSource};

/// Decode any message source into displayable bodies.
///
/// Pre-decoded sources pass through untouched; raw sources go through
/// [`decode`].
pub fn decode_source(source: MessageSource) -> DecodedMessage {
    match source {
        MessageSource::Raw(raw) => decode(&raw),
        MessageSource::PreDecoded(msg) => msg,
    }
}

/// Decode a raw RFC 2822/MIME message into HTML and plain-text bodies.
///
/// If a `boundary=` parameter is found anywhere in the text, the message is
/// split on the boundary delimiter and the first `text/html` and
/// `text/plain` parts are extracted. With a boundary but no matching part,
/// the corresponding body stays `None` (no single-part fallback once a
/// boundary was seen). Without a boundary the whole message is treated as
/// one part and its body lands in `text_body`, whatever its declared
/// content type.
pub fn decode(raw: &str) -> DecodedMessage {
    let Some(boundary) = find_boundary(raw) else {
        debug!("No boundary parameter, treating message as single part");
        return DecodedMessage {
            html_body: None,
            text_body: Some(part_body(raw)),
        };
    };

    debug!(boundary = %boundary, "Splitting multipart message");
    let parts = split_parts(raw, &boundary);

    let html_body = find_part(&parts, "content-type: text/html").map(part_body);
    let text_body = find_part(&parts, "content-type: text/plain").map(part_body);

    if html_body.is_none() && text_body.is_none() {
        debug!("Boundary present but no text/html or text/plain part found");
    }

    DecodedMessage {
        html_body,
        text_body,
    }
}

/// Find the first `boundary=` parameter value, case-insensitive, anywhere
/// in the message (not restricted to the top-level `Content-Type` header).
///
/// Accepts `boundary="value"` and `boundary=value`; the value runs until
/// the first whitespace or double quote.
fn find_boundary(raw: &str) -> Option<String> {
    const PARAM: &str = "boundary=";

    // ASCII lowercasing keeps byte offsets aligned with the original.
    let lower = raw.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(rel) = lower[search_from..].find(PARAM) {
        let value_start = search_from + rel + PARAM.len();
        let rest = &raw[value_start..];
        let rest = rest.strip_prefix('"').unwrap_or(rest);

        let end = rest
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(rest.len());
        if end > 0 {
            return Some(rest[..end].to_string());
        }
        search_from = value_start;
    }
    None
}

/// Split a message on its boundary delimiter lines.
///
/// The delimiter is the literal text `--<boundary>`, optionally followed by
/// the closing `--`. Matching is plain substring search, so characters in
/// the boundary that would be special to a pattern engine need no escaping.
fn split_parts<'a>(raw: &'a str, boundary: &str) -> Vec<&'a str> {
    let delimiter = format!("--{boundary}");
    let mut parts = Vec::new();
    let mut rest = raw;

    while let Some(pos) = rest.find(&delimiter) {
        parts.push(&rest[..pos]);
        let mut after = &rest[pos + delimiter.len()..];
        if let Some(stripped) = after.strip_prefix("--") {
            after = stripped;
        }
        rest = after;
    }
    parts.push(rest);
    parts
}

/// Locate the first part containing the given marker, case-insensitive.
///
/// Parts are matched by substring only; there is no recursive descent into
/// nested multiparts.
fn find_part<'a>(parts: &[&'a str], marker: &str) -> Option<&'a str> {
    parts
        .iter()
        .find(|p| p.to_ascii_lowercase().contains(marker))
        .copied()
}

/// Extract and decode the body of one part.
///
/// The body is everything after the first blank-line separator; no
/// separator means an empty body. A `quoted-printable` transfer encoding is
/// decoded; every other encoding is passed through raw.
fn part_body(part: &str) -> String {
    let Some(body) = body_after_headers(part) else {
        return String::new();
    };

    if transfer_encoding(part) == "quoted-printable" {
        decode_qp(body)
    } else {
        body.to_string()
    }
}

/// The first `Content-Transfer-Encoding` value in a part, trimmed and
/// lower-cased. Empty string when the header is absent.
fn transfer_encoding(part: &str) -> String {
    const HEADER: &str = "content-transfer-encoding:";

    let lower = part.to_ascii_lowercase();
    let Some(pos) = lower.find(HEADER) else {
        return String::new();
    };

    let rest = &part[pos + HEADER.len()..];
    let value = rest.lines().next().unwrap_or("");
    value.trim().to_ascii_lowercase()
}

/// Everything after the first blank-line separator within a part.
///
/// CRLF messages separate with `\r\n\r\n`; LF-only messages with `\n\n`.
/// Whichever occurs first wins.
fn body_after_headers(part: &str) -> Option<&str> {
    let crlf = part.find("\r\n\r\n");
    let lf = part.find("\n\n");

    match (crlf, lf) {
        (Some(c), Some(l)) if c <= l => Some(&part[c + 4..]),
        (_, Some(l)) => Some(&part[l + 2..]),
        (Some(c), None) => Some(&part[c + 4..]),
        (None, None) => None,
    }
}
