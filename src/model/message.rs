//! Message input and decoded-body types.

use serde::{Deserialize, Serialize};

/// One message as handed to the render pipeline.
///
/// Upstream collaborators deliver either the raw RFC 2822/MIME text or an
/// already-split `{html_body, text_body}` object; both converge on a
/// [`DecodedMessage`] before render selection.
#[derive(Debug, Clone)]
pub enum MessageSource {
    /// Raw internet-message text (headers + blank line + body, optionally
    /// multipart). Whether it is multipart is detected during decoding.
    Raw(String),

    /// Pre-decoded bodies supplied by the caller; decoding is bypassed.
    PreDecoded(DecodedMessage),
}

/// Decoded bodies of one message, ready for render selection.
///
/// `None` means the corresponding part was never located. `Some("")` can
/// occur when a part was located but had no blank-line separator; render
/// selection treats both as "no content".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodedMessage {
    /// Body of the `text/html` part, if one was found.
    pub html_body: Option<String>,

    /// Body of the `text/plain` part, or the whole body of a single-part
    /// message (regardless of its declared content type).
    pub text_body: Option<String>,
}

impl DecodedMessage {
    /// Whether the HTML body holds displayable content.
    pub fn has_html(&self) -> bool {
        self.html_body.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether the text body holds displayable content.
    pub fn has_text(&self) -> bool {
        self.text_body.as_deref().is_some_and(|s| !s.is_empty())
    }
}
