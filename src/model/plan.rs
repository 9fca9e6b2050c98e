//! Render plans and quote-split structures handed to the consuming UI.

use serde::{Deserialize, Serialize};

/// A plain-text body split into new content and quoted reply history.
///
/// Invariant: `main_lines` followed by `quoted_lines` reproduces the input
/// line sequence exactly; once a line is classified quoted, every later
/// line is too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSplit {
    /// Lines before the first quote marker, in original order.
    pub main_lines: Vec<String>,

    /// The quote marker line and everything after it, in original order.
    pub quoted_lines: Vec<String>,
}

impl QuoteSplit {
    /// The new-content region, newline-joined and trimmed for display.
    pub fn main_text(&self) -> String {
        self.main_lines.join("\n").trim().to_string()
    }

    /// The quoted region, newline-joined verbatim (no trimming).
    pub fn quoted_text(&self) -> String {
        self.quoted_lines.join("\n")
    }

    /// Whether a quoted region was detected at all.
    pub fn has_quote(&self) -> bool {
        !self.quoted_lines.is_empty()
    }
}

/// How a decoded message should be presented.
///
/// Selection happens in [`crate::render::select_render`]; the consuming UI
/// builds the actual on-screen elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPlan {
    /// Show the HTML body inside an isolated frame. The content is
    /// externally sourced: the consumer must not grant it script or
    /// network privileges beyond same-origin resource loads.
    HtmlFrame { html: String },

    /// Show the plain-text body preformatted, with the quoted region in a
    /// collapsible section.
    SegmentedText { split: QuoteSplit },

    /// Neither body held content; show a fixed placeholder.
    Unavailable,
}
