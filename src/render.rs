//! Render-plan selection.

use crate::model::message::DecodedMessage;
use crate::model::plan::RenderPlan;
use crate::parser::quote::segment;

/// Pick how a decoded message should be displayed.
///
/// HTML wins when present; otherwise the plain-text body is segmented into
/// new content and quoted history; with neither, the caller shows a fixed
/// placeholder. Pure function, no side effects.
pub fn select_render(msg: &DecodedMessage) -> RenderPlan {
    if msg.has_html() {
        RenderPlan::HtmlFrame {
            html: msg.html_body.clone().unwrap_or_default(),
        }
    } else if msg.has_text() {
        RenderPlan::SegmentedText {
            split: segment(msg.text_body.as_deref().unwrap_or_default()),
        }
    } else {
        RenderPlan::Unavailable
    }
}
