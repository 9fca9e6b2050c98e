//! Quote-block segmentation for plain-text reply bodies.

use crate::model::plan::QuoteSplit;

/// Split a plain-text body into new content and quoted reply history.
///
/// Carriage returns are stripped and the text is walked line by line. The
/// first line that either carries an "On … wrote:" attribution or starts
/// with `>` flips the split into the quoted region, and every line from
/// there on stays quoted (the transition is one-way). A line starting with
/// `>` in the middle of new content, say a pasted snippet, therefore drags
/// the rest of the body into the quoted region; that matches how mail
/// clients conventionally fold reply history.
pub fn segment(text: &str) -> QuoteSplit {
    let normalized = text.replace('\r', "");
    let mut split = QuoteSplit::default();
    let mut in_quote = false;

    for line in normalized.split('\n') {
        if !in_quote && (is_attribution_line(line) || line.starts_with('>')) {
            in_quote = true;
        }
        if in_quote {
            split.quoted_lines.push(line.to_string());
        } else {
            split.main_lines.push(line.to_string());
        }
    }

    split
}

/// Whether a line looks like a reply attribution: `On ` somewhere in the
/// line with ` wrote:` after it.
fn is_attribution_line(line: &str) -> bool {
    match line.find("On ") {
        Some(pos) => line[pos + 3..].contains(" wrote:"),
        None => false,
    }
}
