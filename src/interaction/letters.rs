//! Per-letter expansion of `.font-ex` text

use super::dom::{Document, NodeId};

pub const EXPAND_CLASS: &str = "font-ex";
pub const LETTER_CLASS: &str = "letter";

/// Replaces the children of every `.font-ex` under `scope` with one
/// `span.letter` per character of its `data-text`. Hosts that already spell
/// their text are left alone, so running it again adds no nodes.
pub fn build_letters(doc: &mut Document, scope: NodeId) {
    for host in doc.query_class(scope, EXPAND_CLASS) {
        let text = doc.attribute(host, "data-text").unwrap_or_default().to_string();
        if spells(doc, host, &text) {
            continue;
        }
        doc.clear_children(host);
        for ch in text.chars() {
            let span = doc.create_element("span");
            doc.add_class(span, LETTER_CLASS);
            doc.set_text(span, ch.encode_utf8(&mut [0; 4]));
            doc.append_child(host, span);
        }
    }
}

/// Returns true if the children of `host` are exactly the letters of `text`
fn spells(doc: &Document, host: NodeId, text: &str) -> bool {
    let children = doc.children(host);
    children.len() == text.chars().count()
        && children.iter().zip(text.chars()).all(|(child, ch)| {
            doc.has_class(*child, LETTER_CLASS)
                && doc.text(*child).chars().eq(std::iter::once(ch))
        })
}
