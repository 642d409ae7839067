//! Document render view and preview derivation.
//!
//! # Responsibility
//! - Produce the printable bracketed view of a document.
//! - Derive a single-line preview of rendered payloads for logging and
//!   persistence.
//!
//! # Invariants
//! - Rendering never mutates the document.
//! - Previews contain no line breaks and are bounded in length.

use crate::model::document::Document;
use crate::model::element::Element;
use once_cell::sync::Lazy;
use regex::Regex;

const RENDER_START_MARKER: &str = "----- Document Render Start -----";
const RENDER_END_MARKER: &str = "------ Document Render End ------";

const PREVIEW_MAX_CHARS: usize = 80;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Produces the printable view of a document.
///
/// Each element's rendered string appears on its own line, bracketed by
/// start and end marker lines, in append order.
pub fn render_document(document: &Document) -> String {
    let mut out = String::new();
    out.push_str(RENDER_START_MARKER);
    out.push('\n');
    for element in document.elements() {
        out.push_str(&element.render());
        out.push('\n');
    }
    out.push_str(RENDER_END_MARKER);
    out.push('\n');
    out
}

/// Joins every element's rendered form with newline separators.
///
/// This is the exact payload handed to a storage strategy on save; an
/// empty document yields the empty string.
pub fn render_payload(document: &Document) -> String {
    document
        .elements()
        .iter()
        .map(Element::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derives a bounded single-line preview from a rendered payload.
///
/// Collapses all whitespace runs to single spaces and truncates to a fixed
/// character limit with an ellipsis marker.
pub fn derive_preview(payload: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(payload.trim(), " ");
    let mut preview = collapsed.chars().take(PREVIEW_MAX_CHARS).collect::<String>();
    if collapsed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::{derive_preview, render_document, render_payload};
    use crate::model::document::Document;
    use crate::model::element::Element;

    #[test]
    fn empty_document_renders_markers_only() {
        let rendered = render_document(&Document::new());
        assert_eq!(
            rendered,
            "----- Document Render Start -----\n------ Document Render End ------\n"
        );
    }

    #[test]
    fn empty_document_payload_is_empty_string() {
        assert_eq!(render_payload(&Document::new()), "");
    }

    #[test]
    fn payload_joins_rendered_forms_without_trailing_newline() {
        let mut document = Document::new();
        document.add_element(Element::text("a"));
        document.add_element(Element::TabSpace);
        document.add_element(Element::text("b"));

        assert_eq!(render_payload(&document), "a\n\t\nb");
    }

    #[test]
    fn derive_preview_collapses_whitespace_and_truncates() {
        assert_eq!(derive_preview("  a\n\tb   c  "), "a b c");

        let long = "x".repeat(200);
        let preview = derive_preview(&long);
        assert_eq!(preview.chars().count(), 83);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn derive_preview_of_whitespace_only_payload_is_empty() {
        assert_eq!(derive_preview(" \n\t "), "");
    }
}
