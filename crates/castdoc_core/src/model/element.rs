//! Renderable element variants.

use serde::{Deserialize, Serialize};

/// One renderable unit of a document.
///
/// The variant set is closed; each variant maps to a fixed string when
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Raw text, rendered verbatim.
    Text { text: String },
    /// Image reference, rendered as a bracketed path.
    Image { path: String },
    /// Line break.
    NewLine,
    /// Tab space.
    TabSpace,
}

impl Element {
    /// Creates a text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an image element from a path reference.
    ///
    /// The path is kept as provided; no filesystem access happens here or
    /// at render time.
    pub fn image(path: impl Into<String>) -> Self {
        Self::Image { path: path.into() }
    }

    /// Returns this element's fixed string representation.
    ///
    /// Pure: no side effects, same output for the same element.
    pub fn render(&self) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Image { path } => format!("[Image: {path}]"),
            Self::NewLine => "\n".to_string(),
            Self::TabSpace => "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn render_maps_every_variant_to_its_fixed_form() {
        assert_eq!(Element::text("Hello").render(), "Hello");
        assert_eq!(Element::image("cover.png").render(), "[Image: cover.png]");
        assert_eq!(Element::NewLine.render(), "\n");
        assert_eq!(Element::TabSpace.render(), "\t");
    }

    #[test]
    fn serializes_with_snake_case_type_tags() {
        let text = serde_json::to_value(Element::text("hi")).expect("text should serialize");
        assert_eq!(text["type"], "text");
        assert_eq!(text["text"], "hi");

        let tab = serde_json::to_value(Element::TabSpace).expect("tab should serialize");
        assert_eq!(tab["type"], "tab_space");
    }
}
