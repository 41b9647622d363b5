//! The query/mutation engine.
//!
//! Every operation scans the raw document text with a pattern; no tree is
//! built and nothing is cached between calls. Extractors return what they
//! found (`None` or an empty `Vec` otherwise), mutators return a new document
//! that is byte-for-byte the input when nothing matched.

mod code_blocks;
mod elements;
mod headers;
mod images;
mod links;
mod lists;

/// Stateless engine over Markdown text with embedded tagged elements.
///
/// The only option is the tag name used when addressing elements by
/// identifier or class, `div` unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownQuery {
    element_tag: String,
}

impl MarkdownQuery {
    pub const DEFAULT_ELEMENT_TAG: &'static str = "div";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element_tag(element_tag: impl Into<String>) -> Self {
        Self {
            element_tag: element_tag.into(),
        }
    }

    pub fn element_tag(&self) -> &str {
        &self.element_tag
    }
}

impl Default for MarkdownQuery {
    fn default() -> Self {
        Self::with_element_tag(Self::DEFAULT_ELEMENT_TAG)
    }
}
