use serde::{Deserialize, Serialize};
use std::fmt;

/// An inline `[text](url)` link, or a bare URL with empty `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// An inline `![alt](url)` image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub alt: String,
    pub url: String,
}

impl Image {
    pub fn new(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            url: url.into(),
        }
    }
}

/// Addresses tagged elements embedded in a document.
///
/// Identifiers are assumed to be unique, so an `Id` selector only ever
/// addresses the first matching element. `Class` and `Tag` address every
/// match in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementSelector {
    Id(String),
    Class(String),
    Tag(String),
}

impl ElementSelector {
    /// Maximum number of elements this selector addresses, `0` meaning all.
    pub(crate) fn match_limit(&self) -> usize {
        match self {
            ElementSelector::Id(_) => 1,
            ElementSelector::Class(_) | ElementSelector::Tag(_) => 0,
        }
    }
}

impl fmt::Display for ElementSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementSelector::Id(id) => write!(f, "#{id}"),
            ElementSelector::Class(class) => write!(f, ".{class}"),
            ElementSelector::Tag(tag) => write!(f, "<{tag}>"),
        }
    }
}
