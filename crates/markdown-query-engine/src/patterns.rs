//! Patterns shared by the query operations.
//!
//! Fixed patterns are compiled once on first use. Element patterns embed the
//! caller's selector and are built per call, with the selector escaped so it
//! is always matched literally.

use crate::error::QueryError;
use crate::models::ElementSelector;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `[text](url)` links, or a bare `http(s)://` URL when no bracket
/// form starts at that position.
pub static LINK_OR_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)|https?://[^\s)]+").expect("Invalid link regex")
});

/// Matches `[text](url)` links only
pub static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));

/// Matches `![alt](url)` images, alt text may be empty
pub static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex"));

/// Matches a fenced block from an opening ``` to the nearest following ```
pub static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("Invalid code block regex"));

/// Matches an ATX header line, capturing its text
pub static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[ \t]*#+[ \t]+(.*)$").expect("Invalid header regex"));

/// Matches a bullet (`-`, `*`, `+`) list line, capturing its text
pub static BULLET_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^[ \t]*[-*+][ \t]+(.*)$").expect("Invalid bullet item regex")
});

/// Builds the pattern for elements addressed by `selector`.
///
/// Group 1 is the opening tag, group 2 the inner content and group 3 the
/// closing tag. Inner content is matched lazily so the nearest closing tag
/// ends the element.
pub fn element_regex(
    selector: &ElementSelector,
    element_tag: &str,
) -> Result<Regex, QueryError> {
    let pattern = match selector {
        ElementSelector::Id(id) => attribute_pattern(element_tag, "id", id),
        ElementSelector::Class(class) => attribute_pattern(element_tag, "class", class),
        ElementSelector::Tag(tag) => {
            let tag = regex::escape(tag);
            format!(r"(?s)(<{tag}(?:\s[^>]*)?>)(.*?)(</{tag}>)")
        }
    };

    Regex::new(&pattern).map_err(|source| QueryError::InvalidSelector {
        selector: selector.to_string(),
        source,
    })
}

fn attribute_pattern(element_tag: &str, attribute: &str, value: &str) -> String {
    let tag = regex::escape(element_tag);
    let value = regex::escape(value);
    format!(r#"(?s)(<{tag}\s+{attribute}=["']{value}["'][^>]*>)(.*?)(</{tag}>)"#)
}

/// Text of the whole match that precedes capture `group`.
pub fn text_before_group<'h>(caps: &Captures<'h>, group: usize) -> &'h str {
    match (caps.get(0), caps.get(group)) {
        (Some(whole), Some(inner)) => &whole.as_str()[..inner.start() - whole.start()],
        _ => "",
    }
}

/// Rewrites up to `limit` matches of `re` (`0` meaning all).
///
/// Matches for which `rewrite` returns `None` are kept verbatim.
pub fn rewrite_matches<F>(
    re: &Regex,
    markdown: &str,
    limit: usize,
    kind: &str,
    mut rewrite: F,
) -> String
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let mut rewritten = 0usize;
    let output = re.replacen(markdown, limit, |caps: &Captures<'_>| match rewrite(caps) {
        Some(replacement) => {
            rewritten += 1;
            replacement
        }
        None => caps[0].to_string(),
    });
    log::debug!("Rewrote {rewritten} {kind} match(es)");
    output.into_owned()
}
