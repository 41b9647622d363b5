use super::MarkdownQuery;
use crate::patterns::{HEADER_RE, rewrite_matches, text_before_group};

impl MarkdownQuery {
    /// Text of every ATX header, whatever its level.
    pub fn get_headers(&self, markdown: &str) -> Vec<String> {
        HEADER_RE
            .captures_iter(markdown)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }

    /// Renames every header whose text is `old_header`.
    ///
    /// The original `#` prefix and the whitespace after it are kept and the
    /// new text is appended after one further space, so `## Old` becomes
    /// `##  New`.
    pub fn update_headers(&self, markdown: &str, old_header: &str, new_header: &str) -> String {
        rewrite_matches(&HEADER_RE, markdown, 0, "header", |caps| {
            (caps[1].trim() == old_header)
                .then(|| format!("{} {new_header}", text_before_group(caps, 1)))
        })
    }

    /// Removes the text of every header matching `header`, leaving the `#`
    /// prefix and its trailing whitespace on the line.
    pub fn delete_headers(&self, markdown: &str, header: &str) -> String {
        rewrite_matches(&HEADER_RE, markdown, 0, "header", |caps| {
            (caps[1].trim() == header).then(|| text_before_group(caps, 1).to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const OUTLINE: &str = "
# First Header
Some text under the first header.

  ## Second Header
Some text under the second header.

### Third Header
Some text under the third header.
";

    fn query() -> MarkdownQuery {
        MarkdownQuery::new()
    }

    #[test]
    fn get_headers_of_every_level() {
        assert_debug_snapshot!(query().get_headers(OUTLINE), @r###"
        [
            "First Header",
            "Second Header",
            "Third Header",
        ]
        "###);
    }

    #[rstest]
    #[case("Header 1\nSome text\n\nHeader 2")]
    #[case("#hashtag is not a header")]
    #[case("text with a # in the middle")]
    #[case("")]
    fn lines_without_atx_prefix_are_not_headers(#[case] markdown: &str) {
        assert!(query().get_headers(markdown).is_empty());
    }

    #[test]
    fn get_headers_strips_carriage_returns() {
        assert_eq!(query().get_headers("# One\r\n## Two\r\n"), ["One", "Two"]);
    }

    #[test]
    fn update_headers_keeps_prefix_and_adds_space() {
        let markdown = "\n# Header 1\n## Header 2\n### Header 3\n";
        assert_eq!(
            query().update_headers(markdown, "Header 2", "Updated Header 2"),
            "\n# Header 1\n##  Updated Header 2\n### Header 3\n"
        );
    }

    #[test]
    fn update_headers_rewrites_every_occurrence() {
        let markdown = "## Header 2\r\n#### Header 2\r\n";
        assert_eq!(
            query().update_headers(markdown, "Header 2", "New"),
            "##  New\r\n####  New\r\n"
        );
    }

    #[rstest]
    #[case("THIRD HEADER")]
    #[case("Non-Matching Header")]
    #[case("Header")]
    fn update_and_delete_without_match_are_unchanged(#[case] header: &str) {
        assert_eq!(query().update_headers(OUTLINE, header, "X"), OUTLINE);
        assert_eq!(query().delete_headers(OUTLINE, header), OUTLINE);
    }

    #[test]
    fn delete_headers_leaves_prefix_in_place() {
        assert_eq!(
            query().delete_headers(OUTLINE, "Second Header"),
            OUTLINE.replace("  ## Second Header\n", "  ## \n")
        );
    }

    #[test]
    fn delete_headers_of_empty_document() {
        assert_eq!(query().delete_headers("", "Header"), "");
    }
}
