use super::MarkdownQuery;
use crate::models::Link;
use crate::patterns::{LINK_OR_URL_RE, LINK_RE, rewrite_matches};

impl MarkdownQuery {
    /// All `[text](url)` links and bare URLs, in document order.
    ///
    /// The image form `![alt](url)` is reported too, with the alt text as the
    /// link text. Bare URLs have empty text.
    pub fn get_links(&self, markdown: &str) -> Vec<Link> {
        LINK_OR_URL_RE
            .captures_iter(markdown)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(text), Some(url)) => Link::new(text.as_str().trim(), url.as_str().trim()),
                _ => Link::new("", caps[0].trim()),
            })
            .collect()
    }

    /// Points every `[text](old_url)` link at `new_url`, optionally replacing
    /// its text. An empty `new_text` keeps the existing text.
    pub fn update_link(
        &self,
        markdown: &str,
        old_url: &str,
        new_url: &str,
        new_text: Option<&str>,
    ) -> String {
        rewrite_matches(&LINK_RE, markdown, 0, "link", |caps| {
            if caps[2].trim() != old_url {
                return None;
            }
            let text = new_text
                .filter(|text| !text.is_empty())
                .unwrap_or(&caps[1]);
            Some(format!("[{text}]({new_url})"))
        })
    }

    /// Removes every `[text](url)` link pointing at `url`. Bare URLs are left
    /// alone.
    pub fn delete_link(&self, markdown: &str, url: &str) -> String {
        rewrite_matches(&LINK_RE, markdown, 0, "link", |caps| {
            (caps[2].trim() == url).then(String::new)
        })
    }
}
