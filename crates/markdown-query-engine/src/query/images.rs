use super::MarkdownQuery;
use crate::models::Image;
use crate::patterns::{IMAGE_RE, rewrite_matches};

impl MarkdownQuery {
    pub fn get_images(&self, markdown: &str) -> Vec<Image> {
        IMAGE_RE
            .captures_iter(markdown)
            .map(|caps| Image::new(caps[1].trim(), caps[2].trim()))
            .collect()
    }

    /// Alt text of the first image whose URL is exactly `url`.
    pub fn get_image_alt(&self, markdown: &str, url: &str) -> Option<String> {
        IMAGE_RE
            .captures_iter(markdown)
            .find(|caps| caps[2].trim() == url)
            .map(|caps| caps[1].trim().to_string())
    }

    /// Sets the alt text of every image at `url`. The URL is kept as written.
    pub fn update_image_alt(&self, markdown: &str, url: &str, new_alt: &str) -> String {
        rewrite_matches(&IMAGE_RE, markdown, 0, "image", |caps| {
            (caps[2].trim() == url).then(|| format!("![{new_alt}]({})", &caps[2]))
        })
    }

    /// Removes every image at `url`, alt text and URL included.
    pub fn delete_image(&self, markdown: &str, url: &str) -> String {
        rewrite_matches(&IMAGE_RE, markdown, 0, "image", |caps| {
            (caps[2].trim() == url).then(String::new)
        })
    }

    /// Clears the alt text of every image at `url`; the image itself stays.
    pub fn delete_image_alt(&self, markdown: &str, url: &str) -> String {
        self.update_image_alt(markdown, url, "")
    }
}
