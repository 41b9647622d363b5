use super::MarkdownQuery;
use crate::models::ElementSelector;
use crate::patterns::{self, rewrite_matches};
use regex::Regex;

impl MarkdownQuery {
    /// Inner content of the elements addressed by `selector`, trimmed, in
    /// document order.
    pub fn get_elements(&self, markdown: &str, selector: &ElementSelector) -> Vec<String> {
        let Some(re) = self.element_regex(selector) else {
            return Vec::new();
        };
        let contents = re
            .captures_iter(markdown)
            .map(|caps| caps[2].trim().to_string());
        match selector.match_limit() {
            0 => contents.collect(),
            limit => contents.take(limit).collect(),
        }
    }

    /// Replaces the inner content of addressed elements with `new_content`
    /// on its own line, keeping the tags.
    pub fn update_elements(
        &self,
        markdown: &str,
        selector: &ElementSelector,
        new_content: &str,
    ) -> String {
        let Some(re) = self.element_regex(selector) else {
            return markdown.to_string();
        };
        rewrite_matches(&re, markdown, selector.match_limit(), "element", |caps| {
            Some(format!("{}\n{new_content}\n{}", &caps[1], &caps[3]))
        })
    }

    /// Removes addressed elements, opening through closing tag.
    pub fn delete_elements(&self, markdown: &str, selector: &ElementSelector) -> String {
        let Some(re) = self.element_regex(selector) else {
            return markdown.to_string();
        };
        rewrite_matches(&re, markdown, selector.match_limit(), "element", |_| {
            Some(String::new())
        })
    }

    pub fn get_element_by_id(&self, markdown: &str, id: &str) -> Option<String> {
        self.get_elements(markdown, &ElementSelector::Id(id.to_string()))
            .into_iter()
            .next()
    }

    pub fn get_elements_by_class_name(&self, markdown: &str, class_name: &str) -> Vec<String> {
        self.get_elements(markdown, &ElementSelector::Class(class_name.to_string()))
    }

    pub fn get_elements_by_tag(&self, markdown: &str, tag_name: &str) -> Vec<String> {
        self.get_elements(markdown, &ElementSelector::Tag(tag_name.to_string()))
    }

    pub fn update_element_by_id(&self, markdown: &str, id: &str, new_content: &str) -> String {
        self.update_elements(markdown, &ElementSelector::Id(id.to_string()), new_content)
    }

    pub fn update_elements_by_class_name(
        &self,
        markdown: &str,
        class_name: &str,
        new_content: &str,
    ) -> String {
        self.update_elements(
            markdown,
            &ElementSelector::Class(class_name.to_string()),
            new_content,
        )
    }

    pub fn update_elements_by_tag(
        &self,
        markdown: &str,
        tag_name: &str,
        new_content: &str,
    ) -> String {
        self.update_elements(
            markdown,
            &ElementSelector::Tag(tag_name.to_string()),
            new_content,
        )
    }

    pub fn delete_element_by_id(&self, markdown: &str, id: &str) -> String {
        self.delete_elements(markdown, &ElementSelector::Id(id.to_string()))
    }

    pub fn delete_elements_by_class_name(&self, markdown: &str, class_name: &str) -> String {
        self.delete_elements(markdown, &ElementSelector::Class(class_name.to_string()))
    }

    pub fn delete_elements_by_tag(&self, markdown: &str, tag_name: &str) -> String {
        self.delete_elements(markdown, &ElementSelector::Tag(tag_name.to_string()))
    }

    fn element_regex(&self, selector: &ElementSelector) -> Option<Regex> {
        patterns::element_regex(selector, &self.element_tag)
            .inspect_err(|e| log::warn!("{e}"))
            .ok()
    }
}
