use super::MarkdownQuery;
use crate::patterns::{BULLET_ITEM_RE, rewrite_matches};

impl MarkdownQuery {
    /// Text of every list item, bullet or ordinal, flattened in document
    /// order.
    ///
    /// An item runs from its marker up to the next line that starts with a
    /// marker or with whitespace. The last item of a document is therefore
    /// only captured when such a line follows it.
    pub fn get_list_items(&self, markdown: &str) -> Vec<String> {
        ListItems::new(markdown)
            .map(|item| item.trim().to_string())
            .collect()
    }

    /// Rewrites every bullet line whose text is `old_item` to ` - new_item`.
    ///
    /// The original marker and indentation are always replaced by a single
    /// space and `-`. Ordinal items are not addressed.
    pub fn update_list_items(&self, markdown: &str, old_item: &str, new_item: &str) -> String {
        rewrite_matches(&BULLET_ITEM_RE, markdown, 0, "list item", |caps| {
            (caps[1].trim() == old_item).then(|| format!(" - {new_item}"))
        })
    }
}

/// Iterator over raw list item texts.
struct ListItems<'a> {
    text: &'a str,
    /// Where the next search starts; the end of the previous item.
    pos: usize,
    /// Offset past which no terminator line exists.
    no_terminator_from: Option<usize>,
}

impl<'a> ListItems<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            no_terminator_from: None,
        }
    }

    fn is_line_start(&self, at: usize) -> bool {
        at == 0 || self.text.as_bytes()[at - 1] == b'\n'
    }

    /// Matches an item whose leading whitespace begins at `start`, returning
    /// its text and the offset of the terminating newline.
    fn item_at(&mut self, start: usize) -> Option<(&'a str, usize)> {
        let text = self.text;
        let marker_start = skip_whitespace(text, start);
        let marker_end = marker_end(text, marker_start)?;
        let content_start = skip_whitespace(text, marker_end);
        if content_start == marker_end {
            return None;
        }

        if let Some(end) = self.find_terminator(content_start) {
            return Some((&text[content_start..end], end));
        }

        // Give back whitespace after the marker; a terminator inside that run
        // ends an empty item.
        let end = (marker_end + 1..content_start)
            .rev()
            .find(|&at| is_terminator(text, at))?;
        Some((&text[end..end], end))
    }

    fn find_terminator(&mut self, from: usize) -> Option<usize> {
        if self.no_terminator_from.is_some_and(|limit| from >= limit) {
            return None;
        }

        let mut at = from;
        while let Some(offset) = self.text[at..].find('\n') {
            at += offset;
            if is_terminator(self.text, at) {
                return Some(at);
            }
            at += 1;
        }

        self.no_terminator_from = Some(from);
        None
    }
}

impl<'a> Iterator for ListItems<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let mut start = self.pos;
        loop {
            if self.is_line_start(start)
                && let Some((item, end)) = self.item_at(start)
            {
                self.pos = end;
                return Some(item);
            }
            match self.text[start..].find('\n') {
                Some(offset) => start += offset + 1,
                None => {
                    self.pos = self.text.len();
                    return None;
                }
            }
        }
    }
}

fn skip_whitespace(text: &str, from: usize) -> usize {
    from + text[from..]
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum::<usize>()
}

/// End of a `-`, `*`, `+`, `1.` or `1)` marker starting at `at`.
fn marker_end(text: &str, at: usize) -> Option<usize> {
    let rest = &text.as_bytes()[at..];
    match rest.first()? {
        b'-' | b'*' | b'+' => Some(at + 1),
        _ => {
            let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
            match rest.get(digits) {
                Some(b'.' | b')') if digits > 0 => Some(at + digits + 1),
                _ => None,
            }
        }
    }
}

/// A newline followed by a marker or by whitespace.
fn is_terminator(text: &str, at: usize) -> bool {
    if text.as_bytes().get(at) != Some(&b'\n') {
        return false;
    }
    let next = at + 1;
    match text[next..].chars().next() {
        Some(c) if c.is_whitespace() => true,
        Some(_) => marker_end(text, next).is_some(),
        None => false,
    }
}
