use super::MarkdownQuery;
use crate::patterns::CODE_BLOCK_RE;
use regex::Match;

impl MarkdownQuery {
    /// Every fenced block, fences and language tag included.
    pub fn get_code_blocks(&self, markdown: &str) -> Vec<String> {
        CODE_BLOCK_RE
            .find_iter(markdown)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// The fenced block at zero-based `index`; `None` when the index is
    /// negative or past the last block.
    pub fn get_code_block_by_index(&self, markdown: &str, index: isize) -> Option<String> {
        nth_code_block(markdown, index).map(|m| m.as_str().to_string())
    }

    /// Removes the fenced block at zero-based `index`. Out of range indices
    /// leave the document unchanged.
    pub fn delete_code_block_by_index(&self, markdown: &str, index: isize) -> String {
        match nth_code_block(markdown, index) {
            Some(block) => {
                log::debug!("Removing code block {index} at {:?}", block.range());
                [&markdown[..block.start()], &markdown[block.end()..]].concat()
            }
            None => markdown.to_string(),
        }
    }
}

fn nth_code_block(markdown: &str, index: isize) -> Option<Match<'_>> {
    let index = usize::try_from(index).ok()?;
    CODE_BLOCK_RE.find_iter(markdown).nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const BLOCKS: &str = "
Here is a code block:
```javascript
const example = 'Hello, world!';
console.log(example);
```

Another code block:
```python
print('This is Python code')
```

Yet another JavaScript code block:
```javascript
const example = 'Hello, world!';
console.log(example);
```
";

    fn query() -> MarkdownQuery {
        MarkdownQuery::new()
    }

    #[test]
    fn get_code_blocks_includes_fences() {
        assert_eq!(
            query().get_code_blocks(BLOCKS),
            [
                "```javascript\nconst example = 'Hello, world!';\nconsole.log(example);\n```",
                "```python\nprint('This is Python code')\n```",
                "```javascript\nconst example = 'Hello, world!';\nconsole.log(example);\n```",
            ]
        );
    }

    #[test]
    fn empty_blocks_are_returned_with_their_fences() {
        let markdown = "\n```javascript\n```\n\n```python\n```\n";
        assert_eq!(
            query().get_code_blocks(markdown),
            ["```javascript\n```", "```python\n```"]
        );
        assert_eq!(query().get_code_blocks("``````"), ["``````"]);
    }

    #[test]
    fn unterminated_fence_is_not_a_block() {
        assert!(query().get_code_blocks("```rust\nfn main() {}\n").is_empty());
        assert!(query().get_code_blocks("This is not a code block.").is_empty());
    }

    #[rstest]
    #[case(0, Some("```javascript\nconst example = 'Hello, world!';\nconsole.log(example);\n```"))]
    #[case(1, Some("```python\nprint('This is Python code')\n```"))]
    #[case(2, Some("```javascript\nconst example = 'Hello, world!';\nconsole.log(example);\n```"))]
    #[case(3, None)]
    #[case(-1, None)]
    #[case(isize::MIN, None)]
    fn get_code_block_by_index(#[case] index: isize, #[case] expected: Option<&str>) {
        assert_eq!(
            query().get_code_block_by_index(BLOCKS, index).as_deref(),
            expected
        );
    }

    #[test]
    fn delete_code_block_by_index_removes_only_that_block() {
        let markdown = "```a\nsame\n```\n```b\nother\n```\n```a\nsame\n```";
        assert_eq!(
            query().delete_code_block_by_index(markdown, 2),
            "```a\nsame\n```\n```b\nother\n```\n"
        );
        assert_eq!(
            query().delete_code_block_by_index(markdown, 1),
            "```a\nsame\n```\n\n```a\nsame\n```"
        );
    }

    #[rstest]
    #[case(5)]
    #[case(-1)]
    fn delete_code_block_out_of_range_is_unchanged(#[case] index: isize) {
        assert_eq!(query().delete_code_block_by_index(BLOCKS, index), BLOCKS);
        assert_eq!(query().delete_code_block_by_index("", index), "");
    }
}
