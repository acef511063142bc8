/// Formatting state threaded through the Markdown renderer.
///
/// Handlers never mutate the context they receive. Each one derives the
/// context for its children with the `with_*` methods, so sibling
/// subtrees cannot observe each other's indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownContext {
    /// Inserted before each paragraph, `"\n\n"` separates paragraphs with a
    /// blank line and `"\n"` starts a new line.
    pub paragraph_start: String,
    /// Prefix for the first line of each paragraph, encodes list and quote
    /// nesting, e.g. `"  - "`.
    pub paragraph_indent: String,
    /// The bullet used by list items, `"- "` or `"1. "`.
    pub item_prefix: String,
    /// When set, `xrefsect` nodes (e.g. deprecation notes) are not rendered.
    pub skip_xrefsect: bool,
}

impl MarkdownContext {
    pub fn new() -> Self {
        Self {
            paragraph_start: "\n\n".to_string(),
            paragraph_indent: String::new(),
            item_prefix: "- ".to_string(),
            skip_xrefsect: false,
        }
    }

    pub fn with_paragraph_start(&self, paragraph_start: impl Into<String>) -> Self {
        Self {
            paragraph_start: paragraph_start.into(),
            ..self.clone()
        }
    }

    pub fn with_paragraph_indent(&self, paragraph_indent: impl Into<String>) -> Self {
        Self {
            paragraph_indent: paragraph_indent.into(),
            ..self.clone()
        }
    }

    pub fn with_item_prefix(&self, item_prefix: impl Into<String>) -> Self {
        Self {
            item_prefix: item_prefix.into(),
            ..self.clone()
        }
    }

    pub fn with_skip_xrefsect(&self, skip_xrefsect: bool) -> Self {
        Self {
            skip_xrefsect,
            ..self.clone()
        }
    }

    /// Indentation for lines that continue the current block.
    ///
    /// Bullets become spaces so continuation lines align with the item text,
    /// quote markers are kept.
    pub fn block_indent(&self) -> String {
        self.paragraph_indent
            .chars()
            .map(|c| if c == '>' { '>' } else { ' ' })
            .collect()
    }

    /// The context for block-level markup nested inside a paragraph.
    pub fn nested_block(&self) -> Self {
        self.with_paragraph_start("\n\n")
            .with_paragraph_indent(self.block_indent())
    }
}

impl Default for MarkdownContext {
    fn default() -> Self {
        Self::new()
    }
}
