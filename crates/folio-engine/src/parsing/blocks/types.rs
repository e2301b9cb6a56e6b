use crate::parsing::inline::{InlineText, transform};

/// One structural unit of a document, in source order.
///
/// Blocks are immutable once emitted by the `BlockBuilder`; renderers only
/// read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// An ATX heading, levels 1 to 3.
    Heading { level: u8, text: InlineText },
    /// A single non-structural line of text.
    Paragraph { text: InlineText },
    /// A fenced code block. Lines are kept verbatim, including blank ones.
    CodeBlock {
        /// Info string from the opening fence (`rust` in ```` ```rust ````).
        language: Option<String>,
        raw_lines: Vec<String>,
    },
    /// A run of consecutive bullet items.
    List { items: Vec<InlineText> },
    /// A horizontal divider.
    Rule,
}

impl Block {
    pub fn heading(level: u8, raw: &str) -> Self {
        Block::Heading {
            level,
            text: transform(raw),
        }
    }

    pub fn paragraph(raw: &str) -> Self {
        Block::Paragraph {
            text: transform(raw),
        }
    }

    pub fn list<I, S>(raw_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Block::List {
            items: raw_items
                .into_iter()
                .map(|item| transform(item.as_ref()))
                .collect(),
        }
    }

    pub fn code<I, S>(language: Option<&str>, raw_lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::CodeBlock {
            language: language.map(str::to_string),
            raw_lines: raw_lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a renderer should start a new page before this block.
    ///
    /// True exactly for level-2 headings.
    pub fn page_break_before(&self) -> bool {
        matches!(self, Block::Heading { level: 2, .. })
    }

    /// Whether this block is a top-level (document title) heading.
    pub fn is_title(&self) -> bool {
        matches!(self, Block::Heading { level: 1, .. })
    }

    /// Short name of the variant, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code",
            Block::List { .. } => "list",
            Block::Rule => "rule",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Block::heading(1, "Title"), false)]
    #[case(Block::heading(2, "Section"), true)]
    #[case(Block::heading(3, "Sub"), false)]
    #[case(Block::paragraph("text"), false)]
    #[case(Block::Rule, false)]
    fn page_break_only_before_level_two(#[case] block: Block, #[case] expected: bool) {
        assert_eq!(block.page_break_before(), expected);
    }

    #[test]
    fn title_is_level_one_heading() {
        assert!(Block::heading(1, "Title").is_title());
        assert!(!Block::heading(2, "Title").is_title());
        assert!(!Block::paragraph("# Title").is_title());
    }

    #[test]
    fn constructors_transform_text() {
        let Block::Paragraph { text } = Block::paragraph("**a** & b") else {
            panic!("expected Paragraph");
        };
        assert_eq!(text.as_str(), "<b>a</b> &amp; b");
    }

    #[test]
    fn code_constructor_keeps_lines_verbatim() {
        let block = Block::code(Some("rust"), ["  **x** < y"]);
        assert_eq!(
            block,
            Block::CodeBlock {
                language: Some("rust".into()),
                raw_lines: vec!["  **x** < y".into()],
            }
        );
    }
}
