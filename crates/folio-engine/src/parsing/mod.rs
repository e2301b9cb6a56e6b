//! # Parsing
//!
//! Markdown source becomes a flat, ordered `Vec<Block>` in two stages:
//!
//! 1. **Block segmentation** (`blocks`): every line is classified on its own,
//!    then a `BlockBuilder` state machine groups lines into blocks.
//! 2. **Inline transformation** (`inline`): the free text of headings,
//!    paragraphs and list items is escaped and its emphasis, code spans and
//!    links are replaced with markup tags.
//!
//! Both stages are total: any input produces blocks, never an error.

pub mod blocks;
pub mod inline;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// Segments an ordered sequence of lines into blocks.
///
/// All parser state lives in a `BlockBuilder` created for this call, so
/// separate documents can be parsed concurrently.
pub fn segment<I, S>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines {
        let lc = classifier.classify(line.as_ref());
        builder.push(&lc);
    }

    builder.finish()
}

/// Convenience: split a whole document into lines and segment it.
pub fn parse_str(source: &str) -> Vec<Block> {
    segment(source.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(parse_str("\n\n\n").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let blocks = parse_str("# Title\r\n\r\nBody\r\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], Block::paragraph("Body"));
    }

    #[test]
    fn segment_accepts_owned_lines() {
        let lines = vec!["- a".to_string(), "- b".to_string()];
        let blocks = segment(lines);
        assert_eq!(blocks, vec![Block::list(["a", "b"])]);
    }
}
