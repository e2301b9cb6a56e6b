//! # Rendering
//!
//! Turns the engine's `Block` sequence into an output document. Everything
//! layout-specific lives here: page breaks, bullets, fonts and the title
//! fallback for documents that do not start with a top-level heading.

pub mod html;

use std::path::Path;

use folio_engine::Block;

pub use html::HtmlRenderer;

/// A parsed document plus what a renderer needs to know about its source.
#[derive(Debug, Clone)]
pub struct RenderDocument {
    /// Title made up from the source file name.
    pub title_fallback: String,
    pub blocks: Vec<Block>,
}

impl RenderDocument {
    pub fn new(source: &Path, blocks: Vec<Block>) -> Self {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        Self {
            title_fallback: title_from_stem(&stem),
            blocks,
        }
    }

    /// Whether none of the first `scan_blocks` blocks is a title heading.
    pub fn needs_title(&self, scan_blocks: usize) -> bool {
        !self.blocks.iter().take(scan_blocks).any(Block::is_title)
    }

    /// The document title: the first title heading, else the fallback.
    pub fn title(&self) -> String {
        self.blocks
            .iter()
            .find_map(|b| match b {
                Block::Heading { level: 1, text } => Some(text.plain_text()),
                _ => None,
            })
            .unwrap_or_else(|| self.title_fallback.clone())
    }
}

pub trait Renderer {
    fn render(&self, doc: &RenderDocument) -> String;

    /// File extension for rendered output.
    fn extension(&self) -> &'static str;
}

/// `release-notes_v2` -> `Release Notes V2`.
///
/// Separators become spaces; a letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise.
pub fn title_from_stem(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut prev_alpha = false;
    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::parse_str;
    use rstest::rstest;

    #[rstest]
    #[case("readme", "Readme")]
    #[case("README", "Readme")]
    #[case("release-notes_v2", "Release Notes V2")]
    #[case("getting_started-guide", "Getting Started Guide")]
    #[case("2024-plan", "2024 Plan")]
    #[case("", "")]
    fn titles_from_stems(#[case] stem: &str, #[case] expected: &str) {
        assert_eq!(title_from_stem(stem), expected);
    }

    #[test]
    fn fallback_title_comes_from_file_stem() {
        let doc = RenderDocument::new(Path::new("docs/setup_guide.md"), vec![]);
        assert_eq!(doc.title_fallback, "Setup Guide");
        assert_eq!(doc.title(), "Setup Guide");
        assert!(doc.needs_title(5));
    }

    #[test]
    fn early_title_heading_suppresses_fallback() {
        let doc = RenderDocument::new(
            Path::new("notes.md"),
            parse_str("intro\n\n# The *Real* Title\n"),
        );
        assert!(!doc.needs_title(5));
        assert_eq!(doc.title(), "The Real Title");
    }

    #[test]
    fn late_title_heading_does_not_count() {
        let doc = RenderDocument::new(Path::new("notes.md"), parse_str("a\nb\nc\nd\ne\n# Late\n"));
        assert!(doc.needs_title(5));
        assert!(!doc.needs_title(6));
    }
}
