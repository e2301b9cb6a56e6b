//! Writes blocks back out as markdown source.
//!
//! Reading the output with [`parse_str`] gives the same blocks again for
//! link-free input. Link targets are not kept by the inline transformer, so
//! a link comes back as its bare label.
//!
//! Bold and italic each have two spellings (`**`/`__` and `*`/`_`). Every
//! delimiter is spelled so the written line reads back as the block it came
//! from; a literal `*` next to an italic span, for instance, forces that span
//! to `_x_`. The search covers up to [`MAX_SPELLED_DELIMITERS`] emphasis
//! delimiters per line. Past that, or when a link is present, every
//! delimiter is written with `*`.

use crate::parse_str;
use crate::parsing::{
    blocks::{Block, kinds::CodeFence},
    inline::{InlineText, InlineToken, Style},
};

/// Emphasis delimiters per line whose spellings are searched.
pub const MAX_SPELLED_DELIMITERS: usize = 12;

pub fn to_markdown(blocks: &[Block]) -> String {
    let mut out = String::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Heading { level, text } => {
                let hashes = "#".repeat(usize::from(*level));
                let line = spell_line(text, |s| format!("{hashes} {s}"), block);
                out.push_str(&line);
                out.push('\n');
            }
            Block::Paragraph { text } => {
                let line = spell_line(text, paragraph_line, block);
                out.push_str(&line);
                out.push('\n');
            }
            Block::CodeBlock {
                language,
                raw_lines,
            } => {
                out.push_str(CodeFence::BACKTICKS);
                if let Some(lang) = language {
                    out.push_str(lang);
                }
                out.push('\n');
                for line in raw_lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(CodeFence::BACKTICKS);
                out.push('\n');
            }
            Block::List { items } => {
                for item in items {
                    let single = Block::List {
                        items: vec![item.clone()],
                    };
                    out.push_str(&spell_line(item, |s| format!("- {s}"), &single));
                    out.push('\n');
                }
            }
            Block::Rule => out.push_str("---\n"),
        }
    }

    out
}

fn paragraph_line(text: &str) -> String {
    // A leading `#` would read back as a heading; an indent keeps it text.
    if text.starts_with('#') {
        format!(" {text}")
    } else {
        text.to_string()
    }
}

/// Writes `text` inside the line built by `frame`, picking the first
/// delimiter spelling whose line parses back to exactly `expected`.
fn spell_line(text: &InlineText, frame: impl Fn(&str) -> String, expected: &Block) -> String {
    let tokens = text.tokens();
    let emphasis = tokens
        .iter()
        .filter(|t| matches!(t, InlineToken::Open(s) | InlineToken::Close(s) if is_emphasis(*s)))
        .count();
    let has_link = tokens
        .iter()
        .any(|t| matches!(t, InlineToken::Open(Style::Link)));

    if emphasis > 0 && emphasis <= MAX_SPELLED_DELIMITERS && !has_link {
        let wanted = std::slice::from_ref(expected);
        for mask in 0..1u32 << emphasis {
            let line = frame(&write_inline(&tokens, mask));
            if parse_str(&line) == wanted {
                return line;
            }
        }
        log::debug!("No delimiter spelling reads back for {:?}", text.as_str());
    }

    frame(&write_inline(&tokens, 0))
}

/// Bit `n` of `underscores` selects the underscore spelling for the `n`th
/// emphasis delimiter.
fn write_inline(tokens: &[InlineToken<'_>], underscores: u32) -> String {
    let mut out = String::new();
    let mut n = 0u32;
    for token in tokens {
        match *token {
            InlineToken::Text(t) => out.push_str(&html_escape::decode_html_entities(t)),
            InlineToken::Open(style) | InlineToken::Close(style) => {
                let underscore = is_emphasis(style) && underscores & (1 << n) != 0;
                if is_emphasis(style) {
                    n += 1;
                }
                out.push_str(delimiter(style, underscore));
            }
        }
    }
    out
}

fn is_emphasis(style: Style) -> bool {
    matches!(style, Style::Bold | Style::Italic)
}

fn delimiter(style: Style, underscore: bool) -> &'static str {
    match (style, underscore) {
        (Style::Bold, false) => "**",
        (Style::Bold, true) => "__",
        (Style::Italic, false) => "*",
        (Style::Italic, true) => "_",
        (Style::Code, _) => "`",
        (Style::Link, _) => "",
    }
}
