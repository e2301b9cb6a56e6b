use std::fmt;

use super::{cursor::Cursor, kinds::Style};

/// Text that has been through inline transformation.
///
/// Outside the tags of [`Style`], `&`, `<` and `>` only ever appear as
/// entities, so a renderer can resolve the tags without re-parsing markdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InlineText(String);

/// One piece of an [`InlineText`], as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken<'a> {
    /// Entity-escaped text.
    Text(&'a str),
    Open(Style),
    Close(Style),
}

impl InlineText {
    pub(crate) fn new(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the markup into text runs and tags.
    pub fn tokens(&self) -> Vec<InlineToken<'_>> {
        let mut cur = Cursor::new(&self.0);
        let mut out = vec![];
        let mut text_start = cur.pos();

        // Helper to flush accumulated text as a Text token
        fn flush_text<'a>(out: &mut Vec<InlineToken<'a>>, s: &'a str, start: usize, end: usize) {
            if end > start {
                out.push(InlineToken::Text(&s[start..end]));
            }
        }

        while !cur.eof() {
            if let Some((tag, len)) = try_parse_tag(&cur) {
                flush_text(&mut out, cur.s, text_start, cur.pos());
                out.push(tag);
                cur.bump_n(len);
                text_start = cur.pos();
                continue;
            }
            cur.bump();
        }

        flush_text(&mut out, cur.s, text_start, cur.pos());
        out
    }

    /// The text with all tags dropped and entities decoded.
    pub fn plain_text(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len());
        for token in self.tokens() {
            if let InlineToken::Text(t) = token {
                escaped.push_str(t);
            }
        }
        html_escape::decode_html_entities(&escaped).into_owned()
    }
}

/// Matches a style tag at the cursor, returning the token and its length.
fn try_parse_tag(cur: &Cursor<'_>) -> Option<(InlineToken<'static>, usize)> {
    if cur.peek() != Some(b'<') {
        return None;
    }
    Style::ALL.iter().find_map(|&style| {
        if cur.starts_with(style.open_tag()) {
            Some((InlineToken::Open(style), style.open_tag().len()))
        } else if cur.starts_with(style.close_tag()) {
            Some((InlineToken::Close(style), style.close_tag().len()))
        } else {
            None
        }
    })
}

impl fmt::Display for InlineText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InlineText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
