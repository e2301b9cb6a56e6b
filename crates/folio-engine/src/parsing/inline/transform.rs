use std::sync::OnceLock;

use regex::Regex;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Style},
    text::InlineText,
};

/// Emphasis and link patterns, applied in this order.
struct Patterns {
    bold: [Regex; 2],
    italic: [Regex; 2],
    link: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let re = |p: &str| Regex::new(p).expect("Invalid inline regex");
        Patterns {
            bold: [re(r"\*\*(.+?)\*\*"), re(r"__(.+?)__")],
            italic: [re(r"\*(.+?)\*"), re(r"\b_(.+?)_\b")],
            link: re(r"\[(.+?)\]\((.+?)\)"),
        }
    })
}

/// Transforms one line of raw text into [`InlineText`].
///
/// # Pipeline
/// The stages are strictly ordered, each relying on the ones before it:
/// 1. escape `&`, `<` and `>`
/// 2. move code spans into a side table, leaving placeholders
/// 3. bold (`**x**`, `__x__`)
/// 4. italic (`*x*`, `_x_` at word boundaries)
/// 5. links (`[label](url)`, label kept)
/// 6. put code spans back, wrapped in code tags
///
/// Unbalanced markers never match and stay as literal text.
pub fn transform(raw: &str) -> InlineText {
    let escaped = html_escape::encode_text(raw);
    let (residual, code_spans) = protect_code_spans(&escaped);
    let residual = apply_emphasis(&residual);
    let residual = apply_links(&residual);
    InlineText::new(restore_code_spans(residual, &code_spans))
}

/// Replaces every code span with a placeholder.
///
/// # Returns
/// The residual text and the span contents, indexed by extraction order.
fn protect_code_spans(s: &str) -> (String, Vec<&str>) {
    let mut cur = Cursor::new(s);
    let mut residual = String::with_capacity(s.len());
    let mut spans = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some((start, inner)) = try_parse_code_span(&mut cur) {
            residual.push_str(&s[text_start..start]);
            residual.push_str(&CodeSpan::placeholder(spans.len()));
            spans.push(inner);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    residual.push_str(&s[text_start..]);
    (residual, spans)
}

/// Attempts to parse a code span starting at the current position.
///
/// The span is the shortest one with at least one character of content, and
/// that first character may itself be a backtick (```` ``a` ```` holds
/// `` `a ``). Returns the start offset and the content between the ticks, or
/// `None` if not at a backtick or the span isn't closed; on failure the cursor
/// position is restored.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<(usize, &'a str)> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    // First content byte, taken whatever it is
    if cur.bump().is_none() {
        *cur = saved;
        return None;
    }
    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    if cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    let inner = cur.slice_from(inner_start);
    cur.bump(); // closing `

    Some((start, inner))
}

fn apply_emphasis(s: &str) -> String {
    let p = patterns();
    let bold = Style::Bold.wrap("${1}");
    let italic = Style::Italic.wrap("${1}");

    let mut out = s.to_string();
    for re in &p.bold {
        out = re.replace_all(&out, bold.as_str()).into_owned();
    }
    for re in &p.italic {
        out = re.replace_all(&out, italic.as_str()).into_owned();
    }
    out
}

fn apply_links(s: &str) -> String {
    let link = Style::Link.wrap("${1}");
    patterns()
        .link
        .replace_all(s, link.as_str())
        .into_owned()
}

/// Swaps placeholders back for their code spans, in extraction order.
fn restore_code_spans(mut s: String, spans: &[&str]) -> String {
    for (i, inner) in spans.iter().enumerate() {
        s = s.replacen(&CodeSpan::placeholder(i), &Style::Code.wrap(inner), 1);
    }
    s
}
