use super::kinds::{CodeFence, FenceSig, Heading, ListItem, ThematicBreak};

/// What a single line looks like, judged without any surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A ```` ``` ```` fence line, opening or closing.
    Fence(FenceSig),
    /// A bullet item; holds the text after the marker.
    ListItem(&'a str),
    /// An ATX heading; holds the trimmed text after the marker.
    Heading { level: u8, text: &'a str },
    /// `---`, `***` or `___`.
    Rule,
    /// Whitespace only.
    Blank,
    /// Anything else; holds the trimmed line.
    Text(&'a str),
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to the parser mode. The builder decides whether the
/// classification applies (inside a code block only fences matter).
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line exactly as it appeared in the source.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Checks run in a fixed order: fence, list item, heading, rule, blank,
    /// and finally plain text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.trim_end_matches(['\r', '\n']);
        let trimmed = raw.trim();

        let kind = if let Some(sig) = CodeFence::sig(trimmed) {
            LineKind::Fence(sig)
        } else if let Some(item) = ListItem::strip(trimmed) {
            LineKind::ListItem(item)
        } else if let Some((level, text)) = Heading::strip(raw) {
            LineKind::Heading { level, text }
        } else if ThematicBreak::matches(trimmed) {
            LineKind::Rule
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text(trimmed)
        };

        LineClass { raw, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind(line: &str) -> LineKind<'_> {
        MarkdownLineClassifier.classify(line).kind
    }

    #[rstest]
    #[case("```", LineKind::Fence(FenceSig { info: None }))]
    #[case("  ```python", LineKind::Fence(FenceSig { info: Some("python".into()) }))]
    #[case("- item", LineKind::ListItem("item"))]
    #[case("   * indented item", LineKind::ListItem("indented item"))]
    #[case("# Title", LineKind::Heading { level: 1, text: "Title" })]
    #[case("## Section", LineKind::Heading { level: 2, text: "Section" })]
    #[case("### Sub", LineKind::Heading { level: 3, text: "Sub" })]
    #[case("---", LineKind::Rule)]
    #[case("  ***  ", LineKind::Rule)]
    #[case("___", LineKind::Rule)]
    #[case("", LineKind::Blank)]
    #[case(" \t ", LineKind::Blank)]
    #[case("  plain text  ", LineKind::Text("plain text"))]
    #[case("#### deep", LineKind::Text("#### deep"))]
    #[case("  # not a heading", LineKind::Text("# not a heading"))]
    #[case("**bold** start", LineKind::Text("**bold** start"))]
    fn classify_line(#[case] line: &str, #[case] expected: LineKind<'_>) {
        assert_eq!(kind(line), expected);
    }

    #[test]
    fn raw_keeps_indentation() {
        let lc = MarkdownLineClassifier.classify("    indented code\r\n");
        assert_eq!(lc.raw, "    indented code");
    }
}
