/// The markup tags an [`InlineText`](crate::InlineText) can contain.
///
/// Tags are XML-style so they survive next to entity-escaped text; a
/// renderer maps each style onto its own emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Code,
    /// A link label. The link target is not kept.
    Link,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Bold, Style::Italic, Style::Code, Style::Link];

    pub fn open_tag(self) -> &'static str {
        match self {
            Style::Bold => "<b>",
            Style::Italic => "<i>",
            Style::Code => "<code>",
            Style::Link => "<link>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Style::Bold => "</b>",
            Style::Italic => "</i>",
            Style::Code => "</code>",
            Style::Link => "</link>",
        }
    }

    /// Wraps already-transformed content in this style's tags.
    pub fn wrap(self, content: &str) -> String {
        format!("{}{content}{}", self.open_tag(), self.close_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        let mut tags: Vec<_> = Style::ALL
            .iter()
            .flat_map(|s| [s.open_tag(), s.close_tag()])
            .collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), Style::ALL.len() * 2);
    }

    #[test]
    fn wrap_code() {
        assert_eq!(Style::Code.wrap("x &lt; y"), "<code>x &lt; y</code>");
    }
}
