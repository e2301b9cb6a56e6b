/// Bullet list items: a marker followed by whitespace.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    /// Strips the marker and the whitespace after it from a trimmed line.
    pub fn strip(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::MARKERS)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* item", Some("item"))]
    #[case("+ item", Some("item"))]
    #[case("-\titem", Some("item"))]
    #[case("-   spaced out", Some("spaced out"))]
    #[case("-item", None)]
    #[case("---", None)]
    #[case("**bold**", None)]
    #[case("-", None)]
    #[case("item", None)]
    fn strip_marker(#[case] trimmed: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListItem::strip(trimmed), expected);
    }
}
