/// Horizontal rule lines.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];

    pub fn matches(trimmed: &str) -> bool {
        Self::MARKERS.contains(&trimmed)
    }
}
