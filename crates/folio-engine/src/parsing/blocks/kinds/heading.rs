/// ATX heading markers, levels 1 to 3.
pub struct Heading;

impl Heading {
    /// Marker prefixes with their levels, longest first.
    pub const MARKERS: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Matches a heading marker at the very start of the untrimmed line.
    ///
    /// Returns the level and the trimmed heading text.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS.iter().find_map(|(marker, level)| {
            line.strip_prefix(marker).map(|rest| (*level, rest.trim()))
        })
    }
}
