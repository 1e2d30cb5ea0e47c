/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// Heading markers with their levels, longest first so that `### x` is never
    /// read as a level 1 heading with `## x` content.
    pub const MARKERS: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Strips a heading marker from the start of `line`.
    ///
    /// The marker must be at the very start of the line and followed by a space.
    /// Returns the level and the remaining content, untrimmed.
    pub fn strip_marker(line: &str) -> Option<(u8, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|&(marker, level)| line.strip_prefix(marker).map(|rest| (level, rest)))
    }
}
