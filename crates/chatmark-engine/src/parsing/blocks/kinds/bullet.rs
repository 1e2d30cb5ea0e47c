/// Bullet item block type with owned marker constant.
pub struct Bullet;

impl Bullet {
    /// The bullet marker, matched after stripping leading whitespace.
    pub const MARKER: &'static str = "- ";

    /// Strips indentation and the bullet marker, returning the right-trimmed content.
    pub fn strip_marker(line: &str) -> Option<&str> {
        line.trim_start()
            .strip_prefix(Self::MARKER)
            .map(str::trim_end)
    }
}
