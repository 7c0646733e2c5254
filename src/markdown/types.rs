/// One heading reported by a converter's table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (h1 = 1, h2 = 2, etc.)
    pub level: usize,
    /// Plain heading text
    pub name: String,
}
