mod markdown_renderer;

pub use markdown_renderer::ComrakConverter;

use crate::markdown::types::TocEntry;

/// A stateful markup-to-HTML converter.
///
/// The builder calls `reset` before every document so nothing recorded for
/// one document is visible while processing the next.
pub trait MarkupConverter {
    /// Clear all per-document state
    fn reset(&mut self);

    /// Convert markup to an HTML fragment, recording its table of contents
    fn convert(&mut self, source: &str) -> String;

    /// Headings recorded by the last `convert`, in document order
    fn toc(&self) -> &[TocEntry];
}
