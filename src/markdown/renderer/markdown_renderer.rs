use log::debug;

use crate::markdown::engine::{create_comrak_options, render_markdown};
use crate::markdown::renderer::MarkupConverter;
use crate::markdown::toc::extract_toc;
use crate::markdown::types::TocEntry;

/// Markdown converter backed by comrak
pub struct ComrakConverter<'a> {
    options: comrak::Options<'a>,
    toc: Vec<TocEntry>,
}

impl<'a> ComrakConverter<'a> {
    pub fn new() -> Self {
        ComrakConverter {
            options: create_comrak_options(),
            toc: Vec::new(),
        }
    }
}

impl<'a> Default for ComrakConverter<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MarkupConverter for ComrakConverter<'a> {
    fn reset(&mut self) {
        self.toc.clear();
    }

    fn convert(&mut self, source: &str) -> String {
        let html = render_markdown(source, &self.options);
        self.toc = extract_toc(source, &self.options);
        debug!("Converted {} bytes of markdown, {} headings", source.len(), self.toc.len());
        html
    }

    fn toc(&self) -> &[TocEntry] {
        &self.toc
    }
}
