use std::path::PathBuf;
use chrono::NaiveDate;

/// A generated documentation page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    /// Site-relative URL, e.g. `/docs/guide/`
    pub url: String,
    /// Absolute canonical URL
    pub canonical: String,
    /// Markdown source the page was rendered from
    pub source: PathBuf,
    /// Written HTML file
    pub output: PathBuf,
    /// Source modification date (UTC)
    pub lastmod: NaiveDate,
}

impl Page {
    /// `lastmod` as used in the sitemap (`YYYY-MM-DD`)
    pub fn lastmod_string(&self) -> String {
        self.lastmod.format("%Y-%m-%d").to_string()
    }
}
