use crate::builder::page::Page;
use crate::config::{Config, ROBOTS_FILE, SITEMAP_FILE};

/// Outcome of one build run
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Generated document pages, in discovery order
    pub pages: Vec<Page>,
    /// Whether the docs index page was written
    pub index_written: bool,
}

impl BuildReport {
    /// One-line summary printed when the build completes
    pub fn summary(&self, config: &Config) -> String {
        format!(
            "Generated {} docs pages, {}, {}, {}",
            self.pages.len(),
            config.docs_dir.join("index.html").display(),
            SITEMAP_FILE,
            ROBOTS_FILE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let report = BuildReport { pages: Vec::new(), index_written: false };
        assert_eq!(
            report.summary(&Config::default()),
            "Generated 0 docs pages, docs/index.html, sitemap.xml, robots.txt"
        );
    }
}
