use std::path::PathBuf;

use crate::config::defaults;
use crate::utils::path::resolve;

/// Path segment under which documentation pages are published
pub const DOCS_URL_SEGMENT: &str = "docs";

/// Name of the generated sitemap file at the project root
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Name of the generated robots file at the project root
pub const ROBOTS_FILE: &str = "robots.txt";

/// Build configuration. Constructed once at startup and passed by reference
/// to every build step.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Project root; receives `sitemap.xml` and `robots.txt`
    pub root: PathBuf,

    /// Documents directory, relative to `root` unless absolute
    pub docs_dir: PathBuf,

    /// Template file name inside the documents directory
    pub template_name: String,

    /// Absolute site URL without a trailing slash
    pub base_url: String,

    /// Site name used in generated descriptions
    pub site_name: String,

    /// Extension of source documents
    pub markup_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: defaults::default_root(),
            docs_dir: defaults::default_docs_dir(),
            template_name: defaults::default_template(),
            base_url: defaults::default_base_url(),
            site_name: defaults::default_site_name(),
            markup_extension: defaults::default_markup_extension(),
        }
    }
}

impl Config {
    /// Absolute or root-relative documents directory
    pub fn docs_path(&self) -> PathBuf {
        resolve(&self.root, &self.docs_dir)
    }

    pub fn template_path(&self) -> PathBuf {
        self.docs_path().join(&self.template_name)
    }

    pub fn index_path(&self) -> PathBuf {
        self.docs_path().join("index.html")
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join(SITEMAP_FILE)
    }

    pub fn robots_path(&self) -> PathBuf {
        self.root.join(ROBOTS_FILE)
    }

    /// Output file for a document slug: `<docs>/<slug>/index.html`
    pub fn page_output_path(&self, slug: &str) -> PathBuf {
        self.docs_path().join(slug).join("index.html")
    }

    /// Site-relative URL of a document page
    pub fn page_url(&self, slug: &str) -> String {
        format!("/{}/{}/", DOCS_URL_SEGMENT, slug)
    }

    pub fn canonical_url(&self, slug: &str) -> String {
        format!("{}{}", self.base_url, self.page_url(slug))
    }

    pub fn site_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn docs_url(&self) -> String {
        format!("{}/{}/", self.base_url, DOCS_URL_SEGMENT)
    }

    pub fn sitemap_url(&self) -> String {
        format!("{}/{}", self.base_url, SITEMAP_FILE)
    }

    pub fn page_description(&self, title: &str) -> String {
        format!("{} documentation for {}.", title, self.site_name)
    }

    pub fn index_description(&self) -> String {
        format!("{} documentation index.", self.site_name)
    }

    pub fn index_intro(&self) -> String {
        format!("Guides for {} packages.", self.site_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config {
            root: PathBuf::from("/site"),
            ..Config::default()
        };

        assert_eq!(config.template_path(), PathBuf::from("/site/docs/_template.html"));
        assert_eq!(config.page_output_path("guide"), PathBuf::from("/site/docs/guide/index.html"));
        assert_eq!(config.index_path(), PathBuf::from("/site/docs/index.html"));
        assert_eq!(config.sitemap_path(), PathBuf::from("/site/sitemap.xml"));
        assert_eq!(config.robots_path(), PathBuf::from("/site/robots.txt"));
    }

    #[test]
    fn test_derived_urls() {
        let config = Config {
            base_url: "https://example.org".to_string(),
            ..Config::default()
        };

        assert_eq!(config.page_url("guide"), "/docs/guide/");
        assert_eq!(config.canonical_url("guide"), "https://example.org/docs/guide/");
        assert_eq!(config.site_url(), "https://example.org/");
        assert_eq!(config.docs_url(), "https://example.org/docs/");
        assert_eq!(config.sitemap_url(), "https://example.org/sitemap.xml");
    }

    #[test]
    fn test_descriptions() {
        let config = Config::default();
        assert_eq!(
            config.page_description("Getting Started"),
            "Getting Started documentation for SW Foundation."
        );
        assert_eq!(config.index_description(), "SW Foundation documentation index.");
        assert_eq!(config.index_intro(), "Guides for SW Foundation packages.");
    }
}
