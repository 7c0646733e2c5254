use std::path::Path;

use chrono::{NaiveDate, Utc};
use log::{debug, info};

use crate::builder::page::{derive_title, discover_documents, last_modified, slug_for, Page};
use crate::builder::site::{render_index_content, render_robots, render_sitemap};
use crate::builder::types::BuildReport;
use crate::config::Config;
use crate::layout::{PageVars, Template};
use crate::markdown::{ComrakConverter, MarkupConverter};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Title of the generated docs index page
const INDEX_TITLE: &str = "Documentation";

/// Build the site with today's UTC date and a comrak converter
pub fn build_site(config: &Config) -> BoxResult<BuildReport> {
    let mut builder = SiteBuilder::new(config, ComrakConverter::new())?;
    builder.build_on(Utc::now().date_naive())
}

/// Runs the publishing pipeline for one configuration.
///
/// Construction loads the template, so a missing template fails before any
/// output is touched.
pub struct SiteBuilder<'c, C: MarkupConverter> {
    config: &'c Config,
    template: Template,
    converter: C,
}

impl<'c, C: MarkupConverter> SiteBuilder<'c, C> {
    pub fn new(config: &'c Config, converter: C) -> BoxResult<Self> {
        let template = Template::load(config.template_path())?;
        debug!("Using template {}", template.path().display());
        Ok(SiteBuilder {
            config,
            template,
            converter,
        })
    }

    /// Render every document, then the index, sitemap and robots file.
    /// `today` stamps the two fixed sitemap entries.
    pub fn build_on(&mut self, today: NaiveDate) -> BoxResult<BuildReport> {
        info!("Building docs from {}", self.config.docs_path().display());

        let mut pages = Vec::new();
        for source in discover_documents(self.config)? {
            pages.push(self.render_document(&source)?);
        }

        let index_written = !pages.is_empty();
        if index_written {
            self.write_index(&pages)?;
        } else {
            debug!("No documents found, skipping docs index");
        }

        self.write_sitemap(&pages, today)?;
        self.write_robots()?;

        Ok(BuildReport {
            pages,
            index_written,
        })
    }

    /// Convert one markdown document and write `<docs>/<slug>/index.html`
    pub fn render_document(&mut self, source: &Path) -> BoxResult<Page> {
        let raw = fs::read_file(source)?;

        self.converter.reset();
        let body = self.converter.convert(&raw);

        let slug = slug_for(source)?;
        if let Some(first) = self.converter.toc().first() {
            debug!("{}: title from h{} heading", slug, first.level);
        }
        let title = derive_title(self.converter.toc(), &slug);
        let description = self.config.page_description(&title);
        let canonical = self.config.canonical_url(&slug);
        let output = self.config.page_output_path(&slug);

        let html = self.template.render(&PageVars {
            title: &title,
            description: &description,
            canonical: &canonical,
            content: &body,
        });
        fs::write_file(&output, &html)?;
        debug!("Wrote {} ({})", output.display(), title);

        Ok(Page {
            url: self.config.page_url(&slug),
            lastmod: last_modified(source)?,
            title,
            canonical,
            source: source.to_path_buf(),
            output,
        })
    }

    fn write_index(&self, pages: &[Page]) -> BoxResult<()> {
        let content = render_index_content(self.config, pages);
        let description = self.config.index_description();
        let canonical = self.config.docs_url();

        let html = self.template.render(&PageVars {
            title: INDEX_TITLE,
            description: &description,
            canonical: &canonical,
            content: &content,
        });

        let path = self.config.index_path();
        fs::write_file(&path, &html)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn write_sitemap(&self, pages: &[Page], today: NaiveDate) -> BoxResult<()> {
        let path = self.config.sitemap_path();
        fs::write_file(&path, &render_sitemap(self.config, pages, today))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn write_robots(&self) -> BoxResult<()> {
        let path = self.config.robots_path();
        fs::write_file(&path, &render_robots(self.config))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}
