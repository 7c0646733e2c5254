use chrono::NaiveDate;
use quick_xml::escape::escape;

use crate::builder::page::Page;
use crate::config::Config;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn url_entry(loc: &str, lastmod: &str) -> String {
    format!("  <url><loc>{}</loc><lastmod>{}</lastmod></url>", escape(loc), escape(lastmod))
}

/// Sitemap XML: the site root and docs index stamped with `today`, then one
/// entry per page with its own modification date
pub fn render_sitemap(config: &Config, pages: &[Page], today: NaiveDate) -> String {
    let today = today.format("%Y-%m-%d").to_string();

    let mut urls = vec![
        url_entry(&config.site_url(), &today),
        url_entry(&config.docs_url(), &today),
    ];
    urls.extend(pages.iter().map(|page| url_entry(&page.canonical, &page.lastmod_string())));

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"{}\">\n{}\n</urlset>\n",
        SITEMAP_NAMESPACE,
        urls.join("\n")
    )
}

/// robots.txt allowing everything and pointing at the sitemap
pub fn render_robots(config: &Config) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {}\n", config.sitemap_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_sitemap_has_fixed_entries() {
        let xml = render_sitemap(&Config::default(), &[], date(2026, 10, 19));

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
             \x20 <url><loc>https://repo.sw.foundation/</loc><lastmod>2026-10-19</lastmod></url>\n\
             \x20 <url><loc>https://repo.sw.foundation/docs/</loc><lastmod>2026-10-19</lastmod></url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn test_page_entries_are_escaped() {
        let config = Config::default();
        let page = Page {
            title: "It's".to_string(),
            url: config.page_url("it's"),
            canonical: config.canonical_url("it's&more"),
            source: PathBuf::from("docs/it's&more.md"),
            output: config.page_output_path("it's&more"),
            lastmod: date(2023, 11, 14),
        };

        let xml = render_sitemap(&config, &[page], date(2026, 10, 19));
        assert!(xml.contains(
            "<url><loc>https://repo.sw.foundation/docs/it&apos;s&amp;more/</loc><lastmod>2023-11-14</lastmod></url>"
        ));
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_robots() {
        let config = Config {
            base_url: "https://example.org".to_string(),
            ..Config::default()
        };
        assert_eq!(
            render_robots(&config),
            "User-agent: *\nAllow: /\nSitemap: https://example.org/sitemap.xml\n"
        );
    }
}
