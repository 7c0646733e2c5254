use crate::builder::page::Page;
use crate::config::Config;

/// HTML body of the docs index page: heading, intro and one link per page
pub fn render_index_content(config: &Config, pages: &[Page]) -> String {
    let items = pages
        .iter()
        .map(|page| format!(
            "<li><a href=\"{}\">{}</a></li>",
            html_escape::encode_quoted_attribute(&page.url),
            html_escape::encode_quoted_attribute(&page.title)
        ))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<h1>Documentation</h1><p>{}</p><ul>{}</ul>",
        html_escape::encode_text(&config.index_intro()),
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn page(slug: &str, title: &str) -> Page {
        let config = Config::default();
        Page {
            title: title.to_string(),
            url: config.page_url(slug),
            canonical: config.canonical_url(slug),
            source: PathBuf::from(format!("docs/{}.md", slug)),
            output: config.page_output_path(slug),
            lastmod: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }
    }

    #[test]
    fn test_index_lists_pages_in_order() {
        let pages = vec![page("alpha", "Alpha"), page("beta", "Beta")];
        let html = render_index_content(&Config::default(), &pages);

        assert_eq!(
            html,
            "<h1>Documentation</h1><p>Guides for SW Foundation packages.</p><ul>\
             <li><a href=\"/docs/alpha/\">Alpha</a></li>\n<li><a href=\"/docs/beta/\">Beta</a></li></ul>"
        );
    }

    #[test]
    fn test_index_escapes_titles_and_urls() {
        let pages = vec![page("q&a", "Fish & Chips < Salt")];
        let html = render_index_content(&Config::default(), &pages);

        assert!(html.contains("<a href=\"/docs/q&amp;a/\">Fish &amp; Chips &lt; Salt</a>"));
    }
}
