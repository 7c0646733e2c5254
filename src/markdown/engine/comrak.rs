use comrak::Options;

/// Create ComrakOptions for documentation pages: tables, fenced code,
/// footnotes, definition lists and heading anchors
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Raw HTML in documents passes through untouched
    options.render.unsafe_ = true;
    options.render.hardbreaks = false;
    options.render.github_pre_lang = false;

    // Headings feed page titles verbatim, so no smart punctuation
    options.parse.smart = false;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}
