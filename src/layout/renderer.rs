use std::path::{Path, PathBuf};
use regex::{Captures, Regex};
use lazy_static::lazy_static;
use log::{debug, warn};

use crate::utils::error::{BoxResult, PublishError};
use crate::utils::fs;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(
        r"\{\{(TITLE|DESCRIPTION|CANONICAL|CONTENT)\}\}"
    ).unwrap();
}

/// The four literal markers a page template may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Description,
    Canonical,
    Content,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Title,
        Placeholder::Description,
        Placeholder::Canonical,
        Placeholder::Content,
    ];

    /// The literal token as it appears in the template
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Title => "{{TITLE}}",
            Placeholder::Description => "{{DESCRIPTION}}",
            Placeholder::Canonical => "{{CANONICAL}}",
            Placeholder::Content => "{{CONTENT}}",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "TITLE" => Some(Placeholder::Title),
            "DESCRIPTION" => Some(Placeholder::Description),
            "CANONICAL" => Some(Placeholder::Canonical),
            "CONTENT" => Some(Placeholder::Content),
            _ => None,
        }
    }
}

/// Values substituted into the template for one page.
///
/// `title` and `description` are plain text, `canonical` is an absolute URL
/// and `content` is an HTML fragment inserted as-is.
#[derive(Debug, Clone)]
pub struct PageVars<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical: &'a str,
    pub content: &'a str,
}

impl<'a> PageVars<'a> {
    fn value(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::Title => html_escape::encode_text(self.title).into_owned(),
            Placeholder::Description => html_escape::encode_quoted_attribute(self.description).into_owned(),
            Placeholder::Canonical => html_escape::encode_double_quoted_attribute(self.canonical).into_owned(),
            Placeholder::Content => self.content.to_string(),
        }
    }
}

/// Page template loaded once per build and rendered independently per page
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    source: String,
}

impl Template {
    /// Load the template, failing with `TemplateNotFound` if the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PublishError::TemplateNotFound(path.to_path_buf()).into());
        }

        let source = fs::read_file(path)?;
        let template = Template::from_source(path, source);

        for placeholder in template.missing_placeholders() {
            warn!("Template {} has no {} placeholder", path.display(), placeholder.token());
        }
        debug!("Loaded template {}", path.display());

        Ok(template)
    }

    pub fn from_source<P: AsRef<Path>>(path: P, source: String) -> Self {
        Template {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Placeholders that never occur in the template. Rendering leaves
    /// their values out.
    pub fn missing_placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| !self.source.contains(p.token()))
            .collect()
    }

    /// Substitute every placeholder occurrence in a single left-to-right pass.
    /// Substituted text is never scanned again.
    pub fn render(&self, vars: &PageVars<'_>) -> String {
        PLACEHOLDER_REGEX
            .replace_all(&self.source, |caps: &Captures| {
                Placeholder::from_name(&caps[1])
                    .map(|p| vars.value(p))
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
