use std::fs;
use std::path::Path;
use chrono::{DateTime, NaiveDate, Utc};

use crate::markdown::utils::title_case;
use crate::markdown::TocEntry;
use crate::utils::error::{BoxResult, PublishError};

/// Slug of a document: its file stem
pub fn slug_for(source: &Path) -> BoxResult<String> {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| PublishError::Generic(format!(
            "Cannot derive a slug from {}", source.display()
        )).into())
}

/// Page title: the first table-of-contents heading, falling back to the
/// file stem with hyphens turned into spaces and each word capitalized
pub fn derive_title(toc: &[TocEntry], slug: &str) -> String {
    match toc.first() {
        Some(entry) if !entry.name.is_empty() => entry.name.clone(),
        _ => title_case(&slug.replace('-', " ")),
    }
}

/// Modification date of a file in UTC
pub fn last_modified(path: &Path) -> BoxResult<NaiveDate> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified).date_naive())
}
