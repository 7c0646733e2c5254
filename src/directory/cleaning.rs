use log::{debug, info};

use crate::builder::page::{discover_documents, slug_for};
use crate::config::Config;
use crate::utils::error::BoxResult;
use crate::utils::fs::{remove_dir_if_empty, remove_file_if_exists};

/// Remove every output a build would produce for the current documents.
/// Sources, the template and any other file in a slug directory are kept.
/// Returns the number of files removed.
pub fn clean_site(config: &Config) -> BoxResult<usize> {
    info!("Cleaning generated docs in {}", config.docs_path().display());
    let mut removed = 0;

    let documents = if config.docs_path().is_dir() {
        discover_documents(config)?
    } else {
        Vec::new()
    };

    for source in documents {
        let slug = slug_for(&source)?;
        let output = config.page_output_path(&slug);
        if remove_file_if_exists(&output)? {
            debug!("Removed {}", output.display());
            removed += 1;
        }
        if let Some(dir) = output.parent() {
            remove_dir_if_empty(dir)?;
        }
    }

    for path in [config.index_path(), config.sitemap_path(), config.robots_path()] {
        if remove_file_if_exists(&path)? {
            debug!("Removed {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}
