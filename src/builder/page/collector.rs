use std::path::PathBuf;

use log::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::utils::error::BoxResult;
use crate::utils::path::{has_extension, is_underscored};

/// List the markup documents directly inside the documents directory,
/// sorted by file name. Names starting with `_` are reserved for partials
/// and templates and are never returned.
pub fn discover_documents(config: &Config) -> BoxResult<Vec<PathBuf>> {
    let docs = config.docs_path();
    debug!("Discovering documents in {}", docs.display());

    let walker = WalkDir::new(&docs)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, &config.markup_extension) {
            continue;
        }

        if is_underscored(path) {
            debug!("Skipping reserved file {}", path.display());
            continue;
        }

        debug!("Found document {}", path.display());
        documents.push(path.to_path_buf());
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discovery_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        fs::create_dir_all(docs.join("nested.md")).unwrap();
        fs::create_dir_all(docs.join("sub")).unwrap();
        for name in ["zeta.md", "alpha.md", "_partial.md", "_template.html", "notes.txt", "sub/inner.md"] {
            fs::write(docs.join(name), "x").unwrap();
        }

        let config = Config { root: tmp.path().to_path_buf(), ..Config::default() };
        let found = discover_documents(&config).unwrap();

        assert_eq!(found, vec![docs.join("alpha.md"), docs.join("zeta.md")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_documents_are_found() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(tmp.path().join("shared.md"), "# Shared\n").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("shared.md"), docs.join("shared.md")).unwrap();

        let config = Config { root: tmp.path().to_path_buf(), ..Config::default() };
        assert_eq!(discover_documents(&config).unwrap(), vec![docs.join("shared.md")]);
    }

    #[test]
    fn test_missing_docs_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = Config { root: tmp.path().to_path_buf(), ..Config::default() };
        assert!(discover_documents(&config).is_err());
    }
}
