use std::path::{Path, PathBuf};

/// Get file extension as a string
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_string())
}

/// Check if a path has a specific extension
pub fn has_extension<P: AsRef<Path>>(path: P, ext: &str) -> bool {
    get_extension(path).map_or(false, |e| e == ext)
}

/// Check whether the file name starts with an underscore (partials, templates)
pub fn is_underscored<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.starts_with('_'))
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve<B: AsRef<Path>, P: AsRef<Path>>(base: B, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension("docs/guide.md", "md"));
        assert!(!has_extension("docs/guide.markdown", "md"));
        assert!(!has_extension("docs/README", "md"));
    }

    #[test]
    fn test_is_underscored() {
        assert!(is_underscored("docs/_template.html"));
        assert!(is_underscored("_draft.md"));
        assert!(!is_underscored("docs/guide_v2.md"));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("/site", "docs"), PathBuf::from("/site/docs"));
        assert_eq!(resolve("/site", "/elsewhere/docs"), PathBuf::from("/elsewhere/docs"));
    }
}
