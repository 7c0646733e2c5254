use std::path::PathBuf;

/// Base URL used when neither the CLI, the environment nor a config file sets one
pub const DEFAULT_BASE_URL: &str = "https://repo.sw.foundation";

/// Default project root
pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Default documents directory, relative to the project root
pub fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

/// Default template file name inside the documents directory
pub fn default_template() -> String {
    "_template.html".to_string()
}

/// Default site base URL
pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default site name used in descriptions
pub fn default_site_name() -> String {
    "SW Foundation".to_string()
}

/// Default markup file extension
pub fn default_markup_extension() -> String {
    "md".to_string()
}
