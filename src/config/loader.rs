use std::path::{Path, PathBuf};
use std::fs;
use log::debug;
use serde::Deserialize;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, PublishError};

/// Environment variable holding the site's absolute base URL
pub const BASE_URL_ENV: &str = "SITE_BASE_URL";

/// Configuration file names to look for at the project root
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Values given on the command line; they win over every other source
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub docs_dir: Option<PathBuf>,
    pub base_url: Option<String>,
}

/// Subset of settings a project config file may carry
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default, alias = "baseurl")]
    base_url: Option<String>,
    #[serde(default)]
    site_name: Option<String>,
    #[serde(default)]
    docs_dir: Option<PathBuf>,
    #[serde(default)]
    template: Option<String>,
}

/// Load the build configuration for the project at `root`, reading the base
/// URL from the `SITE_BASE_URL` environment variable.
pub fn load_config<P: AsRef<Path>>(root: P, overrides: ConfigOverrides) -> BoxResult<Config> {
    load_config_with_env(root, overrides, std::env::var(BASE_URL_ENV).ok())
}

/// Load the build configuration with an explicit environment base URL.
///
/// Base URL precedence: CLI override, environment, config file, default.
/// Trailing slashes are always stripped.
pub fn load_config_with_env<P: AsRef<Path>>(
    root: P,
    overrides: ConfigOverrides,
    env_base_url: Option<String>,
) -> BoxResult<Config> {
    let root = root.as_ref();
    let mut config = Config {
        root: root.to_path_buf(),
        ..Config::default()
    };

    if let Some(path) = find_config_file(root) {
        debug!("Loading configuration from {}", path.display());
        let file_config = parse_config_file(&path)?;
        merge_file_config(&mut config, file_config);
    } else {
        debug!("No configuration file found, using defaults");
    }

    // An empty variable counts as unset
    if let Some(base) = env_base_url.filter(|v| !v.trim().is_empty()) {
        debug!("Base URL taken from {}", BASE_URL_ENV);
        config.base_url = base;
    }

    if let Some(docs_dir) = overrides.docs_dir {
        config.docs_dir = docs_dir;
    }
    if let Some(base) = overrides.base_url {
        config.base_url = base;
    }

    config.base_url = strip_trailing_slashes(&config.base_url);

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Remove every trailing `/` from a base URL
pub fn strip_trailing_slashes(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

fn parse_config_file(path: &Path) -> BoxResult<FileConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| PublishError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    let is_toml = path.extension().map_or(false, |ext| ext == "toml");
    let parsed = if is_toml {
        toml::from_str(&content).map_err(|e| PublishError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))?
    } else {
        serde_yaml::from_str(&content).map_err(|e| PublishError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))?
    };

    Ok(parsed)
}

fn merge_file_config(target: &mut Config, source: FileConfig) {
    if let Some(base_url) = source.base_url {
        target.base_url = base_url;
    }
    if let Some(site_name) = source.site_name {
        target.site_name = site_name;
    }
    if let Some(docs_dir) = source.docs_dir {
        target.docs_dir = docs_dir;
    }
    if let Some(template) = source.template {
        target.template_name = template;
    }
}
