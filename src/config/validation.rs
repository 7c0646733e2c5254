use log::{debug, warn};

use crate::config::Config;
use crate::utils::error::{BoxResult, PublishError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_base_url(config);
    validate_names(config)?;
    Ok(())
}

/// Canonical links and the sitemap need an absolute base URL; anything else
/// is published as given
fn validate_base_url(config: &Config) {
    let base = &config.base_url;
    let scheme = base.get(..8).unwrap_or(base).to_ascii_lowercase();

    if base.is_empty() {
        warn!("Base URL is empty, canonical links will be site-relative");
    } else if !(scheme.starts_with("http://") || scheme.starts_with("https://")) {
        warn!("Base URL does not start with http:// or https://: {}", base);
    }

    debug!("Base URL: {}", base);
}

fn validate_names(config: &Config) -> BoxResult<()> {
    if config.template_name.trim().is_empty() {
        return Err(PublishError::Config("Template file name must not be empty".to_string()).into());
    }

    if config.markup_extension.is_empty() || config.markup_extension.starts_with('.') {
        return Err(PublishError::Config(format!(
            "Markup extension must be non-empty and given without a dot: {:?}", config.markup_extension
        )).into());
    }

    Ok(())
}
