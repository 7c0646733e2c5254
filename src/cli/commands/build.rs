use log::{debug, info};
use std::path::Path;

use crate::builder;
use crate::config::{self, ConfigOverrides};
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(root: &Path, overrides: ConfigOverrides) -> BoxResult<()> {
    let config = config::load_config(root, overrides)?;

    info!("Building docs for {}", config.base_url);
    let report = builder::build_site(&config)?;
    for page in &report.pages {
        debug!("{} -> {}", page.source.display(), page.output.display());
    }
    if !report.index_written {
        info!("No documents found, docs index not written");
    }

    println!("{}", report.summary(&config));
    Ok(())
}
