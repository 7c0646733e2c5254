use log::info;
use std::path::Path;

use crate::config::{self, ConfigOverrides};
use crate::directory;
use crate::utils::error::BoxResult;

/// Handle the clean command
pub fn handle_clean_command(root: &Path, overrides: ConfigOverrides) -> BoxResult<()> {
    let config = config::load_config(root, overrides)?;

    let removed = directory::clean_site(&config)?;
    info!("Removed {} generated files", removed);
    Ok(())
}
