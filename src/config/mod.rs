mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_config, load_config_with_env, ConfigOverrides, BASE_URL_ENV};
