mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./imagevault.toml",
        "~/.config/imagevault/config.toml",
        "/etc/imagevault/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
///
/// Missing artifact directories are reported but never fatal: the external
/// pipeline may create them later, and records must stay deletable even
/// when their files are gone.
fn validate_config(config: &Config) {
    for dir in [
        &config.storage.image_dir,
        &config.storage.thumbnail_dir,
        &config.storage.embedding_dir,
    ] {
        if !dir.exists() {
            tracing::warn!("Storage directory does not exist: {:?}", dir);
        }
    }
}
