mod config;

pub use config::{AutoplayTarget, CrossOrigin, GalleryConfig};

use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "gallery.toml";
const APP_NAME: &str = "media-gallery";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load the user's configuration, or the defaults when none was saved.
pub fn load() -> ConfigResult<GalleryConfig> {
    if let Some(path) = get_default_config_path()
        && path.exists()
    {
        return load_from_path(&path);
    }
    tracing::debug!("No gallery configuration found, using defaults");
    Ok(GalleryConfig::default())
}

pub fn save(config: &GalleryConfig) -> ConfigResult<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> ConfigResult<GalleryConfig> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!("Loaded gallery configuration from {}", path.display());
    Ok(config)
}

pub fn save_to_path(config: &GalleryConfig, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
