// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Only presentation preferences live here (theme choice, optional endpoint
//! overrides). Photo data itself is never persisted; the record collection
//! exists in memory for one screen session only.

mod defaults;

pub use defaults::{
    DEFAULT_IMAGE_ENDPOINT, DEFAULT_LIST_ENDPOINT, DETAIL_CACHE_CAPACITY, DETAIL_SIZE,
    THUMBNAIL_SIZE,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred theme preset name (see `ui::theme::Preset::from_name`).
    pub theme: Option<String>,
    #[serde(default)]
    pub list_endpoint: Option<String>,
    #[serde(default)]
    pub image_endpoint: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
