use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::i18n::Catalog;
use crate::time::DEFAULT_DATETIME_FORMAT;

// Default endpoints
pub const DEFAULT_API_URL: &str = "https://api.stoat.chat";
pub const DEFAULT_MEDIA_URL: &str = "https://cdn.stoatusercontent.com";
pub const DEFAULT_ORIGIN: &str = "https://stoat.chat";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub media_url: String,
    /// Web origin used when building message links
    pub origin: String,
    pub theme: String,
    /// strftime pattern for absolute timestamps in tooltips
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    /// Optional JSON file with translated system message templates
    #[serde(default)]
    pub locale_file: Option<PathBuf>,
}

fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            media_url: DEFAULT_MEDIA_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            theme: "dark".to_string(),
            datetime_format: default_datetime_format(),
            locale_file: None,
        }
    }
}

impl Settings {
    /// Template catalog from `locale_file`, English when unset.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.locale_file {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::english()),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("chat", "stoat", "stoat-views") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!(error = %e, "failed to create config dir");
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(serde_json::from_str(content)?)
}

/// Load persisted settings, falling back to defaults when missing or unreadable.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Settings::default(),
    };
    parse_settings(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "ignoring invalid settings file");
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().ok_or_else(|| Error::Config("no config directory".into()))?;
    let mut file = fs::File::create(path)?;
    let data = serde_json::to_string_pretty(settings)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
