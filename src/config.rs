//! Application configuration management.
//!
//! This module handles the persistent configuration for gigtape: the
//! baseline metadata values and filename templates that sit beneath every
//! manifest's own `defaults`. Configuration is stored in the user's config
//! directory (typically ~/.config/gigtape/config.toml). Precedence is
//! config < manifest defaults < per-performance overrides.

use crate::attrs::AttributeSet;
use crate::constants::CRITICAL_FIELDS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_genre")]
    pub default_genre: String,
    #[serde(default = "default_resolution")]
    pub default_resolution: String,
    #[serde(default = "default_bitrate")]
    pub default_bitrate: String,
    #[serde(default = "default_recording")]
    pub default_recording: String,
    #[serde(default = "default_long_title")]
    pub long_title: String,
    #[serde(default = "default_output_dirpath")]
    pub output_dirpath: String,
    #[serde(default = "default_video_filename")]
    pub video_filename: String,
    #[serde(default = "default_audio_filename")]
    pub audio_filename: String,
}

fn default_genre() -> String {
    "Live".to_string()
}

fn default_resolution() -> String {
    "1920x1080".to_string()
}

fn default_bitrate() -> String {
    "320k".to_string()
}

fn default_recording() -> String {
    "audience".to_string()
}

fn default_long_title() -> String {
    "{artist} - {album} - {date}".to_string()
}

fn default_output_dirpath() -> String {
    "{manifest_dirpath}/{album_safe}/{artist_safe}".to_string()
}

fn default_video_filename() -> String {
    "{track_num} - {artist_safe} - {title_safe}.mp4".to_string()
}

fn default_audio_filename() -> String {
    "{track_num} - {artist_safe} - {title_safe}.mp3".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            default_genre: default_genre(),
            default_resolution: default_resolution(),
            default_bitrate: default_bitrate(),
            default_recording: default_recording(),
            long_title: default_long_title(),
            output_dirpath: default_output_dirpath(),
            video_filename: default_video_filename(),
            audio_filename: default_audio_filename(),
        }
    }

    pub fn config_dir() -> Result<PathBuf, Box<dyn Error>> {
        // Check for XDG_CONFIG_HOME first (useful for testing)
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config).join("gigtape")
        } else {
            dirs::config_dir()
                .ok_or("Unable to find config directory")?
                .join("gigtape")
        };
        Ok(config_dir)
    }

    pub fn config_path() -> Result<PathBuf, Box<dyn Error>> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self, Box<dyn Error>> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            // Return default config instead of error
            return Ok(Default::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    pub fn exists() -> Result<bool, Box<dyn Error>> {
        Ok(Self::config_path()?.exists())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        match key {
            "default_genre" => self.default_genre = value.to_string(),
            "default_resolution" => self.default_resolution = value.to_string(),
            "default_bitrate" => self.default_bitrate = value.to_string(),
            "default_recording" => self.default_recording = value.to_string(),
            _ => return Err(format!("Unknown configuration key: {key}").into()),
        }
        Ok(())
    }

    /// The attribute set every manifest's defaults overlay on: critical
    /// fields present but unset, baseline values, and the four filename
    /// templates.
    pub fn baseline_attributes(&self) -> AttributeSet {
        let mut attrs = AttributeSet::new();
        for &field in CRITICAL_FIELDS {
            attrs.set(field, None);
        }
        attrs.set("start", None);
        attrs.set("stop", None);
        attrs.set("genre", Some(self.default_genre.clone()));
        attrs.set("resolution", Some(self.default_resolution.clone()));
        attrs.set("bitrate", Some(self.default_bitrate.clone()));
        attrs.set("recording", Some(self.default_recording.clone()));
        attrs.set("long_title", Some(self.long_title.clone()));
        attrs.set("output_dirpath", Some(self.output_dirpath.clone()));
        attrs.set("video_filename", Some(self.video_filename.clone()));
        attrs.set("audio_filename", Some(self.audio_filename.clone()));
        attrs
    }
}
