//! Configuration for govdoc.
//!
//! Settings come from an optional `govdoc.toml` file with environment
//! overrides. The Gemini API key is only ever read from the environment
//! (`GEMINI_API_KEY`, typically via a `.env` file) and is required: the
//! process refuses to start without it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "govdoc.toml";

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Gemini API key not found. Set the {API_KEY_VAR} environment variable (or add it to .env)."
    )]
    MissingApiKey,

    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
}

/// Configuration for the Gemini client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// API key for the generative AI service. Environment-only, never
    /// read from or written to the config file.
    #[serde(skip)]
    pub api_key: String,
    /// Model to use (default: gemini-1.5-flash)
    #[serde(default = "default_model")]
    pub model: String,
    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Temperature for generation (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens in response
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Maximum characters of document text to send to the model
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_temperature() -> f32 {
    0.1
}
fn default_max_output_tokens() -> u32 {
    8192
}
fn default_max_content_chars() -> usize {
    12000
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            max_content_chars: default_max_content_chars(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where uploaded files are written. A file uploaded under
    /// an existing name silently overwrites the previous one.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Gemini client configuration.
    #[serde(default)]
    pub llm: LlmSettings,
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
            llm: LlmSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit config file path, the default file
    /// in the working directory, or defaults when neither exists. The
    /// API key comes from the environment and is required.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match config_path {
            Some(path) => Self::read_file(path)?,
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::read_file(default)?
                } else {
                    Self::default()
                }
            }
        };

        settings.llm.api_key =
            std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;

        if let Ok(model) = std::env::var("GOVDOC_MODEL") {
            settings.llm.model = model;
        }
        if let Ok(dir) = std::env::var("GOVDOC_UPLOADS_DIR") {
            settings.uploads_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}
