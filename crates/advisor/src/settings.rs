//! Handles settings for the advisor. Configuration is written in
//! `settings.toml`.

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Connection details for the external text-generation service.
#[derive(Clone, Debug, Deserialize)]
pub struct AdvisorSettings {
    pub api_key: String,
    /// Service base URL, e.g. `https://generativelanguage.googleapis.com/`.
    pub endpoint: String,
    pub model: String,
}

/// Application settings. The advisor section is optional; without it the
/// requester degrades to its fixed "not configured" reply.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub advisor: Option<AdvisorSettings>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("settings"))
            .build()?;

        settings.try_deserialize()
    }
}
