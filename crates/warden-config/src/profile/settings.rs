use std::fmt;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use warden_std::Fs;

use crate::{Config, ConfigProblem, profile::Profile};

/// Non-sensitive profile configuration
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: Option<String>,
}

impl Settings {
    fn path(profile_name: &str, config: &Config) -> Utf8PathBuf {
        Profile::dir(profile_name, config).join(".config")
    }

    /// Serializes to toml and saves to `$WARDEN_CONFIG_HOME/profiles/<profile_name>/.config`.
    pub fn save(&self, profile_name: &str, config: &Config) -> Result<(), ConfigProblem> {
        let path = Settings::path(profile_name, config);
        let data = toml::to_string(self)?;
        Fs::write_file(&path, &data)?;
        tracing::debug!(path = ?path, "wrote profile settings");
        Ok(())
    }

    /// Loads `$WARDEN_CONFIG_HOME/profiles/<profile_name>/.config`, falling back
    /// to empty settings when the file is absent
    pub fn load(profile_name: &str, config: &Config) -> Result<Settings, ConfigProblem> {
        let path = Settings::path(profile_name, config);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let contents = Fs::read_file(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.endpoint {
            Some(endpoint) => write!(f, "Endpoint: {}", endpoint),
            None => write!(f, "Endpoint: (none)"),
        }
    }
}
