use std::fmt;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use warden_std::Fs;

use crate::{Config, ConfigProblem, profile::Profile};

use super::mask_key;

/// Holds sensitive information regarding authentication.
#[derive(Debug, Serialize, Deserialize)]
pub struct Sensitive {
    pub api_key: String,
}

impl Sensitive {
    fn path(profile_name: &str, config: &Config) -> Utf8PathBuf {
        Profile::dir(profile_name, config).join(".sensitive")
    }

    /// Serializes to toml and saves to file system at `$WARDEN_CONFIG_HOME/profiles/<profile_name>/.sensitive`.
    pub fn save(&self, profile_name: &str, config: &Config) -> Result<(), ConfigProblem> {
        let path = Sensitive::path(profile_name, config);
        let data = toml::to_string(self)?;
        Fs::write_file(&path, &data)?;
        tracing::debug!(path = ?path, "wrote sensitive profile data");
        Ok(())
    }

    /// Opens and deserializes `$WARDEN_CONFIG_HOME/profiles/<profile_name>/.sensitive`,
    /// returning `None` when the profile has no key stored.
    pub fn load(profile_name: &str, config: &Config) -> Result<Option<Sensitive>, ConfigProblem> {
        let path = Sensitive::path(profile_name, config);
        if !path.exists() {
            return Ok(None);
        }
        let contents = Fs::read_file(&path)?;
        Ok(Some(toml::from_str(&contents)?))
    }
}

impl fmt::Display for Sensitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Key: \"{}\"", mask_key(&self.api_key))
    }
}
