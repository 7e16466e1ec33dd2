mod sensitive;
mod settings;

use std::fmt;

use camino::Utf8PathBuf;
use warden_std::Fs;

use crate::{Config, ConfigProblem};
use sensitive::Sensitive;
use settings::Settings;

/// Collects configuration related to a profile.
#[derive(Debug)]
pub struct Profile {
    sensitive: Option<Sensitive>,
    settings: Settings,
}

/// Represents all possible options in loading configuration
pub struct LoadOpts {
    /// Should sensitive config be included in the load
    pub sensitive: bool,
}

/// Represents all possible configuration options.
#[derive(Default)]
pub struct Opts {
    /// Console API key
    pub api_key: Option<String>,
    /// Console GraphQL endpoint
    pub endpoint: Option<String>,
}

/// Struct containing info about an API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Console API key
    pub api_key: String,

    /// The origin of the credential
    pub origin: CredentialOrigin,
}

/// Info about where the API key was retrieved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// The credential is from an environment variable
    EnvVar,

    /// The credential is from a profile
    ConfigFile(String),
}

impl Profile {
    fn base_dir(config: &Config) -> Utf8PathBuf {
        config.home.join("profiles")
    }

    fn dir(name: &str, config: &Config) -> Utf8PathBuf {
        Profile::base_dir(config).join(name)
    }

    /// Writes an api_key to the filesystem (`$WARDEN_CONFIG_HOME/profiles/<profile_name>/.sensitive`).
    pub fn set_api_key(name: &str, config: &Config, api_key: &str) -> Result<(), ConfigProblem> {
        let opts = Opts {
            api_key: Some(api_key.to_string()),
            endpoint: None,
        };
        Profile::save(name, config, opts)
    }

    /// Writes an endpoint to the filesystem (`$WARDEN_CONFIG_HOME/profiles/<profile_name>/.config`).
    pub fn set_endpoint(name: &str, config: &Config, endpoint: &str) -> Result<(), ConfigProblem> {
        let opts = Opts {
            api_key: None,
            endpoint: Some(endpoint.to_string()),
        };
        Profile::save(name, config, opts)
    }

    /// Returns a credential for talking to the console.
    ///
    /// The API key override on `config` (usually `$WARDEN_KEY`) wins.
    /// Otherwise the key stored in profile `name` is used.
    pub fn get_credential(name: &str, config: &Config) -> Result<Credential, ConfigProblem> {
        let credential = match &config.override_api_key {
            Some(api_key) => Credential {
                api_key: api_key.to_string(),
                origin: CredentialOrigin::EnvVar,
            },
            None => {
                let opts = LoadOpts { sensitive: true };
                let profile = Profile::load(name, config, opts)?;
                let sensitive = profile
                    .sensitive
                    .ok_or_else(|| ConfigProblem::NoSensitiveConfigFound(name.to_string()))?;
                Credential {
                    api_key: sensitive.api_key,
                    origin: CredentialOrigin::ConfigFile(name.to_string()),
                }
            }
        };

        tracing::debug!(
            origin = ?credential.origin,
            api_key = mask_key(&credential.api_key),
            "found credential"
        );
        Ok(credential)
    }

    /// Returns the console endpoint for profile `name`, if one is known.
    ///
    /// The endpoint override on `config` (usually `$WARDEN_ENDPOINT`) wins.
    /// A profile that does not exist simply has no endpoint.
    pub fn get_endpoint(name: &str, config: &Config) -> Result<Option<String>, ConfigProblem> {
        if let Some(endpoint) = &config.override_endpoint {
            return Ok(Some(endpoint.clone()));
        }
        if !Profile::dir(name, config).exists() {
            return Ok(None);
        }
        Ok(Settings::load(name, config)?.endpoint)
    }

    /// Saves configuration options for a specific profile to the file system,
    /// splitting sensitive information into a separate file.
    pub fn save(name: &str, config: &Config, opts: Opts) -> Result<(), ConfigProblem> {
        if let Some(api_key) = opts.api_key {
            Sensitive { api_key }.save(name, config)?;
        }
        if let Some(endpoint) = opts.endpoint {
            Settings {
                endpoint: Some(endpoint),
            }
            .save(name, config)?;
        }
        Ok(())
    }

    /// Loads and deserializes configuration from the file system for a
    /// specific profile.
    pub fn load(name: &str, config: &Config, opts: LoadOpts) -> Result<Profile, ConfigProblem> {
        if !Profile::dir(name, config).exists() {
            return Err(ConfigProblem::ProfileNotFound(name.to_string()));
        }
        let sensitive = if opts.sensitive {
            Sensitive::load(name, config)?
        } else {
            None
        };
        Ok(Profile {
            sensitive,
            settings: Settings::load(name, config)?,
        })
    }

    /// Deletes profile data from file system.
    pub fn delete(name: &str, config: &Config) -> Result<(), ConfigProblem> {
        let dir = Profile::dir(name, config);
        tracing::debug!(dir = ?dir, "deleting profile");
        Fs::remove_dir_all(&dir).map_err(|_| ConfigProblem::ProfileNotFound(name.to_string()))
    }

    /// Lists profiles based on directories in `$WARDEN_CONFIG_HOME/profiles`
    pub fn list(config: &Config) -> Result<Vec<String>, ConfigProblem> {
        let profiles_dir = Profile::base_dir(config);
        let mut profiles = vec![];

        // a missing profiles dir just means no profiles
        if !profiles_dir.exists() {
            return Ok(profiles);
        }

        for entry in Fs::get_dir_entries(&profiles_dir)? {
            let entry = entry?;
            let entry_path = entry.path();
            if let Some(profile) = entry_path.file_name().filter(|_| entry_path.is_dir()) {
                tracing::debug!(?profile, "detected profile");
                profiles.push(profile.to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sensitive {
            Some(sensitive) => writeln!(f, "{}", sensitive)?,
            None => writeln!(f, "API Key: (none)")?,
        }
        write!(f, "{}", self.settings)
    }
}

/// Masks all but the first 4 and last 4 characters of an API key with `*`.
/// Keys too short to keep both ends are masked entirely.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
}
