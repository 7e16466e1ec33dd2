use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;
use warden_std::Fs;

use crate::ConfigProblem;

/// Config allows end users to override default settings.
/// Library consumers use it to support environment variable
/// overrides for end users.
#[derive(Debug, Clone)]
pub struct Config {
    /// home is the path to the user's global config directory
    pub home: Utf8PathBuf,

    /// override_api_key is used for overriding the API key returned
    /// when loading a profile
    pub override_api_key: Option<String>,

    /// override_endpoint is used for overriding the console endpoint
    /// stored in a profile
    pub override_endpoint: Option<String>,
}

impl Config {
    /// Creates a new instance of `Config`, creating the home directory if
    /// it does not exist yet
    pub fn new(
        override_home: Option<&impl AsRef<Utf8Path>>,
        override_api_key: Option<String>,
        override_endpoint: Option<String>,
    ) -> Result<Config, ConfigProblem> {
        let home = match override_home {
            Some(home) => {
                let home = home.as_ref();
                if home.exists() && !home.is_dir() {
                    return Err(ConfigProblem::InvalidOverrideConfigDir(home.to_string()));
                }
                home.to_path_buf()
            }
            None => {
                // Lin: /home/alice/.config/warden
                // Win: C:\Users\Alice\AppData\Roaming\Warden\Warden\config
                // Mac: /Users/Alice/Library/Application Support/dev.Warden.Warden
                let dirs = ProjectDirs::from("dev", "Warden", "Warden")
                    .ok_or(ConfigProblem::DefaultConfigDirNotFound)?;
                Utf8PathBuf::try_from(dirs.config_dir().to_path_buf())?
            }
        };

        if !home.exists() {
            Fs::create_dir_all(&home)
                .map_err(|_| ConfigProblem::CouldNotCreateConfigHome(home.to_string()))?;
        }

        Ok(Config {
            home,
            override_api_key,
            override_endpoint,
        })
    }

    /// Removes all configuration files from filesystem
    pub fn clear(&self) -> Result<(), ConfigProblem> {
        tracing::debug!(home_dir = ?self.home);
        Fs::remove_dir_all(&self.home).map_err(|_| ConfigProblem::NoConfigFound(self.home.to_string()))
    }
}
