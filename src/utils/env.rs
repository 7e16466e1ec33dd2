use std::collections::HashMap;
use std::{env, fmt, io};

use heck::ToShoutySnakeCase;

/// WardenEnv allows us to mock environment variables while
/// running tests. That way we can run our tests in parallel,
/// and our local development environment will not have unintended
/// side effects on our tests.
#[derive(Debug, Clone)]
pub struct WardenEnv {
    mock_store: Option<HashMap<String, String>>,
}

impl Default for WardenEnv {
    fn default() -> WardenEnv {
        WardenEnv::new()
    }
}

impl WardenEnv {
    /// creates a new environment variable store
    pub fn new() -> WardenEnv {
        let mock_store = if cfg!(test) {
            Some(HashMap::new())
        } else {
            None
        };

        WardenEnv { mock_store }
    }

    /// returns the value of the environment variable if it exists
    pub fn get(&self, key: WardenEnvKey) -> io::Result<Option<String>> {
        let key_str = key.to_string();
        tracing::trace!("Checking for ${}", &key_str);
        let result = match &self.mock_store {
            Some(mock_store) => Ok(mock_store.get(&key_str).map(|v| v.to_owned())),
            None => match env::var(&key_str) {
                Ok(data) => Ok(Some(data)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "The value of the environment variable \"{}\" is not valid Unicode.",
                        &key_str
                    ),
                )),
            },
        }?;

        if let Some(result) = &result {
            tracing::debug!("read {}", Self::get_debug_value(key, result));
        } else {
            tracing::trace!("could not find ${}", &key_str);
        }

        Ok(result)
    }

    fn get_debug_value(key: WardenEnvKey, value: &str) -> String {
        let value = if let WardenEnvKey::Key = key {
            warden_config::mask_key(value)
        } else {
            value.to_string()
        };

        format!("environment variable ${} = {}", key, value)
    }

    /// sets a value in the mock store; the real environment is never written
    #[cfg(test)]
    pub fn insert(&mut self, key: WardenEnvKey, value: &str) {
        tracing::debug!("writing {}", Self::get_debug_value(key, value));
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.insert(key.to_string(), value.into());
        }
    }

    /// removes a value from the mock store
    #[cfg(test)]
    pub fn remove(&mut self, key: WardenEnvKey) {
        tracing::debug!("removing {}", key);
        if let Some(mock_store) = &mut self.mock_store {
            mock_store.remove(&key.to_string());
        }
    }
}

/// WardenEnvKey defines all of the environment variables
/// that are respected by Warden. Any time a new environment variable
/// is added to the public contract, it should be defined here.
/// Each environment variable is prefixed with `WARDEN_` and
/// the suffix is the name of the key defined here. It will automatically
/// be converted from CamelCase to SHOUTY_SNAKE_CASE.
/// For example, `WardenEnvKey::ConfigHome.to_string()` becomes `WARDEN_CONFIG_HOME`
#[derive(Debug, Copy, Clone)]
pub enum WardenEnvKey {
    ConfigHome,
    Key,
    Endpoint,
}

impl fmt::Display for WardenEnvKey {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let dbg = format!("{:?}", self).to_shouty_snake_case();
        write!(fmt, "WARDEN_{}", &dbg)
    }
}
