use warden_client::PolicyClient;
use warden_config::{Config, ConfigProblem, Profile};
use warden_http::{HttpServiceConfig, ReqwestServiceFactory};

use crate::{PKG_NAME, PKG_VERSION, WardenResult};

/// Everything needed to build a [`PolicyClient`] for a profile
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) config: Config,
    version: String,
}

impl ClientConfig {
    pub fn new(config: Config) -> ClientConfig {
        let version = if cfg!(debug_assertions) {
            format!("{} (dev)", PKG_VERSION)
        } else {
            PKG_VERSION.to_string()
        };

        ClientConfig { config, version }
    }

    /// The console endpoint for `profile_name`: the explicit override,
    /// then `$WARDEN_ENDPOINT`, then the profile's stored setting
    pub fn get_endpoint(
        &self,
        profile_name: &str,
        endpoint_override: Option<&str>,
    ) -> WardenResult<String> {
        if let Some(endpoint) = endpoint_override {
            return Ok(endpoint.to_string());
        }
        Profile::get_endpoint(profile_name, &self.config)?
            .ok_or_else(|| ConfigProblem::NoEndpoint(profile_name.to_string()).into())
    }

    pub fn get_client(
        &self,
        profile_name: &str,
        endpoint_override: Option<&str>,
    ) -> WardenResult<PolicyClient> {
        let credential = Profile::get_credential(profile_name, &self.config)?;
        let endpoint = self.get_endpoint(profile_name, endpoint_override)?;
        tracing::debug!(profile = profile_name, %endpoint, "building policy client");

        let http_config = HttpServiceConfig::builder()
            .user_agent(format!("{}/{}", PKG_NAME, self.version))
            .build();
        let http_service_factory = ReqwestServiceFactory::builder()
            .config(http_config)
            .build();

        Ok(PolicyClient::builder()
            .credential(credential)
            .endpoint(endpoint)
            .version(self.version.clone())
            .http_service_factory(http_service_factory)
            .build()?)
    }
}
