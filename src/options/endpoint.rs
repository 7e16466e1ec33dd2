use clap::Parser;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct EndpointOpt {
    /// GraphQL endpoint of the console. Overrides $WARDEN_ENDPOINT and the
    /// endpoint stored in the profile
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,
}

impl EndpointOpt {
    pub fn as_deref(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}
