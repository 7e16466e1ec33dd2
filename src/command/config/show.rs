use clap::Parser;
use serde::Serialize;
use warden_config::{Config, LoadOpts, Profile};

use crate::options::DEFAULT_PROFILE;
use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// View a configuration profile's details
///
/// The API key is always masked.
pub struct Show {
    #[arg(default_value = DEFAULT_PROFILE)]
    #[serde(skip_serializing)]
    name: String,
}

impl Show {
    pub fn run(&self, config: Config) -> WardenResult<WardenOutput> {
        let profile = Profile::load(&self.name, &config, LoadOpts { sensitive: true })?;
        Ok(WardenOutput::ProfileDetails {
            name: self.name.clone(),
            details: profile.to_string(),
        })
    }
}
