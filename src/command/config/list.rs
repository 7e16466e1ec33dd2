use clap::Parser;
use serde::Serialize;
use warden_config::{Config, Profile};

use crate::{WardenOutput, WardenResult};

#[derive(Serialize, Debug, Parser)]
/// List all configuration profiles
pub struct List {}

impl List {
    pub fn run(&self, config: Config) -> WardenResult<WardenOutput> {
        let profiles = Profile::list(&config)?;
        Ok(WardenOutput::Profiles(profiles))
    }
}
