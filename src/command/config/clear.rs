use clap::Parser;
use serde::Serialize;
use warden_config::Config;
use warden_std::successln;

use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// Clear ALL configuration
///
/// WARNING: This command will delete ALL configuration profiles, not just one.
pub struct Clear {}

impl Clear {
    pub fn run(&self, config: Config) -> WardenResult<WardenOutput> {
        config.clear()?;
        successln!("Successfully cleared all configuration.");
        Ok(WardenOutput::EmptySuccess)
    }
}
