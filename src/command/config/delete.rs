use clap::Parser;
use serde::Serialize;
use warden_config::{Config, Profile};
use warden_std::{Style, successln};

use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// Delete a configuration profile
///
/// WARNING: Deleting the `default` profile will result in
/// errors when running commands without specifying a `--profile`.
pub struct Delete {
    #[serde(skip_serializing)]
    name: String,
}

impl Delete {
    pub fn run(&self, config: Config) -> WardenResult<WardenOutput> {
        Profile::delete(&self.name, &config)?;
        successln!(
            "Successfully deleted profile '{}'",
            Style::Command.paint(&self.name)
        );
        Ok(WardenOutput::EmptySuccess)
    }
}
