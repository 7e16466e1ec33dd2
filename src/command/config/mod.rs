mod auth;
mod clear;
mod delete;
mod list;
mod show;

use clap::Parser;
use serde::Serialize;
use warden_config::Config as WardenConfig;

use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
pub struct Config {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Serialize, Parser)]
pub enum Command {
    /// Store an API key, and optionally an endpoint, in a configuration profile
    Auth(auth::Auth),

    /// Clear ALL configuration profiles
    Clear(clear::Clear),

    /// Delete a configuration profile
    Delete(delete::Delete),

    /// List all configuration profiles
    List(list::List),

    /// View a configuration profile's details
    Show(show::Show),
}

impl Config {
    pub fn run(&self, config: WardenConfig) -> WardenResult<WardenOutput> {
        match &self.command {
            Command::Auth(command) => command.run(config),
            Command::Clear(command) => command.run(config),
            Command::Delete(command) => command.run(config),
            Command::List(command) => command.run(config),
            Command::Show(command) => command.run(config),
        }
    }
}
