mod delete;
mod list;
pub(crate) mod view;

use clap::Parser;
use serde::Serialize;

use crate::utils::client::ClientConfig;
use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
pub struct Policy {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Serialize, Parser)]
pub enum Command {
    /// List policies as a sortable table
    List(list::List),

    /// Delete one or more policies by ID
    Delete(delete::Delete),
}

impl Policy {
    pub async fn run(&self, client_config: ClientConfig) -> WardenResult<WardenOutput> {
        match &self.command {
            Command::List(command) => command.run(client_config).await,
            Command::Delete(command) => command.run(client_config).await,
        }
    }
}
