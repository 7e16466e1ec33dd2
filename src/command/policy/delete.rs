use std::io::BufRead;

use clap::Parser;
use serde::Serialize;
use warden_client::operations::policies::delete::{self, PolicyDeleteInput};
use warden_std::{Style, prompt, warnln};

use crate::options::{EndpointOpt, ProfileOpt};
use crate::utils::client::ClientConfig;
use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// Delete one or more policies
///
/// Asks for confirmation before anything is deleted unless --yes is passed.
pub struct Delete {
    /// IDs of the policies to delete
    #[arg(value_name = "ID", required = true)]
    ids: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,

    #[clap(flatten)]
    profile: ProfileOpt,

    #[clap(flatten)]
    endpoint: EndpointOpt,
}

impl Delete {
    pub async fn run(&self, client_config: ClientConfig) -> WardenResult<WardenOutput> {
        let input = PolicyDeleteInput::new(&self.ids)?;

        if !self.yes && !confirm(&input, None)? {
            warnln!("Policy deletion cancelled.");
            return Ok(WardenOutput::EmptySuccess);
        }

        let client =
            client_config.get_client(&self.profile.profile_name, self.endpoint.as_deref())?;
        tracing::info!(ids = ?input.ids(), "deleting policies");
        let response = delete::run(input, &client).await?;
        Ok(WardenOutput::PolicyDelete(response))
    }
}

fn confirmation_message(input: &PolicyDeleteInput) -> String {
    let ids: Vec<String> = input
        .ids()
        .iter()
        .map(|id| Style::Command.paint(id))
        .collect();
    match ids.as_slice() {
        [id] => format!("Are you sure you want to delete policy {}?", id),
        ids => format!(
            "Are you sure you want to delete these {} policies: {}?",
            ids.len(),
            ids.join(", ")
        ),
    }
}

fn confirm(input: &PolicyDeleteInput, stdin: Option<&mut dyn BufRead>) -> std::io::Result<bool> {
    prompt::prompt_confirm_default_no(&confirmation_message(input), stdin)
}
