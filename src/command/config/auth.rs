use anyhow::anyhow;
use clap::Parser;
use serde::Serialize;
use url::Url;
use warden_config::{Config, Profile};
use warden_std::{Style, infoln, successln};

use crate::options::{EndpointOpt, ProfileOpt};
use crate::{WardenError, WardenErrorSuggestion, WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
/// Store an API key in a configuration profile
///
/// Running this command with a --profile <name> argument will create a new
/// profile that can be referenced by name across Warden with the --profile
/// <name> argument.
///
/// Running without the --profile flag will set an API key for
/// a profile named "default".
///
/// Pass --endpoint to also store the console endpoint the profile talks to.
pub struct Auth {
    #[clap(flatten)]
    profile: ProfileOpt,

    #[clap(flatten)]
    endpoint: EndpointOpt,
}

impl Auth {
    pub fn run(&self, config: Config) -> WardenResult<WardenOutput> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(validate_endpoint)
            .transpose()?;
        let api_key = api_key_prompt()?;

        Profile::set_api_key(&self.profile.profile_name, &config, &api_key)?;
        if let Some(endpoint) = endpoint {
            Profile::set_endpoint(&self.profile.profile_name, &config, &endpoint)?;
        }
        Profile::get_credential(&self.profile.profile_name, &config).map(|_| {
            successln!(
                "Saved API key for profile {}.",
                Style::Command.paint(&self.profile.profile_name)
            );
        })?;
        Ok(WardenOutput::EmptySuccess)
    }
}

fn api_key_prompt() -> WardenResult<String> {
    let term = console::Term::stderr();
    infoln!("Create an API key in the console and paste it into the prompt below.");
    term.write_str("> ")?;
    let api_key = term.read_secure_line()?;
    validate(api_key)
}

fn validate(api_key: String) -> WardenResult<String> {
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        Err(anyhow!("Received an empty API Key. Please try again.").into())
    } else if api_key.as_bytes() == [22] {
        let mut err = WardenError::new(anyhow!("Your API key was not pasted successfully."));
        err.set_suggestion(WardenErrorSuggestion::Adhoc("Re-run this command, and when you are prompted to enter your API key, right click on the terminal and press paste instead of pressing Ctrl+V.".to_string()));
        Err(err)
    } else {
        Ok(api_key)
    }
}

fn validate_endpoint(endpoint: &str) -> WardenResult<String> {
    Url::parse(endpoint)
        .map(|url| url.to_string())
        .map_err(|_| {
            warden_client::WardenClientError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
            }
            .into()
        })
}
