use std::io;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use warden_config::Config;
use warden_log::Level;

use crate::command::{self, output::JsonOutput};
use crate::utils::{
    client::ClientConfig,
    env::{WardenEnv, WardenEnvKey},
};
use crate::{WardenOutput, WardenResult};

#[derive(Debug, Serialize, Parser)]
#[command(
    name = "warden",
    author,
    version,
    about = "
Warden - browse and manage compliance policies from the command line

To begin, store an API key and the console's GraphQL endpoint:

    $ warden config auth --endpoint https://console.example.com/graphql

The most common commands from there are:

    - warden policy list: Show policies, sorted by any column
    - warden policy list --interactive: Re-sort and page through the list
    - warden policy delete <ID>: Delete policies
"
)]
pub struct Warden {
    #[clap(subcommand)]
    pub command: Command,

    /// Specify Warden's log level
    #[arg(long = "log", short = 'l', global = true, value_parser = parse_level)]
    #[serde(serialize_with = "serialize_level")]
    pub log_level: Option<Level>,

    /// Specify Warden's output type
    #[arg(long = "format", default_value = "plain", global = true)]
    pub format_type: FormatType,

    #[arg(skip)]
    #[serde(skip_serializing)]
    pub env_store: WardenEnv,
}

fn parse_level(level: &str) -> Result<Level, String> {
    level
        .parse::<Level>()
        .map_err(|_| format!("expected one of: {}", warden_log::LEVELS.join(", ")))
}

fn serialize_level<S>(level: &Option<Level>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match level {
        Some(level) => serializer.collect_str(level),
        None => serializer.serialize_none(),
    }
}

#[derive(ValueEnum, Debug, Serialize, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Plain,
    Json,
}

impl Warden {
    pub async fn run(&self) -> io::Result<ExitCode> {
        warden_log::init(self.log_level);
        tracing::trace!(command_structure = ?self);

        match self.run_command().await {
            Ok(output) => {
                output.print(self.format_type)?;
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                tracing::debug!(?error);
                match self.format_type {
                    FormatType::Plain => error.print()?,
                    FormatType::Json => calm_io::stdoutln!("{}", JsonOutput::from(&error))?,
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }

    async fn run_command(&self) -> WardenResult<WardenOutput> {
        match &self.command {
            Command::Policy(command) => command.run(self.get_client_config()?).await,
            Command::Config(command) => command.run(self.get_warden_config()?),
            Command::Explain(command) => command.run(),
        }
    }

    pub(crate) fn get_warden_config(&self) -> WardenResult<Config> {
        let override_home: Option<Utf8PathBuf> = self
            .env_store
            .get(WardenEnvKey::ConfigHome)?
            .map(|p| Utf8PathBuf::from(&p));
        let override_api_key = self.env_store.get(WardenEnvKey::Key)?;
        let override_endpoint = self.env_store.get(WardenEnvKey::Endpoint)?;
        Ok(Config::new(
            override_home.as_ref(),
            override_api_key,
            override_endpoint,
        )?)
    }

    pub(crate) fn get_client_config(&self) -> WardenResult<ClientConfig> {
        Ok(ClientConfig::new(self.get_warden_config()?))
    }
}

#[derive(Debug, Serialize, Parser)]
pub enum Command {
    /// Policy commands
    Policy(command::Policy),

    /// Configuration profile commands
    Config(command::Config),

    /// Explain error codes
    Explain(command::Explain),
}

#[cfg(test)]
mod tests {
    use assert_fs::TempDir;
    use clap::{CommandFactory, Parser};
    use speculoos::prelude::*;

    use super::{FormatType, Warden};
    use crate::utils::env::WardenEnvKey;

    #[test]
    fn the_cli_is_well_formed() {
        Warden::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommands() {
        let warden =
            Warden::try_parse_from(["warden", "policy", "list", "--format", "json", "-l", "debug"])
                .unwrap();
        assert_that!(warden.format_type).is_equal_to(FormatType::Json);
        assert_that!(warden.log_level).is_equal_to(Some(warden_log::Level::DEBUG));
    }

    #[test]
    fn unknown_log_levels_are_rejected() {
        assert_that!(Warden::try_parse_from(["warden", "-l", "loud", "config", "list"])).is_err();
    }

    #[test]
    fn config_honours_the_environment() {
        let home = TempDir::new().unwrap();
        let mut warden = Warden::try_parse_from(["warden", "config", "list"]).unwrap();
        warden
            .env_store
            .insert(WardenEnvKey::ConfigHome, home.path().to_str().unwrap());
        warden.env_store.insert(WardenEnvKey::Key, "da2-abcdefghijklmnop");
        warden
            .env_store
            .insert(WardenEnvKey::Endpoint, "https://console.example.com/graphql");

        let config = warden.get_warden_config().unwrap();
        assert_that!(config.home.as_str()).is_equal_to(home.path().to_str().unwrap());
        assert_that!(config.override_api_key).is_equal_to(Some("da2-abcdefghijklmnop".to_string()));
        assert_that!(config.override_endpoint)
            .is_equal_to(Some("https://console.example.com/graphql".to_string()));
    }
}
