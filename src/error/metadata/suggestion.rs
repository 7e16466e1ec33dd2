use std::fmt::{self, Display};

use serde::Serialize;
use warden_std::Style;

use crate::utils::env::WardenEnvKey;

/// `Suggestion` contains possible suggestions for remedying specific errors.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub enum Suggestion {
    SubmitIssue,
    CheckKey,
    CheckServerConnection,
    CheckEndpoint,
    ProvidePolicyIds,
    ListPolicies,
    SetConfigHome,
    CreateConfig,
    NewUserNoProfiles,
    ListProfiles,
    SetEndpoint {
        profile_name: String,
    },
    RerunWithLogs,
    Adhoc(String),
}

impl Display for Suggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            Suggestion::SubmitIssue => {
                "This error was unexpected! Please file an issue with any relevant details about what you were trying to do, including the output of the failing command re-run with `--log debug`.".to_string()
            }
            Suggestion::CheckKey => format!(
                "Check that your API key is valid and has not expired, then store a new one with {} or set {}.",
                Style::Command.paint("`warden config auth`"),
                Style::Command.paint(format!("${}", WardenEnvKey::Key))
            ),
            Suggestion::CheckServerConnection => format!(
                "Make sure the console at the configured endpoint is reachable from this machine. Re-running with {} shows each request.",
                Style::Command.paint("`--log debug`")
            ),
            Suggestion::CheckEndpoint => format!(
                "Endpoints must be absolute URLs such as {}.",
                Style::Link.paint("https://console.example.com/graphql")
            ),
            Suggestion::ProvidePolicyIds => format!(
                "Pass one or more policy IDs, for example {}.",
                Style::Command.paint("`warden policy delete <ID>`")
            ),
            Suggestion::ListPolicies => format!(
                "Run {} to see the IDs of existing policies.",
                Style::Command.paint("`warden policy list`")
            ),
            Suggestion::SetConfigHome => format!(
                "You can override this path by setting the {} environment variable.",
                Style::Command.paint(format!("${}", WardenEnvKey::ConfigHome))
            ),
            Suggestion::CreateConfig => format!(
                "Run {} to create a new profile, or set {} to use a key without one.",
                Style::Command.paint("`warden config auth`"),
                Style::Command.paint(format!("${}", WardenEnvKey::Key))
            ),
            Suggestion::NewUserNoProfiles => format!(
                "It looks like you have not configured Warden yet. Run {} to store an API key.",
                Style::Command.paint("`warden config auth`")
            ),
            Suggestion::ListProfiles => format!(
                "Run {} to see the profiles you can use.",
                Style::Command.paint("`warden config list`")
            ),
            Suggestion::SetEndpoint { profile_name } => format!(
                "Pass {}, set {}, or run {} to store one.",
                Style::Command.paint("`--endpoint <URL>`"),
                Style::Command.paint(format!("${}", WardenEnvKey::Endpoint)),
                Style::Command.paint(format!(
                    "`warden config auth --profile {} --endpoint <URL>`",
                    profile_name
                ))
            ),
            Suggestion::RerunWithLogs => format!(
                "Re-run this command with {} for more details.",
                Style::Command.paint("`--log debug`")
            ),
            Suggestion::Adhoc(msg) => msg.to_string(),
        };
        write!(formatter, "{}", &suggestion)
    }
}
