mod code;
mod suggestion;

pub use code::Code as WardenErrorCode;
pub use suggestion::Suggestion as WardenErrorSuggestion;

use std::env;

use serde::Serialize;
use warden_client::WardenClientError;
use warden_config::ConfigProblem;

use crate::utils::env::WardenEnvKey;

/// Metadata contains extra information about specific errors
/// Currently this includes an optional error `Code`
/// and an optional `Suggestion`
#[derive(Default, Serialize, Debug)]
pub struct WardenErrorMetadata {
    #[serde(skip_serializing)]
    pub suggestion: Option<WardenErrorSuggestion>,
    pub code: Option<WardenErrorCode>,

    #[serde(skip_serializing)]
    pub skip_printing_cause: bool,
}

/// `Metadata` structs can be created from an `anyhow::Error`
/// This works by downcasting the errors to their underlying types
/// and creating `Suggestion`s and `Code`s where applicable
impl From<&mut anyhow::Error> for WardenErrorMetadata {
    fn from(error: &mut anyhow::Error) -> Self {
        if let Some(client_error) = error.downcast_ref::<WardenClientError>() {
            let (suggestion, code, skip_printing_cause) = match client_error {
                WardenClientError::InvalidCredentials => (
                    Some(WardenErrorSuggestion::CheckKey),
                    Some(WardenErrorCode::E001),
                    true,
                ),
                WardenClientError::MalformedResponse { .. } => (
                    Some(WardenErrorSuggestion::SubmitIssue),
                    Some(WardenErrorCode::E002),
                    true,
                ),
                WardenClientError::InvalidChoice { .. } => {
                    (None, Some(WardenErrorCode::E003), true)
                }
                WardenClientError::EmptyDeleteInput => (
                    Some(WardenErrorSuggestion::ProvidePolicyIds),
                    Some(WardenErrorCode::E004),
                    true,
                ),
                WardenClientError::DeleteRejected { .. } => (
                    Some(WardenErrorSuggestion::ListPolicies),
                    Some(WardenErrorCode::E005),
                    true,
                ),
                WardenClientError::InvalidEndpoint { .. } => (
                    Some(WardenErrorSuggestion::CheckEndpoint),
                    Some(WardenErrorCode::E006),
                    true,
                ),
                WardenClientError::InvalidHeader(_) => (
                    Some(WardenErrorSuggestion::CheckKey),
                    Some(WardenErrorCode::E007),
                    false,
                ),
                WardenClientError::HttpService(_)
                | WardenClientError::ServiceReady(_)
                | WardenClientError::SendRequest(_) => (
                    Some(WardenErrorSuggestion::CheckServerConnection),
                    Some(WardenErrorCode::E008),
                    false,
                ),
                WardenClientError::GraphQL { .. } => (
                    Some(WardenErrorSuggestion::RerunWithLogs),
                    Some(WardenErrorCode::E009),
                    true,
                ),
            };
            return WardenErrorMetadata {
                suggestion,
                code,
                skip_printing_cause,
            };
        }

        if let Some(config_problem) = error.downcast_ref::<ConfigProblem>() {
            let (suggestion, code) = match config_problem {
                ConfigProblem::CouldNotCreateConfigHome(_) => (
                    Some(WardenErrorSuggestion::SetConfigHome),
                    Some(WardenErrorCode::E010),
                ),
                ConfigProblem::DefaultConfigDirNotFound => (
                    Some(WardenErrorSuggestion::SetConfigHome),
                    Some(WardenErrorCode::E011),
                ),
                ConfigProblem::InvalidOverrideConfigDir(_) => (
                    Some(WardenErrorSuggestion::SetConfigHome),
                    Some(WardenErrorCode::E012),
                ),
                ConfigProblem::NoConfigFound(_) => {
                    let suggestion =
                        if env::var_os(WardenEnvKey::ConfigHome.to_string()).is_some() {
                            WardenErrorSuggestion::SetConfigHome
                        } else {
                            WardenErrorSuggestion::CreateConfig
                        };
                    (Some(suggestion), Some(WardenErrorCode::E013))
                }
                ConfigProblem::NoConfigProfiles => (
                    Some(WardenErrorSuggestion::NewUserNoProfiles),
                    Some(WardenErrorCode::E014),
                ),
                ConfigProblem::ProfileNotFound(_) => (
                    Some(WardenErrorSuggestion::ListProfiles),
                    Some(WardenErrorCode::E015),
                ),
                ConfigProblem::NoSensitiveConfigFound(_) => (
                    Some(WardenErrorSuggestion::CreateConfig),
                    Some(WardenErrorCode::E016),
                ),
                ConfigProblem::PathNotUtf8(_)
                | ConfigProblem::TomlSerialization(_)
                | ConfigProblem::TomlDeserialization(_)
                | ConfigProblem::IoError(_)
                | ConfigProblem::WardenStdError(_) => (
                    Some(WardenErrorSuggestion::SubmitIssue),
                    Some(WardenErrorCode::E017),
                ),
                ConfigProblem::NoEndpoint(profile_name) => (
                    Some(WardenErrorSuggestion::SetEndpoint {
                        profile_name: profile_name.clone(),
                    }),
                    Some(WardenErrorCode::E018),
                ),
            };
            return WardenErrorMetadata {
                suggestion,
                code,
                skip_printing_cause: false,
            };
        }

        WardenErrorMetadata::default()
    }
}
