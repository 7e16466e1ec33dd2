use std::fmt;

use thiserror::Error;
use warden_graphql::{GraphQLServiceError, summarize};
use warden_http::HttpServiceError;

/// WardenClientError represents all possible failures that can occur during a client request.
#[derive(Error, Debug)]
pub enum WardenClientError {
    /// The console answered with GraphQL errors.
    #[error("encountered a GraphQL error, the console responded with: {msg}")]
    GraphQL {
        /// The error messages, one per line.
        msg: String,
    },

    /// The console refused the credential, or none was sent.
    #[error("the console did not accept the API key that was sent")]
    InvalidCredentials,

    /// The response was valid GraphQL but not the shape this client expects.
    #[error("the console returned a malformed response: {reason}")]
    MalformedResponse {
        /// What was wrong with it.
        reason: String,
    },

    /// Text that should name one of a closed set of values did not.
    #[error("'{value}' is not a valid {kind}, expected one of: {}", .choices.join(", "))]
    InvalidChoice {
        /// What kind of value was being parsed.
        kind: &'static str,
        /// The text that failed to parse.
        value: String,
        /// Every accepted spelling.
        choices: Vec<String>,
    },

    /// A delete was requested without any policy IDs.
    #[error("at least one policy ID is required to delete policies")]
    EmptyDeleteInput,

    /// The console answered a delete without confirming it.
    #[error("the console did not confirm deleting {}", .ids.join(", "))]
    DeleteRejected {
        /// The IDs that were sent.
        ids: Vec<String>,
    },

    /// The configured endpoint is not a usable URL.
    #[error("'{endpoint}' is not a valid console endpoint")]
    InvalidEndpoint {
        /// The endpoint as configured.
        endpoint: String,
    },

    /// Tried to build a [`http::HeaderMap`] with an invalid header value.
    #[error("invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The HTTP service could not be constructed.
    #[error("could not create an HTTP client: {0}")]
    HttpService(#[from] HttpServiceError),

    /// A service failed to become ready.
    #[error("the client was not ready to send a request: {0}")]
    ServiceReady(Box<dyn std::error::Error + Send + Sync>),

    /// The request failed before a GraphQL response was received.
    #[error("encountered an error while sending a request: {0}")]
    SendRequest(Box<dyn std::error::Error + Send + Sync>),
}

impl<T> From<GraphQLServiceError<T>> for WardenClientError
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn from(err: GraphQLServiceError<T>) -> Self {
        match err {
            GraphQLServiceError::InvalidCredentials => WardenClientError::InvalidCredentials,
            GraphQLServiceError::NoData(errors) => WardenClientError::GraphQL {
                msg: summarize(&errors).join("\n"),
            },
            GraphQLServiceError::PartialError {
                friendly_errors_detail,
                ..
            } => WardenClientError::GraphQL {
                msg: friendly_errors_detail.join("\n"),
            },
            GraphQLServiceError::Deserialization { error, .. } => {
                WardenClientError::MalformedResponse {
                    reason: error.to_string(),
                }
            }
            err => WardenClientError::SendRequest(Box::new(err)),
        }
    }
}
