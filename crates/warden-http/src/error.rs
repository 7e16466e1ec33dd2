use bytes::Bytes;
use http::StatusCode;

/// Everything that can go wrong between handing a request to an
/// [`HttpService`](crate::HttpService) and getting a response body back
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The server answered, but not with a success status
    #[error("Bad status code: {status_code}")]
    BadStatusCode {
        /// The status that was returned
        status_code: StatusCode,
        /// The body that came with it
        data: Bytes,
    },
    /// The request could not be assembled
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// The request did not finish before the configured timeout
    #[error("Request timed out: {:?}", .0)]
    TimedOut(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The response body was not what it claimed to be
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The request or response body could not be read
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// No connection could be made to the server
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Anything the other variants do not describe
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HttpServiceError {
    /// Whether a connection could not be established
    pub const fn is_connect(&self) -> bool {
        matches!(self, HttpServiceError::Connect(_))
    }
    /// Whether the request timed out
    pub const fn is_timeout(&self) -> bool {
        matches!(self, HttpServiceError::TimedOut(_))
    }
}
