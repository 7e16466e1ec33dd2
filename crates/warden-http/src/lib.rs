#![warn(missing_docs)]

//! [`tower`] services for talking HTTP to a policy console

use std::{str::Utf8Error, time::Duration};

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
pub use http_body::Body;
pub use http_body_util::{BodyExt, Empty, Full};
use tower::{timeout::error::Elapsed, util::BoxCloneService};

pub mod body;
mod error;
pub mod extend_headers;
mod reqwest;
pub mod retry;

pub use error::HttpServiceError;
pub use reqwest::{ReqwestService, ReqwestServiceFactory};

/// Requests are at most this slow before they are abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of times an idempotent-looking failure is retried
pub const DEFAULT_RETRIES: usize = 3;

/// Ease-of-use synonym for the request type this crate operates on
pub type HttpRequest = http::Request<Full<Bytes>>;
/// Ease-of-use synonym for the response type this crate operates on
pub type HttpResponse<T = Full<Bytes>> = http::Response<T>;
/// Ease-of-use synonym for the [`tower::Service`] type this crate provides
pub type HttpService = BoxCloneService<HttpRequest, HttpResponse, HttpServiceError>;

/// Produces [`HttpService`]s on demand.
///
/// Services must be `mut` to be called, which tends to spread through every
/// owner. Handing out fresh services from a shared factory avoids that and
/// still lets callers stack their own [`tower`] layers on top.
pub trait HttpServiceFactory {
    /// Produces an [`HttpService`]
    #[allow(clippy::result_large_err)]
    fn create(&self) -> Result<HttpService, HttpServiceError>;
}

/// Configuration for constructing an [`HttpService`], independent of the
/// underlying client implementation
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    accept_invalid_certificates: Option<bool>,
    timeout: Option<Duration>,
    retries: Option<usize>,
    user_agent: Option<String>,
}

impl HttpServiceConfig {
    /// The same configuration, sending each request exactly once
    pub fn without_retries(self) -> HttpServiceConfig {
        HttpServiceConfig {
            retries: Some(0),
            ..self
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for HttpServiceError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match err.downcast::<Elapsed>() {
            Ok(elapsed) => HttpServiceError::TimedOut(elapsed),
            Err(err) => match err.downcast::<HttpServiceError>() {
                Ok(err) => *err,
                Err(err) => match err.downcast::<::reqwest::Error>() {
                    Ok(err) => HttpServiceError::from(*err),
                    Err(err) => HttpServiceError::Unexpected(err),
                },
            },
        }
    }
}

impl From<Utf8Error> for HttpServiceError {
    fn from(value: Utf8Error) -> Self {
        HttpServiceError::Decode(Box::new(value))
    }
}
