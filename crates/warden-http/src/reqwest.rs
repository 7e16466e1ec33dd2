use std::{pin::Pin, time::Duration};

use buildstructor::buildstructor;
use futures::Future;
use http_body_util::Full;
use reqwest::ClientBuilder;
use tower::{util::BoxCloneService, Service, ServiceBuilder, ServiceExt};

use crate::{
    body::body_to_bytes, retry::RetryPolicy, HttpRequest, HttpResponse, HttpService,
    HttpServiceConfig, HttpServiceError, HttpServiceFactory, DEFAULT_RETRIES, DEFAULT_TIMEOUT,
};

/// Constructs [`HttpService`]s that share one connection pool
#[derive(Clone, Debug)]
pub struct ReqwestServiceFactory {
    config: HttpServiceConfig,
    client: Option<reqwest::Client>,
}

#[buildstructor]
impl ReqwestServiceFactory {
    /// Constructs a new [`ReqwestServiceFactory`]
    #[builder]
    pub fn new(
        config: Option<HttpServiceConfig>,
        client: Option<reqwest::Client>,
    ) -> ReqwestServiceFactory {
        ReqwestServiceFactory {
            config: config.unwrap_or_default(),
            client,
        }
    }

    /// A factory sharing this one's client whose services never retry.
    /// Requests that change state on the server must go through these.
    pub fn without_retries(&self) -> ReqwestServiceFactory {
        ReqwestServiceFactory {
            config: self.config.clone().without_retries(),
            client: self.client.clone(),
        }
    }
}

impl HttpServiceFactory for ReqwestServiceFactory {
    /// Creates a new [`HttpService`], retrying transient failures
    fn create(&self) -> Result<HttpService, HttpServiceError> {
        let service = ReqwestService::builder()
            .config(self.config.clone())
            .and_client(self.client.clone())
            .build()?;
        let retries = self.config.retries().unwrap_or(DEFAULT_RETRIES);
        Ok(ServiceBuilder::new()
            .retry(RetryPolicy::new(retries))
            .service(service)
            .boxed_clone())
    }
}

/// A [`Service`] that wraps a [`reqwest`] client and speaks [`http`] types
#[derive(Clone, Debug)]
pub struct ReqwestService {
    client: BoxCloneService<reqwest::Request, reqwest::Response, HttpServiceError>,
}

#[buildstructor]
impl ReqwestService {
    /// Constructs a new [`ReqwestService`]
    #[builder]
    pub fn new(
        config: Option<HttpServiceConfig>,
        client: Option<reqwest::Client>,
    ) -> Result<ReqwestService, reqwest::Error> {
        let config = config.unwrap_or_default();
        let client = match client {
            Some(client) => client,
            None => {
                let builder = ClientBuilder::new()
                    .gzip(true)
                    .danger_accept_invalid_certs(
                        config.accept_invalid_certificates().unwrap_or_default(),
                    );
                let builder = match config.user_agent() {
                    Some(user_agent) => builder.user_agent(user_agent),
                    None => builder,
                };
                builder.build()?
            }
        };
        let timeout: Duration = config.timeout().unwrap_or(DEFAULT_TIMEOUT);
        tracing::trace!(?timeout, "building reqwest service");
        let client = ServiceBuilder::new()
            .map_err(HttpServiceError::from)
            .timeout(timeout)
            .service(client)
            .boxed_clone();
        Ok(ReqwestService { client })
    }
}

impl From<reqwest::Error> for HttpServiceError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_body() {
            HttpServiceError::Body(value.into())
        } else if value.is_connect() {
            HttpServiceError::Connect(value.into())
        } else if value.is_timeout() {
            HttpServiceError::TimedOut(value.into())
        } else if value.is_decode() {
            HttpServiceError::Decode(value.into())
        } else {
            HttpServiceError::Unexpected(value.into())
        }
    }
}

impl Service<HttpRequest> for ReqwestService {
    type Response = HttpResponse;
    type Error = HttpServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.client.poll_ready(cx)
    }

    fn call(&mut self, req: HttpRequest) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let cloned = self.client.clone();
        let mut client = std::mem::replace(&mut self.client, cloned);
        let fut = async move {
            let mut req = req;
            let bytes = body_to_bytes(req.body_mut())
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            let req = req.map(move |_| reqwest::Body::from(bytes));
            let req = reqwest::Request::try_from(req)?;
            tracing::debug!(method = %req.method(), url = %req.url(), "sending request");
            let mut resp = http::Response::from(client.call(req).await?);
            tracing::debug!(status = %resp.status(), "received response");
            let bytes = body_to_bytes(resp.body_mut())
                .await
                .map_err(|err| HttpServiceError::Body(Box::new(err)))?;
            Ok(resp.map(|_| Full::new(bytes)))
        };
        Box::pin(fut)
    }
}

impl From<ReqwestService> for HttpService {
    fn from(value: ReqwestService) -> Self {
        value.boxed_clone()
    }
}
