//! Retry policy for transient HTTP failures

use std::time::Duration;

use http::StatusCode;
use tap::TapFallible;
use tower::{
    retry::{
        backoff::{Backoff, ExponentialBackoff, ExponentialBackoffMaker, MakeBackoff},
        Policy,
    },
    util::rng::HasherRng,
};

use crate::{HttpRequest, HttpResponse, HttpServiceError};

const MIN_BACKOFF: Duration = Duration::from_millis(50);
const MAX_BACKOFF: Duration = Duration::from_millis(1000);

/// Retries connection failures, timeouts, throttling and server errors with
/// exponential backoff, up to `max` extra attempts
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    count: usize,
    max: usize,
    backoff: Option<ExponentialBackoff>,
}

impl RetryPolicy {
    /// Allows up to `max` retries after the first attempt
    pub fn new(max: usize) -> RetryPolicy {
        let backoff = ExponentialBackoffMaker::new(MIN_BACKOFF, MAX_BACKOFF, 0.99, HasherRng::default())
            .tap_err(|err| tracing::error!("{:?}", err))
            .ok()
            .map(|mut maker| maker.make_backoff());
        RetryPolicy {
            count: 0,
            max,
            backoff,
        }
    }

    const fn can_retry(&self) -> bool {
        self.count < self.max
    }

    fn should_retry(result: &Result<HttpResponse, HttpServiceError>) -> bool {
        match result {
            Err(err) => err.is_connect() || err.is_timeout(),
            Ok(resp) => {
                let status = resp.status();
                status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
            }
        }
    }
}

impl Policy<HttpRequest, HttpResponse, HttpServiceError> for RetryPolicy {
    type Future = tokio::time::Sleep;

    fn retry(
        &mut self,
        _: &mut HttpRequest,
        result: &mut Result<HttpResponse, HttpServiceError>,
    ) -> Option<Self::Future> {
        if !self.can_retry() || !RetryPolicy::should_retry(result) {
            return None;
        }
        let backoff = self.backoff.as_mut()?;
        self.count += 1;
        tracing::debug!(attempt = self.count, max = self.max, "retrying request");
        Some(backoff.next_backoff())
    }

    fn clone_request(&mut self, req: &HttpRequest) -> Option<HttpRequest> {
        Some(req.clone())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use http::StatusCode;
    use http_body_util::Full;
    use httpmock::MockServer;
    use rstest::{fixture, rstest};
    use speculoos::prelude::*;
    use tower::{Service, ServiceBuilder, ServiceExt};

    use crate::{HttpService, ReqwestService};

    use super::RetryPolicy;

    #[fixture]
    pub fn raw_service() -> HttpService {
        ReqwestService::builder()
            .client(reqwest::Client::default())
            .build()
            .unwrap()
            .boxed_clone()
    }

    #[fixture]
    pub fn retry_service(raw_service: HttpService) -> HttpService {
        ServiceBuilder::new()
            .retry(RetryPolicy::new(3))
            .service(raw_service)
            .boxed_clone()
    }

    #[rstest]
    #[case::server_error(500, 4)]
    #[case::throttled(429, 4)]
    #[case::bad_request(400, 1)]
    #[case::unauthorized(401, 1)]
    #[tokio::test]
    pub async fn it_retries_only_transient_statuses(
        mut retry_service: HttpService,
        #[case] status: u16,
        #[case] expected_hits: usize,
    ) -> Result<()> {
        let server = MockServer::start();
        let uri = format!("http://{}/", server.address());

        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::POST).path("/");
            then.status(status).body("");
        });

        let request = http::Request::builder()
            .uri(uri)
            .method(http::Method::POST)
            .body(Full::default())?;

        let resp = retry_service.call(request).await;

        mock.assert_calls(expected_hits);
        assert_that!(resp)
            .is_ok()
            .matches(|resp| resp.status() == StatusCode::from_u16(status).unwrap());
        Ok(())
    }
}
