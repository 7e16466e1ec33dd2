#![warn(missing_docs)]

//! GraphQL middleware for the HTTP services in `warden-http`

use std::{fmt, future::Future, pin::Pin, str::FromStr};

use bytes::Bytes;
use graphql_client::GraphQLQuery;
use http::{uri::InvalidUri, HeaderValue, Method, StatusCode, Uri};
use http_body_util::Full;
use tower::{Layer, Service};
use url::Url;
use warden_http::{HttpRequest, HttpResponse};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Error codes and messages that mean the credential was missing or refused
const UNAUTHORIZED_MARKERS: [&str; 4] = [
    "UnauthorizedException",
    "UNAUTHENTICATED",
    "Unauthorized",
    "Not Authorized",
];

/// Re-export / renamed type alias for [`graphql_client::Response`]
pub type GraphQLResponse<T> = graphql_client::Response<T>;

/// Errors that may occur from using a [`GraphQLService`]
#[derive(thiserror::Error, Debug)]
pub enum GraphQLServiceError<T: Send + Sync + fmt::Debug> {
    /// There was no data field provided in the response
    #[error("No data field provided: {}", summarize(.0).join(" "))]
    NoData(Vec<graphql_client::Error>),
    /// The response returned some data, but there were errors
    #[error("Data was returned, but with errors: {}", friendly_errors_detail.join(" "))]
    PartialError {
        /// The partial data returned
        data: T,
        /// The GraphQL errors that were produced
        errors: Vec<graphql_client::Error>,
        /// display ready decoration of `errors`
        friendly_errors_detail: Vec<String>,
    },
    /// The API refused the credential sent with the request, or none was sent
    #[error("Invalid credentials provided.")]
    InvalidCredentials,
    /// Data serialization error
    #[error("Serialization error")]
    Serialization(serde_json::Error),
    /// Data deserialization error
    #[error("Deserialization error (status {status_code})")]
    Deserialization {
        /// The source error
        error: serde_json::Error,
        /// The data that was attempted to be deserialized
        data: Bytes,
        /// The [`StatusCode`] of the request
        status_code: StatusCode,
    },
    /// [`http`]-related error, probably from header-related tasks
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// Error that occurs from a failure to parse a [`Uri`] from a [`Url`]
    #[error("Unable to convert URL to URI.")]
    InvalidUri(#[from] InvalidUri),
    /// Errors that occur as a result of the underlying HTTP service failing
    #[error("Upstream service error: {:?}", .0)]
    UpstreamService(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Turns GraphQL errors into one line each, keeping any `errorType` or `code`
/// extension the server attached
pub fn summarize(errors: &[graphql_client::Error]) -> Vec<String> {
    errors
        .iter()
        .map(|err| {
            let kind = err.extensions.as_ref().and_then(|extensions| {
                extensions
                    .get("errorType")
                    .or_else(|| extensions.get("code"))
                    .and_then(|value| value.as_str())
            });
            match kind {
                Some(kind) => format!("{}: {}", kind, err.message),
                None => err.message.clone(),
            }
        })
        .collect()
}

fn is_unauthorized(errors: &[graphql_client::Error]) -> bool {
    summarize(errors).iter().any(|detail| {
        let detail = detail.to_lowercase();
        UNAUTHORIZED_MARKERS
            .iter()
            .any(|marker| detail.contains(&marker.to_lowercase()))
    })
}

/// Wrapper around [`GraphQLQuery::Variables`]
pub struct GraphQLRequest<Q: GraphQLQuery> {
    variables: Q::Variables,
}

impl<Q> fmt::Debug for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{:?}", self.variables)
    }
}

impl<Q> PartialEq for GraphQLRequest<Q>
where
    Q: GraphQLQuery,
    Q::Variables: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl<Q: GraphQLQuery> GraphQLRequest<Q> {
    /// Constructs a new [`GraphQLRequest`]
    pub const fn new(variables: Q::Variables) -> GraphQLRequest<Q> {
        GraphQLRequest { variables }
    }
    /// Consumes the [`GraphQLRequest`] and produces the inner [`GraphQLQuery::Variables`] object
    pub fn into_inner(self) -> Q::Variables {
        self.variables
    }
}

/// [`Layer`] that wraps a service with GraphQL middleware
#[derive(Default)]
pub struct GraphQLLayer {
    endpoint: Option<Url>,
}

impl GraphQLLayer {
    /// Constructs a new [`GraphQLLayer`] that POSTs to `endpoint`
    pub const fn new(endpoint: Url) -> GraphQLLayer {
        GraphQLLayer {
            endpoint: Some(endpoint),
        }
    }
}

impl<S> Layer<S> for GraphQLLayer {
    type Service = GraphQLService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        GraphQLService::new(self.endpoint.clone(), inner)
    }
}

/// Middleware that wraps an HTTP service in GraphQL functionality
#[derive(Clone, Debug)]
pub struct GraphQLService<S> {
    inner: S,
    endpoint: Option<Url>,
}

impl<S> GraphQLService<S> {
    /// Constructs a new [`GraphQLService`]
    pub const fn new(endpoint: Option<Url>, inner: S) -> GraphQLService<S> {
        GraphQLService { endpoint, inner }
    }
}

impl<Q, S> Service<GraphQLRequest<Q>> for GraphQLService<S>
where
    Q: GraphQLQuery + Send + Sync + 'static,
    Q::Variables: Send,
    Q::ResponseData: Send + Sync + fmt::Debug,
    S: Service<HttpRequest, Response = HttpResponse> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: std::error::Error + Send + Sync,
{
    type Response = Q::ResponseData;
    type Error = GraphQLServiceError<Q::ResponseData>;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::poll_ready(&mut self.inner, cx)
            .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))
    }

    fn call(&mut self, req: GraphQLRequest<Q>) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let cloned = self.inner.clone();
        let mut client = std::mem::replace(&mut self.inner, cloned);

        let url = self.endpoint.clone();

        let fut = async move {
            let body = Q::build_query(req.into_inner());
            tracing::debug!(operation = body.operation_name, "sending graphql operation");
            let body_bytes =
                Bytes::from(serde_json::to_vec(&body).map_err(GraphQLServiceError::Serialization)?);
            let req = http::Request::builder();
            let req = if let Some(url) = url.as_ref() {
                req.uri(Uri::from_str(url.as_ref())?)
            } else {
                req
            };
            let req = req
                .method(Method::POST)
                .header(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )
                .body(Full::new(body_bytes))
                .map_err(GraphQLServiceError::Http)?;
            let resp = client
                .call(req)
                .await
                .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))?;

            let status_code = resp.status();
            if matches!(status_code, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                return Err(GraphQLServiceError::InvalidCredentials);
            }

            let mut body = resp.into_body();
            let body = warden_http::body::body_to_bytes(&mut body)
                .await
                .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))?;
            let graphql_response: GraphQLResponse<Q::ResponseData> = serde_json::from_slice(&body)
                .map_err(|error| GraphQLServiceError::Deserialization {
                    error,
                    data: body.clone(),
                    status_code,
                })?;

            match (graphql_response.data, graphql_response.errors) {
                (_, Some(errors)) if is_unauthorized(&errors) => {
                    Err(GraphQLServiceError::InvalidCredentials)
                }
                (Some(data), Some(errors)) if !errors.is_empty() => {
                    let friendly_errors_detail = summarize(&errors);
                    tracing::debug!(?friendly_errors_detail, "graphql returned partial data");
                    Err(GraphQLServiceError::PartialError {
                        data,
                        errors,
                        friendly_errors_detail,
                    })
                }
                (Some(data), _) => Ok(data),
                (None, errors) => Err(GraphQLServiceError::NoData(errors.unwrap_or_default())),
            }
        };
        Box::pin(fut)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, str::FromStr};

    use anyhow::Result;
    use bytes::Bytes;
    use graphql_client::{GraphQLQuery, QueryBody};
    use http::{HeaderValue, Method, StatusCode, Uri};
    use http_body_util::Full;
    use rstest::rstest;
    use serde::{Deserialize, Serialize};
    use speculoos::prelude::*;
    use tokio::task;
    use tower::{Service, ServiceBuilder, ServiceExt};
    use tower_test::mock;
    use url::Url;
    use warden_http::{body::body_to_bytes, HttpRequest, HttpResponse, HttpServiceError};

    use super::{GraphQLLayer, GraphQLRequest, GraphQLServiceError, JSON_CONTENT_TYPE};

    struct DeleteThing {}

    #[derive(Serialize)]
    struct DeleteThingVariables {
        id: String,
    }

    #[derive(Serialize, Deserialize, Debug, Eq, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct DeleteThingResponse {
        delete_thing: bool,
    }

    impl GraphQLQuery for DeleteThing {
        type Variables = DeleteThingVariables;
        type ResponseData = DeleteThingResponse;

        fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
            QueryBody {
                variables,
                query: "mutation DeleteThing($id: ID!) { deleteThing(id: $id) }",
                operation_name: "DeleteThing",
            }
        }
    }

    fn graphql_error(message: &str, error_type: Option<&str>) -> graphql_client::Error {
        graphql_client::Error {
            message: message.to_string(),
            locations: None,
            path: None,
            extensions: error_type.map(|error_type| {
                HashMap::from([(
                    "errorType".to_string(),
                    serde_json::Value::String(error_type.to_string()),
                )])
            }),
        }
    }

    /// Sends one `DeleteThing` request through the layer and answers it with
    /// `status` and `body`
    async fn round_trip(
        status: StatusCode,
        body: Bytes,
    ) -> Result<DeleteThingResponse, GraphQLServiceError<DeleteThingResponse>> {
        let endpoint = Url::parse("http://example.com/graphql").unwrap();
        let (mock_service, mut handle) = mock::spawn::<HttpRequest, HttpResponse>();
        let mut service = ServiceBuilder::new()
            .layer(GraphQLLayer::new(endpoint.clone()))
            .map_err(HttpServiceError::Unexpected)
            .service(mock_service.into_inner());
        let service = ServiceExt::<GraphQLRequest<DeleteThing>>::ready(&mut service)
            .await
            .unwrap();

        let request: GraphQLRequest<DeleteThing> = GraphQLRequest::new(DeleteThingVariables {
            id: "AWS.S3.Bucket.Encryption".to_string(),
        });
        let service_call_fut = service.call(request);

        task::spawn(async move {
            let (mut actual, send_response) = handle.next_request().await.unwrap();

            assert_that!(actual.uri()).is_equal_to(&Uri::from_str(endpoint.as_str()).unwrap());
            assert_that!(actual.method()).is_equal_to(&Method::POST);
            assert_that!(actual.headers().get(http::header::CONTENT_TYPE).unwrap())
                .is_equal_to(&HeaderValue::from_static(JSON_CONTENT_TYPE));

            let request_body = body_to_bytes(actual.body_mut()).await.unwrap();
            let expected_query_body = DeleteThing::build_query(DeleteThingVariables {
                id: "AWS.S3.Bucket.Encryption".to_string(),
            });
            let expected_json_query_body =
                Bytes::from(serde_json::to_vec(&expected_query_body).unwrap());
            assert_that!(request_body).is_equal_to(expected_json_query_body);

            let mock_http_response = http::Response::builder()
                .status(status)
                .body(Full::new(body))
                .unwrap();
            send_response.send_response(mock_http_response);
        });

        service_call_fut.await
    }

    fn json_body<T: Serialize>(value: &T) -> Bytes {
        Bytes::from(serde_json::to_vec(value).unwrap())
    }

    #[tokio::test]
    pub async fn test_successful_request() {
        let graphql_response = graphql_client::Response {
            data: Some(DeleteThingResponse { delete_thing: true }),
            errors: None,
            extensions: None,
        };

        let result = round_trip(StatusCode::OK, json_body(&graphql_response)).await;

        assert_that!(result)
            .is_ok()
            .is_equal_to(DeleteThingResponse { delete_thing: true });
    }

    #[tokio::test]
    pub async fn test_error_no_data() -> Result<()> {
        let graphql_response: graphql_client::Response<DeleteThingResponse> =
            graphql_client::Response {
                data: None,
                errors: Some(vec![graphql_error("policy does not exist", None)]),
                extensions: None,
            };

        let result = round_trip(StatusCode::OK, json_body(&graphql_response)).await;

        assert_that!(result).is_err().matches(|err| match err {
            GraphQLServiceError::NoData(errors) => {
                errors == &vec![graphql_error("policy does not exist", None)]
            }
            _ => false,
        });
        Ok(())
    }

    #[tokio::test]
    pub async fn test_partial_data_keeps_error_types() {
        let graphql_response = graphql_client::Response {
            data: Some(DeleteThingResponse { delete_thing: false }),
            errors: Some(vec![graphql_error("bad input", Some("ValidationException"))]),
            extensions: None,
        };

        let result = round_trip(StatusCode::OK, json_body(&graphql_response)).await;

        assert_that!(result).is_err().matches(|err| match err {
            GraphQLServiceError::PartialError {
                data,
                friendly_errors_detail,
                ..
            } => {
                data == &DeleteThingResponse { delete_thing: false }
                    && friendly_errors_detail == &vec!["ValidationException: bad input".to_string()]
            }
            _ => false,
        });
    }

    #[rstest]
    #[case::error_type(graphql_error("Not Authorized to access deletePolicy", Some("UnauthorizedException")))]
    #[case::message_only(graphql_error("Unauthorized", None))]
    #[tokio::test]
    pub async fn test_unauthorized_errors(#[case] error: graphql_client::Error) {
        let graphql_response: graphql_client::Response<DeleteThingResponse> =
            graphql_client::Response {
                data: None,
                errors: Some(vec![error]),
                extensions: None,
            };

        let result = round_trip(StatusCode::OK, json_body(&graphql_response)).await;

        assert_that!(result)
            .is_err()
            .matches(|err| matches!(err, GraphQLServiceError::InvalidCredentials));
    }

    #[rstest]
    #[case::unauthorized(StatusCode::UNAUTHORIZED)]
    #[case::forbidden(StatusCode::FORBIDDEN)]
    #[tokio::test]
    pub async fn test_unauthorized_status(#[case] status: StatusCode) {
        let result = round_trip(status, Bytes::from_static(b"{}")).await;

        assert_that!(result)
            .is_err()
            .matches(|err| matches!(err, GraphQLServiceError::InvalidCredentials));
    }

    #[rstest]
    #[case::ok(StatusCode::OK)]
    #[case::internal_server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    #[tokio::test]
    pub async fn test_json_deserialization_error(#[case] expected_status_code: StatusCode) {
        let result = round_trip(
            expected_status_code,
            Bytes::from_static(b"something went wrong"),
        )
        .await;

        assert_that!(result).is_err().matches(|err| match err {
            GraphQLServiceError::Deserialization {
                data, status_code, ..
            } => {
                status_code == &expected_status_code
                    && data == &Bytes::from_static(b"something went wrong")
            }
            _ => false,
        });
    }
}
