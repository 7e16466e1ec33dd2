use std::fmt;

use buildstructor::buildstructor;
use tower::ServiceBuilder;
use url::Url;
use warden_config::Credential;
use warden_graphql::{GraphQLLayer, GraphQLService};
use warden_http::{
    HttpService, HttpServiceFactory, ReqwestServiceFactory,
    extend_headers::{ExtendHeaders, ExtendHeadersLayer},
};

use crate::{WardenClientError, headers};

/// The GraphQL service every policy operation is sent through
pub type PolicyGraphQLService = GraphQLService<ExtendHeaders<HttpService>>;

/// Represents a client for making GraphQL requests to a policy console.
#[derive(Clone)]
pub struct PolicyClient {
    credential: Credential,
    endpoint: Url,
    version: String,
    http_service_factory: ReqwestServiceFactory,
}

#[buildstructor]
impl PolicyClient {
    /// Constructs a new [`PolicyClient`] that sends `credential` to `endpoint`
    #[builder]
    pub fn new(
        credential: Credential,
        endpoint: String,
        version: String,
        http_service_factory: Option<ReqwestServiceFactory>,
    ) -> Result<PolicyClient, WardenClientError> {
        let endpoint = Url::parse(&endpoint)
            .map_err(|_| WardenClientError::InvalidEndpoint { endpoint })?;
        Ok(PolicyClient {
            credential,
            endpoint,
            version,
            http_service_factory: http_service_factory
                .unwrap_or_else(|| ReqwestServiceFactory::builder().build()),
        })
    }

    /// The console endpoint requests are sent to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds a fresh GraphQL service carrying this client's headers
    pub fn graphql_service(&self) -> Result<PolicyGraphQLService, WardenClientError> {
        self.service_from(&self.http_service_factory)
    }

    /// Like [`PolicyClient::graphql_service`], but each request is sent
    /// exactly once. Mutations go through this one.
    pub fn graphql_mutation_service(&self) -> Result<PolicyGraphQLService, WardenClientError> {
        self.service_from(&self.http_service_factory.without_retries())
    }

    fn service_from(
        &self,
        factory: &ReqwestServiceFactory,
    ) -> Result<PolicyGraphQLService, WardenClientError> {
        let headers = headers::build_policy_headers(&self.credential, &self.version)?;
        let http_service = factory.create()?;
        Ok(ServiceBuilder::new()
            .layer(GraphQLLayer::new(self.endpoint.clone()))
            .layer(ExtendHeadersLayer::new(headers))
            .service(http_service))
    }
}

impl fmt::Debug for PolicyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyClient")
            .field("credential_origin", &self.credential.origin)
            .field("endpoint", &self.endpoint.as_str())
            .field("version", &self.version)
            .finish()
    }
}
