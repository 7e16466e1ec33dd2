use std::{future::Future, pin::Pin};

use graphql_client::GraphQLQuery;
use tower::Service;
use warden_graphql::{GraphQLRequest, GraphQLServiceError};

use super::types::{PolicyDeleteInput, PolicyDeleteResponse, QueryResponseData, QueryVariables};
use crate::WardenClientError;

#[derive(GraphQLQuery)]
// The paths are relative to the directory where your `Cargo.toml` is located.
#[graphql(
    query_path = "src/operations/policies/delete/delete_mutation.graphql",
    schema_path = ".schema/schema.graphql",
    response_derives = "Clone, Eq, PartialEq, Debug, Serialize, Deserialize",
    variables_derives = "Clone, Debug, PartialEq",
    deprecated = "warn"
)]
/// This struct is used to generate the module containing `Variables` and
/// `ResponseData` structs.
/// Snake case of this name is the mod name. i.e. policy_delete_mutation
pub(crate) struct PolicyDeleteMutation;

/// Deletes policies through an inner GraphQL service
#[derive(Clone)]
pub struct PolicyDelete<S: Clone> {
    inner: S,
}

impl<S: Clone> PolicyDelete<S> {
    pub const fn new(inner: S) -> PolicyDelete<S> {
        PolicyDelete { inner }
    }
}

impl<S, Fut> Service<PolicyDeleteInput> for PolicyDelete<S>
where
    S: Service<
            GraphQLRequest<PolicyDeleteMutation>,
            Response = QueryResponseData,
            Error = GraphQLServiceError<QueryResponseData>,
            Future = Fut,
        > + Clone
        + Send
        + 'static,
    Fut: Future<Output = Result<S::Response, S::Error>> + Send,
{
    type Response = PolicyDeleteResponse;
    type Error = WardenClientError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest<PolicyDeleteMutation>>::poll_ready(&mut self.inner, cx)
            .map_err(|err| WardenClientError::ServiceReady(Box::new(err)))
    }

    fn call(&mut self, input: PolicyDeleteInput) -> Self::Future {
        let cloned = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, cloned);
        let fut = async move {
            let ids = input.ids().to_vec();
            tracing::debug!(?ids, "deleting policies");
            let response_data = inner
                .call(GraphQLRequest::new(QueryVariables::from(input)))
                .await?;
            build_response(response_data, ids)
        };
        Box::pin(fut)
    }
}

fn build_response(
    response_data: QueryResponseData,
    ids: Vec<String>,
) -> Result<PolicyDeleteResponse, WardenClientError> {
    match response_data.delete_policy {
        Some(true) => Ok(PolicyDeleteResponse { deleted: ids }),
        Some(false) | None => Err(WardenClientError::DeleteRejected { ids }),
    }
}
