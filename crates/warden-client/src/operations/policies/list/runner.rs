use tower::{Service, ServiceExt};

use super::{
    service::PolicyList,
    types::{PolicyListInput, PolicyListResponse},
};
use crate::{PolicyClient, WardenClientError};

/// Fetches one page of policies, ordered by `input.sort`
pub async fn run(
    input: PolicyListInput,
    client: &PolicyClient,
) -> Result<PolicyListResponse, WardenClientError> {
    let mut service = PolicyList::new(client.graphql_service()?);
    let service = service.ready().await?;
    service.call(input).await
}
