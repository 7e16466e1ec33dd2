use tower::{Service, ServiceExt};

use super::{
    service::PolicyDelete,
    types::{PolicyDeleteInput, PolicyDeleteResponse},
};
use crate::{PolicyClient, WardenClientError};

/// Deletes every policy named in `input` with a single mutation
pub async fn run(
    input: PolicyDeleteInput,
    client: &PolicyClient,
) -> Result<PolicyDeleteResponse, WardenClientError> {
    let mut service = PolicyDelete::new(client.graphql_mutation_service()?);
    let service = service.ready().await?;
    service.call(input).await
}
