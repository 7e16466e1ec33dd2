use std::{future::Future, pin::Pin};

use chrono::{DateTime, Utc};
use graphql_client::GraphQLQuery;
use tower::Service;
use warden_graphql::{GraphQLRequest, GraphQLServiceError};

use super::types::{
    PolicyListInput, PolicyListResponse, QueryComplianceStatus, QueryPaging, QueryPolicy,
    QueryResponseData, QuerySeverity, QueryVariables,
};
use crate::{
    WardenClientError,
    shared::{ComplianceStatus, Paging, PolicySummary, Severity, SortState},
};

type AWSDateTime = String;

#[derive(GraphQLQuery)]
// The paths are relative to the directory where your `Cargo.toml` is located.
#[graphql(
    query_path = "src/operations/policies/list/list_query.graphql",
    schema_path = ".schema/schema.graphql",
    response_derives = "Clone, Eq, PartialEq, Debug, Serialize, Deserialize",
    variables_derives = "Clone, Debug, PartialEq",
    deprecated = "warn"
)]
/// This struct is used to generate the module containing `Variables` and
/// `ResponseData` structs.
/// Snake case of this name is the mod name. i.e. policy_list_query
pub(crate) struct PolicyListQuery;

/// Fetches a page of policies through an inner GraphQL service
#[derive(Clone)]
pub struct PolicyList<S: Clone> {
    inner: S,
}

impl<S: Clone> PolicyList<S> {
    pub const fn new(inner: S) -> PolicyList<S> {
        PolicyList { inner }
    }
}

impl<S, Fut> Service<PolicyListInput> for PolicyList<S>
where
    S: Service<
            GraphQLRequest<PolicyListQuery>,
            Response = QueryResponseData,
            Error = GraphQLServiceError<QueryResponseData>,
            Future = Fut,
        > + Clone
        + Send
        + 'static,
    Fut: Future<Output = Result<S::Response, S::Error>> + Send,
{
    type Response = PolicyListResponse;
    type Error = WardenClientError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest<PolicyListQuery>>::poll_ready(&mut self.inner, cx)
            .map_err(|err| WardenClientError::ServiceReady(Box::new(err)))
    }

    fn call(&mut self, input: PolicyListInput) -> Self::Future {
        let cloned = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, cloned);
        let fut = async move {
            let sort = input.sort;
            tracing::debug!(%sort, page = ?input.page, "listing policies");
            let variables = QueryVariables::from(input);
            let response_data = inner.call(GraphQLRequest::new(variables)).await?;
            build_response(response_data, sort)
        };
        Box::pin(fut)
    }
}

fn malformed(reason: impl Into<String>) -> WardenClientError {
    WardenClientError::MalformedResponse {
        reason: reason.into(),
    }
}

fn build_response(
    response_data: QueryResponseData,
    sort: SortState,
) -> Result<PolicyListResponse, WardenClientError> {
    let list = response_data
        .list_policies
        .ok_or_else(|| malformed("listPolicies was null"))?;
    let paging = build_paging(list.paging.ok_or_else(|| malformed("paging was null"))?)?;
    let policies = list
        .policies
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(build_policy)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PolicyListResponse {
        policies,
        paging,
        sort,
    })
}

fn build_paging(paging: QueryPaging) -> Result<Paging, WardenClientError> {
    Ok(Paging {
        this_page: paging.this_page.ok_or_else(|| malformed("paging.thisPage was null"))?,
        total_pages: paging
            .total_pages
            .ok_or_else(|| malformed("paging.totalPages was null"))?,
        total_items: paging
            .total_items
            .ok_or_else(|| malformed("paging.totalItems was null"))?,
    })
}

fn build_policy(policy: QueryPolicy) -> Result<PolicySummary, WardenClientError> {
    let id = policy.id;
    let missing = |field: &str| malformed(format!("{field} was null for policy {id}"));
    let severity = policy.severity.ok_or_else(|| missing("severity"))?;
    let compliance_status = policy
        .compliance_status
        .ok_or_else(|| missing("complianceStatus"))?;
    let enabled = policy.enabled.ok_or_else(|| missing("enabled"))?;
    let last_modified = policy.last_modified.ok_or_else(|| missing("lastModified"))?;
    Ok(PolicySummary {
        severity: severity_from(severity)?,
        compliance_status: compliance_status_from(compliance_status)?,
        enabled,
        last_modified: parse_timestamp(&last_modified)?,
        display_name: policy.display_name,
        resource_types: policy
            .resource_types
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect(),
        tags: policy.tags.unwrap_or_default().into_iter().flatten().collect(),
        id,
    })
}

fn severity_from(severity: QuerySeverity) -> Result<Severity, WardenClientError> {
    match severity {
        QuerySeverity::INFO => Ok(Severity::Info),
        QuerySeverity::LOW => Ok(Severity::Low),
        QuerySeverity::MEDIUM => Ok(Severity::Medium),
        QuerySeverity::HIGH => Ok(Severity::High),
        QuerySeverity::CRITICAL => Ok(Severity::Critical),
        QuerySeverity::Other(other) => Err(malformed(format!("unknown severity {other}"))),
    }
}

fn compliance_status_from(
    status: QueryComplianceStatus,
) -> Result<ComplianceStatus, WardenClientError> {
    match status {
        QueryComplianceStatus::PASS => Ok(ComplianceStatus::Pass),
        QueryComplianceStatus::FAIL => Ok(ComplianceStatus::Fail),
        QueryComplianceStatus::ERROR => Ok(ComplianceStatus::Error),
        QueryComplianceStatus::Other(other) => {
            Err(malformed(format!("unknown compliance status {other}")))
        }
    }
}

fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>, WardenClientError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| malformed(format!("'{timestamp}' is not a timestamp: {err}")))
}
