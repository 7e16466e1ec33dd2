use serde::Serialize;

use super::service::policy_list_query;
use crate::shared::{ComplianceStatus, Paging, PolicySummary, Severity, SortDirection, SortField, SortState};

pub(crate) type QueryVariables = policy_list_query::Variables;
pub(crate) type QueryInput = policy_list_query::ListPoliciesInput;
pub(crate) type QueryResponseData = policy_list_query::ResponseData;
pub(crate) type QueryPolicy = policy_list_query::PolicyListQueryListPoliciesPolicies;
pub(crate) type QueryPaging = policy_list_query::PolicyListQueryListPoliciesPaging;

type QuerySortField = policy_list_query::ListPoliciesSortFieldsEnum;
type QuerySortDir = policy_list_query::SortDirEnum;
pub(crate) type QuerySeverity = policy_list_query::SeverityEnum;
pub(crate) type QueryComplianceStatus = policy_list_query::ComplianceStatusEnum;

/// Narrows the policy list. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyFilters {
    pub name_contains: Option<String>,
    pub severity: Option<Severity>,
    pub compliance_status: Option<ComplianceStatus>,
    pub enabled: Option<bool>,
    pub has_remediation: Option<bool>,
    pub resource_types: Vec<String>,
    pub tags: Vec<String>,
}

/// Everything needed to fetch one page of the policy list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyListInput {
    pub sort: SortState,
    pub filters: PolicyFilters,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// One page of the policy list, with the sort state that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyListResponse {
    pub policies: Vec<PolicySummary>,
    pub paging: Paging,
    pub sort: SortState,
}

fn join(values: Vec<String>) -> Option<String> {
    let values: Vec<String> = values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

impl From<PolicyListInput> for QueryVariables {
    fn from(input: PolicyListInput) -> Self {
        let PolicyListInput {
            sort,
            filters,
            page,
            page_size,
        } = input;
        Self {
            input: Some(QueryInput {
                compliance_status: filters.compliance_status.map(Into::into),
                name_contains: filters.name_contains,
                enabled: filters.enabled,
                has_remediation: filters.has_remediation,
                resource_types: join(filters.resource_types),
                severity: filters.severity.map(Into::into),
                tags: join(filters.tags),
                sort_by: Some(sort.field.into()),
                sort_dir: Some(sort.direction.into()),
                page_size,
                page,
            }),
        }
    }
}

impl From<SortField> for QuerySortField {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Id => QuerySortField::id,
            SortField::ResourceTypes => QuerySortField::resourceTypes,
            SortField::Severity => QuerySortField::severity,
            SortField::ComplianceStatus => QuerySortField::complianceStatus,
            SortField::LastModified => QuerySortField::lastModified,
        }
    }
}

impl From<SortDirection> for QuerySortDir {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => QuerySortDir::ascending,
            SortDirection::Descending => QuerySortDir::descending,
        }
    }
}

impl From<Severity> for QuerySeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => QuerySeverity::INFO,
            Severity::Low => QuerySeverity::LOW,
            Severity::Medium => QuerySeverity::MEDIUM,
            Severity::High => QuerySeverity::HIGH,
            Severity::Critical => QuerySeverity::CRITICAL,
        }
    }
}

impl From<ComplianceStatus> for QueryComplianceStatus {
    fn from(status: ComplianceStatus) -> Self {
        match status {
            ComplianceStatus::Pass => QueryComplianceStatus::PASS,
            ComplianceStatus::Fail => QueryComplianceStatus::FAIL,
            ComplianceStatus::Error => QueryComplianceStatus::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn it_sends_sort_filters_and_paging() {
        let input = PolicyListInput {
            sort: SortState::new(SortField::ResourceTypes, SortDirection::Descending),
            filters: PolicyFilters {
                name_contains: Some("bucket".to_string()),
                severity: Some(Severity::High),
                compliance_status: Some(ComplianceStatus::Fail),
                enabled: Some(true),
                has_remediation: None,
                resource_types: vec!["AWS.S3.Bucket".to_string(), "AWS.KMS.Key".to_string()],
                tags: vec![" pci ".to_string(), "".to_string()],
            },
            page: Some(2),
            page_size: Some(25),
        };

        let variables = QueryVariables::from(input);

        assert_eq!(
            serde_json::to_value(variables).unwrap(),
            json!({
                "input": {
                    "complianceStatus": "FAIL",
                    "nameContains": "bucket",
                    "enabled": true,
                    "hasRemediation": null,
                    "resourceTypes": "AWS.S3.Bucket,AWS.KMS.Key",
                    "severity": "HIGH",
                    "tags": "pci",
                    "sortBy": "resourceTypes",
                    "sortDir": "descending",
                    "pageSize": 25,
                    "page": 2
                }
            })
        );
    }

    #[test]
    fn every_field_has_a_sort_key() {
        let keys: Vec<serde_json::Value> = [
            SortField::Id,
            SortField::ResourceTypes,
            SortField::Severity,
            SortField::ComplianceStatus,
            SortField::LastModified,
        ]
        .into_iter()
        .map(|field| serde_json::to_value(QuerySortField::from(field)).unwrap())
        .collect();

        assert_eq!(
            keys,
            vec![
                json!("id"),
                json!("resourceTypes"),
                json!("severity"),
                json!("complianceStatus"),
                json!("lastModified")
            ]
        );
    }
}
