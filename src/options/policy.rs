use clap::Parser;
use serde::Serialize;
use warden_client::operations::policies::list::PolicyFilters;
use warden_client::shared::{ComplianceStatus, Severity, SortDirection, SortField, SortState};

#[derive(Debug, Clone, Serialize, Parser)]
pub struct PolicySortOpt {
    /// Column to sort by: id, resource-types, severity, status or last-modified
    #[arg(long = "sort-by", value_name = "FIELD", value_parser = SortField::parse, default_value_t = SortField::LastModified)]
    pub sort_by: SortField,

    /// Direction of the sort: asc or desc
    #[arg(long = "sort-dir", value_name = "DIR", value_parser = SortDirection::parse, default_value_t = SortDirection::Descending)]
    pub sort_dir: SortDirection,
}

impl PolicySortOpt {
    pub const fn sort_state(&self) -> SortState {
        SortState::new(self.sort_by, self.sort_dir)
    }
}

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct PolicyFilterOpt {
    /// Only show policies whose name contains this text
    #[arg(long = "name-contains", value_name = "TEXT")]
    pub name_contains: Option<String>,

    /// Only show policies with this severity
    #[arg(long = "severity", value_parser = Severity::parse)]
    pub severity: Option<Severity>,

    /// Only show policies with this compliance status: pass, fail or error
    #[arg(long = "status", value_parser = ComplianceStatus::parse)]
    pub compliance_status: Option<ComplianceStatus>,

    /// Only show enabled (true) or disabled (false) policies
    #[arg(long = "enabled", value_name = "BOOL")]
    pub enabled: Option<bool>,

    /// Only show policies with (true) or without (false) auto-remediation
    #[arg(long = "has-remediation", value_name = "BOOL")]
    pub has_remediation: Option<bool>,

    /// Only show policies for this resource type. May be repeated
    #[arg(long = "resource-type", value_name = "TYPE")]
    pub resource_types: Vec<String>,

    /// Only show policies with this tag. May be repeated
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl From<PolicyFilterOpt> for PolicyFilters {
    fn from(opt: PolicyFilterOpt) -> Self {
        PolicyFilters {
            name_contains: opt.name_contains,
            severity: opt.severity,
            compliance_status: opt.compliance_status,
            enabled: opt.enabled,
            has_remediation: opt.has_remediation,
            resource_types: opt.resource_types,
            tags: opt.tags,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Parser)]
pub struct PolicyPageOpt {
    /// Page to fetch, starting at 1
    #[arg(long = "page", value_parser = clap::value_parser!(i64).range(1..))]
    pub page: Option<i64>,

    /// Number of policies per page
    #[arg(long = "page-size", value_parser = clap::value_parser!(i64).range(1..))]
    pub page_size: Option<i64>,
}
