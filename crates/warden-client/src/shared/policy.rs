use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{WardenClientError, shared::parse_choice};

/// How bad it is when a policy fails
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parses a severity as typed by a user
    pub fn parse(value: &str) -> Result<Severity, WardenClientError> {
        parse_choice("severity", value)
    }
}

/// Outcome of the last evaluation of a policy against its resources
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ComplianceStatus {
    Pass,
    Fail,
    Error,
}

impl ComplianceStatus {
    /// Parses a compliance status as typed by a user
    pub fn parse(value: &str) -> Result<ComplianceStatus, WardenClientError> {
        parse_choice("compliance status", value)
    }
}

/// What the "Status" column shows for a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStatus {
    /// A disabled policy is not evaluated, so its last result is hidden
    Disabled,
    Compliance(ComplianceStatus),
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyStatus::Disabled => write!(f, "DISABLED"),
            PolicyStatus::Compliance(status) => write!(f, "{}", status),
        }
    }
}

/// One row of the policy list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub id: String,
    pub display_name: Option<String>,
    /// Empty when the policy applies to every resource type
    pub resource_types: Vec<String>,
    pub severity: Severity,
    pub compliance_status: ComplianceStatus,
    pub enabled: bool,
    pub last_modified: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl PolicySummary {
    /// Disabled policies show as such, whatever their last result was
    pub const fn status(&self) -> PolicyStatus {
        if self.enabled {
            PolicyStatus::Compliance(self.compliance_status)
        } else {
            PolicyStatus::Disabled
        }
    }

    /// The name to show for this policy, falling back to its ID
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Where a page of results sits in the whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub this_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

impl Paging {
    pub const fn has_next(&self) -> bool {
        self.this_page < self.total_pages
    }

    pub const fn has_previous(&self) -> bool {
        self.this_page > 1
    }
}
