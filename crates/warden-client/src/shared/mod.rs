mod policy;
mod sort;

use std::{fmt::Display, str::FromStr};

use strum::IntoEnumIterator;

pub use policy::{ComplianceStatus, Paging, PolicyStatus, PolicySummary, Severity};
pub use sort::{SortDirection, SortField, SortState, compute_next_sort_state};

use crate::WardenClientError;

/// Parses `value` as one of the variants of `T`, reporting every accepted
/// spelling when it isn't one. Never falls back to a default.
pub fn parse_choice<T>(kind: &'static str, value: &str) -> Result<T, WardenClientError>
where
    T: FromStr + IntoEnumIterator + Display,
{
    T::from_str(value.trim()).map_err(|_| WardenClientError::InvalidChoice {
        kind,
        value: value.to_string(),
        choices: T::iter().map(|choice| choice.to_string()).collect(),
    })
}
