//! Sort state of the policy list.
//!
//! Exactly one column is the active sort key at any time. Activating a
//! column header moves the state with [`compute_next_sort_state`]:
//!
//! * activating the active column flips its direction
//! * activating any other column makes it active, ascending
//!
//! There is no "unsorted" state and no per-column memory of a previous
//! direction.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use crate::{WardenClientError, shared::parse_choice};

/// A column of the policy list that can be sorted on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum SortField {
    /// The policy ID, shown in the "Policy" column
    #[strum(to_string = "id", serialize = "policy")]
    Id,
    /// The resource types a policy applies to
    #[strum(to_string = "resource-types")]
    ResourceTypes,
    /// Severity of a failing policy
    #[strum(to_string = "severity")]
    Severity,
    /// Pass/fail/error state, shown in the "Status" column
    #[strum(to_string = "status", serialize = "compliance-status")]
    ComplianceStatus,
    /// When the policy was last changed
    #[strum(to_string = "last-modified")]
    LastModified,
}

impl SortField {
    /// The column header this field sorts
    pub const fn label(&self) -> &'static str {
        match self {
            SortField::Id => "Policy",
            SortField::ResourceTypes => "Resource Types",
            SortField::Severity => "Severity",
            SortField::ComplianceStatus => "Status",
            SortField::LastModified => "Last Modified",
        }
    }

    /// Parses a column name as typed by a user
    pub fn parse(value: &str) -> Result<SortField, WardenClientError> {
        parse_choice("sort field", value)
    }
}

/// Which way a column is ordered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    /// Smallest first
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    /// Largest first
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl SortDirection {
    /// The other direction
    pub const fn flip(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// The arrow drawn next to the active column header
    pub const fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// Parses a direction as typed by a user
    pub fn parse(value: &str) -> Result<SortDirection, WardenClientError> {
        parse_choice("sort direction", value)
    }
}

/// The active sort key of the policy list and its direction.
///
/// The list opens sorted by most recently modified first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    /// The active column
    pub field: SortField,
    /// How the active column is ordered
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: SortField::LastModified,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Constructs a [`SortState`]
    pub const fn new(field: SortField, direction: SortDirection) -> SortState {
        SortState { field, direction }
    }

    /// The state after the header of `selected` is activated
    pub fn next(self, selected: SortField) -> SortState {
        compute_next_sort_state(self, selected)
    }

    /// The direction shown on the header of `field`, which is `None` for
    /// every column except the active one
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// Computes the sort state that follows activating the header of `selected`.
///
/// Re-selecting the active field flips its direction. Selecting a different
/// field makes it active in ascending order, whatever direction was active
/// before.
pub fn compute_next_sort_state(current: SortState, selected: SortField) -> SortState {
    if current.field == selected {
        SortState {
            field: current.field,
            direction: current.direction.flip(),
        }
    } else {
        SortState {
            field: selected,
            direction: SortDirection::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use speculoos::prelude::*;
    use strum::IntoEnumIterator;

    use super::*;

    fn all_states() -> Vec<SortState> {
        SortField::iter()
            .flat_map(|field| {
                SortDirection::iter().map(move |direction| SortState::new(field, direction))
            })
            .collect()
    }

    #[rstest]
    #[case::flip_default(
        SortState::new(SortField::LastModified, SortDirection::Descending),
        SortField::LastModified,
        SortState::new(SortField::LastModified, SortDirection::Ascending)
    )]
    #[case::new_field_is_ascending(
        SortState::new(SortField::Severity, SortDirection::Ascending),
        SortField::ComplianceStatus,
        SortState::new(SortField::ComplianceStatus, SortDirection::Ascending)
    )]
    #[case::new_field_forgets_descending(
        SortState::new(SortField::Severity, SortDirection::Descending),
        SortField::Id,
        SortState::new(SortField::Id, SortDirection::Ascending)
    )]
    #[case::flip_ascending(
        SortState::new(SortField::Id, SortDirection::Ascending),
        SortField::Id,
        SortState::new(SortField::Id, SortDirection::Descending)
    )]
    fn it_computes_the_next_state(
        #[case] current: SortState,
        #[case] selected: SortField,
        #[case] expected: SortState,
    ) {
        assert_eq!(compute_next_sort_state(current, selected), expected);
    }

    #[test]
    fn toggling_the_same_column_twice_restores_the_state() {
        let start = SortState::new(SortField::Id, SortDirection::Ascending);
        let once = start.next(SortField::Id);
        let twice = once.next(SortField::Id);

        assert_eq!(once, SortState::new(SortField::Id, SortDirection::Descending));
        assert_eq!(twice, start);
    }

    #[test]
    fn every_state_and_field_follows_the_toggle_rules() {
        for state in all_states() {
            for selected in SortField::iter() {
                let next = compute_next_sort_state(state, selected);
                if selected == state.field {
                    assert_eq!(next.field, state.field);
                    assert_eq!(next.direction, state.direction.flip());
                    assert_eq!(next.next(selected), state);
                } else {
                    assert_eq!(next, SortState::new(selected, SortDirection::Ascending));
                }
                assert_eq!(next, compute_next_sort_state(state, selected));
            }
        }
    }

    #[test]
    fn only_the_active_column_has_a_direction() {
        let state = SortState::new(SortField::Severity, SortDirection::Descending);
        for field in SortField::iter() {
            let expected = (field == SortField::Severity).then_some(SortDirection::Descending);
            assert_eq!(state.direction_for(field), expected);
        }
    }

    #[test]
    fn default_is_most_recently_modified_first() {
        assert_that!(SortState::default())
            .is_equal_to(SortState::new(SortField::LastModified, SortDirection::Descending));
    }

    #[rstest]
    #[case("id", SortField::Id)]
    #[case("policy", SortField::Id)]
    #[case("resource-types", SortField::ResourceTypes)]
    #[case("Severity", SortField::Severity)]
    #[case("status", SortField::ComplianceStatus)]
    #[case("compliance-status", SortField::ComplianceStatus)]
    #[case(" last-modified ", SortField::LastModified)]
    fn it_parses_fields(#[case] input: &str, #[case] expected: SortField) {
        assert_that!(SortField::parse(input)).is_ok().is_equal_to(expected);
    }

    #[test]
    fn unknown_fields_are_rejected_not_defaulted() {
        let err = SortField::parse("name").unwrap_err();
        match err {
            WardenClientError::InvalidChoice {
                kind,
                value,
                choices,
            } => {
                assert_eq!(kind, "sort field");
                assert_eq!(value, "name");
                assert_eq!(
                    choices,
                    vec!["id", "resource-types", "severity", "status", "last-modified"]
                );
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[rstest]
    #[case("asc", SortDirection::Ascending)]
    #[case("ASCENDING", SortDirection::Ascending)]
    #[case("desc", SortDirection::Descending)]
    #[case("descending", SortDirection::Descending)]
    fn it_parses_directions(#[case] input: &str, #[case] expected: SortDirection) {
        assert_that!(SortDirection::parse(input)).is_ok().is_equal_to(expected);
        assert_that!(SortDirection::parse("sideways")).is_err();
    }

    #[test]
    fn it_serializes_for_json_output() {
        let state = SortState::new(SortField::ResourceTypes, SortDirection::Descending);
        assert_eq!(
            serde_json::to_value(state).unwrap(),
            serde_json::json!({"field": "resource-types", "direction": "descending"})
        );
        assert_eq!(state.to_string(), "resource-types desc");
    }
}
