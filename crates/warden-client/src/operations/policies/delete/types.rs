use serde::Serialize;

use super::service::policy_delete_mutation;
use crate::WardenClientError;

pub(crate) type QueryVariables = policy_delete_mutation::Variables;
pub(crate) type QueryResponseData = policy_delete_mutation::ResponseData;
type QueryInput = policy_delete_mutation::DeletePolicyInput;
type QueryInputItem = policy_delete_mutation::DeletePolicyInputItem;

/// The policies to delete. Never empty, and each ID appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDeleteInput {
    ids: Vec<String>,
}

impl PolicyDeleteInput {
    /// Keeps the first occurrence of every trimmed, non-blank ID, in order
    pub fn new<I, S>(ids: I) -> Result<PolicyDeleteInput, WardenClientError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() || unique.iter().any(|seen| seen == id) {
                continue;
            }
            unique.push(id.to_string());
        }
        if unique.is_empty() {
            return Err(WardenClientError::EmptyDeleteInput);
        }
        Ok(PolicyDeleteInput { ids: unique })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl From<PolicyDeleteInput> for QueryVariables {
    fn from(input: PolicyDeleteInput) -> Self {
        Self {
            input: QueryInput {
                policies: input
                    .ids
                    .into_iter()
                    .map(|id| QueryInputItem { id })
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyDeleteResponse {
    pub deleted: Vec<String>,
}
