use std::fmt::{self, Display};
use std::io;

use calm_io::stdoutln;
use comfy_table::Cell;
use serde::Serialize;
use serde_json::{Value, json};
use termimad::MadSkin;
use warden_client::operations::policies::delete::PolicyDeleteResponse;
use warden_client::operations::policies::list::PolicyListResponse;
use warden_client::shared::PolicySummary;
use warden_std::{Style, is_no_color_set, successln};

use crate::WardenError;
use crate::cli::FormatType;
use crate::utils::table;

const LAST_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// WardenOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of Warden's commands should return `WardenResult<WardenOutput>`
/// If the command needs to output some type of data, it should be structured
/// in this enum, and its print logic should be handled in `WardenOutput::get_stdout`
///
/// Not all commands will output machine readable information, and those should
/// return `Ok(WardenOutput::EmptySuccess)`. If a new command is added and it needs to
/// return something that is not described well in this enum, it should be added.
#[derive(Clone, PartialEq, Debug)]
pub enum WardenOutput {
    PolicyList(PolicyListResponse),
    PolicyDelete(PolicyDeleteResponse),
    Profiles(Vec<String>),
    ProfileDetails { name: String, details: String },
    ErrorExplanation(String),
    EmptySuccess,
}

impl WardenOutput {
    pub fn get_stdout(&self) -> io::Result<Option<String>> {
        Ok(match self {
            WardenOutput::PolicyList(response) => Some(policy_list_stdout(response)),
            WardenOutput::PolicyDelete(response) => {
                successln!(
                    "Deleted {} {}",
                    response.deleted.len(),
                    if response.deleted.len() == 1 { "policy" } else { "policies" }
                );
                Some(response.deleted.join("\n"))
            }
            WardenOutput::Profiles(profiles) => {
                if profiles.is_empty() {
                    eprintln!("No profiles found.");
                    None
                } else {
                    eprintln!("Profiles:");
                    Some(profiles.join("\n"))
                }
            }
            WardenOutput::ProfileDetails { name, details } => {
                Some(format!("{}\n{}", Style::Heading.paint(name), details))
            }
            WardenOutput::ErrorExplanation(explanation) => {
                let skin = if is_no_color_set() {
                    MadSkin::no_style()
                } else {
                    MadSkin::default()
                };
                Some(skin.term_text(explanation).to_string())
            }
            WardenOutput::EmptySuccess => None,
        })
    }

    pub fn get_json(&self) -> Value {
        match self {
            WardenOutput::PolicyList(response) => json!(response),
            WardenOutput::PolicyDelete(response) => json!(response),
            WardenOutput::Profiles(profiles) => json!({ "profiles": profiles }),
            WardenOutput::ProfileDetails { name, details } => {
                json!({ "name": name, "details": details })
            }
            WardenOutput::ErrorExplanation(explanation) => json!({ "explanation": explanation }),
            WardenOutput::EmptySuccess => json!({}),
        }
    }

    pub fn print(&self, format: FormatType) -> io::Result<()> {
        match format {
            FormatType::Plain => {
                if let Some(stdout) = self.get_stdout()? {
                    stdoutln!("{}", stdout)?;
                }
            }
            FormatType::Json => {
                stdoutln!("{}", JsonOutput::from(self.clone()))?;
            }
        }
        Ok(())
    }
}

/// The policy table followed by a page footer
pub fn policy_list_stdout(response: &PolicyListResponse) -> String {
    let mut table = table::get_table();
    table.set_header(table::sort_header(&response.sort));

    for policy in &response.policies {
        table.add_row(policy_row(policy));
    }

    let paging = &response.paging;
    let footer = format!(
        "Page {}/{} ({} {} total)",
        paging.this_page,
        paging.total_pages,
        paging.total_items,
        if paging.total_items == 1 { "policy" } else { "policies" }
    );

    if response.policies.is_empty() {
        format!("{}\nNo policies matched.\n{}", table, Style::Muted.paint(footer))
    } else {
        format!("{}\n{}", table, Style::Muted.paint(footer))
    }
}

fn policy_row(policy: &PolicySummary) -> Vec<Cell> {
    let name = if policy.name() == policy.id {
        policy.id.clone()
    } else {
        format!("{}\n{}", policy.name(), Style::Muted.paint(&policy.id))
    };
    let resource_types = if policy.resource_types.is_empty() {
        "All resources".to_string()
    } else {
        policy.resource_types.join("\n")
    };

    vec![
        Cell::new(name),
        Cell::new(resource_types),
        Cell::new(policy.severity),
        Cell::new(policy.status()),
        Cell::new(policy.last_modified.format(LAST_MODIFIED_FORMAT)),
    ]
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub enum JsonVersion {
    #[default]
    #[serde(rename = "1")]
    One,
}

/// Envelope for `--format json`
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct JsonOutput {
    json_version: JsonVersion,
    data: Value,
    error: Value,
}

impl Display for JsonOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", json!(self))
    }
}

impl From<WardenOutput> for JsonOutput {
    fn from(output: WardenOutput) -> Self {
        let mut data = output.get_json();
        if let Value::Object(map) = &mut data {
            map.insert("success".to_string(), Value::Bool(true));
        }
        JsonOutput {
            json_version: JsonVersion::default(),
            data,
            error: Value::Null,
        }
    }
}

impl From<&WardenError> for JsonOutput {
    fn from(error: &WardenError) -> Self {
        JsonOutput {
            json_version: JsonVersion::default(),
            data: json!({ "success": false }),
            error: error.get_internal_error_json(),
        }
    }
}
