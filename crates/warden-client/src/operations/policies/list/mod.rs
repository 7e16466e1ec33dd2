mod runner;
mod service;
mod types;

pub use runner::run;
pub use service::PolicyList;
pub use types::{PolicyFilters, PolicyListInput, PolicyListResponse};
