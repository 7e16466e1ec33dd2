mod runner;
mod service;
mod types;

pub use runner::run;
pub use service::PolicyDelete;
pub use types::{PolicyDeleteInput, PolicyDeleteResponse};
