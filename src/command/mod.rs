mod config;
mod explain;
pub(crate) mod output;
mod policy;

pub use config::Config;
pub use explain::Explain;
pub use output::WardenOutput;
pub use policy::Policy;
