#![cfg_attr(not(test), deny(clippy::panic,))]

pub mod cli;
pub mod command;
mod error;
mod options;
pub mod utils;

pub use command::WardenOutput;
pub use error::{WardenError, WardenErrorCode, WardenErrorMetadata, WardenErrorSuggestion, WardenResult};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
