#![cfg_attr(not(test), deny(clippy::panic,))]
#![deny(missing_docs)]

//! Utilities for configuring the warden CLI tool.

mod config;
mod error;
mod profile;

pub use config::Config;
pub use error::ConfigProblem;

pub use profile::mask_key;
/// Utilities for saving, loading, and deleting configuration profiles.
pub use profile::{Credential, CredentialOrigin, LoadOpts, Profile};
