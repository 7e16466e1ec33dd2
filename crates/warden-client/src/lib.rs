// #![deny(missing_docs)]

//! GraphQL client for the policy area of a compliance console.

mod client;
mod error;

/// Module related to constructing request headers.
pub mod headers;

/// Operations that can be sent to the console
pub mod operations;

/// Types shared between operations and their callers
pub mod shared;

pub use client::{PolicyClient, PolicyGraphQLService};
pub use error::WardenClientError;
