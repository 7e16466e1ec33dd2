mod endpoint;
mod policy;
mod profile;

pub use endpoint::EndpointOpt;
pub use policy::{PolicyFilterOpt, PolicyPageOpt, PolicySortOpt};
pub use profile::{DEFAULT_PROFILE, ProfileOpt};
