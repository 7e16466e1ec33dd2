/// "policy list" command execution
pub mod list;

/// "policy delete" command execution
pub mod delete;
