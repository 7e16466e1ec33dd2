/// all warden-client functionality for the "policy" commands in warden
pub mod policies;
