mod delete;
mod list;

use assert_cmd::Command;
use assert_fs::TempDir;
use httpmock::MockServer;

use warden::utils::env::WardenEnvKey;

pub(crate) const API_KEY: &str = "da2-integration-key";

/// A warden command with an empty config home, a key from the environment,
/// and the endpoint pointed at `server`
pub(crate) fn warden(home: &TempDir, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("warden").unwrap();
    cmd.env(WardenEnvKey::ConfigHome.to_string(), home.path())
        .env(WardenEnvKey::Key.to_string(), API_KEY)
        .env(WardenEnvKey::Endpoint.to_string(), server.url("/graphql"))
        .env("NO_COLOR", "1");
    cmd
}
