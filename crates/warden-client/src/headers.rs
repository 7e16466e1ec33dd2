use http::{HeaderMap, HeaderValue};
use warden_config::Credential;

use crate::WardenClientError;

const CLIENT_NAME: &str = "warden";

/// Builds the headers sent with every request to the console.
///
/// The API key is marked sensitive so it never shows up in debug output.
pub fn build_policy_headers(
    credential: &Credential,
    client_version: &str,
) -> Result<HeaderMap, WardenClientError> {
    let mut headers = HeaderMap::new();

    headers.insert("x-warden-client-name", HeaderValue::from_static(CLIENT_NAME));
    tracing::debug!(?client_version);
    headers.insert(
        "x-warden-client-version",
        HeaderValue::from_str(client_version)?,
    );

    let mut api_key = HeaderValue::from_str(&credential.api_key)?;
    api_key.set_sensitive(true);
    headers.insert("x-api-key", api_key);

    Ok(headers)
}
