//! Configuration for forge API connections.
use secrecy::SecretString;

/// Default GitHub REST API base url.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Media type pinning the GitHub REST API version.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Remote repository connection configuration for authenticating and
/// reading pull requests.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API base url (e.g., "https://api.github.com").
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Username sent in the authorization header.
    pub username: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            username: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
