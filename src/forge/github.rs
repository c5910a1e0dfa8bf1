//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    Result,
    forge::{
        config::{GITHUB_ACCEPT, RemoteConfig},
        traits::Forge,
        types::{GithubPullRequest, PullRequestMetadata, PullRequestRef},
    },
};

const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub forge implementation using reqwest against the v3 REST API.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
}

impl Github {
    /// Create GitHub client with the username/token authorization header and
    /// a pinned API version.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_url = repo_base_url(&config)?;
        let headers = default_headers(&config)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    fn pull_url(&self, pr: PullRequestRef) -> Result<Url> {
        Ok(self.base_url.join(&format!("pulls/{}", pr.number))?)
    }
}

/// Headers sent with every request: the pinned API version and the
/// `<username> <token>` authorization value.
fn default_headers(config: &RemoteConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.append(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

    let mut auth_value = HeaderValue::from_str(
        format!("{} {}", config.username, config.token.expose_secret())
            .as_str(),
    )?;
    auth_value.set_sensitive(true);

    headers.append(AUTHORIZATION, auth_value);

    Ok(headers)
}

/// Builds `{api_url}/repos/{owner}/{repo}/` with a trailing slash so that
/// relative joins append instead of replacing the last segment.
fn repo_base_url(config: &RemoteConfig) -> Result<Url> {
    let api_url = config.api_url.trim_end_matches('/');
    let raw = format!("{}/repos/{}/{}/", api_url, config.owner, config.repo);
    Ok(Url::parse(&raw)?)
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_pull_request(
        &self,
        pr: PullRequestRef,
    ) -> Result<PullRequestMetadata> {
        let url = self.pull_url(pr)?;

        debug!("fetching pull request: {url}");

        let request = self.client.get(url).build()?;
        let response = self.client.execute(request).await?;
        let result = response.error_for_status()?;
        let content = result.text().await?;
        let pull: GithubPullRequest = serde_json::from_str(&content)?;

        debug!(
            "pull request #{} has {} label(s)",
            pull.number,
            pull.labels.as_ref().map(Vec::len).unwrap_or_default()
        );

        Ok(pull.into())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn config() -> RemoteConfig {
        RemoteConfig {
            owner: "octo-org".into(),
            repo: "octo-repo".into(),
            username: "octocat".into(),
            token: SecretString::from("abc123".to_string()),
            ..RemoteConfig::default()
        }
    }

    #[test]
    fn builds_pull_request_url() {
        let github = Github::new(config()).unwrap();
        let url = github.pull_url(PullRequestRef { number: 1234 }).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octo-org/octo-repo/pulls/1234"
        );
    }

    #[test]
    fn tolerates_trailing_slash_in_api_url() {
        let github = Github::new(RemoteConfig {
            api_url: "https://ghe.example.com/api/v3/".into(),
            ..config()
        })
        .unwrap();
        let url = github.pull_url(7u64.into()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/octo-org/octo-repo/pulls/7"
        );
    }

    #[test]
    fn rejects_token_with_control_characters() {
        let result = Github::new(RemoteConfig {
            token: SecretString::from("abc\n123".to_string()),
            ..config()
        });

        assert!(result.is_err());
    }

    #[test]
    fn sends_api_version_and_credentials() {
        let headers = default_headers(&config()).unwrap();

        assert_eq!(
            headers.get(ACCEPT).unwrap(),
            "application/vnd.github.v3+json"
        );
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "octocat abc123");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn exposes_remote_config() {
        let github = Github::new(config()).unwrap();
        assert_eq!(github.remote_config().repo, "octo-repo");
    }
}
