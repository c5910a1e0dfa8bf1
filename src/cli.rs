//! CLI argument parsing and forge configuration.
use clap::Parser;
use reqwest::Url;
use secrecy::SecretString;
use std::env;

use crate::{
    Result,
    error::ChangelogGuardError,
    forge::{
        config::{DEFAULT_API_URL, RemoteConfig},
        types::PullRequestRef,
    },
    validator::DEFAULT_SKIP_LABEL,
};

/// Fails unless the pull request description contains a
/// `<changelog>...</changelog>` entry or the pull request carries the skip
/// label.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Pull request number to validate.
    pub pr_number: u64,

    /// GitHub username sent in the authorization header.
    pub github_username: String,

    /// GitHub access token. Falls back to GITHUB_TOKEN env var when empty.
    pub github_token: String,

    #[arg(long, default_value = "")]
    /// Repository as owner/repo. Falls back to GITHUB_REPOSITORY env var.
    pub repo: String,

    #[arg(long, default_value = "")]
    /// API base url. Falls back to GITHUB_API_URL env var, then
    /// https://api.github.com.
    pub api_url: String,

    #[arg(long, default_value = DEFAULT_SKIP_LABEL)]
    /// Label that exempts a pull request from the check.
    pub skip_label: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    pub fn pull_request(&self) -> PullRequestRef {
        PullRequestRef {
            number: self.pr_number,
        }
    }

    /// Configure remote repository connection from CLI arguments and
    /// environment fallbacks.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(ChangelogGuardError::invalid_args(
                "must set github token",
            ));
        }

        let mut repo = self.repo.clone();

        if repo.is_empty()
            && let Ok(env_var_repo) = env::var("GITHUB_REPOSITORY")
        {
            repo = env_var_repo;
        }

        let (owner, repo) = parse_repo_slug(&repo)?;

        let mut api_url = self.api_url.clone();

        if api_url.is_empty()
            && let Ok(env_var_api_url) = env::var("GITHUB_API_URL")
        {
            api_url = env_var_api_url;
        }

        if api_url.is_empty() {
            api_url = DEFAULT_API_URL.to_string();
        }

        validate_scheme(&api_url)?;

        Ok(RemoteConfig {
            api_url,
            owner,
            repo,
            username: self.github_username.clone(),
            token: SecretString::from(token),
        })
    }
}

/// Split an `owner/repo` slug into its two parts.
fn parse_repo_slug(slug: &str) -> Result<(String, String)> {
    match slug.split_once('/') {
        Some((owner, repo))
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
        {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ChangelogGuardError::invalid_args(format!(
            "repository must be in owner/repo form, got: {slug:?}"
        ))),
    }
}

/// Validate api url uses HTTP or HTTPS scheme.
fn validate_scheme(api_url: &str) -> Result<()> {
    let parsed = Url::parse(api_url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ChangelogGuardError::invalid_args(
            "only http and https schemes are supported for api urls",
        )),
    }
}
