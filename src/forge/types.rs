use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Identifies the pull request to validate.
pub struct PullRequestRef {
    pub number: u64,
}

impl From<u64> for PullRequestRef {
    fn from(number: u64) -> Self {
        Self { number }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A label applied to a pull request.
pub struct Label {
    pub name: String,
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Forge-agnostic view of the pull request fields the validator reads.
pub struct PullRequestMetadata {
    pub number: u64,
    pub description: Option<String>,
    pub labels: Vec<Label>,
}

impl PullRequestMetadata {
    /// Whether any label is named exactly `name`.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}

#[derive(Debug, Deserialize)]
pub struct GithubLabel {
    pub name: String,
}

/// Subset of the GitHub pulls API payload.
///
/// `body` and `labels` must be present but may be `null`.
#[derive(Debug, Deserialize)]
pub struct GithubPullRequest {
    pub number: u64,
    #[serde(deserialize_with = "required_nullable")]
    pub body: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub labels: Option<Vec<GithubLabel>>,
}

// Without `default`, serde reports an absent key as a missing field.
fn required_nullable<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl From<GithubPullRequest> for PullRequestMetadata {
    fn from(pr: GithubPullRequest) -> Self {
        let labels = pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|l| Label { name: l.name })
            .collect();

        Self {
            number: pr.number,
            description: pr.body,
            labels,
        }
    }
}
