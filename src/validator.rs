//! Changelog validation for a single pull request.
use log::*;
use std::fmt;

use crate::{
    Result,
    changelog::{ChangelogEntry, ChangelogPattern},
    error::ChangelogGuardError,
    forge::{
        traits::Forge,
        types::{PullRequestMetadata, PullRequestRef},
    },
};

/// Label that exempts a pull request from the changelog requirement.
pub const DEFAULT_SKIP_LABEL: &str = "skip changelog";

/// Message shown to authors when no changelog entry is found.
pub const MISSING_CHANGELOG_MESSAGE: &str = "Add a changelog entry in a `<changelog></changelog>` closure in the PR description or add a `skip changelog` label if not applicable.";

/// Outcome of validating a pull request that could be fetched and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The skip label is present; the description was not inspected.
    Skipped { label: String },
    /// A changelog entry was found in the description.
    Passed { entry: ChangelogEntry },
    /// No changelog entry and no skip label.
    Missing,
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        !matches!(self, Verdict::Missing)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Skipped { label } => {
                write!(f, "`{label}` label present, exiting.")
            }
            Verdict::Passed { .. } => {
                write!(f, "Changelog entry validation successful")
            }
            Verdict::Missing => write!(f, "{MISSING_CHANGELOG_MESSAGE}"),
        }
    }
}

pub struct ChangelogValidator {
    forge: Box<dyn Forge>,
    pattern: ChangelogPattern,
    skip_label: String,
}

impl ChangelogValidator {
    pub fn new(forge: Box<dyn Forge>) -> Result<Self> {
        Ok(Self {
            forge,
            pattern: ChangelogPattern::new()?,
            skip_label: DEFAULT_SKIP_LABEL.to_string(),
        })
    }

    /// Replaces the label that exempts a pull request.
    pub fn with_skip_label(mut self, label: impl Into<String>) -> Self {
        self.skip_label = label.into();
        self
    }

    /// Fetches the pull request and evaluates it. Fetch and decode errors
    /// are returned as-is; they never turn into a verdict.
    pub async fn validate(&self, pr: PullRequestRef) -> Result<Verdict> {
        info!(
            "Validating that changelog entry is provided in the PR description..."
        );

        let remote = self.forge.remote_config();
        debug!(
            "checking pull request #{} in {}/{}",
            pr.number, remote.owner, remote.repo
        );

        let metadata = self.forge.get_pull_request(pr).await?;

        self.evaluate(&metadata)
    }

    /// Applies the skip label and changelog rules to fetched metadata.
    ///
    /// The label check runs first, so a skipped pull request does not need a
    /// description at all.
    pub fn evaluate(&self, metadata: &PullRequestMetadata) -> Result<Verdict> {
        if metadata.has_label(&self.skip_label) {
            let verdict = Verdict::Skipped {
                label: self.skip_label.clone(),
            };
            info!("{verdict}");
            return Ok(verdict);
        }

        let description = metadata.description.as_deref().ok_or(
            ChangelogGuardError::MissingDescription {
                pr_number: metadata.number,
            },
        )?;

        let verdict = match self.pattern.find(description) {
            Some(entry) => {
                debug!("found changelog entry: {}", entry.as_str());
                Verdict::Passed { entry }
            }
            None => Verdict::Missing,
        };

        if verdict.is_success() {
            info!("{verdict}");
        }

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{
        config::RemoteConfig,
        traits::MockForge,
        types::Label,
    };

    fn metadata(
        description: Option<&str>,
        labels: &[&str],
    ) -> PullRequestMetadata {
        PullRequestMetadata {
            number: 99,
            description: description.map(String::from),
            labels: labels.iter().map(|l| Label::from(*l)).collect(),
        }
    }

    fn validator_for(meta: PullRequestMetadata) -> ChangelogValidator {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_remote_config()
            .returning(RemoteConfig::default);
        mock_forge
            .expect_get_pull_request()
            .with(mockall::predicate::eq(PullRequestRef { number: 99 }))
            .times(1)
            .returning(move |_| Ok(meta.clone()));
        ChangelogValidator::new(Box::new(mock_forge)).unwrap()
    }

    fn offline_validator() -> ChangelogValidator {
        ChangelogValidator::new(Box::new(MockForge::new())).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn skip_label_passes_regardless_of_description() {
        let validator = validator_for(metadata(
            Some("no entry here"),
            &["bug", "skip changelog"],
        ));

        let verdict = validator.validate(99u64.into()).await.unwrap();

        assert_eq!(
            verdict,
            Verdict::Skipped {
                label: "skip changelog".into()
            }
        );
        assert!(verdict.is_success());
    }

    #[test_log::test(tokio::test)]
    async fn changelog_entry_passes() {
        let validator = validator_for(metadata(
            Some("Summary\n<changelog>Fixed a bug</changelog>"),
            &[],
        ));

        let verdict = validator.validate(99u64.into()).await.unwrap();

        assert_eq!(
            verdict,
            Verdict::Passed {
                entry: ChangelogEntry("Fixed a bug".into())
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn description_without_tags_is_missing() {
        let validator = validator_for(metadata(
            Some("Just a description"),
            &["enhancement"],
        ));

        let verdict = validator.validate(99u64.into()).await.unwrap();

        assert_eq!(verdict, Verdict::Missing);
        assert!(!verdict.is_success());
        assert_eq!(verdict.to_string(), MISSING_CHANGELOG_MESSAGE);
    }

    #[test_log::test(tokio::test)]
    async fn fetch_errors_propagate() {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_remote_config()
            .returning(RemoteConfig::default);
        mock_forge.expect_get_pull_request().returning(|_| {
            Err(ChangelogGuardError::NetworkError("connection refused".into()))
        });
        let validator = ChangelogValidator::new(Box::new(mock_forge)).unwrap();

        let result = validator.validate(1u64.into()).await;

        assert!(matches!(result, Err(ChangelogGuardError::NetworkError(_))));
    }

    #[test]
    fn empty_block_is_missing() {
        let verdict = offline_validator()
            .evaluate(&metadata(Some("<changelog></changelog>"), &[]))
            .unwrap();

        assert_eq!(verdict, Verdict::Missing);
    }

    #[test]
    fn missing_description_errors_before_pattern_check() {
        let result = offline_validator().evaluate(&metadata(None, &[]));

        assert!(matches!(
            result,
            Err(ChangelogGuardError::MissingDescription { pr_number: 99 })
        ));
    }

    #[test]
    fn skip_label_passes_without_description() {
        let verdict = offline_validator()
            .evaluate(&metadata(None, &["skip changelog"]))
            .unwrap();

        assert!(matches!(verdict, Verdict::Skipped { .. }));
    }

    #[test]
    fn similar_labels_do_not_skip() {
        let verdict = offline_validator()
            .evaluate(&metadata(
                Some("nothing"),
                &["Skip Changelog", "skip-changelog", "skip changelog "],
            ))
            .unwrap();

        assert_eq!(verdict, Verdict::Missing);
    }

    #[test]
    fn custom_skip_label_replaces_default() {
        let validator = offline_validator().with_skip_label("no-changelog");

        let custom = validator
            .evaluate(&metadata(Some("nothing"), &["no-changelog"]))
            .unwrap();
        let default = validator
            .evaluate(&metadata(Some("nothing"), &["skip changelog"]))
            .unwrap();

        assert_eq!(
            custom,
            Verdict::Skipped {
                label: "no-changelog".into()
            }
        );
        assert_eq!(default, Verdict::Missing);
    }

    #[test]
    fn skip_message_names_the_label() {
        let verdict = Verdict::Skipped {
            label: DEFAULT_SKIP_LABEL.into(),
        };
        assert_eq!(
            verdict.to_string(),
            "`skip changelog` label present, exiting."
        );
    }
}
