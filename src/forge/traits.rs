//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    Result,
    forge::{
        config::RemoteConfig,
        types::{PullRequestMetadata, PullRequestRef},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    async fn get_pull_request(
        &self,
        pr: PullRequestRef,
    ) -> Result<PullRequestMetadata>;
}
