//! Runs a single changelog check from parsed CLI arguments.
use log::*;

use crate::{
    Result,
    cli::Args,
    forge::{github::Github, traits::Forge},
    validator::{ChangelogValidator, Verdict},
};

/// Validate the pull request named by `args` against GitHub.
pub async fn execute(args: &Args) -> Result<Verdict> {
    let remote = args.get_remote()?;
    let forge = Github::new(remote)?;
    run(Box::new(forge), args).await
}

/// Validate using an already constructed forge.
pub async fn run(forge: Box<dyn Forge>, args: &Args) -> Result<Verdict> {
    let validator =
        ChangelogValidator::new(forge)?.with_skip_label(&args.skip_label);

    let verdict = validator.validate(args.pull_request()).await?;

    if !verdict.is_success() {
        error!("{verdict}");
    }

    Ok(verdict)
}
