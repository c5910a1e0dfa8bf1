//! Read-only interface to the forge hosting the pull request.
//!
//! Provides token-based authentication and pull request lookup through a
//! common trait so the validator can be exercised without a network.

/// Configuration and authentication for forge platforms.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Common traits for forge platform abstraction.
pub mod traits;

/// Shared data types for pull requests and labels.
pub mod types;
