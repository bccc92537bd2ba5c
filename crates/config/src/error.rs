//! Error types for context-resolution operations.
//!
//! This module defines the error types that can occur while determining the
//! current repository and discovering an authentication token.

/// Errors that can occur during context resolution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid repository format.
    #[error("invalid repository format: {0}")]
    InvalidRepository(String),

    /// Could not determine the current repository.
    ///
    /// Raised when neither `GH_REPO` nor a usable `origin` git remote is
    /// available.
    #[error("could not determine repository: {reason}")]
    NoRepository {
        /// Why resolution failed.
        reason: String,
    },

    /// Failed to execute the `git` command.
    #[error("failed to run git: {0}")]
    GitCommand(#[source] std::io::Error),

    /// Failed to execute `gh auth token` command.
    #[error("failed to get GitHub token from gh CLI: {0}")]
    GhAuthFailed(#[source] std::io::Error),

    /// The `gh auth token` command returned an error.
    #[error("gh auth token failed with exit code {code:?}: {stderr}")]
    GhAuthError {
        /// The exit code, if available.
        code: Option<i32>,
        /// The stderr output.
        stderr: String,
    },
}

/// A specialized Result type for context-resolution operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
