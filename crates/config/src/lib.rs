//! Repository context and token discovery for the twig application.
//!
//! This crate answers two questions before any API call is made: *which
//! repository are we talking about*, and *which token, if any, should be
//! used to talk to it*.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`repository`]: The [`Repository`] type and current-repository resolution
//! - [`auth`]: GitHub token discovery
//! - [`error`]: Error types for context-resolution operations
//!
//! # Repository Resolution
//!
//! The current repository is resolved from the following sources, in order:
//!
//! 1. The `GH_REPO` environment variable (`"owner/repo"`, the GitHub CLI
//!    convention)
//! 2. The `origin` remote of the enclosing git repository
//!    (`git remote get-url origin`)
//!
//! Failure to resolve a repository is fatal; there is no default.
//!
//! # Token Resolution
//!
//! GitHub tokens are resolved in the following order:
//!
//! 1. `GH_TOKEN` environment variable
//! 2. `GITHUB_TOKEN` environment variable
//! 3. `gh auth token` command (GitHub CLI)
//! 4. Unauthenticated (rate-limited)
//!
//! # Examples
//!
//! ```no_run
//! use twig_config::Repository;
//!
//! # async fn example() -> twig_config::Result<()> {
//! let repo = Repository::current().await?;
//! println!("operating on {}", repo.full_name());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod repository;

pub use error::{ConfigError, Result};
pub use repository::Repository;
