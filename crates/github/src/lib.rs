//! GitHub GraphQL client for twig.
//!
//! This crate fetches a GitHub issue together with its full transitive tree
//! of sub-issues, assembling a [`twig_issue::Issue`] value ready for
//! rendering.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`GitHubClient`]: The production API client with optional authentication
//! - [`GraphQl`]: The transport seam the tree fetcher is generic over
//! - [`fetch_issue_tree`]: The recursive, paginated tree fetch
//! - [`queries`]: The two fixed GraphQL query documents
//! - [`Error`]: Error types for fetch operations
//!
//! # Fetch semantics
//!
//! The fetch is all-or-nothing: a failure on any node, any pagination round,
//! or any depth aborts the whole operation with no partial tree. Sub-issues
//! reporting a zero child count are materialized from the row already in
//! hand; only nodes claiming children cost another round trip. Recursion is
//! bounded at [`MAX_DEPTH`] as a guard against pathological trees, and all
//! calls are strictly sequential - one outstanding API request at a time.
//!
//! # Authentication
//!
//! The client supports both authenticated and unauthenticated access:
//!
//! - **Authenticated**: 5,000 requests/hour, access to private repos
//! - **Unauthenticated**: 60 requests/hour, public repos only
//!
//! Tokens are handled using [`secrecy::SecretString`] to prevent accidental
//! logging of sensitive credentials.
//!
//! # Examples
//!
//! ```no_run
//! use secrecy::SecretString;
//! use twig_github::{GitHubClient, fetch_issue_tree};
//!
//! # async fn example() -> twig_github::Result<()> {
//! let token = SecretString::from("ghp_your_token_here".to_string());
//! let client = GitHubClient::new(Some(token)).await?;
//!
//! let tree = fetch_issue_tree(&client, "rust-lang", "rust", 1).await?;
//! println!("fetched {} issues", tree.node_count());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod queries;
pub mod tree;

pub use client::{GitHubClient, GraphQl};
pub use error::{Error, Result};
pub use tree::{MAX_DEPTH, fetch_issue_tree};
