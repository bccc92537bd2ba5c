//! Error types for GitHub fetch operations.
//!
//! Every error here is fatal to the whole tree fetch: there is no retry,
//! degradation, or partial-result mode. The only decoration applied on the
//! way up is the issue number of the query that failed; errors from
//! recursive calls pass through unmodified.

/// Errors that can occur while fetching an issue tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while calling the GitHub API.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The GraphQL response carried an `errors` array.
    ///
    /// GitHub reports schema and resolution problems (unknown issue number,
    /// missing repository, insufficient scopes) this way, with HTTP 200.
    #[error("GraphQL query failed: {}", messages.join("; "))]
    Graph {
        /// The error messages, in response order.
        messages: Vec<String>,
    },

    /// The response `data` did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// The sub-issue tree is deeper than the fixed recursion bound.
    ///
    /// This guards against pathological or cyclic data; the API is assumed
    /// to return a tree, but nothing here verifies that.
    #[error("maximum sub-issue depth {max} exceeded")]
    DepthExceeded {
        /// The configured depth bound.
        max: u8,
    },

    /// The primary query for an issue failed.
    #[error("fetching issue #{number}: {source}")]
    FetchIssue {
        /// The issue the query was for.
        number: u64,
        /// The underlying failure.
        source: Box<Error>,
    },

    /// A sub-issue continuation query failed mid-pagination.
    #[error("fetching sub-issues page for #{number}: {source}")]
    FetchPage {
        /// The issue whose sub-issues were being paged.
        number: u64,
        /// The underlying failure.
        source: Box<Error>,
    },
}

/// A specialized Result type for GitHub fetch operations.
pub type Result<T> = std::result::Result<T, Error>;
