//! The issue tree model.
//!
//! This module defines [`Issue`], the sole domain entity of twig: a GitHub
//! issue together with its sub-issues, recursively forming a tree.

use serde::{Deserialize, Serialize};

/// A GitHub issue with its sub-issues forming a tree.
///
/// Values are assembled once by the fetcher (children appended in API
/// page-arrival order) and never mutated afterwards; the renderer only
/// borrows the finished tree.
///
/// The `state` field carries the raw API state string (e.g. `"OPEN"`,
/// `"CLOSED"`). Comparisons against it must be case-insensitive; use
/// [`is_closed`](Self::is_closed) rather than comparing directly.
///
/// # Examples
///
/// ```
/// use twig_issue::Issue;
///
/// let issue = Issue::new(42, "Fix the flaky test", "OPEN", "https://github.com/o/r/issues/42");
/// assert_eq!(issue.number, 42);
/// assert!(issue.sub_issues.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The issue number within its repository.
    pub number: u64,
    /// The issue title.
    pub title: String,
    /// The raw API state string (`"OPEN"`, `"CLOSED"`, ...).
    pub state: String,
    /// The issue's web URL.
    pub url: String,
    /// The issue body in Markdown; may be empty.
    pub body: String,
    /// Assignee login names, in API order.
    pub assignees: Vec<String>,
    /// Label names, in API order.
    pub labels: Vec<String>,
    /// Direct sub-issues, in API page-arrival order.
    pub sub_issues: Vec<Issue>,
}

impl Issue {
    /// Creates an issue with the given scalar fields and no assignees,
    /// labels, or sub-issues.
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_issue::Issue;
    ///
    /// let issue = Issue::new(7, "Title", "OPEN", "https://github.com/o/r/issues/7");
    /// assert_eq!(issue.title, "Title");
    /// ```
    #[must_use]
    pub fn new(
        number: u64,
        title: impl Into<String>,
        state: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            state: state.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the issue state equals `"closed"`, ignoring case.
    ///
    /// Any other state, including an empty string, counts as open.
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_issue::Issue;
    ///
    /// let mut issue = Issue::new(1, "t", "Closed", "u");
    /// assert!(issue.is_closed());
    ///
    /// issue.state = "OPEN".to_string();
    /// assert!(!issue.is_closed());
    /// ```
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.eq_ignore_ascii_case("closed")
    }

    /// Returns the number of issues in this tree, including this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_issue::Issue;
    ///
    /// let mut root = Issue::new(1, "root", "OPEN", "u");
    /// root.sub_issues.push(Issue::new(2, "child", "OPEN", "u"));
    /// assert_eq!(root.node_count(), 2);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .sub_issues
            .iter()
            .map(Issue::node_count)
            .sum::<usize>()
    }
}
