//! Shared domain types for the twig application.
//!
//! This crate defines the issue tree model produced by the fetcher and
//! consumed by the renderer. It has no knowledge of the GitHub API wire
//! format; conversion from API responses lives in `twig-github`.
//!
//! # Overview
//!
//! - [`Issue`]: A GitHub issue with its sub-issues, forming a tree
//!
//! # Examples
//!
//! Building a small tree by hand:
//!
//! ```
//! use twig_issue::Issue;
//!
//! let mut epic = Issue::new(1, "Epic", "OPEN", "https://github.com/o/r/issues/1");
//! epic.sub_issues.push(Issue::new(2, "Task", "CLOSED", "https://github.com/o/r/issues/2"));
//!
//! assert!(!epic.is_closed());
//! assert!(epic.sub_issues[0].is_closed());
//! assert_eq!(epic.node_count(), 2);
//! ```

pub mod issue;

pub use issue::Issue;
