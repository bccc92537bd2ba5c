//! The fixed GraphQL query documents and their response model.
//!
//! Two documents cover the whole wire surface: a full fetch returning an
//! issue's metadata plus the first page of its sub-issues, and a
//! continuation fetch returning only the next sub-issue page for the same
//! issue. Splitting the two avoids re-fetching unchanged parent metadata on
//! every pagination round; in exchange the continuation document must keep
//! the same page size as the primary one.
//!
//! The response model collapses the root issue node and the sub-issue row
//! into one shared [`IssueFragment`] whose `subIssuesSummary` is optional -
//! the primary query requests it only on rows, where its `total` is the
//! child-count hint driving recursive expansion.

use serde::Deserialize;
use twig_issue::Issue;

/// Fetches an issue's scalar fields, assignees, labels, and the first page
/// of its sub-issues.
pub const ISSUE_TREE_QUERY: &str = "
query($owner: String!, $repo: String!, $number: Int!) {
  repository(owner: $owner, name: $repo) {
    issue(number: $number) {
      number title state url body
      assignees(first: 10) { nodes { login } }
      labels(first: 10) { nodes { name } }
      subIssues(first: 50) {
        nodes {
          number title state url body
          assignees(first: 10) { nodes { login } }
          labels(first: 10) { nodes { name } }
          subIssuesSummary { total }
        }
        pageInfo { hasNextPage endCursor }
      }
    }
  }
}
";

/// Fetches the next page of sub-issues for an issue, resuming from a cursor.
///
/// The page size must stay consistent with [`ISSUE_TREE_QUERY`].
pub const SUB_ISSUE_PAGE_QUERY: &str = "
query($owner: String!, $repo: String!, $number: Int!, $cursor: String!) {
  repository(owner: $owner, name: $repo) {
    issue(number: $number) {
      subIssues(first: 50, after: $cursor) {
        nodes {
          number title state url body
          assignees(first: 10) { nodes { login } }
          labels(first: 10) { nodes { name } }
          subIssuesSummary { total }
        }
        pageInfo { hasNextPage endCursor }
      }
    }
  }
}
";

/// The `data` object of either query: a repository wrapping one issue node.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub repository: RepositoryNode<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryNode<T> {
    pub issue: T,
}

/// The issue node returned by [`ISSUE_TREE_QUERY`]: the issue's own fields
/// plus the first page of its sub-issues.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssueNode {
    #[serde(flatten)]
    pub fragment: IssueFragment,
    pub sub_issues: SubIssuePage,
}

/// The issue node returned by [`SUB_ISSUE_PAGE_QUERY`]: sub-issues only.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageNode {
    pub sub_issues: SubIssuePage,
}

/// One page of a sub-issue connection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubIssuePage {
    #[serde(default)]
    pub nodes: Vec<IssueFragment>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub has_next_page: bool,
    /// Opaque resume position; null on an empty connection.
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// The per-issue shape shared by the root node and sub-issue rows.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssueFragment {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub url: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub assignees: Option<Connection<AssigneeNode>>,
    #[serde(default)]
    pub labels: Option<Connection<LabelNode>>,
    /// Only requested on sub-issue rows; `None` on the root node.
    #[serde(default)]
    pub sub_issues_summary: Option<SubIssuesSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssigneeNode {
    pub login: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LabelNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubIssuesSummary {
    pub total: u64,
}

impl IssueFragment {
    /// The child-count hint: how many sub-issues this row claims to have.
    ///
    /// Zero means the row can be materialized as a leaf without another
    /// round trip.
    pub(crate) fn child_count(&self) -> u64 {
        self.sub_issues_summary.as_ref().map_or(0, |s| s.total)
    }

    /// Converts the wire row into a domain [`Issue`] with no children,
    /// flattening assignee logins and label names in response order.
    pub(crate) fn into_issue(self) -> Issue {
        Issue {
            number: self.number,
            title: self.title,
            state: self.state,
            url: self.url,
            body: self.body,
            assignees: self
                .assignees
                .map(|c| c.nodes.into_iter().map(|a| a.login).collect())
                .unwrap_or_default(),
            labels: self
                .labels
                .map(|c| c.nodes.into_iter().map(|l| l.name).collect())
                .unwrap_or_default(),
            sub_issues: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_documents_share_the_page_size() {
        assert!(ISSUE_TREE_QUERY.contains("subIssues(first: 50)"));
        assert!(SUB_ISSUE_PAGE_QUERY.contains("subIssues(first: 50, after: $cursor)"));
    }

    #[test]
    fn only_the_continuation_document_takes_a_cursor() {
        assert!(!ISSUE_TREE_QUERY.contains("$cursor"));
        assert!(SUB_ISSUE_PAGE_QUERY.contains("$cursor: String!"));
    }

    #[test]
    fn issue_node_deserializes_fragment_and_page() {
        let node: IssueNode = serde_json::from_value(json!({
            "number": 1,
            "title": "Epic",
            "state": "OPEN",
            "url": "https://github.com/o/r/issues/1",
            "body": "overview",
            "assignees": { "nodes": [ { "login": "alice" }, { "login": "bob" } ] },
            "labels": { "nodes": [ { "name": "epic" } ] },
            "subIssues": {
                "nodes": [],
                "pageInfo": { "hasNextPage": false, "endCursor": null }
            }
        }))
        .expect("deserialize");

        assert_eq!(node.fragment.number, 1);
        assert_eq!(node.fragment.child_count(), 0);
        assert!(!node.sub_issues.page_info.has_next_page);

        let issue = node.fragment.into_issue();
        assert_eq!(issue.assignees, vec!["alice", "bob"]);
        assert_eq!(issue.labels, vec!["epic"]);
        assert!(issue.sub_issues.is_empty());
    }

    #[test]
    fn fragment_tolerates_null_connections() {
        let fragment: IssueFragment = serde_json::from_value(json!({
            "number": 2,
            "title": "Task",
            "state": "CLOSED",
            "url": "u",
            "body": "",
            "assignees": null,
            "labels": null,
        }))
        .expect("deserialize");

        let issue = fragment.into_issue();
        assert!(issue.assignees.is_empty());
        assert!(issue.labels.is_empty());
    }

    #[test]
    fn fragment_child_count_reads_summary() {
        let fragment: IssueFragment = serde_json::from_value(json!({
            "number": 3,
            "title": "Parent task",
            "state": "OPEN",
            "url": "u",
            "body": "",
            "assignees": { "nodes": [] },
            "labels": { "nodes": [] },
            "subIssuesSummary": { "total": 2 }
        }))
        .expect("deserialize");

        assert_eq!(fragment.child_count(), 2);
    }

    #[test]
    fn page_node_ignores_missing_fragment_fields() {
        // The continuation query returns no scalar fields on the issue node.
        let node: PageNode = serde_json::from_value(json!({
            "subIssues": {
                "nodes": [],
                "pageInfo": { "hasNextPage": true, "endCursor": "abc" }
            }
        }))
        .expect("deserialize");

        assert!(node.sub_issues.page_info.has_next_page);
        assert_eq!(node.sub_issues.page_info.end_cursor.as_deref(), Some("abc"));
    }
}
