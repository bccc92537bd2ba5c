//! The recursive, paginated issue tree fetch.
//!
//! [`fetch_issue_tree`] walks an issue and its transitive sub-issues,
//! assembling a [`twig_issue::Issue`] tree. Per node the walk is:
//!
//! 1. Run the primary query: issue fields plus the first sub-issue page.
//! 2. Follow pagination cursors until the connection reports no next page,
//!    appending rows in arrival order. The accumulated row list is local to
//!    the node and never observable until pagination completes.
//! 3. For every accumulated row, either recurse (the row's child-count hint
//!    is nonzero) or materialize a leaf from the row itself (hint is zero,
//!    saving a round trip - the common case in wide trees).
//!
//! Any failure aborts the entire fetch; see [`crate::error`] for the
//! wrapping rules. Calls are strictly sequential, including across sibling
//! subtrees, to keep rate-limit and error-ordering behavior predictable.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, instrument};
use twig_issue::Issue;

use crate::client::GraphQl;
use crate::error::{Error, Result};
use crate::queries::{self, Envelope, IssueNode, PageNode};

/// Maximum recursion depth for sub-issue expansion.
///
/// Sub-issue graphs are expected to be shallow trees; the bound exists so
/// that malformed or cyclic data fails fast instead of recursing without
/// limit. It also caps the total number of API calls a single fetch can
/// issue.
pub const MAX_DEPTH: u8 = 8;

/// Fetches an issue and its full transitive tree of sub-issues.
///
/// Children appear in API page-arrival order at every level. The fetch is
/// all-or-nothing: on error no partial tree is returned.
///
/// # Errors
///
/// - [`Error::FetchIssue`] / [`Error::FetchPage`]: a query failed; the
///   variant names the issue the query was for and carries the cause.
/// - [`Error::DepthExceeded`]: the tree is deeper than [`MAX_DEPTH`].
///
/// # Examples
///
/// ```no_run
/// use twig_github::{GitHubClient, fetch_issue_tree};
///
/// # async fn example() -> twig_github::Result<()> {
/// let client = GitHubClient::new(None).await?;
/// let tree = fetch_issue_tree(&client, "rust-lang", "rust", 1).await?;
/// for child in &tree.sub_issues {
///     println!("#{} {}", child.number, child.title);
/// }
/// # Ok(())
/// # }
/// ```
#[instrument(skip(client))]
pub async fn fetch_issue_tree<C: GraphQl>(
    client: &C,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<Issue> {
    fetch_node(client, owner, repo, number, 0).await
}

/// Fetches one issue node at the given recursion depth, expanding its
/// sub-issues.
async fn fetch_node<C: GraphQl>(
    client: &C,
    owner: &str,
    repo: &str,
    number: u64,
    depth: u8,
) -> Result<Issue> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded { max: MAX_DEPTH });
    }

    debug!(number, depth, "fetching issue");
    let variables = json!({ "owner": owner, "repo": repo, "number": number });
    let node: IssueNode = fetch_issue_data(client, queries::ISSUE_TREE_QUERY, variables)
        .await
        .map_err(|e| Error::FetchIssue {
            number,
            source: Box::new(e),
        })?;

    let mut issue = node.fragment.into_issue();
    let mut rows = node.sub_issues.nodes;
    let mut page_info = node.sub_issues.page_info;

    while page_info.has_next_page {
        let cursor = page_info.end_cursor.unwrap_or_default();
        debug!(number, %cursor, "fetching next sub-issue page");
        let variables = json!({
            "owner": owner,
            "repo": repo,
            "number": number,
            "cursor": cursor,
        });
        let page: PageNode = fetch_issue_data(client, queries::SUB_ISSUE_PAGE_QUERY, variables)
            .await
            .map_err(|e| Error::FetchPage {
                number,
                source: Box::new(e),
            })?;
        rows.extend(page.sub_issues.nodes);
        page_info = page.sub_issues.page_info;
    }

    for row in rows {
        let child = if row.child_count() > 0 {
            // Errors from the recursive call propagate unmodified; the
            // failing node has already annotated them with its own number.
            Box::pin(fetch_node(client, owner, repo, row.number, depth + 1)).await?
        } else {
            row.into_issue()
        };
        issue.sub_issues.push(child);
    }

    Ok(issue)
}

/// Runs a query and deserializes the `repository.issue` node out of its
/// `data` object.
async fn fetch_issue_data<C: GraphQl, T: DeserializeOwned>(
    client: &C,
    query: &str,
    variables: Value,
) -> Result<T> {
    let data = client.execute(query, variables).await?;
    let envelope: Envelope<T> = serde_json::from_value(data)?;
    Ok(envelope.repository.issue)
}
