//! Integration tests for the fetch-then-render pipeline.
//!
//! Drives `twig_github::fetch_issue_tree` against a scripted transport and
//! feeds the resulting tree straight into `twig_render::render_markdown`,
//! checking the final document end to end.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Value, json};
use twig_github::{GraphQl, Result, fetch_issue_tree, queries};
use twig_render::render_markdown;

/// A transport answering from a fixed `(issue number, cursor)` script.
struct ScriptedTransport {
    responses: HashMap<(u64, Option<String>), Value>,
}

impl ScriptedTransport {
    fn new(script: Vec<((u64, Option<&str>), Value)>) -> Self {
        Self {
            responses: script
                .into_iter()
                .map(|((number, cursor), response)| {
                    ((number, cursor.map(str::to_string)), response)
                })
                .collect(),
        }
    }
}

#[async_trait]
impl GraphQl for ScriptedTransport {
    async fn execute(&self, _query: &str, variables: Value) -> Result<Value> {
        let number = variables["number"].as_u64().expect("number variable");
        let cursor = variables
            .get("cursor")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(self
            .responses
            .get(&(number, cursor))
            .unwrap_or_else(|| panic!("unscripted request for #{number}"))
            .clone())
    }
}

fn issue_fields(number: u64, title: &str, state: &str, body: &str) -> Value {
    json!({
        "number": number,
        "title": title,
        "state": state,
        "url": format!("https://github.com/acme/widgets/issues/{number}"),
        "body": body,
        "assignees": { "nodes": [] },
        "labels": { "nodes": [] },
    })
}

fn with_sub_issues(mut fields: Value, rows: Vec<Value>) -> Value {
    fields["subIssues"] = json!({
        "nodes": rows,
        "pageInfo": { "hasNextPage": false, "endCursor": null }
    });
    json!({ "repository": { "issue": fields } })
}

fn summary_row(mut fields: Value, children: u64) -> Value {
    fields["subIssuesSummary"] = json!({ "total": children });
    fields
}

#[tokio::test]
async fn epic_with_nested_tasks_renders_the_full_document() {
    let transport = ScriptedTransport::new(vec![
        (
            (1, None),
            with_sub_issues(
                issue_fields(1, "Epic", "OPEN", "Track the whole effort."),
                vec![
                    summary_row(issue_fields(2, "Task A", "CLOSED", ""), 0),
                    summary_row(issue_fields(3, "Task B", "OPEN", ""), 2),
                ],
            ),
        ),
        (
            (3, None),
            with_sub_issues(
                issue_fields(3, "Task B", "OPEN", ""),
                vec![
                    summary_row(issue_fields(4, "Sub1", "OPEN", ""), 0),
                    summary_row(issue_fields(5, "Sub2", "CLOSED", ""), 0),
                ],
            ),
        ),
    ]);

    let tree = fetch_issue_tree(&transport, "acme", "widgets", 1)
        .await
        .expect("fetch");
    assert_eq!(tree.node_count(), 5);

    let expected = "\
# Tree

- [ ] #1 Epic
├── [x] #2 Task A
└── [ ] #3 Task B
    ├── [ ] #4 Sub1
    └── [x] #5 Sub2

---

# #1 Epic
**Status:** open | **Sub-issues:** #2, #3

Track the whole effort.

## #2 Task A
**Status:** closed | **Parent:** #1

---

## #3 Task B
**Status:** open | **Parent:** #1 | **Sub-issues:** #4, #5

### #4 Sub1
**Status:** open | **Parent:** #3

---

### #5 Sub2
**Status:** closed | **Parent:** #3
";
    assert_eq!(render_markdown(&tree), expected);
}

#[tokio::test]
async fn fetch_failure_produces_no_document() {
    struct FailingTransport;

    #[async_trait]
    impl GraphQl for FailingTransport {
        async fn execute(&self, _query: &str, variables: Value) -> Result<Value> {
            let number = variables["number"].as_u64().expect("number variable");
            if number == 1 {
                Ok(with_sub_issues(
                    issue_fields(1, "Epic", "OPEN", ""),
                    vec![summary_row(issue_fields(3, "Task B", "OPEN", ""), 1)],
                ))
            } else {
                Err(twig_github::Error::Graph {
                    messages: vec!["Could not resolve to an Issue".to_string()],
                })
            }
        }
    }

    let err = fetch_issue_tree(&FailingTransport, "acme", "widgets", 1)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("fetching issue #3:"));
}

#[tokio::test]
async fn query_documents_are_exported() {
    // The wire contract is part of the public surface; sanity-check the
    // documents a consumer would see.
    assert!(queries::ISSUE_TREE_QUERY.contains("subIssuesSummary { total }"));
    assert!(queries::SUB_ISSUE_PAGE_QUERY.contains("after: $cursor"));
}
