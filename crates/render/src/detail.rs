//! The per-issue detail sections.
//!
//! Each issue becomes a heading nested by depth, a metadata line, and the
//! issue body. Siblings are separated by horizontal rules.

use twig_issue::Issue;

/// Renders the detail section for a tree, starting at heading level 1.
pub(crate) fn render(out: &mut String, root: &Issue) {
    render_issue(out, root, None, 1);
}

fn render_issue(out: &mut String, issue: &Issue, parent: Option<u64>, depth: usize) {
    out.push_str(&format!(
        "{} #{} {}\n",
        "#".repeat(depth),
        issue.number,
        issue.title
    ));

    // Metadata segments in fixed order; empty ones are omitted, except the
    // status which is always present.
    let mut meta = vec![format!("**Status:** {}", issue.state.to_lowercase())];
    if !issue.assignees.is_empty() {
        let mentions: Vec<String> = issue.assignees.iter().map(|a| format!("@{a}")).collect();
        meta.push(format!("**Assignees:** {}", mentions.join(", ")));
    }
    if !issue.labels.is_empty() {
        meta.push(format!("**Labels:** {}", issue.labels.join(", ")));
    }
    if let Some(parent) = parent {
        meta.push(format!("**Parent:** #{parent}"));
    }
    if !issue.sub_issues.is_empty() {
        let refs: Vec<String> = issue
            .sub_issues
            .iter()
            .map(|sub| format!("#{}", sub.number))
            .collect();
        meta.push(format!("**Sub-issues:** {}", refs.join(", ")));
    }
    out.push_str(&meta.join(" | "));
    out.push('\n');

    let body = issue.body.trim();
    if !body.is_empty() {
        out.push_str(&format!("\n{body}\n"));
    }

    for (i, sub) in issue.sub_issues.iter().enumerate() {
        out.push('\n');
        if i > 0 {
            out.push_str("---\n\n");
        }
        render_issue(out, sub, Some(issue.number), depth + 1);
    }
}
