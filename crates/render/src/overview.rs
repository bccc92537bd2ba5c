//! The checkbox tree overview.
//!
//! One line per issue: a checkbox reflecting the issue state, the issue
//! number, and the title. Descendants are connected with box-drawing
//! characters the way a directory tree is drawn.

use twig_issue::Issue;

/// Renders the overview section for a tree, root line included.
pub(crate) fn render(out: &mut String, root: &Issue) {
    out.push_str(&format!(
        "- {} #{} {}\n",
        checkbox(root),
        root.number,
        root.title
    ));
    render_children(out, root, "");
}

/// Renders the lines for an issue's descendants.
///
/// `prefix` carries the accumulated indent for this level: `"│   "` for
/// every ancestor that has further siblings below it, `"    "` for every
/// ancestor that was the last of its generation.
fn render_children(out: &mut String, issue: &Issue, prefix: &str) {
    for (i, sub) in issue.sub_issues.iter().enumerate() {
        let is_last = i == issue.sub_issues.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        out.push_str(&format!(
            "{prefix}{connector}{} #{} {}\n",
            checkbox(sub),
            sub.number,
            sub.title
        ));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(out, sub, &child_prefix);
    }
}

fn checkbox(issue: &Issue) -> &'static str {
    if issue.is_closed() { "[x]" } else { "[ ]" }
}
