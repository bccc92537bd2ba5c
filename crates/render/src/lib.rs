//! Markdown rendering for twig issue trees.
//!
//! This crate turns a finished [`twig_issue::Issue`] tree into a Markdown
//! document with two sections:
//!
//! - an overview: a compact checkbox tree, one line per issue, drawn with
//!   box-drawing connectors like a directory listing
//! - detail sections: one heading per issue (nested by depth) with a
//!   metadata line and the issue body
//!
//! Rendering is a pure function of the tree: no I/O, no error paths, and
//! byte-identical output for the same input.
//!
//! # Examples
//!
//! ```
//! use twig_issue::Issue;
//! use twig_render::render_markdown;
//!
//! let mut epic = Issue::new(1, "Epic", "OPEN", "https://github.com/o/r/issues/1");
//! epic.sub_issues.push(Issue::new(2, "Task", "CLOSED", "https://github.com/o/r/issues/2"));
//!
//! let doc = render_markdown(&epic);
//! assert!(doc.contains("- [ ] #1 Epic"));
//! assert!(doc.contains("└── [x] #2 Task"));
//! ```

mod detail;
mod overview;

use twig_issue::Issue;

/// Renders an issue tree as a Markdown document.
///
/// The document is the overview tree under a `# Tree` heading, a horizontal
/// rule, then the nested detail sections.
#[must_use]
pub fn render_markdown(issue: &Issue) -> String {
    let mut out = String::new();

    out.push_str("# Tree\n\n");
    overview::render(&mut out, issue);
    out.push_str("\n---\n\n");

    detail::render(&mut out, issue);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An epic with one closed leaf and one open branch holding two leaves.
    fn example_tree() -> Issue {
        let mut epic = Issue::new(1, "Epic", "OPEN", "u1");
        epic.sub_issues.push(Issue::new(2, "Task A", "CLOSED", "u2"));

        let mut task_b = Issue::new(3, "Task B", "OPEN", "u3");
        task_b.sub_issues.push(Issue::new(4, "Sub1", "OPEN", "u4"));
        task_b.sub_issues.push(Issue::new(5, "Sub2", "CLOSED", "u5"));
        epic.sub_issues.push(task_b);

        epic
    }

    #[test]
    fn renders_the_example_tree_document() {
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
        assert_eq!(render_markdown(&example_tree()), expected);
    }

    #[test]
    fn rendering_is_idempotent() {
        let tree = example_tree();
        assert_eq!(render_markdown(&tree), render_markdown(&tree));
    }

    #[test]
    fn single_issue_document() {
        let issue = Issue::new(9, "Alone", "OPEN", "u");
        let expected = "\
# Tree

- [ ] #9 Alone

---

# #9 Alone
**Status:** open
";
        assert_eq!(render_markdown(&issue), expected);
    }
}
