//! Plain-text outline renderer
//!
//! Each task prints as a blank line, a dash line with the issue key, its
//! browse URL and assignee, and an indented summary line. Children follow
//! their parent immediately, indented four more spaces per level.

use anyhow::Result;

use super::Render;
use crate::domain::{Forest, Subtask, SubtaskNode, Task};

const INDENT_WIDTH: usize = 4;

pub struct ListRenderer {
    base_url: String,
}

impl ListRenderer {
    pub fn new(api_host: &str) -> Self {
        Self {
            base_url: format!("https://{api_host}"),
        }
    }

    fn write_task(&self, out: &mut String, task: &Task, level: usize) {
        let indent = " ".repeat(INDENT_WIDTH * level);
        out.push('\n');
        out.push_str(&format!(
            "{indent}-   {id} {base}/browse/{id} ({assignee})\n",
            id = task.id,
            base = self.base_url,
            assignee = task.assignee,
        ));
        out.push_str(&format!("{indent}    {}\n", task.summary));

        for subtask in &task.subtasks {
            match &subtask.node {
                SubtaskNode::Present(child) => self.write_task(out, child, level + 1),
                SubtaskNode::Missing => self.write_missing(out, subtask, level + 1),
            }
        }
    }

    // A claimed child whose fetch failed still gets a line, as a stub.
    fn write_missing(&self, out: &mut String, subtask: &Subtask, level: usize) {
        let indent = " ".repeat(INDENT_WIDTH * level);
        out.push('\n');
        out.push_str(&format!("{indent}-   {} (not fetched)\n", subtask.id));
    }
}

impl Render for ListRenderer {
    fn render(&self, forest: &Forest) -> Result<String> {
        let mut out = String::new();
        for task in forest.roots() {
            self.write_task(&mut out, task, 0);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_forest, FetchedTask};

    fn renderer() -> ListRenderer {
        ListRenderer::new("tracker.example.com")
    }

    fn fetched(id: &str, children: &[&str]) -> FetchedTask {
        FetchedTask::new(id, "Ada Lovelace", format!("Summary of {id}"))
            .with_children(children.iter().copied())
    }

    #[test]
    fn single_root_format_is_exact() {
        let forest = build_forest(vec![FetchedTask::new("PROJ-1", "Ada Lovelace", "Do the thing")]);
        let out = renderer().render(&forest).unwrap();

        assert_eq!(
            out,
            "\n-   PROJ-1 https://tracker.example.com/browse/PROJ-1 (Ada Lovelace)\n    Do the thing\n"
        );
    }

    #[test]
    fn depth_first_order_with_four_space_steps() {
        let forest = build_forest(vec![
            fetched("R", &["S"]),
            fetched("S", &["T"]),
            fetched("T", &[]),
        ]);
        let out = renderer().render(&forest).unwrap();

        let r = out.find("\n-   R ").expect("R at depth 0");
        let s = out.find("\n    -   S ").expect("S at depth 1");
        let t = out.find("\n        -   T ").expect("T at depth 2");
        assert!(r < s && s < t, "expected R before S before T:\n{out}");
    }

    #[test]
    fn children_follow_their_parent() {
        let forest = build_forest(vec![
            fetched("A", &["B"]),
            fetched("C", &[]),
            fetched("B", &[]),
        ]);
        let out = renderer().render(&forest).unwrap();

        let a = out.find("\n-   A ").unwrap();
        let b = out.find("\n    -   B ").unwrap();
        let c = out.find("\n-   C ").unwrap();
        assert!(a < b && b < c, "B must sit between A and C:\n{out}");
    }

    #[test]
    fn missing_child_renders_a_stub_line() {
        let forest = build_forest(vec![fetched("A", &["X"])]);
        let out = renderer().render(&forest).unwrap();

        assert!(out.contains("\n    -   X (not fetched)\n"), "{out}");
    }

    #[test]
    fn empty_forest_renders_empty_string() {
        let forest = build_forest(Vec::new());
        assert_eq!(renderer().render(&forest).unwrap(), "");
    }
}
