//! Output renderers
//!
//! Two interchangeable formatters over the assembled forest: an indented
//! plain-text outline and a Slack message-with-attachments JSON document.
//! Renderers are pure; the caller prints the returned string.

pub mod flavor;
mod list;
mod slack;

pub use list::ListRenderer;
pub use slack::SlackRenderer;

use anyhow::Result;

use crate::domain::Forest;

/// Renders a task forest into the final output string
pub trait Render {
    fn render(&self, forest: &Forest) -> Result<String>;
}
