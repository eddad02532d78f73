//! Slack message renderer
//!
//! Produces a single JSON document ready to post to a channel: message
//! metadata, the composed flavor text, and one attachment per task in the
//! same depth-first order as the plain-text outline. Nested tasks carry a
//! `(child of <parent>)` annotation in their title. The message is built
//! from serde structs, so the output is valid JSON by construction.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Serialize;

use super::Render;
use crate::domain::{Forest, IssueId, SubtaskNode, Task};

const USERNAME: &str = "Task Forest";
const ICON_EMOJI: &str = ":evergreen_tree:";

#[derive(Debug, Serialize)]
struct Message<'a> {
    username: &'static str,
    icon_emoji: &'static str,
    link_names: u8,
    unfurl_links: bool,
    text: &'a str,
    attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
struct Attachment {
    title: String,
    title_link: String,
    text: String,
}

pub struct SlackRenderer {
    base_url: String,
    mentions: HashMap<String, String>,
    text: String,
}

impl SlackRenderer {
    /// Creates a renderer; `text` is the pre-composed flavor message
    pub fn new(api_host: &str, mentions: HashMap<String, String>, text: String) -> Self {
        Self {
            base_url: format!("https://{api_host}"),
            mentions,
            text,
        }
    }

    /// Resolves an assignee to a mention, falling back to the raw name
    fn mention(&self, assignee: &str) -> String {
        match self.mentions.get(assignee) {
            Some(mention_id) => format!("<@{mention_id}>"),
            None => assignee.to_string(),
        }
    }

    fn push_task(&self, attachments: &mut Vec<Attachment>, task: &Task, parent: Option<&IssueId>) {
        let title = match parent {
            Some(parent_id) => format!("{} (child of {})", task.id, parent_id),
            None => task.id.to_string(),
        };

        attachments.push(Attachment {
            title,
            title_link: format!("{}/browse/{}", self.base_url, task.id),
            text: format!("{}\n{}", task.summary, self.mention(&task.assignee)),
        });

        // Missing children have nothing to post; only fetched tasks attach.
        for subtask in &task.subtasks {
            if let SubtaskNode::Present(child) = &subtask.node {
                self.push_task(attachments, child, Some(&task.id));
            }
        }
    }
}

impl Render for SlackRenderer {
    fn render(&self, forest: &Forest) -> Result<String> {
        let mut attachments = Vec::new();
        for task in forest.roots() {
            self.push_task(&mut attachments, task, None);
        }

        let message = Message {
            username: USERNAME,
            icon_emoji: ICON_EMOJI,
            link_names: 1,
            unfurl_links: false,
            text: &self.text,
            attachments,
        };

        serde_json::to_string(&message).context("Failed to serialize Slack message")
    }
}
