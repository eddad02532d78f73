//! HTTP fetcher for the tracker REST API
//!
//! Issues are fetched one request per ID from
//! `https://<api_host>/rest/api/latest/issue/<id>` with a Basic-auth header
//! on every request. A record is only a valid task when the response carries
//! an issue key and a non-empty assignee display name; anything less is
//! reported as incomplete rather than an error.

use async_trait::async_trait;
use serde::Deserialize;

use super::client::{FetchError, FetchOutcome, TaskFetcher};
use crate::config::Config;
use crate::domain::{FetchedTask, IssueId};

const ISSUE_PATH: &str = "/rest/api/latest/issue";

/// Fetches issues over HTTPS with Basic auth
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
    auth_user: String,
    auth_pass: String,
}

impl HttpFetcher {
    /// Creates a fetcher for the configured tracker host
    pub fn new(config: &Config) -> Self {
        Self::with_base(
            format!("https://{}", config.api_host),
            &config.auth_user,
            &config.auth_pass,
        )
    }

    fn with_base(base_url: String, auth_user: &str, auth_pass: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            auth_user: auth_user.to_string(),
            auth_pass: auth_pass.to_string(),
        }
    }

    async fn get_issue(&self, id: &IssueId) -> Result<Option<FetchedTask>, FetchError> {
        let url = format!("{}{}/{}", self.base_url, ISSUE_PATH, id);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.auth_user, Some(&self.auth_pass))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let issue: IssueResponse = serde_json::from_str(&body)?;
        Ok(issue.into_task())
    }
}

#[async_trait]
impl TaskFetcher for HttpFetcher {
    async fn fetch(&self, id: &IssueId) -> FetchOutcome {
        match self.get_issue(id).await {
            Ok(Some(task)) => FetchOutcome::Fetched(task),
            Ok(None) => FetchOutcome::Incomplete,
            Err(error) => FetchOutcome::Failed(error),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    key: Option<String>,
    fields: Option<IssueFields>,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    assignee: Option<Assignee>,
    summary: Option<String>,
    #[serde(default)]
    subtasks: Vec<SubtaskRef>,
}

#[derive(Debug, Deserialize)]
struct Assignee {
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubtaskRef {
    key: String,
}

impl IssueResponse {
    /// Shapes the raw response into a task record, or `None` when required
    /// fields are absent
    fn into_task(self) -> Option<FetchedTask> {
        let key = self.key?;
        let fields = self.fields?;
        let assignee = fields
            .assignee
            .and_then(|a| a.display_name)
            .filter(|name| !name.is_empty())?;

        Some(FetchedTask {
            id: IssueId::from(key),
            assignee,
            summary: fields.summary.unwrap_or_default(),
            child_ids: fields
                .subtasks
                .into_iter()
                .map(|subtask| IssueId::from(subtask.key))
                .collect(),
        })
    }
}
