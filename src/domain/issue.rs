use serde::{Deserialize, Serialize};

use crate::domain::body::render_issue_body;
use crate::domain::ticket::TicketReference;

pub const SYNC_LABEL: &str = "jira-sync";
pub const AGENT_LABEL: &str = "copilot-agent";
/// Account of the coding agent that picks up created issues.
pub const AGENT_ASSIGNEE: &str = "github";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Request payload for a new GitHub issue.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

impl IssueDraft {
    pub fn from_ticket(ticket: &TicketReference) -> Self {
        Self {
            title: ticket.issue_title(),
            body: render_issue_body(ticket),
            labels: vec![
                SYNC_LABEL.to_string(),
                AGENT_LABEL.to_string(),
                ticket.priority_label(),
            ],
            assignees: vec![AGENT_ASSIGNEE.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueRef {
    pub number: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
    pub labels: Vec<String>,
}
