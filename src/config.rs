use crate::domain::issue::RepoSlug;
use crate::domain::ticket::{DEFAULT_ISSUE_TYPE, DEFAULT_PRIORITY, TicketReference};
use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_REPO_OWNER: &str = "Karthi-Knackforge";
pub const DEFAULT_REPO_NAME: &str = "cms-project";

const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const TARGET_REPO_OWNER: &str = "TARGET_REPO_OWNER";
const TARGET_REPO_NAME: &str = "TARGET_REPO_NAME";
const JIRA_ISSUE_KEY: &str = "JIRA_ISSUE_KEY";
const JIRA_SUMMARY: &str = "JIRA_SUMMARY";
const JIRA_DESCRIPTION: &str = "JIRA_DESCRIPTION";
const JIRA_ISSUE_URL: &str = "JIRA_ISSUE_URL";
const JIRA_PRIORITY: &str = "JIRA_PRIORITY";
const JIRA_ISSUE_TYPE: &str = "JIRA_ISSUE_TYPE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_token: String,
    pub repo: RepoSlug,
    pub ticket: TicketReference,
    pub api_base: String,
}

impl AppConfig {
    /// Builds the configuration from a variable lookup.
    ///
    /// Unset owner/name fall back to the default repository; a variable that
    /// is present but empty is reported as missing. Every missing mandatory
    /// name is collected before failing.
    pub fn from_lookup<F>(lookup: F, api_base: String) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(GITHUB_TOKEN);
        let owner = lookup(TARGET_REPO_OWNER).unwrap_or_else(|| DEFAULT_REPO_OWNER.to_string());
        let name = lookup(TARGET_REPO_NAME).unwrap_or_else(|| DEFAULT_REPO_NAME.to_string());
        let key = lookup(JIRA_ISSUE_KEY);

        let missing = [
            (GITHUB_TOKEN, token.as_deref()),
            (TARGET_REPO_OWNER, Some(owner.as_str())),
            (TARGET_REPO_NAME, Some(name.as_str())),
            (JIRA_ISSUE_KEY, key.as_deref()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none_or(str::is_empty))
        .map(|(var, _)| var.to_string())
        .collect::<Vec<_>>();

        if !missing.is_empty() {
            return Err(AppError::MissingConfig(missing));
        }

        let optional = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let mut ticket = TicketReference::new(key.unwrap_or_default());
        ticket.summary = optional(JIRA_SUMMARY, "");
        ticket.description = optional(JIRA_DESCRIPTION, "");
        ticket.url = optional(JIRA_ISSUE_URL, "");
        ticket.priority = optional(JIRA_PRIORITY, DEFAULT_PRIORITY);
        ticket.issue_type = optional(JIRA_ISSUE_TYPE, DEFAULT_ISSUE_TYPE);

        Ok(Self {
            github_token: token.unwrap_or_default(),
            repo: RepoSlug::new(owner, name),
            ticket,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}
