use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, USER_AGENT},
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::issue::{CreatedIssue, IssueDraft, IssueRef, RepoSlug};
use crate::error::{AppError, AppResult};
use crate::services::IssueHostService;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_base: String, token: String) -> Self {
        Self {
            http: Client::new(),
            api_base,
            token,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(API_VERSION_HEADER, API_VERSION)
            .header(USER_AGENT, CLIENT_USER_AGENT)
    }

    fn search_endpoint(&self) -> String {
        format!("{}/search/issues", self.api_base)
    }

    fn issues_endpoint(&self, repo: &RepoSlug) -> String {
        format!("{}/repos/{}/{}/issues", self.api_base, repo.owner, repo.name)
    }
}

pub fn search_query(repo: &RepoSlug, ticket_key: &str) -> String {
    format!("repo:{repo} {ticket_key} in:title,body type:issue")
}

#[async_trait]
impl IssueHostService for GitHubClient {
    async fn find_existing(
        &self,
        repo: &RepoSlug,
        ticket_key: &str,
    ) -> AppResult<Option<IssueRef>> {
        let query = search_query(repo, ticket_key);
        debug!(%query, "searching issues");

        let response = self
            .authorized(self.http.get(self.search_endpoint()))
            .query(&[("q", query.as_str()), ("per_page", "1")])
            .send()
            .await?
            .error_for_status()?;

        let payload: SearchResponse = response.json().await?;
        if payload.total_count == 0 {
            return Ok(None);
        }
        let first = payload.items.into_iter().next();
        if first.is_none() {
            warn!(
                total_count = payload.total_count,
                "search reported matches but returned no items"
            );
        }
        Ok(first)
    }

    async fn create_issue(&self, repo: &RepoSlug, draft: &IssueDraft) -> AppResult<CreatedIssue> {
        let response = self
            .authorized(self.http.post(self.issues_endpoint(repo)))
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::CreateFailed { status, body });
        }

        let payload: CreateIssueResponse = response.json().await?;
        debug!(number = payload.number, "issue created");

        Ok(CreatedIssue {
            number: payload.number,
            html_url: payload.html_url,
            labels: payload.labels.into_iter().map(|label| label.name).collect(),
        })
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    total_count: u64,
    #[serde(default)]
    items: Vec<IssueRef>,
}

#[derive(Deserialize)]
struct CreateIssueResponse {
    number: u64,
    html_url: String,
    #[serde(default)]
    labels: Vec<LabelResponse>,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
}
