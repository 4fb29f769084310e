use async_trait::async_trait;

use crate::domain::issue::{CreatedIssue, IssueDraft, IssueRef, RepoSlug};
use crate::error::AppResult;

#[async_trait]
pub trait IssueHostService: Send + Sync {
    /// Looks up an open or closed issue mentioning `ticket_key`.
    async fn find_existing(&self, repo: &RepoSlug, ticket_key: &str)
    -> AppResult<Option<IssueRef>>;

    async fn create_issue(&self, repo: &RepoSlug, draft: &IssueDraft) -> AppResult<CreatedIssue>;
}
