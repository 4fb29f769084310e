use std::io::Write;

use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::issue::{AGENT_ASSIGNEE, CreatedIssue, IssueDraft, IssueRef};
use crate::error::AppResult;
use crate::report::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Existing(IssueRef),
    Created { issue: CreatedIssue, assignee: String },
}

/// Searches for an issue mentioning the ticket key and creates one if none
/// turns up.
///
/// A failed search is reported and treated as "nothing found". The search and
/// the create are separate calls, so two runs for the same ticket racing each
/// other can both create an issue.
pub async fn sync_ticket<W: Write>(
    ctx: &AppContext,
    reporter: &mut Reporter<W>,
) -> AppResult<SyncOutcome> {
    let repo = &ctx.config.repo;
    let ticket = &ctx.config.ticket;

    reporter.searching(repo, &ticket.key)?;
    let existing = match ctx.issue_host.find_existing(repo, &ticket.key).await {
        Ok(found) => found,
        Err(err) => {
            warn!(error = ?err, "failed to search for existing issues");
            reporter.search_failed(&err)?;
            None
        }
    };
    if let Some(existing) = existing {
        info!(number = existing.number, key = %ticket.key, "issue already exists");
        return Ok(SyncOutcome::Existing(existing));
    }

    let draft = IssueDraft::from_ticket(ticket);
    reporter.creating(repo, &draft)?;
    let issue = ctx.issue_host.create_issue(repo, &draft).await?;
    info!(number = issue.number, key = %ticket.key, "issue created");

    Ok(SyncOutcome::Created {
        issue,
        assignee: AGENT_ASSIGNEE.to_string(),
    })
}
