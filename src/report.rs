use std::error::Error;
use std::io::{self, Write};

use crate::domain::issue::{CreatedIssue, IssueDraft, IssueRef, RepoSlug};
use crate::error::AppError;

/// Human-readable run log plus the runner annotation, written to `out`.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn started(&mut self, repo: &RepoSlug, ticket_key: &str) -> io::Result<()> {
        writeln!(self.out, "🚀 Starting Jira to GitHub Issue workflow...")?;
        writeln!(self.out, "📍 Target Repository: {repo}")?;
        writeln!(self.out, "📝 Jira Issue: {ticket_key}")
    }

    pub fn searching(&mut self, repo: &RepoSlug, ticket_key: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "🔍 Searching for existing issues with key: {ticket_key} in {repo}"
        )
    }

    pub fn search_failed(&mut self, error: &AppError) -> io::Result<()> {
        writeln!(
            self.out,
            "⚠️  Warning: Failed to search for existing issues: {error}"
        )?;
        self.causes(error)
    }

    pub fn existing(&mut self, issue: &IssueRef) -> io::Result<()> {
        writeln!(self.out, "ℹ️  Issue already exists: #{}", issue.number)?;
        writeln!(self.out, "🔗 URL: {}", issue.html_url)?;
        writeln!(self.out, "✅ Skipping creation - no duplicate will be created")
    }

    pub fn creating(&mut self, repo: &RepoSlug, draft: &IssueDraft) -> io::Result<()> {
        writeln!(self.out, "✨ No existing issue found, creating new issue...")?;
        writeln!(self.out, "📝 Creating issue in {repo}")?;
        writeln!(self.out, "   Title: {}", draft.title)
    }

    pub fn created(
        &mut self,
        repo: &RepoSlug,
        issue: &CreatedIssue,
        assignee: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "✅ Successfully created issue #{}", issue.number)?;
        writeln!(self.out, "🔗 URL: {}", issue.html_url)?;
        writeln!(
            self.out,
            "🤖 Assigned to: @{assignee} (GitHub Copilot coding agent)"
        )?;
        writeln!(self.out, "🏷️  Labels: {}", issue.labels.join(", "))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", created_notice(repo, issue.number))
    }

    pub fn failed(&mut self, error: &AppError) -> io::Result<()> {
        match error {
            AppError::MissingConfig(names) => writeln!(
                self.out,
                "❌ Error: Missing required environment variables: {}",
                names.join(", ")
            ),
            AppError::CreateFailed { .. } | AppError::Http(_) => {
                writeln!(self.out, "❌ Error creating GitHub issue: {error}")?;
                self.causes(error)?;
                if let Some(body) = error.response_body() {
                    writeln!(self.out, "Response: {body}")?;
                }
                Ok(())
            }
            AppError::Io(_) => {
                writeln!(self.out, "❌ Fatal error: {error}")?;
                self.causes(error)
            }
        }
    }

    fn causes(&mut self, error: &dyn Error) -> io::Result<()> {
        let mut source = error.source();
        while let Some(cause) = source {
            writeln!(self.out, "   caused by: {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

/// Annotation line picked up by the GitHub Actions run summary.
pub fn created_notice(repo: &RepoSlug, number: u64) -> String {
    format!("::notice title=Issue Created::Created issue #{number} in {repo}")
}
