use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::github::GitHubClient;
use crate::report::Reporter;
use crate::workflow::sync::{SyncOutcome, sync_ticket};

#[derive(Debug, Clone)]
pub struct SyncCommandArgs {
    pub api_base: String,
}

/// Loads the ticket from `lookup`, syncs it, and reports the outcome.
pub async fn run<F, W>(
    args: SyncCommandArgs,
    lookup: F,
    reporter: &mut Reporter<W>,
) -> AppResult<SyncOutcome>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let config = AppConfig::from_lookup(lookup, args.api_base)?;
    debug!(api_base = %config.api_base, "configuration loaded");

    let github = Arc::new(GitHubClient::new(
        config.api_base.clone(),
        config.github_token.clone(),
    ));
    execute(&AppContext::new(config, github), reporter).await
}

pub async fn execute<W: Write>(
    ctx: &AppContext,
    reporter: &mut Reporter<W>,
) -> AppResult<SyncOutcome> {
    reporter.started(&ctx.config.repo, &ctx.config.ticket.key)?;

    let outcome = sync_ticket(ctx, reporter).await?;
    match &outcome {
        SyncOutcome::Existing(issue) => reporter.existing(issue)?,
        SyncOutcome::Created { issue, assignee } => {
            reporter.created(&ctx.config.repo, issue, assignee)?
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use async_trait::async_trait;

    use super::*;
    use crate::domain::issue::{CreatedIssue, IssueDraft, IssueRef, RepoSlug};
    use crate::error::AppError;
    use crate::services::IssueHostService;
    use crate::test_support::refused_uri;

    /// Searches through one client and creates through another.
    struct SplitHost {
        search: GitHubClient,
        create: GitHubClient,
    }

    #[async_trait]
    impl IssueHostService for SplitHost {
        async fn find_existing(
            &self,
            repo: &RepoSlug,
            ticket_key: &str,
        ) -> AppResult<Option<IssueRef>> {
            self.search.find_existing(repo, ticket_key).await
        }

        async fn create_issue(
            &self,
            repo: &RepoSlug,
            draft: &IssueDraft,
        ) -> AppResult<CreatedIssue> {
            self.create.create_issue(repo, draft).await
        }
    }

    fn scenario_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("GITHUB_TOKEN", "ghp_test"),
            ("TARGET_REPO_OWNER", "acme"),
            ("TARGET_REPO_NAME", "web"),
            ("JIRA_ISSUE_KEY", "PROJ-42"),
            ("JIRA_SUMMARY", "Fix login bug"),
            ("JIRA_DESCRIPTION", "Users can't log in with SSO"),
            ("JIRA_ISSUE_URL", "https://jira.example.com/browse/PROJ-42"),
            ("JIRA_PRIORITY", "High"),
        ])
    }

    async fn run_against(
        server: &MockServer,
        env: HashMap<&'static str, &'static str>,
    ) -> (AppResult<SyncOutcome>, String) {
        let mut reporter = Reporter::new(Vec::new());
        let result = run(
            SyncCommandArgs {
                api_base: server.uri(),
            },
            |name| env.get(name).map(|value| value.to_string()),
            &mut reporter,
        )
        .await;
        if let Err(error) = &result {
            reporter.failed(error).unwrap();
        }
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        (result, text)
    }

    async fn mount_empty_search(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/search/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 0,
                "incomplete_results": false,
                "items": []
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn creates_new_issue_for_unknown_ticket() {
        let server = MockServer::start().await;
        mount_empty_search(&server).await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/web/issues"))
            .and(body_partial_json(json!({
                "title": "[PROJ-42] Fix login bug",
                "labels": ["jira-sync", "copilot-agent", "priority-high"],
                "assignees": ["github"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "number": 43,
                "html_url": "https://github.com/acme/web/issues/43",
                "labels": [
                    {"name": "jira-sync"},
                    {"name": "copilot-agent"},
                    {"name": "priority-high"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (result, text) = run_against(&server, scenario_env()).await;

        assert!(matches!(result, Ok(SyncOutcome::Created { .. })));
        assert!(text.contains("📍 Target Repository: acme/web"));
        assert!(text.contains("✅ Successfully created issue #43"));
        assert!(text.contains("🏷️  Labels: jira-sync, copilot-agent, priority-high"));
        assert!(text.contains("::notice title=Issue Created::Created issue #43 in acme/web"));
    }

    #[tokio::test]
    async fn existing_issue_prevents_creation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 1,
                "incomplete_results": false,
                "items": [{
                    "number": 17,
                    "html_url": "https://github.com/acme/web/issues/17"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/web/issues"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let (result, text) = run_against(&server, scenario_env()).await;

        assert!(matches!(result, Ok(SyncOutcome::Existing(ref issue)) if issue.number == 17));
        assert!(text.contains("Issue already exists: #17"));
        assert!(!text.contains("::notice"));
    }

    #[tokio::test]
    async fn rejected_create_is_fatal() {
        let server = MockServer::start().await;
        mount_empty_search(&server).await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/web/issues"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_string("{\"message\":\"Validation Failed\",\"errors\":[]}"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (result, text) = run_against(&server, scenario_env()).await;

        assert!(matches!(result, Err(AppError::CreateFailed { .. })));
        assert!(text.contains("❌ Error creating GitHub issue: GitHub responded with 422"));
        assert!(text.contains("Response: {\"message\":\"Validation Failed\",\"errors\":[]}"));
    }

    #[tokio::test]
    async fn failed_search_still_creates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/issues"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/web/issues"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "number": 44,
                "html_url": "https://github.com/acme/web/issues/44"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (result, _) = run_against(&server, scenario_env()).await;

        assert!(matches!(result, Ok(SyncOutcome::Created { ref issue, .. }) if issue.number == 44));
    }

    #[tokio::test]
    async fn unreachable_search_still_creates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/web/issues"))
            .and(body_partial_json(json!({
                "title": "[PROJ-42] Fix login bug",
                "labels": ["jira-sync", "copilot-agent", "priority-high"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "number": 45,
                "html_url": "https://github.com/acme/web/issues/45",
                "labels": [{"name": "jira-sync"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let env = scenario_env();
        let config = AppConfig::from_lookup(
            |name| env.get(name).map(|value| value.to_string()),
            server.uri(),
        )
        .unwrap();
        let host = Arc::new(SplitHost {
            search: GitHubClient::new(refused_uri(), config.github_token.clone()),
            create: GitHubClient::new(server.uri(), config.github_token.clone()),
        });
        let ctx = AppContext::new(config, host);
        let mut reporter = Reporter::new(Vec::new());

        let result = execute(&ctx, &mut reporter).await;
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(matches!(result, Ok(SyncOutcome::Created { ref issue, .. }) if issue.number == 45));
        assert!(text.contains("⚠️  Warning: Failed to search for existing issues"));
        assert!(text.contains("   caused by: error sending request"));
        assert!(text.contains("::notice title=Issue Created::Created issue #45 in acme/web"));
    }

    #[tokio::test]
    async fn missing_config_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut env = scenario_env();
        env.remove("GITHUB_TOKEN");
        env.remove("JIRA_ISSUE_KEY");
        let (result, text) = run_against(&server, env).await;

        assert!(matches!(result, Err(AppError::MissingConfig(ref names)) if names.len() == 2));
        assert_eq!(
            text,
            "❌ Error: Missing required environment variables: GITHUB_TOKEN, JIRA_ISSUE_KEY\n"
        );
    }
}
