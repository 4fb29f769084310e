use crate::domain::ticket::TicketReference;

const EMPTY_DESCRIPTION: &str = "No description provided.";

pub const ACCEPTANCE_CRITERIA: [&str; 4] = [
    "Implementation matches the requirements described above",
    "Code follows project conventions and best practices",
    "Tests are added/updated to cover changes",
    "Documentation is updated if needed",
];

/// Renders the Markdown body the coding agent works from.
///
/// The description goes in verbatim; Markdown in the ticket is not escaped.
pub fn render_issue_body(ticket: &TicketReference) -> String {
    let description = match ticket.description.trim() {
        "" => EMPTY_DESCRIPTION,
        trimmed => trimmed,
    };

    let checklist = ACCEPTANCE_CRITERIA
        .iter()
        .map(|item| format!("- [ ] {item}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "## 📋 Requirements\n\
         \n\
         {description}\n\
         \n\
         ## ✅ Acceptance Criteria\n\
         \n\
         {checklist}\n\
         \n\
         ## 🔗 Jira Reference\n\
         \n\
         **Jira Issue:** [{key}]({url})\n\
         **Priority:** {priority}\n\
         **Type:** {issue_type}\n\
         \n\
         ---\n\
         \n\
         *This issue was automatically created from Jira and assigned to GitHub Copilot coding agent for implementation.*\n",
        key = ticket.key,
        url = ticket.url,
        priority = ticket.priority,
        issue_type = ticket.issue_type,
    )
}
