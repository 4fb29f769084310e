pub const DEFAULT_PRIORITY: &str = "Medium";
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// A Jira ticket as handed over by the automation runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReference {
    pub key: String,
    pub summary: String,
    pub description: String,
    pub url: String,
    pub priority: String,
    pub issue_type: String,
}

impl TicketReference {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: String::new(),
            description: String::new(),
            url: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            issue_type: DEFAULT_ISSUE_TYPE.to_string(),
        }
    }

    pub fn issue_title(&self) -> String {
        format!("[{}] {}", self.key, self.summary)
    }

    pub fn priority_label(&self) -> String {
        format!("priority-{}", self.priority.to_lowercase())
    }
}
