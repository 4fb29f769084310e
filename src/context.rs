use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::IssueHostService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub issue_host: Arc<dyn IssueHostService>,
}

impl AppContext {
    pub fn new(config: AppConfig, issue_host: Arc<dyn IssueHostService>) -> Self {
        Self { config, issue_host }
    }
}
