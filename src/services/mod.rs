pub mod issue_host;

pub use issue_host::IssueHostService;
