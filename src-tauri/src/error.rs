use thiserror::Error;

use crate::order::ValidationIssue;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Keychain error: {0}")]
    Keychain(String),

    /// Issues are joined with "; " so the frontend can list them separately.
    #[error("{}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<StorefrontError> for String {
    fn from(err: StorefrontError) -> Self {
        err.to_string()
    }
}
