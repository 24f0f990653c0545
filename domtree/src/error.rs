//! Error types

use crate::tree::RowId;

/// Faults raised by a member provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// A provider query (children, label, kind) failed.
    #[error("provider failed: {0}")]
    Failed(String),

    /// An asynchronous child fetch was rejected.
    #[error("child fetch rejected: {0}")]
    Rejected(String),

    /// The resolver was dropped without resolving the fetch.
    #[error("child fetch dropped before it resolved")]
    Dropped,
}

impl ProviderError {
    /// Creates a new query failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Creates a new fetch rejection.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

impl From<String> for ProviderError {
    fn from(message: String) -> Self {
        Self::Failed(message)
    }
}

impl From<&str> for ProviderError {
    fn from(message: &str) -> Self {
        Self::Failed(message.to_string())
    }
}

/// Errors raised inside tree operations.
///
/// Public tree operations never return these; they are logged at the call
/// site and the affected node degrades to showing no additional data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// No visible row represents the requested value.
    #[error("no row for {0}")]
    RowNotFound(String),

    /// The row was removed from the tree.
    #[error("{0} is not mounted")]
    NotMounted(RowId),

    /// A provider query failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
