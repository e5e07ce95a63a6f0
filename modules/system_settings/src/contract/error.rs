//! Contract error types for system settings
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// System settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Backing store or transaction failure, passed through untouched
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    /// Stored content could not be decoded by a typed accessor
    #[error("Failed to decode setting '{name}': {source}")]
    Decode {
        /// Setting name
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Setting name is not known to the schema registry
    #[error("Unknown setting name: {name}")]
    InvalidName {
        /// Rejected setting name
        name: String,
    },
}

impl SettingsError {
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
