use thiserror::Error;

/// Errors raised while configuring the dashboard or preparing chart payloads.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown layout mode '{0}', expected one of: fixed, collapsible, responsive")]
    UnknownLayoutMode(String),

    #[error("invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },

    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("failed to build chart payload: {0}")]
    Chart(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
