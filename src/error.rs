//! Error types for the FPL analyzer client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Banner text shown when the team id fails client-side validation.
pub const INVALID_TEAM_ID_MESSAGE: &str = "Please enter a valid team ID";

/// Fallback banner text when the server reports failure without a message.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed";

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid team ID: {input:?}")]
    InvalidTeamId { input: String },

    #[error("Invalid player ID: {input:?}")]
    InvalidPlayerId { input: String },

    #[error("Team ID not provided and {env_var} environment variable not set")]
    MissingTeamId { env_var: String },

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Analysis { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// Build an application-level failure from the server's `error` field.
    ///
    /// Missing or blank messages fall back to [`ANALYSIS_FAILED_MESSAGE`].
    pub fn analysis(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| ANALYSIS_FAILED_MESSAGE.to_string());
        AnalyzerError::Analysis { message }
    }

    /// Text for the analysis error banner.
    pub fn user_message(&self) -> String {
        match self {
            AnalyzerError::InvalidTeamId { .. } | AnalyzerError::MissingTeamId { .. } => {
                INVALID_TEAM_ID_MESSAGE.to_string()
            }
            AnalyzerError::Analysis { message } => message.clone(),
            AnalyzerError::UnexpectedStatus { status, .. } => {
                format!("{ANALYSIS_FAILED_MESSAGE}: server returned status {}", status.as_u16())
            }
            other => format!("{ANALYSIS_FAILED_MESSAGE}: {other}"),
        }
    }

    /// Status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            AnalyzerError::UnexpectedStatus { status, .. } => Some(*status),
            AnalyzerError::Http(e) => e.status(),
            _ => None,
        }
    }
}
