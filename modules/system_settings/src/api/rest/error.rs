//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SettingsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SettingsError) -> Problem {
    match error {
        SettingsError::InvalidName { name } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Unknown Setting",
        )
        .with_detail(format!("Setting '{}' is not a recognized setting name", name)),

        SettingsError::Decode { name, source } => {
            tracing::error!(setting = %name, error = %source, "Stored setting is not valid JSON");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Invalid Setting Content")
                .with_detail(format!("Setting '{}' could not be decoded", name))
        }

        SettingsError::Storage(e) => {
            tracing::error!("Internal error: {:?}", e);
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("An unexpected error occurred")
        }
    }
}
