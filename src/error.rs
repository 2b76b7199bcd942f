use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid number")]
    InvalidNumber,
    #[error("missing unit")]
    MissingUnit,
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("duration out of range")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid step count '{value}': {source}")]
    Steps {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid duration '{value}': {source}")]
    Duration {
        value: String,
        #[source]
        source: DurationError,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("steps must be greater than 0, got {0}")]
    Steps(i64),
    #[error("weight must be greater than 0, got {0:.2} kg")]
    Weight(f64),
    #[error("height must be greater than 0, got {0:.2} m")]
    Height(f64),
    #[error("duration must be greater than 0, got {0}")]
    Duration(chrono::Duration),
    #[error("activity label is empty")]
    EmptyActivity,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error("invalid record format: expected {expected} comma-separated fields, got {actual}")]
    Format { expected: usize, actual: usize },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown training type: {0:?}")]
    UnknownActivity(String),
}

impl TrackerError {
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::Format { .. } => "format",
            TrackerError::Parse(_) => "parse",
            TrackerError::Validation(_) => "validation",
            TrackerError::UnknownActivity(_) => "unknown_activity",
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = match &self {
            TrackerError::Format { .. } | TrackerError::Parse(_) | TrackerError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            TrackerError::UnknownActivity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}
