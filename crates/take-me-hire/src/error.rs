use crate::config::ConfigError;
use crate::marketplace::{ProfileValidationError, StoreError, SubmitError, UnknownAvailability};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Profile(SubmitError),
    Selection(UnknownAvailability),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Profile(err) => write!(f, "profile rejected: {}", err),
            AppError::Selection(err) => write!(f, "invalid selection: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Profile(err) => Some(err),
            AppError::Selection(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Profile(SubmitError::Validation(_))
            | AppError::Profile(SubmitError::Store(StoreError::InvalidRecord(_))) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Profile(SubmitError::Store(StoreError::DuplicateId(_))) => {
                StatusCode::CONFLICT
            }
            AppError::Selection(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Profile(SubmitError::Store(StoreError::Uninitialized)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut payload = json!({ "error": self.to_string() });
        match &self {
            AppError::Profile(SubmitError::Validation(err)) => {
                payload["missing"] = json!(err.missing());
            }
            AppError::Profile(SubmitError::Store(StoreError::DuplicateId(id))) => {
                payload["candidate_id"] = json!(id);
            }
            _ => {}
        }

        (status, Json(payload)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<SubmitError> for AppError {
    fn from(value: SubmitError) -> Self {
        Self::Profile(value)
    }
}

impl From<ProfileValidationError> for AppError {
    fn from(value: ProfileValidationError) -> Self {
        Self::Profile(SubmitError::Validation(value))
    }
}

impl From<UnknownAvailability> for AppError {
    fn from(value: UnknownAvailability) -> Self {
        Self::Selection(value)
    }
}
