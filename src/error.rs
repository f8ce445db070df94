//! Error types shared by the three sportsync services

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::EntityKind;


pub type Result<T> = std::result::Result<T, ServiceError>;

/// One entry of a request validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{} {id} not found", kind.label())]
    NotFound { kind: EntityKind, id: i64 },

    #[error("{} {id} already exists", kind.label())]
    Conflict { kind: EntityKind, id: i64 },

    #[error("Invalid request body")]
    Validation {
        status: StatusCode,
        errors: Vec<FieldError>,
    },

    #[error("Query parameter `{0}` is reserved for the access token")]
    ReservedParam(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Database connection lock poisoned")]
    ConnectionPoisoned,

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorBody<T: Serialize> {
    detail: T,
}

impl ServiceError {
    /// True when the failure came from an outbound call to the provider or a peer service.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ServiceError::Http(_) | ServiceError::Json(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Conflict { .. } => StatusCode::CONFLICT,
            ServiceError::Validation { status, .. } => *status,
            ServiceError::ReservedParam(_)
            | ServiceError::Http(_)
            | ServiceError::Json(_)
            | ServiceError::Database(_)
            | ServiceError::Io(_)
            | ServiceError::Config { .. }
            | ServiceError::ConnectionPoisoned
            | ServiceError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ServiceError::Validation { errors, .. } => {
                (status, Json(ErrorBody { detail: errors })).into_response()
            }
            err if status.is_server_error() => {
                tracing::error!(error = %err, upstream = err.is_upstream(), "request failed");
                let body = ErrorBody {
                    detail: "Internal Server Error",
                };
                (status, Json(body)).into_response()
            }
            err => (
                status,
                Json(ErrorBody {
                    detail: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
