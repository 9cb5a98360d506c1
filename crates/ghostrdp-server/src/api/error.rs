//! Error responses for the HTTP API.
//!
//! Every failure is rendered as `{"error": "<kind>", "description": "<text>"}`.

use crate::dal::DalError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ghostrdp_utils::logging::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// One of `validation`, `conflict`, `not_found`, `internal`
    pub error: String,
    /// Human readable explanation
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Conflict(_) => "conflict",
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ApiError::Validation(d)
            | ApiError::Conflict(d)
            | ApiError::NotFound(d)
            | ApiError::Internal(d) => d,
        }
    }
}

impl From<DalError> for ApiError {
    fn from(e: DalError) -> Self {
        match e {
            DalError::Validation(msg) => {
                warn!("Rejected write: {}", msg);
                ApiError::Validation(msg)
            }
            DalError::Conflict(msg) => {
                warn!("Conflicting write: {}", msg);
                ApiError::Conflict(msg)
            }
            DalError::NotFound(msg) => {
                warn!("{}", msg);
                ApiError::NotFound(msg)
            }
            other => {
                error!("Database failure: {}", other);
                ApiError::Internal("Database error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind().to_string(),
            description: self.description().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
