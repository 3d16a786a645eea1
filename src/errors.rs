// ABOUTME: Unified error handling for the Acelera fitness API
// ABOUTME: Defines AppError, ErrorCode, and the HTTP error response format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! # Unified Error Handling
//!
//! This module provides the centralized error type for the server. It defines
//! standard error codes, HTTP status mapping, and the JSON error body so that
//! every route returns errors in the same shape:
//!
//! ```json
//! { "message": "Validation error", "errors": [{ "field": "duration", "message": "..." }] }
//! ```
//!
//! Only two failure kinds are surfaced by the API: validation errors (HTTP
//! 400 with field-level detail) and unexpected errors (HTTP 500 with a
//! generic message). "Not found" for single-resource lookups is its own 404
//! signal, never an exception.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or incomplete request body
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Single-resource lookup found nothing
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Configuration could not be loaded or is inconsistent
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Storage operation failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::ConfigError | Self::StorageError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Field-level detail attached to validation errors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The offending field, when it could be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable description of the violation
    pub message: String,
}

impl ValidationIssue {
    /// Issue scoped to a named field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Issue with no field attribution
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field-level validation detail, empty for non-validation errors
    pub errors: Vec<ValidationIssue>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
            source: None,
        }
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input without field detail
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Validation error carrying field-level issues
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        let mut error = Self::new(ErrorCode::InvalidInput, "Validation error");
        error.errors = issues;
        error
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// JSON error body: `{ "message": ... }`, plus `"errors"` for validation failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Field-level validation detail
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationIssue>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            message: error.message,
            errors: error.errors,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            match &self.source {
                Some(source) => {
                    tracing::error!(code = ?self.code, source = %source, "{}", self.message);
                }
                None => tracing::error!(code = ?self.code, "{}", self.message),
            }
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Conversion from `anyhow::Error` for the storage seam
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let mut wrapped = Self::new(ErrorCode::InternalError, "Internal server error");
        wrapped.source = Some(error.into());
        wrapped
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::ResourceNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_body() {
        let error = AppError::validation(vec![ValidationIssue::field(
            "duration",
            "missing field `duration`",
        )]);
        let response = ErrorResponse::from(error);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Validation error");
        assert_eq!(json["errors"][0]["field"], "duration");
    }

    #[test]
    fn test_plain_error_body_omits_errors_key() {
        let response = ErrorResponse::from(AppError::internal("Internal server error"));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("errors").is_none());
    }
}
