// ABOUTME: Request body decoding against the entity insert/update schemas
// ABOUTME: Maps serde failures to structured 400 responses with field detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! # Schema Validation
//!
//! serde is the schema language: each entity's insert/update payload type in
//! [`crate::models`] is the schema, and [`decode_body`] turns a raw JSON body
//! into the typed, immutable payload or a structured validation error.
//!
//! A violation yields HTTP 400 with the field extracted from the serde
//! diagnostic:
//!
//! ```json
//! { "message": "Validation error", "errors": [{ "field": "duration", "message": "missing field `duration`" }] }
//! ```
//!
//! serde stops at the first violation, so the errors list carries exactly
//! one entry per response.

use crate::errors::{AppError, ValidationIssue};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a JSON request body into a typed payload
///
/// # Errors
/// Returns a validation `AppError` (HTTP 400) describing the first schema
/// violation when the body does not match the payload type.
pub fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| {
        let message = e.to_string();
        AppError::validation(vec![issue_from_serde_message(&message)]).with_source(e)
    })
}

/// Build a field-scoped issue from a serde diagnostic
///
/// serde_json reports offending fields in backticks ("missing field
/// `duration`", "unknown field `foo`"); type mismatches carry no field name
/// and become body-level issues.
fn issue_from_serde_message(message: &str) -> ValidationIssue {
    // Only field-shaped diagnostics carry a field name; type mismatches put
    // the offending value in backticks instead.
    let field = ["missing field", "unknown field", "duplicate field"]
        .iter()
        .any(|prefix| message.starts_with(prefix))
        .then(|| {
            message
                .split_once('`')
                .and_then(|(_, rest)| rest.split_once('`'))
                .map(|(name, _)| name.to_owned())
        })
        .flatten();

    // Strip serde's trailing position info ("... at line 1 column 2")
    let detail = message
        .split(" at line ")
        .next()
        .unwrap_or(message)
        .to_owned();

    match field {
        Some(name) => ValidationIssue::field(name, detail),
        None => ValidationIssue::body(detail),
    }
}
