// ABOUTME: User route handlers for the demo identity
// ABOUTME: Resolves the configured demo user in place of real authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! User routes
//!
//! The current user is whichever id the server is configured with, no
//! session or token is involved.

use crate::{errors::AppError, resources::ServerResources, storage::Storage};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// User routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/user/current", get(Self::handle_current_user))
            .with_state(resources)
    }

    /// Return the configured demo user
    async fn handle_current_user(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let user = resources
            .storage
            .get_user(&resources.config.demo_user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
