// ABOUTME: Exercise library route handlers
// ABOUTME: Serves the full reference library and per-muscle-group filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Exercise library routes

use crate::{errors::AppError, resources::ServerResources, storage::Storage};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Exercise library routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercises", get(Self::handle_list))
            .route(
                "/exercises/muscle-group/:muscle_group",
                get(Self::handle_by_muscle_group),
            )
            .with_state(resources)
    }

    /// The full exercise library
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let exercises = resources.storage.get_exercises().await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Library filtered to one muscle group; unknown groups return an empty list
    async fn handle_by_muscle_group(
        State(resources): State<Arc<ServerResources>>,
        Path(muscle_group): Path<String>,
    ) -> Result<Response, AppError> {
        let exercises = resources
            .storage
            .get_exercises_by_muscle_group(&muscle_group)
            .await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }
}
