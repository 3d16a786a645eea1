// ABOUTME: Workout route handlers for templates and scheduled instances
// ABOUTME: Covers listing, creation, scheduling, and progress updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Workout routes
//!
//! Workout templates plus the scheduled instances tying them to a user and a
//! date. The today view joins each instance with its template; a dangling
//! workout id yields a null `workout` field rather than an error.

use crate::{
    errors::AppError,
    models::{InsertUserWorkout, InsertWorkout, UserWorkout, UserWorkoutUpdate, Workout},
    resources::ServerResources,
    schema::decode_body,
    storage::Storage,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// A scheduled instance with its workout template attached
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduledWorkoutDetail {
    #[serde(flatten)]
    scheduled: UserWorkout,
    workout: Option<Workout>,
}

/// Workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/workouts/today", get(Self::handle_today))
            .route("/workouts", get(Self::handle_list).post(Self::handle_create))
            .route("/workouts/schedule", post(Self::handle_schedule))
            .route("/workouts/:id/progress", patch(Self::handle_progress))
            .with_state(resources)
    }

    /// Today's scheduled workouts with template details attached
    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let user_id = resources.config.demo_user_id.as_str();
        let today = chrono::Utc::now().date_naive();

        let scheduled = resources
            .storage
            .get_user_workouts_by_date(user_id, today)
            .await?;

        let mut details = Vec::with_capacity(scheduled.len());
        for entry in scheduled {
            let workout = resources.storage.get_workout(&entry.workout_id).await?;
            details.push(ScheduledWorkoutDetail {
                scheduled: entry,
                workout,
            });
        }

        Ok((StatusCode::OK, Json(details)).into_response())
    }

    /// List all workout templates
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let workouts = resources.storage.get_workouts().await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Create a workout template
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let insert = decode_body::<InsertWorkout>(body)?;
        let workout = resources.storage.create_workout(insert).await?;
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Schedule a workout instance for a user
    async fn handle_schedule(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let insert = decode_body::<InsertUserWorkout>(body)?;
        let scheduled = resources.storage.create_user_workout(insert).await?;
        Ok((StatusCode::CREATED, Json(scheduled)).into_response())
    }

    /// Update progress or completion on a scheduled instance
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let update = decode_body::<UserWorkoutUpdate>(body)?;
        let updated = resources
            .storage
            .update_user_workout(&id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))?;

        Ok((StatusCode::OK, Json(updated)).into_response())
    }
}
