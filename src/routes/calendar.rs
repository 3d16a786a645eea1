// ABOUTME: Calendar route handler grouping scheduled workouts by date
// ABOUTME: Serves the demo user's schedule as a date-keyed map for the week view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Calendar routes
//!
//! Scheduled workouts grouped under their ISO-8601 calendar date. Instances
//! without a scheduled date are left out of the map.

use crate::{errors::AppError, models::UserWorkout, resources::ServerResources, storage::Storage};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Calendar routes
pub struct CalendarRoutes;

impl CalendarRoutes {
    /// Create all calendar routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/calendar/week", get(Self::handle_week))
            .with_state(resources)
    }

    /// Scheduled workouts for the demo user grouped by calendar date
    async fn handle_week(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let scheduled = resources
            .storage
            .get_user_workouts(&resources.config.demo_user_id)
            .await?;

        let mut by_date: BTreeMap<String, Vec<UserWorkout>> = BTreeMap::new();
        for entry in scheduled {
            if let Some(date) = entry.scheduled_date {
                by_date
                    .entry(date.date_naive().to_string())
                    .or_default()
                    .push(entry);
            }
        }

        Ok((StatusCode::OK, Json(by_date)).into_response())
    }
}
