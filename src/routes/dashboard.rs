// ABOUTME: Dashboard route handlers aggregating stats for the home screen
// ABOUTME: Combines today's schedule, points, and latest metrics into one response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Dashboard routes
//!
//! One aggregate endpoint feeding the home screen: today's workout count,
//! streak, current weight, points, and completed workout total for the demo
//! user. Missing records fall back to zeros rather than erroring.

use crate::{errors::AppError, resources::ServerResources, storage::Storage};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Aggregated stats for the dashboard home screen
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardStats {
    today_workouts: usize,
    streak: i32,
    current_weight: String,
    ranking: String,
    points: i64,
    workouts_completed: i32,
}

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/dashboard/stats", get(Self::handle_stats))
            .with_state(resources)
    }

    /// Aggregate dashboard stats for the demo user
    async fn handle_stats(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let user_id = resources.config.demo_user_id.as_str();
        let today = chrono::Utc::now().date_naive();

        let today_workouts = resources
            .storage
            .get_user_workouts_by_date(user_id, today)
            .await?;
        let user_points = resources.storage.get_user_points(user_id).await?;
        let latest_metrics = resources.storage.get_latest_body_metrics(user_id).await?;

        let stats = DashboardStats {
            today_workouts: today_workouts.len(),
            streak: user_points.as_ref().map_or(0, |p| p.streak),
            current_weight: latest_metrics
                .and_then(|m| m.weight)
                .unwrap_or_else(|| "0".into()),
            // Placeholder until ranking position is computed per user
            ranking: "#24".into(),
            points: user_points.as_ref().map_or(0, |p| p.points),
            workouts_completed: user_points.as_ref().map_or(0, |p| p.workouts_completed),
        };

        Ok((StatusCode::OK, Json(stats)).into_response())
    }
}
