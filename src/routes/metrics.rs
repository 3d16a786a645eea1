// ABOUTME: Body metrics route handlers for measurement history
// ABOUTME: Serves the latest reading and records new measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Body metrics routes
//!
//! Measurements are append-only; the GET endpoint returns the newest reading
//! for the demo user, or null when none exist.

use crate::{
    errors::AppError, models::InsertBodyMetrics, resources::ServerResources, schema::decode_body,
    storage::Storage,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Body metrics routes
pub struct MetricsRoutes;

impl MetricsRoutes {
    /// Create all metrics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/metrics", get(Self::handle_latest).post(Self::handle_create))
            .with_state(resources)
    }

    /// Latest measurement for the demo user
    async fn handle_latest(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let metrics = resources
            .storage
            .get_latest_body_metrics(&resources.config.demo_user_id)
            .await?;

        Ok((StatusCode::OK, Json(metrics)).into_response())
    }

    /// Record a new measurement
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<serde_json::Value>,
    ) -> Result<Response, AppError> {
        let insert = decode_body::<InsertBodyMetrics>(body)?;
        let metrics = resources.storage.create_body_metrics(insert).await?;
        Ok((StatusCode::CREATED, Json(metrics)).into_response())
    }
}
