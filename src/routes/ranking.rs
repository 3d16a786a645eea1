// ABOUTME: Ranking route handler for the points leaderboard
// ABOUTME: Serves all points records sorted by descending score with user profiles attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Ranking routes

use crate::{errors::AppError, resources::ServerResources, storage::Storage};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Ranking routes
pub struct RankingRoutes;

impl RankingRoutes {
    /// Create all ranking routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ranking", get(Self::handle_ranking))
            .with_state(resources)
    }

    /// Points leaderboard, highest first
    async fn handle_ranking(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let ranking = resources.storage.get_users_ranking().await?;
        Ok((StatusCode::OK, Json(ranking)).into_response())
    }
}
