// ABOUTME: Marketplace route handlers for workout plans
// ABOUTME: Lists all plans and the featured subset, each with trainer details attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Marketplace routes
//!
//! Plans are joined with their trainer at read time; a missing or dangling
//! trainer id yields a null `trainer` field.

use crate::{
    errors::AppError,
    models::{User, WorkoutPlan},
    resources::ServerResources,
    storage::Storage,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// A workout plan with its trainer profile attached
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanWithTrainer {
    #[serde(flatten)]
    plan: WorkoutPlan,
    trainer: Option<User>,
}

/// Marketplace routes
pub struct MarketplaceRoutes;

impl MarketplaceRoutes {
    /// Create all marketplace routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/marketplace/plans", get(Self::handle_plans))
            .route("/marketplace/featured", get(Self::handle_featured))
            .with_state(resources)
    }

    /// List all plans with trainer info
    async fn handle_plans(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let plans = resources.storage.get_workout_plans().await?;
        let joined = Self::attach_trainers(&resources, plans).await?;
        Ok((StatusCode::OK, Json(joined)).into_response())
    }

    /// List featured plans with trainer info
    async fn handle_featured(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let plans = resources.storage.get_featured_workout_plans().await?;
        let joined = Self::attach_trainers(&resources, plans).await?;
        Ok((StatusCode::OK, Json(joined)).into_response())
    }

    async fn attach_trainers(
        resources: &Arc<ServerResources>,
        plans: Vec<WorkoutPlan>,
    ) -> Result<Vec<PlanWithTrainer>, AppError> {
        let mut joined = Vec::with_capacity(plans.len());
        for plan in plans {
            let trainer = match plan.trainer_id.as_deref() {
                Some(trainer_id) => resources.storage.get_user(trainer_id).await?,
                None => None,
            };
            joined.push(PlanWithTrainer { plan, trainer });
        }
        Ok(joined)
    }
}
