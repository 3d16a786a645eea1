// ABOUTME: Billing route handlers for subscriptions and payments
// ABOUTME: Serves the active subscription and payment history for the demo user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Billing routes
//!
//! Read-only views: the current active subscription (null when none) and
//! the payment history sorted newest first.

use crate::{errors::AppError, resources::ServerResources, storage::Storage};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Billing routes
pub struct BillingRoutes;

impl BillingRoutes {
    /// Create all billing routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/subscription/current", get(Self::handle_subscription))
            .route("/payments/history", get(Self::handle_payments))
            .with_state(resources)
    }

    /// Active subscription for the demo user, null when none
    async fn handle_subscription(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let subscription = resources
            .storage
            .get_user_subscription(&resources.config.demo_user_id)
            .await?;

        Ok((StatusCode::OK, Json(subscription)).into_response())
    }

    /// Payment history for the demo user, newest first
    async fn handle_payments(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let payments = resources
            .storage
            .get_user_payments(&resources.config.demo_user_id)
            .await?;

        Ok((StatusCode::OK, Json(payments)).into_response())
    }
}
