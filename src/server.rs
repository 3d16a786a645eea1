// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Merges all domain routers under /api, layers tracing and CORS, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! HTTP server assembly
//!
//! Builds the full application router from the per-domain route structs and
//! runs it until the process receives an interrupt.

use crate::errors::AppError;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{
    BillingRoutes, CalendarRoutes, DashboardRoutes, ExerciseRoutes, HealthRoutes,
    MarketplaceRoutes, MetricsRoutes, RankingRoutes, UserRoutes, WorkoutRoutes,
};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// HTTP server wrapping the shared resources
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server around the shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    #[must_use]
    pub fn router(&self) -> Router {
        let api = Router::new()
            .merge(UserRoutes::routes(self.resources.clone()))
            .merge(DashboardRoutes::routes(self.resources.clone()))
            .merge(WorkoutRoutes::routes(self.resources.clone()))
            .merge(MetricsRoutes::routes(self.resources.clone()))
            .merge(MarketplaceRoutes::routes(self.resources.clone()))
            .merge(RankingRoutes::routes(self.resources.clone()))
            .merge(CalendarRoutes::routes(self.resources.clone()))
            .merge(ExerciseRoutes::routes(self.resources.clone()))
            .merge(BillingRoutes::routes(self.resources.clone()));

        Router::new()
            .merge(HealthRoutes::routes())
            .nest("/api", api)
            .layer(TraceLayer::new_for_http())
            .layer(setup_cors(&self.resources.config))
    }

    /// Bind the configured port and serve until interrupted
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the listener fails.
    pub async fn serve(self) -> Result<(), AppError> {
        let port = self.resources.config.http_port;
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to bind port {port}")).with_source(e)
            })?;

        info!("HTTP server listening on http://0.0.0.0:{port}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal("HTTP server terminated").with_source(e))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install interrupt handler: {e}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}
