// ABOUTME: HTTP route handler modules organized by domain
// ABOUTME: Each module exposes a route struct with a routes() constructor returning an axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! HTTP route handlers organized by functional domain
//!
//! Each domain module exposes a `XRoutes` struct whose `routes()` method
//! builds an `axum::Router` wired to the shared [`crate::resources::ServerResources`].

pub mod billing;
pub mod calendar;
pub mod dashboard;
pub mod exercises;
pub mod health;
pub mod marketplace;
pub mod metrics;
pub mod ranking;
pub mod users;
pub mod workouts;

pub use billing::BillingRoutes;
pub use calendar::CalendarRoutes;
pub use dashboard::DashboardRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use marketplace::MarketplaceRoutes;
pub use metrics::MetricsRoutes;
pub use ranking::RankingRoutes;
pub use users::UserRoutes;
pub use workouts::WorkoutRoutes;
