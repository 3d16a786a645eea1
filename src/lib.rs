// ABOUTME: Main library entry point for the Acelera fitness API server
// ABOUTME: Provides the REST API, storage service, and in-memory entity store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

#![deny(unsafe_code)]

//! # Acelera Fitness API Server
//!
//! REST backend for the Acelera fitness application: workout browsing and
//! scheduling, body metrics tracking, a points-based ranking, a trainer
//! marketplace, and subscription/payment history.
//!
//! ## Architecture
//!
//! The server follows a layered architecture:
//! - **Models**: Entity types and their insert/update payloads
//! - **Storage**: The `Storage` service trait and its in-memory implementation
//! - **Routes**: Thin axum handlers that validate input, call storage, and
//!   shape JSON responses
//! - **Resources**: The dependency container constructed once at startup and
//!   injected into every route handler
//!
//! All state lives in the in-memory entity store, seeded with demonstration
//! data at process start. A single hardcoded demo user stands in for an
//! authenticated identity; swapping the store for a real database only
//! requires a new `Storage` implementation.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use acelera_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Acelera server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Entity types and insert/update payloads
pub mod models;

/// Shared resource container for dependency injection
pub mod resources;

/// HTTP route handlers organized by domain
pub mod routes;

/// Request body decoding against entity schemas
pub mod schema;

/// HTTP server assembly and lifecycle
pub mod server;

/// Storage service trait and in-memory entity store
pub mod storage;
