// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds seeded and empty application routers around in-memory storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

#![allow(dead_code)]

use acelera_server::config::ServerConfig;
use acelera_server::resources::ServerResources;
use acelera_server::server::HttpServer;
use acelera_server::storage::MemoryStorage;
use std::sync::Arc;

/// Resources around a store populated with the demonstration data
pub fn seeded_resources() -> Arc<ServerResources> {
    let storage = Arc::new(MemoryStorage::seeded());
    Arc::new(ServerResources::new(storage, ServerConfig::default()))
}

/// Resources around an empty store
pub fn empty_resources() -> Arc<ServerResources> {
    let storage = Arc::new(MemoryStorage::new());
    Arc::new(ServerResources::new(storage, ServerConfig::default()))
}

/// Full application router over seeded storage
pub fn seeded_app() -> axum::Router {
    HttpServer::new(seeded_resources()).router()
}

/// Full application router over empty storage
pub fn empty_app() -> axum::Router {
    HttpServer::new(empty_resources()).router()
}
