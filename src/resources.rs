// ABOUTME: Shared server resources container for dependency injection
// ABOUTME: Bundles storage and configuration behind Arcs for cheap cloning into handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Centralized resource container
//!
//! Expensive-to-build dependencies are created once at startup and shared
//! through `Arc<ServerResources>` instead of being passed individually.

use crate::config::ServerConfig;
use crate::storage::Storage;
use std::sync::Arc;

/// Container for all shared server dependencies
pub struct ServerResources {
    /// Entity storage backend
    pub storage: Arc<dyn Storage>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create a new resource container
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }
}
