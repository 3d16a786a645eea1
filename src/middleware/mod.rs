// ABOUTME: HTTP middleware for the Acelera API server
// ABOUTME: Currently hosts the CORS layer configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

/// CORS middleware configuration
pub mod cors;

pub use cors::setup_cors;
