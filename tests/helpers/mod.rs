// ABOUTME: Shared helper modules for integration tests
// ABOUTME: Re-exports the axum request/response test utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

pub mod axum_test;
