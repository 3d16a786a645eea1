// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for web client access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

use crate::config::ServerConfig;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS for the API server
///
/// `CORS_ALLOWED_ORIGINS` controls cross-origin access: "*" (or empty)
/// allows any origin for development, a comma-separated list restricts to
/// specific origins for production.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin =
        if config.cors.allowed_origins.is_empty() || config.cors.allowed_origins == "*" {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = config
                .cors
                .allowed_origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorsConfig;

    #[test]
    fn test_wildcard_origins_build() {
        let config = ServerConfig::default();
        let _layer = setup_cors(&config);
    }

    #[test]
    fn test_origin_list_builds() {
        let config = ServerConfig {
            cors: CorsConfig {
                allowed_origins: "https://app.acelera.fit, https://admin.acelera.fit".into(),
            },
            ..ServerConfig::default()
        };
        let _layer = setup_cors(&config);
    }
}
