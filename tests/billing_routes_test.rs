// ABOUTME: Integration tests for billing, metrics, and exercise route handlers
// ABOUTME: Covers subscription lookup, payment ordering, measurements, and library filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{empty_app, seeded_app};
use helpers::axum_test::AxumTestRequest;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_current_subscription_is_the_active_one() {
    let response = AxumTestRequest::get("/api/subscription/current")
        .send(seeded_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let subscription: Value = response.json();
    assert_eq!(subscription["planName"], "Premium");
    assert_eq!(subscription["status"], "active");
    assert_eq!(subscription["amount"], "29.90");
}

#[tokio::test]
async fn test_current_subscription_is_null_without_one() {
    let response = AxumTestRequest::get("/api/subscription/current")
        .send(empty_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let subscription: Value = response.json();
    assert!(subscription.is_null());
}

#[tokio::test]
async fn test_payment_history_is_newest_first() {
    let response = AxumTestRequest::get("/api/payments/history")
        .send(seeded_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let payments: Vec<Value> = response.json();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0]["status"], "pending");
    assert_eq!(payments[1]["status"], "paid");
    assert_eq!(payments[1]["transactionId"], "tx_123456789");
}

#[tokio::test]
async fn test_latest_metrics_round_trip() {
    let app = seeded_app();

    let seeded = AxumTestRequest::get("/api/metrics").send(app.clone()).await;
    assert_eq!(seeded.status_code(), StatusCode::OK);
    let metrics: Value = seeded.json();
    assert_eq!(metrics["weight"], "75.2");

    let created = AxumTestRequest::post("/api/metrics")
        .json(&json!({
            "userId": "user1",
            "weight": "74.8",
            "bodyFat": "12.1"
        }))
        .send(app.clone())
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);

    let latest: Value = AxumTestRequest::get("/api/metrics").send(app).await.json();
    assert_eq!(latest["weight"], "74.8");
}

#[tokio::test]
async fn test_metrics_missing_user_id_is_rejected() {
    let response = AxumTestRequest::post("/api/metrics")
        .json(&json!({ "weight": "74.8" }))
        .send(seeded_app())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "userId");
}

#[tokio::test]
async fn test_metrics_is_null_without_measurements() {
    let response = AxumTestRequest::get("/api/metrics").send(empty_app()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let metrics: Value = response.json();
    assert!(metrics.is_null());
}

#[tokio::test]
async fn test_exercise_library_filters_by_muscle_group() {
    let app = seeded_app();

    let all: Vec<Value> = AxumTestRequest::get("/api/exercises")
        .send(app.clone())
        .await
        .json();
    assert_eq!(all.len(), 18);

    let chest: Vec<Value> = AxumTestRequest::get("/api/exercises/muscle-group/chest")
        .send(app.clone())
        .await
        .json();
    assert!(!chest.is_empty());
    assert!(chest.iter().all(|e| e["muscleGroup"] == "chest"));

    let unknown: Vec<Value> = AxumTestRequest::get("/api/exercises/muscle-group/neck")
        .send(app)
        .await
        .json();
    assert!(unknown.is_empty());
}
