// ABOUTME: Core data models for the Acelera fitness API
// ABOUTME: Defines User, Workout, BodyMetrics and the other entity types plus their payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! # Data Models
//!
//! Entity types held by the storage service, together with their insert
//! payloads (server assigns id and creation timestamp) and partial-update
//! payloads (`Option` fields express shallow-merge semantics: `Some`
//! replaces the stored value, `None` retains it).
//!
//! ## Design Principles
//!
//! - **Soft foreign keys**: relationships are plain id strings resolved by
//!   lookup at read time; the store does not enforce referential integrity
//! - **Wire-compatible**: JSON field names are camelCase and decimal-valued
//!   attributes (weights, prices, amounts, ratings) stay strings to
//!   preserve precision on the wire
//! - **Serializable**: every model derives `Serialize`/`Deserialize`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user account
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Regular member who schedules workouts and tracks progress
    Student,
    /// Personal trainer who authors workouts and marketplace plans
    Trainer,
}

/// Exercise and workout difficulty rating
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A registered user (student or trainer)
///
/// Immutable after registration in this scope. The password is an opaque
/// hash; authentication itself is out of scope so the field is carried
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier
    pub id: String,
    pub username: String,
    pub email: String,
    /// Opaque password hash
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload for a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// One exercise entry embedded in a workout
///
/// Strength entries carry sets/reps/weight; timed entries carry
/// duration/rest. The list is embedded in the workout, not normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub name: String,
    /// Number of sets for strength entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Working weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Work interval in seconds for timed entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rest interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<u32>,
}

/// A workout template authored by a trainer or user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Body-part or modality category ('chest', 'cardio', ...)
    pub category: String,
    /// Duration in minutes
    pub duration: i32,
    pub difficulty: Difficulty,
    pub exercises: Vec<WorkoutExercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Soft foreign key to the creating [`User`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    pub is_public: bool,
    /// Decimal price string, "0" for free workouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    /// Duration in minutes
    pub duration: i32,
    pub difficulty: Difficulty,
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Partial update for a workout; `None` fields retain their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<WorkoutExercise>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

/// Per-exercise completion counters for a scheduled workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    pub completed_exercises: u32,
    pub total_exercises: u32,
}

/// A user's scheduled instance of a workout, bound to a date
///
/// Tracked independently of the workout template. Completion sets
/// `completed_date`; progress counters are mutated as exercises finish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserWorkout {
    pub id: String,
    /// Soft foreign key to [`User`]
    pub user_id: String,
    /// Soft foreign key to [`Workout`]
    pub workout_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<WorkoutProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Scheduling payload for a workout instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserWorkout {
    pub user_id: String,
    pub workout_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<WorkoutProgress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update for a scheduled workout (progress/completion)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWorkoutUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<WorkoutProgress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One body measurement event; append-only per user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    pub id: String,
    /// Soft foreign key to [`User`]
    pub user_id: String,
    /// Weight in kilograms, decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Body fat percentage, decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<String>,
    /// Muscle mass in kilograms, decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<String>,
    /// Hydration percentage, decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration: Option<String>,
    pub measured_at: DateTime<Utc>,
}

/// Measurement payload; `measured_at` is assigned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBodyMetrics {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydration: Option<String>,
}

/// A trainer-authored program sold in the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Soft foreign key to the authoring trainer [`User`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    /// Program length in weeks
    pub duration: i32,
    /// Decimal price string
    pub price: String,
    /// Decimal rating string; "0" until reviews exist (no write path recomputes it)
    pub rating: String,
    pub review_count: i32,
    /// Soft foreign keys to the member [`Workout`]s
    pub workouts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a marketplace plan; rating and review count start at zero
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkoutPlan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    /// Program length in weeks
    pub duration: i32,
    pub price: String,
    pub workouts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Gamification record; at most one per user (upsert semantics)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPoints {
    pub id: String,
    /// Soft foreign key to [`User`]
    pub user_id: String,
    pub points: i64,
    pub workouts_completed: i32,
    /// Consecutive training days
    pub streak: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<DateTime<Utc>>,
}

/// Upsert payload for points; `None` fields keep the stored value on merge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserPoints {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workouts_completed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_workout_date: Option<DateTime<Utc>>,
}

/// Reference-library exercise, statically seeded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One of 'chest', 'back', 'legs', 'shoulders', 'arms', 'abs', 'cardio'
    pub muscle_group: String,
    /// 'barbell', 'dumbbell', 'machine', 'bodyweight', 'cable', ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    pub difficulty: Difficulty,
    /// Step-by-step instructions
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub tips: Vec<String>,
    pub variations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a library exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertExercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub muscle_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub variations: Vec<String>,
}

/// A user's membership subscription
///
/// Status is free text ('active', 'cancelled', 'expired', 'pending'); no
/// state machine governs transitions in this scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    /// Soft foreign key to [`User`]
    pub user_id: String,
    /// 'Básico', 'Premium', 'Elite'
    pub plan_name: String,
    /// 'monthly', 'quarterly', 'yearly'
    pub plan_type: String,
    /// Decimal amount string
    pub amount: String,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// 'credit_card', 'pix', 'boleto'
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSubscription {
    pub user_id: String,
    pub plan_name: String,
    pub plan_type: String,
    pub amount: String,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// Partial update for a subscription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// One billing-cycle payment against a subscription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    /// Soft foreign key to [`Subscription`]
    pub subscription_id: String,
    /// Soft foreign key to [`User`]
    pub user_id: String,
    /// Decimal amount string
    pub amount: String,
    /// 'paid', 'pending', 'failed', 'refunded'
    pub status: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Creation payload for a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPayment {
    pub subscription_id: String,
    pub user_id: String,
    pub amount: String,
    pub status: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<DateTime<Utc>>,
}

/// Partial update for a payment (status mutations come from outside the demo flows)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<DateTime<Utc>>,
}
