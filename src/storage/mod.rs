// ABOUTME: Storage service abstraction for the Acelera entity store
// ABOUTME: Defines the Storage trait mediating every read and write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! # Storage Service
//!
//! The [`Storage`] trait is the capability layer mediating all reads and
//! writes to the entity store. The only implementation in this scope is the
//! in-memory [`MemoryStorage`], but the interface is asynchronous so a real
//! database can be swapped in behind it later without touching the routes.
//!
//! Contract, uniform per entity family:
//! - `get(id)` returns `Ok(None)` for a missing id, never an error
//! - `list`/`list_by_x` return the full matching set; no pagination, and no
//!   ordering guarantee except where documented (body metrics and payments
//!   are newest-first)
//! - `create` assigns a fresh id (and creation timestamp where applicable)
//!   and returns the stored record
//! - `update(id, partial)` shallow-merges supplied fields onto the existing
//!   record and returns `Ok(None)` when the id is absent, mutating nothing
//!
//! Relationship resolution (attaching a trainer to a plan, a workout to a
//! scheduled instance) happens at the call site as a read-time join, one
//! lookup per record.

mod memory;
mod seed;

pub use memory::MemoryStorage;

use crate::models::{
    BodyMetrics, Exercise, InsertBodyMetrics, InsertExercise, InsertPayment, InsertSubscription,
    InsertUser, InsertUserPoints, InsertUserWorkout, InsertWorkout, InsertWorkoutPlan, Payment,
    PaymentUpdate, Subscription, SubscriptionUpdate, User, UserPoints, UserWorkout,
    UserWorkoutUpdate, Workout, WorkoutPlan, WorkoutUpdate,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A points record joined with its owning user for the ranking view
#[derive(Debug, Clone, serde::Serialize)]
pub struct RankingEntry {
    /// The points record
    #[serde(flatten)]
    pub points: UserPoints,
    /// The owning user, `None` when the soft foreign key dangles
    pub user: Option<User>,
}

/// Capability interface over the entity store
#[async_trait]
pub trait Storage: Send + Sync {
    // === Users ===

    /// Look up a user by id
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Look up a user by unique username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Look up a user by unique email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Register a new user
    async fn create_user(&self, user: InsertUser) -> Result<User>;

    // === Workouts ===

    /// Look up a workout template by id
    async fn get_workout(&self, id: &str) -> Result<Option<Workout>>;

    /// List all workout templates
    async fn get_workouts(&self) -> Result<Vec<Workout>>;

    /// List workouts created by a user
    async fn get_workouts_by_user(&self, user_id: &str) -> Result<Vec<Workout>>;

    /// Create a workout template
    async fn create_workout(&self, workout: InsertWorkout) -> Result<Workout>;

    /// Shallow-merge a partial update onto a workout
    async fn update_workout(&self, id: &str, update: WorkoutUpdate) -> Result<Option<Workout>>;

    // === Scheduled workouts ===

    /// List a user's scheduled workout instances
    async fn get_user_workouts(&self, user_id: &str) -> Result<Vec<UserWorkout>>;

    /// List a user's instances scheduled on the given calendar day
    ///
    /// Matches by date, not timestamp equality; the time-of-day component of
    /// `scheduled_date` is ignored.
    async fn get_user_workouts_by_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<UserWorkout>>;

    /// Schedule a workout instance
    async fn create_user_workout(&self, user_workout: InsertUserWorkout) -> Result<UserWorkout>;

    /// Shallow-merge a progress/completion update onto a scheduled instance
    async fn update_user_workout(
        &self,
        id: &str,
        update: UserWorkoutUpdate,
    ) -> Result<Option<UserWorkout>>;

    // === Body metrics ===

    /// List a user's measurements, newest first
    async fn get_body_metrics(&self, user_id: &str) -> Result<Vec<BodyMetrics>>;

    /// The user's most recent measurement, `None` when there is none
    async fn get_latest_body_metrics(&self, user_id: &str) -> Result<Option<BodyMetrics>>;

    /// Record a measurement; `measured_at` is assigned on insert
    async fn create_body_metrics(&self, metrics: InsertBodyMetrics) -> Result<BodyMetrics>;

    // === Workout plans ===

    /// List all marketplace plans
    async fn get_workout_plans(&self) -> Result<Vec<WorkoutPlan>>;

    /// List plans flagged as featured
    async fn get_featured_workout_plans(&self) -> Result<Vec<WorkoutPlan>>;

    /// List plans authored by a trainer
    async fn get_workout_plans_by_trainer(&self, trainer_id: &str) -> Result<Vec<WorkoutPlan>>;

    /// Create a plan; rating starts at "0" with zero reviews
    async fn create_workout_plan(&self, plan: InsertWorkoutPlan) -> Result<WorkoutPlan>;

    // === User points ===

    /// Look up the points record for a user
    async fn get_user_points(&self, user_id: &str) -> Result<Option<UserPoints>>;

    /// All points records in non-increasing points order with users attached
    ///
    /// Ties break by ascending user id so the ordering is deterministic.
    async fn get_users_ranking(&self) -> Result<Vec<RankingEntry>>;

    /// Create or merge the single points record for a user
    ///
    /// When a record exists, supplied fields replace stored ones and the id
    /// is stable; otherwise a fresh record is inserted.
    async fn create_or_update_user_points(&self, points: InsertUserPoints) -> Result<UserPoints>;

    // === Exercises ===

    /// List the full exercise library
    async fn get_exercises(&self) -> Result<Vec<Exercise>>;

    /// List library exercises for one muscle group
    async fn get_exercises_by_muscle_group(&self, muscle_group: &str) -> Result<Vec<Exercise>>;

    /// Look up a library exercise by id
    async fn get_exercise(&self, id: &str) -> Result<Option<Exercise>>;

    /// Add an exercise to the library
    async fn create_exercise(&self, exercise: InsertExercise) -> Result<Exercise>;

    // === Subscriptions ===

    /// The user's active subscription, `None` when there is none
    async fn get_user_subscription(&self, user_id: &str) -> Result<Option<Subscription>>;

    /// Create a subscription
    async fn create_subscription(&self, subscription: InsertSubscription) -> Result<Subscription>;

    /// Shallow-merge a partial update onto a subscription
    async fn update_subscription(
        &self,
        id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Option<Subscription>>;

    // === Payments ===

    /// A user's payment history, newest created first
    async fn get_user_payments(&self, user_id: &str) -> Result<Vec<Payment>>;

    /// Record a payment
    async fn create_payment(&self, payment: InsertPayment) -> Result<Payment>;

    /// Shallow-merge a partial update onto a payment
    async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Option<Payment>>;
}
