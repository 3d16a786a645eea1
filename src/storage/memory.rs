// ABOUTME: In-memory entity store backing the Storage trait
// ABOUTME: Holds per-entity HashMaps behind a tokio RwLock, seeded with demo data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! In-memory [`Storage`] implementation
//!
//! One `HashMap<String, T>` per entity type, all behind a single
//! `tokio::sync::RwLock` so concurrent handlers are safe. No eviction, no
//! capacity bound, no persistence across restarts; seed data is regenerated
//! each start.

use super::{RankingEntry, Storage};
use crate::models::{
    BodyMetrics, Exercise, InsertBodyMetrics, InsertExercise, InsertPayment, InsertSubscription,
    InsertUser, InsertUserPoints, InsertUserWorkout, InsertWorkout, InsertWorkoutPlan, Payment,
    PaymentUpdate, Subscription, SubscriptionUpdate, User, UserPoints, UserWorkout,
    UserWorkoutUpdate, Workout, WorkoutPlan, WorkoutUpdate,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// All entity collections, keyed by generated id
#[derive(Debug, Default)]
pub(super) struct Collections {
    pub users: HashMap<String, User>,
    pub workouts: HashMap<String, Workout>,
    pub user_workouts: HashMap<String, UserWorkout>,
    pub body_metrics: HashMap<String, BodyMetrics>,
    pub workout_plans: HashMap<String, WorkoutPlan>,
    pub user_points: HashMap<String, UserPoints>,
    pub exercises: HashMap<String, Exercise>,
    pub subscriptions: HashMap<String, Subscription>,
    pub payments: HashMap<String, Payment>,
}

/// In-memory entity store
pub struct MemoryStorage {
    state: RwLock<Collections>,
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Collections::default()),
        }
    }

    /// Create a store populated with the demonstration data set
    #[must_use]
    pub fn seeded() -> Self {
        let mut collections = Collections::default();
        super::seed::populate(&mut collections);
        Self {
            state: RwLock::new(collections),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.username == username).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, insert: InsertUser) -> Result<User> {
        let user = User {
            id: fresh_id(),
            username: insert.username,
            email: insert.email,
            password: insert.password,
            first_name: insert.first_name,
            last_name: insert.last_name,
            user_type: insert.user_type,
            profile_image: insert.profile_image,
            created_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_workout(&self, id: &str) -> Result<Option<Workout>> {
        Ok(self.state.read().await.workouts.get(id).cloned())
    }

    async fn get_workouts(&self) -> Result<Vec<Workout>> {
        Ok(self.state.read().await.workouts.values().cloned().collect())
    }

    async fn get_workouts_by_user(&self, user_id: &str) -> Result<Vec<Workout>> {
        let state = self.state.read().await;
        Ok(state
            .workouts
            .values()
            .filter(|w| w.created_by.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_workout(&self, insert: InsertWorkout) -> Result<Workout> {
        let workout = Workout {
            id: fresh_id(),
            name: insert.name,
            description: insert.description,
            category: insert.category,
            duration: insert.duration,
            difficulty: insert.difficulty,
            exercises: insert.exercises,
            video_url: insert.video_url,
            created_by: insert.created_by,
            is_public: insert.is_public,
            price: insert.price,
            created_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state.workouts.insert(workout.id.clone(), workout.clone());
        Ok(workout)
    }

    async fn update_workout(&self, id: &str, update: WorkoutUpdate) -> Result<Option<Workout>> {
        let mut state = self.state.write().await;
        let Some(workout) = state.workouts.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            workout.name = name;
        }
        if let Some(description) = update.description {
            workout.description = Some(description);
        }
        if let Some(category) = update.category {
            workout.category = category;
        }
        if let Some(duration) = update.duration {
            workout.duration = duration;
        }
        if let Some(difficulty) = update.difficulty {
            workout.difficulty = difficulty;
        }
        if let Some(exercises) = update.exercises {
            workout.exercises = exercises;
        }
        if let Some(video_url) = update.video_url {
            workout.video_url = Some(video_url);
        }
        if let Some(is_public) = update.is_public {
            workout.is_public = is_public;
        }
        if let Some(price) = update.price {
            workout.price = Some(price);
        }
        Ok(Some(workout.clone()))
    }

    async fn get_user_workouts(&self, user_id: &str) -> Result<Vec<UserWorkout>> {
        let state = self.state.read().await;
        Ok(state
            .user_workouts
            .values()
            .filter(|uw| uw.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_user_workouts_by_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<UserWorkout>> {
        let state = self.state.read().await;
        Ok(state
            .user_workouts
            .values()
            .filter(|uw| {
                uw.user_id == user_id
                    && uw
                        .scheduled_date
                        .is_some_and(|scheduled| scheduled.date_naive() == date)
            })
            .cloned()
            .collect())
    }

    async fn create_user_workout(&self, insert: InsertUserWorkout) -> Result<UserWorkout> {
        let user_workout = UserWorkout {
            id: fresh_id(),
            user_id: insert.user_id,
            workout_id: insert.workout_id,
            scheduled_date: insert.scheduled_date,
            completed_date: insert.completed_date,
            progress: insert.progress,
            notes: insert.notes,
        };
        let mut state = self.state.write().await;
        state
            .user_workouts
            .insert(user_workout.id.clone(), user_workout.clone());
        Ok(user_workout)
    }

    async fn update_user_workout(
        &self,
        id: &str,
        update: UserWorkoutUpdate,
    ) -> Result<Option<UserWorkout>> {
        let mut state = self.state.write().await;
        let Some(user_workout) = state.user_workouts.get_mut(id) else {
            return Ok(None);
        };
        if let Some(scheduled_date) = update.scheduled_date {
            user_workout.scheduled_date = Some(scheduled_date);
        }
        if let Some(completed_date) = update.completed_date {
            user_workout.completed_date = Some(completed_date);
        }
        if let Some(progress) = update.progress {
            user_workout.progress = Some(progress);
        }
        if let Some(notes) = update.notes {
            user_workout.notes = Some(notes);
        }
        Ok(Some(user_workout.clone()))
    }

    async fn get_body_metrics(&self, user_id: &str) -> Result<Vec<BodyMetrics>> {
        let state = self.state.read().await;
        let mut metrics: Vec<BodyMetrics> = state
            .body_metrics
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        metrics.sort_by(|a, b| b.measured_at.cmp(&a.measured_at));
        Ok(metrics)
    }

    async fn get_latest_body_metrics(&self, user_id: &str) -> Result<Option<BodyMetrics>> {
        let metrics = self.get_body_metrics(user_id).await?;
        Ok(metrics.into_iter().next())
    }

    async fn create_body_metrics(&self, insert: InsertBodyMetrics) -> Result<BodyMetrics> {
        let metrics = BodyMetrics {
            id: fresh_id(),
            user_id: insert.user_id,
            weight: insert.weight,
            body_fat: insert.body_fat,
            muscle_mass: insert.muscle_mass,
            hydration: insert.hydration,
            measured_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state.body_metrics.insert(metrics.id.clone(), metrics.clone());
        Ok(metrics)
    }

    async fn get_workout_plans(&self) -> Result<Vec<WorkoutPlan>> {
        Ok(self
            .state
            .read()
            .await
            .workout_plans
            .values()
            .cloned()
            .collect())
    }

    async fn get_featured_workout_plans(&self) -> Result<Vec<WorkoutPlan>> {
        let state = self.state.read().await;
        Ok(state
            .workout_plans
            .values()
            .filter(|p| p.is_featured)
            .cloned()
            .collect())
    }

    async fn get_workout_plans_by_trainer(&self, trainer_id: &str) -> Result<Vec<WorkoutPlan>> {
        let state = self.state.read().await;
        Ok(state
            .workout_plans
            .values()
            .filter(|p| p.trainer_id.as_deref() == Some(trainer_id))
            .cloned()
            .collect())
    }

    async fn create_workout_plan(&self, insert: InsertWorkoutPlan) -> Result<WorkoutPlan> {
        let plan = WorkoutPlan {
            id: fresh_id(),
            name: insert.name,
            description: insert.description,
            trainer_id: insert.trainer_id,
            duration: insert.duration,
            price: insert.price,
            rating: "0".into(),
            review_count: 0,
            workouts: insert.workouts,
            image_url: insert.image_url,
            is_featured: insert.is_featured,
            created_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state.workout_plans.insert(plan.id.clone(), plan.clone());
        Ok(plan)
    }

    async fn get_user_points(&self, user_id: &str) -> Result<Option<UserPoints>> {
        let state = self.state.read().await;
        Ok(state
            .user_points
            .values()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn get_users_ranking(&self) -> Result<Vec<RankingEntry>> {
        let state = self.state.read().await;
        let mut records: Vec<UserPoints> = state.user_points.values().cloned().collect();
        // Deterministic order: points descending, user id ascending on ties
        records.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(records
            .into_iter()
            .map(|points| {
                let user = state.users.get(&points.user_id).cloned();
                RankingEntry { points, user }
            })
            .collect())
    }

    async fn create_or_update_user_points(&self, insert: InsertUserPoints) -> Result<UserPoints> {
        let mut state = self.state.write().await;
        let existing_id = state
            .user_points
            .values()
            .find(|p| p.user_id == insert.user_id)
            .map(|p| p.id.clone());

        if let Some(id) = existing_id {
            // Safe: id was just read from the collection under the same lock
            let record = state
                .user_points
                .get_mut(&id)
                .ok_or_else(|| anyhow::anyhow!("points record vanished during upsert"))?;
            if let Some(points) = insert.points {
                record.points = points;
            }
            if let Some(workouts_completed) = insert.workouts_completed {
                record.workouts_completed = workouts_completed;
            }
            if let Some(streak) = insert.streak {
                record.streak = streak;
            }
            if let Some(last_workout_date) = insert.last_workout_date {
                record.last_workout_date = Some(last_workout_date);
            }
            return Ok(record.clone());
        }

        let record = UserPoints {
            id: fresh_id(),
            user_id: insert.user_id,
            points: insert.points.unwrap_or(0),
            workouts_completed: insert.workouts_completed.unwrap_or(0),
            streak: insert.streak.unwrap_or(0),
            last_workout_date: insert.last_workout_date,
        };
        state.user_points.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn get_exercises(&self) -> Result<Vec<Exercise>> {
        Ok(self.state.read().await.exercises.values().cloned().collect())
    }

    async fn get_exercises_by_muscle_group(&self, muscle_group: &str) -> Result<Vec<Exercise>> {
        let state = self.state.read().await;
        Ok(state
            .exercises
            .values()
            .filter(|e| e.muscle_group == muscle_group)
            .cloned()
            .collect())
    }

    async fn get_exercise(&self, id: &str) -> Result<Option<Exercise>> {
        Ok(self.state.read().await.exercises.get(id).cloned())
    }

    async fn create_exercise(&self, insert: InsertExercise) -> Result<Exercise> {
        let exercise = Exercise {
            id: fresh_id(),
            name: insert.name,
            description: insert.description,
            muscle_group: insert.muscle_group,
            equipment: insert.equipment,
            difficulty: insert.difficulty,
            instructions: insert.instructions,
            video_url: insert.video_url,
            image_url: insert.image_url,
            tips: insert.tips,
            variations: insert.variations,
            created_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state.exercises.insert(exercise.id.clone(), exercise.clone());
        Ok(exercise)
    }

    async fn get_user_subscription(&self, user_id: &str) -> Result<Option<Subscription>> {
        let state = self.state.read().await;
        Ok(state
            .subscriptions
            .values()
            .find(|s| s.user_id == user_id && s.status == "active")
            .cloned())
    }

    async fn create_subscription(&self, insert: InsertSubscription) -> Result<Subscription> {
        let subscription = Subscription {
            id: fresh_id(),
            user_id: insert.user_id,
            plan_name: insert.plan_name,
            plan_type: insert.plan_type,
            amount: insert.amount,
            status: insert.status,
            start_date: insert.start_date,
            end_date: insert.end_date,
            payment_method: insert.payment_method,
            created_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state
            .subscriptions
            .insert(subscription.id.clone(), subscription.clone());
        Ok(subscription)
    }

    async fn update_subscription(
        &self,
        id: &str,
        update: SubscriptionUpdate,
    ) -> Result<Option<Subscription>> {
        let mut state = self.state.write().await;
        let Some(subscription) = state.subscriptions.get_mut(id) else {
            return Ok(None);
        };
        if let Some(plan_name) = update.plan_name {
            subscription.plan_name = plan_name;
        }
        if let Some(plan_type) = update.plan_type {
            subscription.plan_type = plan_type;
        }
        if let Some(amount) = update.amount {
            subscription.amount = amount;
        }
        if let Some(status) = update.status {
            subscription.status = status;
        }
        if let Some(start_date) = update.start_date {
            subscription.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            subscription.end_date = end_date;
        }
        if let Some(payment_method) = update.payment_method {
            subscription.payment_method = Some(payment_method);
        }
        Ok(Some(subscription.clone()))
    }

    async fn get_user_payments(&self, user_id: &str) -> Result<Vec<Payment>> {
        let state = self.state.read().await;
        let mut payments: Vec<Payment> = state
            .payments
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payments)
    }

    async fn create_payment(&self, insert: InsertPayment) -> Result<Payment> {
        let payment = Payment {
            id: fresh_id(),
            subscription_id: insert.subscription_id,
            user_id: insert.user_id,
            amount: insert.amount,
            status: insert.status,
            payment_method: insert.payment_method,
            transaction_id: insert.transaction_id,
            due_date: insert.due_date,
            paid_date: insert.paid_date,
            created_at: Utc::now(),
        };
        let mut state = self.state.write().await;
        state.payments.insert(payment.id.clone(), payment.clone());
        Ok(payment)
    }

    async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Option<Payment>> {
        let mut state = self.state.write().await;
        let Some(payment) = state.payments.get_mut(id) else {
            return Ok(None);
        };
        if let Some(status) = update.status {
            payment.status = status;
        }
        if let Some(payment_method) = update.payment_method {
            payment.payment_method = payment_method;
        }
        if let Some(transaction_id) = update.transaction_id {
            payment.transaction_id = Some(transaction_id);
        }
        if let Some(paid_date) = update.paid_date {
            payment.paid_date = Some(paid_date);
        }
        Ok(Some(payment.clone()))
    }
}
