// ABOUTME: Integration tests for the in-memory storage service
// ABOUTME: Covers CRUD, partial updates, ranking order, points upsert, and date filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use acelera_server::models::{
    Difficulty, InsertBodyMetrics, InsertExercise, InsertPayment, InsertSubscription, InsertUser,
    InsertUserPoints, InsertUserWorkout, InsertWorkout, PaymentUpdate, SubscriptionUpdate,
    UserType, UserWorkoutUpdate, WorkoutExercise, WorkoutProgress, WorkoutUpdate,
};
use acelera_server::storage::{MemoryStorage, Storage};
use chrono::{Duration, TimeZone, Utc};

fn sample_user(username: &str) -> InsertUser {
    InsertUser {
        username: username.to_owned(),
        email: format!("{username}@email.com"),
        password: "hashed_password".into(),
        first_name: "Ana".into(),
        last_name: "Souza".into(),
        user_type: UserType::Student,
        profile_image: None,
    }
}

fn sample_workout(name: &str) -> InsertWorkout {
    InsertWorkout {
        name: name.to_owned(),
        description: Some("Treino de teste".into()),
        category: "chest".into(),
        duration: 40,
        difficulty: Difficulty::Beginner,
        exercises: vec![WorkoutExercise {
            name: "Supino Reto".into(),
            sets: Some(3),
            reps: Some(12),
            weight: Some(60.0),
            duration: None,
            rest: None,
        }],
        video_url: None,
        created_by: None,
        is_public: true,
        price: None,
    }
}

#[tokio::test]
async fn test_created_workout_round_trips_through_get() {
    let storage = MemoryStorage::new();

    let created = storage.create_workout(sample_workout("Treino A")).await.unwrap();
    let fetched = storage.get_workout(&created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_workout_update_merges_only_provided_fields() {
    let storage = MemoryStorage::new();
    let created = storage.create_workout(sample_workout("Treino A")).await.unwrap();

    let updated = storage
        .update_workout(
            &created.id,
            WorkoutUpdate {
                duration: Some(55),
                ..WorkoutUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.duration, 55);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.exercises, created.exercises);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_with_unknown_id_returns_none_and_mutates_nothing() {
    let storage = MemoryStorage::new();
    let created = storage.create_workout(sample_workout("Treino A")).await.unwrap();

    let result = storage
        .update_workout(
            "missing",
            WorkoutUpdate {
                name: Some("Renamed".into()),
                ..WorkoutUpdate::default()
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
    let untouched = storage.get_workout(&created.id).await.unwrap().unwrap();
    assert_eq!(untouched.name, "Treino A");
}

#[tokio::test]
async fn test_user_lookup_by_username_and_email() {
    let storage = MemoryStorage::new();
    let created = storage.create_user(sample_user("ana")).await.unwrap();

    let by_username = storage.get_user_by_username("ana").await.unwrap();
    let by_email = storage.get_user_by_email("ana@email.com").await.unwrap();

    assert_eq!(by_username.as_ref().map(|u| u.id.as_str()), Some(created.id.as_str()));
    assert_eq!(by_email, by_username);
    assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_ranking_sorts_by_points_desc_with_stable_ties() {
    let storage = MemoryStorage::new();
    assert!(storage.get_users_ranking().await.unwrap().is_empty());

    for (user_id, points) in [("a", 100), ("c", 250), ("b", 100)] {
        storage
            .create_or_update_user_points(InsertUserPoints {
                user_id: user_id.into(),
                points: Some(points),
                workouts_completed: None,
                streak: None,
                last_workout_date: None,
            })
            .await
            .unwrap();
    }

    let ranking = storage.get_users_ranking().await.unwrap();
    let order: Vec<&str> = ranking.iter().map(|e| e.points.user_id.as_str()).collect();
    assert_eq!(order, ["c", "a", "b"]);
    // No users were created, joins stay null
    assert!(ranking.iter().all(|e| e.user.is_none()));
}

#[tokio::test]
async fn test_ranking_attaches_user_profile_when_present() {
    let storage = MemoryStorage::new();
    let user = storage.create_user(sample_user("ana")).await.unwrap();
    storage
        .create_or_update_user_points(InsertUserPoints {
            user_id: user.id.clone(),
            points: Some(500),
            workouts_completed: None,
            streak: None,
            last_workout_date: None,
        })
        .await
        .unwrap();

    let ranking = storage.get_users_ranking().await.unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].user.as_ref().map(|u| u.username.as_str()), Some("ana"));
}

#[tokio::test]
async fn test_points_upsert_keeps_one_record_with_stable_id() {
    let storage = MemoryStorage::new();

    let first = storage
        .create_or_update_user_points(InsertUserPoints {
            user_id: "u1".into(),
            points: Some(100),
            workouts_completed: Some(5),
            streak: Some(3),
            last_workout_date: None,
        })
        .await
        .unwrap();

    let second = storage
        .create_or_update_user_points(InsertUserPoints {
            user_id: "u1".into(),
            points: Some(150),
            workouts_completed: None,
            streak: None,
            last_workout_date: None,
        })
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.points, 150);
    // Omitted fields keep their stored values
    assert_eq!(second.workouts_completed, 5);
    assert_eq!(second.streak, 3);
    assert_eq!(storage.get_users_ranking().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_points_fields_default_to_zero_on_insert() {
    let storage = MemoryStorage::new();

    let record = storage
        .create_or_update_user_points(InsertUserPoints {
            user_id: "u1".into(),
            points: None,
            workouts_completed: None,
            streak: None,
            last_workout_date: None,
        })
        .await
        .unwrap();

    assert_eq!(record.points, 0);
    assert_eq!(record.workouts_completed, 0);
    assert_eq!(record.streak, 0);
}

#[tokio::test]
async fn test_workouts_by_date_ignores_time_of_day() {
    let storage = MemoryStorage::new();
    let day = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();

    for (hour, workout_id) in [(6, "w1"), (22, "w2")] {
        storage
            .create_user_workout(InsertUserWorkout {
                user_id: "u1".into(),
                workout_id: workout_id.into(),
                scheduled_date: Some(day + Duration::hours(hour)),
                completed_date: None,
                progress: None,
                notes: None,
            })
            .await
            .unwrap();
    }
    // Different day, same user
    storage
        .create_user_workout(InsertUserWorkout {
            user_id: "u1".into(),
            workout_id: "w3".into(),
            scheduled_date: Some(day + Duration::days(1)),
            completed_date: None,
            progress: None,
            notes: None,
        })
        .await
        .unwrap();

    let same_day = storage
        .get_user_workouts_by_date("u1", day.date_naive())
        .await
        .unwrap();
    assert_eq!(same_day.len(), 2);
}

#[tokio::test]
async fn test_unscheduled_instances_never_match_a_date() {
    let storage = MemoryStorage::new();
    storage
        .create_user_workout(InsertUserWorkout {
            user_id: "u1".into(),
            workout_id: "w1".into(),
            scheduled_date: None,
            completed_date: None,
            progress: None,
            notes: None,
        })
        .await
        .unwrap();

    let today = storage
        .get_user_workouts_by_date("u1", Utc::now().date_naive())
        .await
        .unwrap();
    assert!(today.is_empty());
}

#[tokio::test]
async fn test_progress_update_marks_completion() {
    let storage = MemoryStorage::new();
    let scheduled = storage
        .create_user_workout(InsertUserWorkout {
            user_id: "u1".into(),
            workout_id: "w1".into(),
            scheduled_date: Some(Utc::now()),
            completed_date: None,
            progress: Some(WorkoutProgress {
                completed_exercises: 0,
                total_exercises: 4,
            }),
            notes: None,
        })
        .await
        .unwrap();

    let completed_at = Utc::now();
    let updated = storage
        .update_user_workout(
            &scheduled.id,
            UserWorkoutUpdate {
                progress: Some(WorkoutProgress {
                    completed_exercises: 4,
                    total_exercises: 4,
                }),
                completed_date: Some(completed_at),
                ..UserWorkoutUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.completed_date, Some(completed_at));
    assert_eq!(
        updated.progress.map(|p| p.completed_exercises),
        Some(4)
    );
    assert_eq!(updated.scheduled_date, scheduled.scheduled_date);
}

#[tokio::test]
async fn test_latest_metrics_is_newest_measurement() {
    let storage = MemoryStorage::new();
    assert!(storage.get_latest_body_metrics("u1").await.unwrap().is_none());

    for weight in ["80.0", "79.1", "78.4"] {
        storage
            .create_body_metrics(InsertBodyMetrics {
                user_id: "u1".into(),
                weight: Some(weight.into()),
                body_fat: None,
                muscle_mass: None,
                hydration: None,
            })
            .await
            .unwrap();
    }

    let latest = storage.get_latest_body_metrics("u1").await.unwrap().unwrap();
    assert_eq!(latest.weight.as_deref(), Some("78.4"));

    let history = storage.get_body_metrics("u1").await.unwrap();
    assert_eq!(history.len(), 3);
    assert!(history.windows(2).all(|w| w[0].measured_at >= w[1].measured_at));
}

#[tokio::test]
async fn test_subscription_lookup_only_returns_active() {
    let storage = MemoryStorage::new();
    let now = Utc::now();

    storage
        .create_subscription(InsertSubscription {
            user_id: "u1".into(),
            plan_name: "Basic".into(),
            plan_type: "monthly".into(),
            amount: "19.90".into(),
            status: "cancelled".into(),
            start_date: now - Duration::days(90),
            end_date: now - Duration::days(60),
            payment_method: None,
        })
        .await
        .unwrap();
    assert!(storage.get_user_subscription("u1").await.unwrap().is_none());

    let active = storage
        .create_subscription(InsertSubscription {
            user_id: "u1".into(),
            plan_name: "Premium".into(),
            plan_type: "monthly".into(),
            amount: "29.90".into(),
            status: "active".into(),
            start_date: now,
            end_date: now + Duration::days(30),
            payment_method: Some("credit_card".into()),
        })
        .await
        .unwrap();

    let found = storage.get_user_subscription("u1").await.unwrap().unwrap();
    assert_eq!(found.id, active.id);
    assert_eq!(found.plan_name, "Premium");
}

#[tokio::test]
async fn test_payment_history_is_newest_first_per_user() {
    let storage = MemoryStorage::new();
    let now = Utc::now();

    for (user_id, status) in [("u1", "paid"), ("u2", "paid"), ("u1", "pending")] {
        storage
            .create_payment(InsertPayment {
                subscription_id: "s1".into(),
                user_id: user_id.into(),
                amount: "29.90".into(),
                status: status.into(),
                payment_method: "credit_card".into(),
                transaction_id: None,
                due_date: now,
                paid_date: None,
            })
            .await
            .unwrap();
    }

    let history = storage.get_user_payments("u1").await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert!(history.iter().all(|p| p.user_id == "u1"));
}

#[tokio::test]
async fn test_workouts_filter_by_creator() {
    let storage = MemoryStorage::new();
    let trainer = storage.create_user(sample_user("carlos")).await.unwrap();

    let mut mine = sample_workout("Treino do Carlos");
    mine.created_by = Some(trainer.id.clone());
    storage.create_workout(mine).await.unwrap();
    storage.create_workout(sample_workout("Treino Anônimo")).await.unwrap();

    let by_trainer = storage.get_workouts_by_user(&trainer.id).await.unwrap();
    assert_eq!(by_trainer.len(), 1);
    assert_eq!(by_trainer[0].name, "Treino do Carlos");
    assert_eq!(storage.get_workouts().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_plans_filter_by_trainer() {
    let storage = MemoryStorage::seeded();

    let by_trainer = storage.get_workout_plans_by_trainer("trainer1").await.unwrap();
    assert_eq!(by_trainer.len(), 1);
    assert!(storage
        .get_workout_plans_by_trainer("nobody")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_created_exercise_is_retrievable() {
    let storage = MemoryStorage::new();

    let created = storage
        .create_exercise(InsertExercise {
            name: "Remada Baixa".into(),
            description: None,
            muscle_group: "back".into(),
            equipment: Some("cable".into()),
            difficulty: Difficulty::Beginner,
            instructions: vec!["Puxe o triângulo até o abdômen".into()],
            video_url: None,
            image_url: None,
            tips: Vec::new(),
            variations: Vec::new(),
        })
        .await
        .unwrap();

    let fetched = storage.get_exercise(&created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
    assert_eq!(
        storage.get_exercises_by_muscle_group("back").await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_cancelling_a_subscription_removes_it_from_lookup() {
    let storage = MemoryStorage::seeded();
    let active = storage.get_user_subscription("user1").await.unwrap().unwrap();

    let cancelled = storage
        .update_subscription(
            &active.id,
            SubscriptionUpdate {
                status: Some("cancelled".into()),
                ..SubscriptionUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cancelled.status, "cancelled");
    assert!(storage.get_user_subscription("user1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_marking_a_payment_paid() {
    let storage = MemoryStorage::seeded();
    let paid_at = Utc::now();

    let updated = storage
        .update_payment(
            "pay2",
            PaymentUpdate {
                status: Some("paid".into()),
                transaction_id: Some("tx_987654321".into()),
                paid_date: Some(paid_at),
                ..PaymentUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, "paid");
    assert_eq!(updated.transaction_id.as_deref(), Some("tx_987654321"));
    assert_eq!(updated.paid_date, Some(paid_at));

    assert!(storage
        .update_payment("missing", PaymentUpdate::default())
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_seeded_store_resolves_demo_user() {
    let storage = MemoryStorage::seeded();

    let user = storage.get_user("user1").await.unwrap().unwrap();
    assert_eq!(user.username, "joaosilva");

    let exercises = storage.get_exercises().await.unwrap();
    assert_eq!(exercises.len(), 18);

    let chest = storage.get_exercises_by_muscle_group("chest").await.unwrap();
    assert!(!chest.is_empty());
    assert!(chest.iter().all(|e| e.muscle_group == "chest"));
}
