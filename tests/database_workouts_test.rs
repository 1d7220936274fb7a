// ABOUTME: Integration tests for the workout record store manager
// ABOUTME: Covers creation, filtered listing, ordering, merge updates, and deletion
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use chrono::NaiveDate;
use liftlog_core::models::{
    CreateExerciseRequest, CreateWorkoutRequest, MuscleGroup, UpdateWorkoutRequest, WorkoutFilter,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn workout(exercise_id: i64, on: &str, weight: f64) -> CreateWorkoutRequest {
    CreateWorkoutRequest {
        exercise_id,
        date: date(on),
        sets: 3,
        reps: 8,
        weight,
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_create_joins_exercise_info() {
    let database = common::create_test_database().await;
    let exercise = database
        .exercises()
        .create(&CreateExerciseRequest {
            name: "Paused Squat".into(),
            muscle_group: MuscleGroup::Legs,
        })
        .await
        .unwrap();

    let created = database
        .workouts()
        .create(&workout(exercise.id, "2024-03-01", 100.0))
        .await
        .unwrap();

    assert_eq!(created.exercise_name.as_deref(), Some("Paused Squat"));
    assert_eq!(created.muscle_group, Some(MuscleGroup::Legs));
    assert!((created.volume() - 2400.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_create_rejects_unknown_exercise() {
    let database = common::create_test_database().await;
    let result = database
        .workouts()
        .create(&workout(999_999, "2024-03-01", 100.0))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_is_newest_first_and_filterable() {
    let database = common::create_test_database().await;
    let exercise = database
        .exercises()
        .create(&CreateExerciseRequest {
            name: "Push Press".into(),
            muscle_group: MuscleGroup::Shoulders,
        })
        .await
        .unwrap();
    let workouts = database.workouts();

    workouts.create(&workout(exercise.id, "2024-03-01", 50.0)).await.unwrap();
    workouts.create(&workout(exercise.id, "2024-03-05", 55.0)).await.unwrap();
    workouts.create(&workout(exercise.id, "2024-03-03", 52.5)).await.unwrap();

    let filter = WorkoutFilter {
        exercise_id: Some(exercise.id),
        ..WorkoutFilter::default()
    };
    let listed = workouts.list(&filter).await.unwrap();
    let dates: Vec<NaiveDate> = listed.iter().map(|w| w.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-03-05"), date("2024-03-03"), date("2024-03-01")]
    );

    let ranged = workouts
        .list(&WorkoutFilter {
            exercise_id: Some(exercise.id),
            start_date: Some(date("2024-03-02")),
            end_date: Some(date("2024-03-04")),
            ..WorkoutFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(ranged.len(), 1);
    assert_eq!(ranged[0].date, date("2024-03-03"));

    let exact = workouts
        .list(&WorkoutFilter {
            date: Some(date("2024-03-05")),
            ..WorkoutFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(exact.len(), 1);
    assert!((exact[0].weight - 55.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_update_merges_partial_fields() {
    let database = common::create_test_database().await;
    let exercise = database
        .exercises()
        .create(&CreateExerciseRequest {
            name: "Hip Thrust".into(),
            muscle_group: MuscleGroup::Legs,
        })
        .await
        .unwrap();

    let created = database
        .workouts()
        .create(&workout(exercise.id, "2024-03-01", 80.0))
        .await
        .unwrap();

    let updated = database
        .workouts()
        .update(
            created.id,
            &UpdateWorkoutRequest {
                exercise_id: None,
                date: None,
                sets: None,
                reps: Some(12),
                weight: Some(85.0),
                notes: Some("belt on".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.date, date("2024-03-01"));
    assert_eq!(updated.sets, 3);
    assert_eq!(updated.reps, 12);
    assert!((updated.weight - 85.0).abs() < f64::EPSILON);
    assert_eq!(updated.notes, "belt on");
}

#[tokio::test]
async fn test_update_rejects_unknown_exercise_reference() {
    let database = common::create_test_database().await;
    let exercise = database
        .exercises()
        .create(&CreateExerciseRequest {
            name: "Good Morning".into(),
            muscle_group: MuscleGroup::Back,
        })
        .await
        .unwrap();
    let created = database
        .workouts()
        .create(&workout(exercise.id, "2024-03-01", 40.0))
        .await
        .unwrap();

    let result = database
        .workouts()
        .update(
            created.id,
            &UpdateWorkoutRequest {
                exercise_id: Some(999_999),
                date: None,
                sets: None,
                reps: None,
                weight: None,
                notes: None,
            },
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_removes_record() {
    let database = common::create_test_database().await;
    let exercise = database
        .exercises()
        .create(&CreateExerciseRequest {
            name: "Snatch".into(),
            muscle_group: MuscleGroup::Shoulders,
        })
        .await
        .unwrap();
    let created = database
        .workouts()
        .create(&workout(exercise.id, "2024-03-01", 70.0))
        .await
        .unwrap();

    database.workouts().delete(created.id).await.unwrap();
    assert!(database.workouts().get(created.id).await.is_err());
    assert!(database.workouts().delete(created.id).await.is_err());
}
