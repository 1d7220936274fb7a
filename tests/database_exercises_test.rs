// ABOUTME: Integration tests for the exercise catalog store manager
// ABOUTME: Covers seeding, CRUD, filtering, and cascade deletes
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use liftlog_core::models::{
    CreateExerciseRequest, CreateWorkoutRequest, MuscleGroup, UpdateExerciseRequest, WorkoutFilter,
};

#[tokio::test]
async fn test_fresh_database_is_seeded_with_default_catalog() {
    let database = common::create_test_database().await;
    let exercises = database.exercises().list(None).await.unwrap();

    assert!(!exercises.is_empty());
    for group in MuscleGroup::ALL {
        assert!(
            exercises.iter().any(|e| e.muscle_group == group),
            "no seeded exercise for {group}"
        );
    }
}

#[tokio::test]
async fn test_seeding_is_idempotent_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}/liftlog.db", dir.path().display());

    let first = liftlog::database::Database::new(&url).await.unwrap();
    let before = first.exercises().list(None).await.unwrap().len();
    drop(first);

    let second = liftlog::database::Database::new(&url).await.unwrap();
    let after = second.exercises().list(None).await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_create_get_update_delete() {
    let database = common::create_test_database().await;
    let exercises = database.exercises();

    let created = exercises
        .create(&CreateExerciseRequest {
            name: "Zercher Squat".into(),
            muscle_group: MuscleGroup::Legs,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Zercher Squat");
    assert_eq!(created.muscle_group, MuscleGroup::Legs);

    let fetched = exercises.get(created.id).await.unwrap();
    assert_eq!(fetched.name, created.name);

    let updated = exercises
        .update(
            created.id,
            &UpdateExerciseRequest {
                name: None,
                muscle_group: Some(MuscleGroup::Back),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Zercher Squat");
    assert_eq!(updated.muscle_group, MuscleGroup::Back);

    exercises.delete(created.id).await.unwrap();
    assert!(exercises.get(created.id).await.is_err());
}

#[tokio::test]
async fn test_list_filters_by_muscle_group() {
    let database = common::create_test_database().await;
    let legs = database
        .exercises()
        .list(Some(MuscleGroup::Legs))
        .await
        .unwrap();

    assert!(!legs.is_empty());
    assert!(legs.iter().all(|e| e.muscle_group == MuscleGroup::Legs));
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let database = common::create_test_database().await;
    assert!(database.exercises().get(999_999).await.is_err());
    assert!(database.exercises().delete(999_999).await.is_err());
}

#[tokio::test]
async fn test_deleting_exercise_cascades_to_workouts() {
    let database = common::create_test_database().await;
    let exercise = database
        .exercises()
        .create(&CreateExerciseRequest {
            name: "Cable Row".into(),
            muscle_group: MuscleGroup::Back,
        })
        .await
        .unwrap();

    database
        .workouts()
        .create(&CreateWorkoutRequest {
            exercise_id: exercise.id,
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            sets: 3,
            reps: 10,
            weight: 60.0,
            notes: String::new(),
        })
        .await
        .unwrap();

    database.exercises().delete(exercise.id).await.unwrap();

    let remaining = database
        .workouts()
        .list(&WorkoutFilter {
            exercise_id: Some(exercise.id),
            ..WorkoutFilter::default()
        })
        .await
        .unwrap();
    assert!(remaining.is_empty());
}
