// ABOUTME: Integration tests for the training plan store manager
// ABOUTME: Covers transactional creation, entry ordering, wholesale replacement, and deletion
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use liftlog_core::models::{
    CreatePlanExerciseRequest, CreatePlanRequest, MuscleGroup, UpdatePlanRequest,
};

async fn two_exercise_ids(database: &liftlog::database::Database) -> (i64, i64) {
    let exercises = database
        .exercises()
        .list(Some(MuscleGroup::Chest))
        .await
        .unwrap();
    (exercises[0].id, exercises[1].id)
}

fn entry(exercise_id: i64, order_index: i64) -> CreatePlanExerciseRequest {
    CreatePlanExerciseRequest {
        exercise_id,
        target_sets: 4,
        target_reps: 8,
        order_index,
    }
}

#[tokio::test]
async fn test_create_with_ordered_entries() {
    let database = common::create_test_database().await;
    let (first, second) = two_exercise_ids(&database).await;

    let plan = database
        .plans()
        .create(&CreatePlanRequest {
            name: "Push Day".into(),
            description: "Chest focus".into(),
            exercises: vec![entry(second, 2), entry(first, 1)],
        })
        .await
        .unwrap();

    assert_eq!(plan.name, "Push Day");
    assert_eq!(plan.exercises.len(), 2);
    // Ordered by order_index, not insertion order
    assert_eq!(plan.exercises[0].exercise_id, first);
    assert_eq!(plan.exercises[1].exercise_id, second);
    assert!(plan.exercises[0].exercise_name.is_some());
}

#[tokio::test]
async fn test_create_rejects_unknown_exercise_entry() {
    let database = common::create_test_database().await;
    let result = database
        .plans()
        .create(&CreatePlanRequest {
            name: "Broken".into(),
            description: String::new(),
            exercises: vec![entry(999_999, 1)],
        })
        .await;
    assert!(result.is_err());
    // Nothing is half-written
    assert!(database.plans().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_entry_list_wholesale() {
    let database = common::create_test_database().await;
    let (first, second) = two_exercise_ids(&database).await;

    let plan = database
        .plans()
        .create(&CreatePlanRequest {
            name: "Upper".into(),
            description: String::new(),
            exercises: vec![entry(first, 1), entry(second, 2)],
        })
        .await
        .unwrap();

    let updated = database
        .plans()
        .update(
            plan.id,
            &UpdatePlanRequest {
                name: Some("Upper A".into()),
                description: None,
                exercises: Some(vec![entry(second, 1)]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Upper A");
    assert_eq!(updated.exercises.len(), 1);
    assert_eq!(updated.exercises[0].exercise_id, second);
}

#[tokio::test]
async fn test_update_without_entries_keeps_existing_list() {
    let database = common::create_test_database().await;
    let (first, _) = two_exercise_ids(&database).await;

    let plan = database
        .plans()
        .create(&CreatePlanRequest {
            name: "Lower".into(),
            description: String::new(),
            exercises: vec![entry(first, 1)],
        })
        .await
        .unwrap();

    let updated = database
        .plans()
        .update(
            plan.id,
            &UpdatePlanRequest {
                name: None,
                description: Some("Squat focus".into()),
                exercises: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.description, "Squat focus");
    assert_eq!(updated.exercises.len(), 1);
}

#[tokio::test]
async fn test_delete_cascades_entries() {
    let database = common::create_test_database().await;
    let (first, _) = two_exercise_ids(&database).await;

    let plan = database
        .plans()
        .create(&CreatePlanRequest {
            name: "Temp".into(),
            description: String::new(),
            exercises: vec![entry(first, 1)],
        })
        .await
        .unwrap();

    database.plans().delete(plan.id).await.unwrap();
    assert!(database.plans().get(plan.id).await.is_err());

    let orphans: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM plan_exercises WHERE plan_id = ?")
            .bind(plan.id)
            .fetch_one(database.pool())
            .await
            .unwrap();
    assert_eq!(orphans, 0);
}
