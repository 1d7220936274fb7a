// ABOUTME: Database operations for logged workout records
// ABOUTME: CRUD plus filtered listing joined with the exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite, SqlitePool};

use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{
    CreateWorkoutRequest, MuscleGroup, UpdateWorkoutRequest, Workout, WorkoutFilter,
};

use super::exercises::ExerciseManager;

/// Workout database operations manager
pub struct WorkoutManager {
    pool: SqlitePool,
}

const SELECT_WORKOUT: &str = "SELECT w.id, w.exercise_id, e.name AS exercise_name, \
     e.muscle_group, w.date, w.sets, w.reps, w.weight, w.notes, w.created_at \
     FROM workouts w JOIN exercises e ON e.id = w.exercise_id";

fn workout_from_row(row: &SqliteRow) -> AppResult<Workout> {
    let muscle_group: String = row.try_get("muscle_group")?;
    let created_at: NaiveDateTime = row.try_get("created_at")?;
    Ok(Workout {
        id: row.try_get("id")?,
        exercise_id: row.try_get("exercise_id")?,
        exercise_name: Some(row.try_get("exercise_name")?),
        muscle_group: Some(MuscleGroup::from_str(&muscle_group)?),
        date: row.try_get("date")?,
        sets: row.try_get("sets")?,
        reps: row.try_get("reps")?,
        weight: row.try_get("weight")?,
        notes: row.try_get("notes")?,
        created_at: created_at.and_utc(),
    })
}

impl WorkoutManager {
    /// Create a new workout manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List workout records matching the filter, most recent first
    /// (date descending, ties by ID descending)
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self, filter: &WorkoutFilter) -> AppResult<Vec<Workout>> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_WORKOUT);
        builder.push(" WHERE 1 = 1");
        if let Some(exercise_id) = filter.exercise_id {
            builder.push(" AND w.exercise_id = ").push_bind(exercise_id);
        }
        if let Some(date) = filter.date {
            builder.push(" AND w.date = ").push_bind(date);
        }
        if let Some(start) = filter.start_date {
            builder.push(" AND w.date >= ").push_bind(start);
        }
        if let Some(end) = filter.end_date {
            builder.push(" AND w.date <= ").push_bind(end);
        }
        builder.push(" ORDER BY w.date DESC, w.id DESC");

        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(workout_from_row).collect()
    }

    /// Fetch one workout record by ID
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the record does not exist
    pub async fn get(&self, id: i64) -> AppResult<Workout> {
        let sql = format!("{SELECT_WORKOUT} WHERE w.id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;
        workout_from_row(&row)
    }

    /// Create a new workout record
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the referenced exercise does not exist
    pub async fn create(&self, request: &CreateWorkoutRequest) -> AppResult<Workout> {
        ExerciseManager::new(self.pool.clone())
            .ensure_exists(request.exercise_id)
            .await?;

        let result = sqlx::query(
            "INSERT INTO workouts (exercise_id, date, sets, reps, weight, notes)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(request.exercise_id)
        .bind(request.date)
        .bind(request.sets)
        .bind(request.reps)
        .bind(request.weight)
        .bind(&request.notes)
        .execute(&self.pool)
        .await?;
        self.get(result.last_insert_rowid()).await
    }

    /// Update an existing workout record, merging the request onto stored fields
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the record does not exist, or
    /// `InvalidInput` if a new exercise reference does not exist
    pub async fn update(&self, id: i64, request: &UpdateWorkoutRequest) -> AppResult<Workout> {
        let current = self.get(id).await?;
        if let Some(exercise_id) = request.exercise_id {
            ExerciseManager::new(self.pool.clone())
                .ensure_exists(exercise_id)
                .await?;
        }

        let exercise_id = request.exercise_id.unwrap_or(current.exercise_id);
        let date = request.date.unwrap_or(current.date);
        let sets = request.sets.unwrap_or(current.sets);
        let reps = request.reps.unwrap_or(current.reps);
        let weight = request.weight.unwrap_or(current.weight);
        let notes = request.notes.clone().unwrap_or(current.notes);

        sqlx::query(
            "UPDATE workouts SET exercise_id = ?, date = ?, sets = ?, reps = ?,
             weight = ?, notes = ? WHERE id = ?",
        )
        .bind(exercise_id)
        .bind(date)
        .bind(sets)
        .bind(reps)
        .bind(weight)
        .bind(&notes)
        .bind(id)
        .execute(&self.pool)
        .await?;
        self.get(id).await
    }

    /// Delete a workout record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the record does not exist
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {id}")));
        }
        Ok(())
    }
}
