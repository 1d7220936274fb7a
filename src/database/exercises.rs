// ABOUTME: Database operations for the exercise catalog
// ABOUTME: CRUD over exercises; deletes cascade to workouts, plan entries, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{CreateExerciseRequest, Exercise, MuscleGroup, UpdateExerciseRequest};

/// Exercise database operations manager
pub struct ExerciseManager {
    pool: SqlitePool,
}

fn exercise_from_row(row: &SqliteRow) -> AppResult<Exercise> {
    let muscle_group: String = row.try_get("muscle_group")?;
    let created_at: NaiveDateTime = row.try_get("created_at")?;
    Ok(Exercise {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        muscle_group: MuscleGroup::from_str(&muscle_group)?,
        created_at: created_at.and_utc(),
    })
}

impl ExerciseManager {
    /// Create a new exercise manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all exercises, optionally filtered by muscle group, ordered by
    /// muscle group then name
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self, muscle_group: Option<MuscleGroup>) -> AppResult<Vec<Exercise>> {
        let rows = match muscle_group {
            Some(group) => {
                sqlx::query(
                    "SELECT id, name, muscle_group, created_at FROM exercises
                     WHERE muscle_group = ? ORDER BY name ASC",
                )
                .bind(group.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, name, muscle_group, created_at FROM exercises
                     ORDER BY muscle_group ASC, name ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        rows.iter().map(exercise_from_row).collect()
    }

    /// Fetch one exercise by ID
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    pub async fn get(&self, id: i64) -> AppResult<Exercise> {
        let row = sqlx::query("SELECT id, name, muscle_group, created_at FROM exercises WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {id}")))?;
        exercise_from_row(&row)
    }

    /// Create a new exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, request: &CreateExerciseRequest) -> AppResult<Exercise> {
        let result = sqlx::query("INSERT INTO exercises (name, muscle_group) VALUES (?, ?)")
            .bind(&request.name)
            .bind(request.muscle_group.as_str())
            .execute(&self.pool)
            .await?;
        self.get(result.last_insert_rowid()).await
    }

    /// Update an existing exercise, merging the request onto stored fields
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    pub async fn update(&self, id: i64, request: &UpdateExerciseRequest) -> AppResult<Exercise> {
        let current = self.get(id).await?;
        let name = request.name.clone().unwrap_or(current.name);
        let muscle_group = request.muscle_group.unwrap_or(current.muscle_group);

        sqlx::query("UPDATE exercises SET name = ?, muscle_group = ? WHERE id = ?")
            .bind(&name)
            .bind(muscle_group.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        self.get(id).await
    }

    /// Delete an exercise; associated workouts, plan entries, and goals
    /// cascade away with it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Exercise {id}")));
        }
        Ok(())
    }

    /// Check that an exercise exists (used to validate foreign references
    /// before inserts, so callers get a 400 instead of a constraint failure)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the exercise does not exist
    pub async fn ensure_exists(&self, id: i64) -> AppResult<()> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM exercises WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        if exists {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "exercise_id {id} does not reference an existing exercise"
            )))
        }
    }
}
