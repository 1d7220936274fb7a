// ABOUTME: Database operations for strength goals
// ABOUTME: CRUD plus the one-way complete transition; listing joins exercise info
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{CreateGoalRequest, Goal, MuscleGroup, UpdateGoalRequest};

use super::exercises::ExerciseManager;

/// Goal database operations manager
pub struct GoalManager {
    pool: SqlitePool,
}

const SELECT_GOAL: &str = "SELECT g.id, g.exercise_id, e.name AS exercise_name, \
     e.muscle_group, g.target_weight, g.target_reps, g.deadline, g.achieved, g.created_at \
     FROM goals g JOIN exercises e ON e.id = g.exercise_id";

fn goal_from_row(row: &SqliteRow) -> AppResult<Goal> {
    let muscle_group: String = row.try_get("muscle_group")?;
    let created_at: NaiveDateTime = row.try_get("created_at")?;
    Ok(Goal {
        id: row.try_get("id")?,
        exercise_id: row.try_get("exercise_id")?,
        exercise_name: Some(row.try_get("exercise_name")?),
        muscle_group: Some(MuscleGroup::from_str(&muscle_group)?),
        target_weight: row.try_get("target_weight")?,
        target_reps: row.try_get("target_reps")?,
        deadline: row.try_get("deadline")?,
        achieved: row.try_get("achieved")?,
        created_at: created_at.and_utc(),
    })
}

impl GoalManager {
    /// Create a new goal manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all goals, open ones first, then by nearest deadline
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Goal>> {
        let sql = format!(
            "{SELECT_GOAL} ORDER BY g.achieved ASC, g.deadline IS NULL ASC, g.deadline ASC, g.id ASC"
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(goal_from_row).collect()
    }

    /// Fetch one goal by ID
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the goal does not exist
    pub async fn get(&self, id: i64) -> AppResult<Goal> {
        let sql = format!("{SELECT_GOAL} WHERE g.id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Goal {id}")))?;
        goal_from_row(&row)
    }

    /// Create a new goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the referenced exercise does not exist
    pub async fn create(&self, request: &CreateGoalRequest) -> AppResult<Goal> {
        ExerciseManager::new(self.pool.clone())
            .ensure_exists(request.exercise_id)
            .await?;

        let result = sqlx::query(
            "INSERT INTO goals (exercise_id, target_weight, target_reps, deadline)
             VALUES (?, ?, ?, ?)",
        )
        .bind(request.exercise_id)
        .bind(request.target_weight)
        .bind(request.target_reps)
        .bind(request.deadline)
        .execute(&self.pool)
        .await?;
        self.get(result.last_insert_rowid()).await
    }

    /// Update a goal's targets, merging the request onto stored fields
    ///
    /// The achieved flag is untouched here; see [`Self::complete`].
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the goal does not exist, or
    /// `InvalidInput` if a new exercise reference does not exist
    pub async fn update(&self, id: i64, request: &UpdateGoalRequest) -> AppResult<Goal> {
        let current = self.get(id).await?;
        if let Some(exercise_id) = request.exercise_id {
            ExerciseManager::new(self.pool.clone())
                .ensure_exists(exercise_id)
                .await?;
        }

        let exercise_id = request.exercise_id.unwrap_or(current.exercise_id);
        let target_weight = request.target_weight.unwrap_or(current.target_weight);
        let target_reps = request.target_reps.unwrap_or(current.target_reps);
        let deadline = request.deadline.or(current.deadline);

        sqlx::query(
            "UPDATE goals SET exercise_id = ?, target_weight = ?, target_reps = ?,
             deadline = ? WHERE id = ?",
        )
        .bind(exercise_id)
        .bind(target_weight)
        .bind(target_reps)
        .bind(deadline)
        .bind(id)
        .execute(&self.pool)
        .await?;
        self.get(id).await
    }

    /// Mark a goal achieved. One-way: there is no operation that clears
    /// the flag, and completing an already-achieved goal is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the goal does not exist
    pub async fn complete(&self, id: i64) -> AppResult<Goal> {
        let result = sqlx::query("UPDATE goals SET achieved = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Goal {id}")));
        }
        self.get(id).await
    }

    /// Delete a goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the goal does not exist
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM goals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Goal {id}")));
        }
        Ok(())
    }
}
