// ABOUTME: Database operations for training plans and their ordered entries
// ABOUTME: Plan writes are transactional; updates replace the entry list wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{
    CreatePlanExerciseRequest, CreatePlanRequest, MuscleGroup, Plan, PlanExercise,
    UpdatePlanRequest,
};

use super::exercises::ExerciseManager;

/// Plan database operations manager
pub struct PlanManager {
    pool: SqlitePool,
}

const SELECT_PLAN_EXERCISES: &str = "SELECT pe.id, pe.plan_id, pe.exercise_id, \
     e.name AS exercise_name, e.muscle_group, pe.target_sets, pe.target_reps, pe.order_index \
     FROM plan_exercises pe JOIN exercises e ON e.id = pe.exercise_id";

fn plan_exercise_from_row(row: &SqliteRow) -> AppResult<PlanExercise> {
    let muscle_group: String = row.try_get("muscle_group")?;
    Ok(PlanExercise {
        id: row.try_get("id")?,
        plan_id: row.try_get("plan_id")?,
        exercise_id: row.try_get("exercise_id")?,
        exercise_name: Some(row.try_get("exercise_name")?),
        muscle_group: Some(MuscleGroup::from_str(&muscle_group)?),
        target_sets: row.try_get("target_sets")?,
        target_reps: row.try_get("target_reps")?,
        order_index: row.try_get("order_index")?,
    })
}

fn plan_from_row(row: &SqliteRow, exercises: Vec<PlanExercise>) -> AppResult<Plan> {
    let created_at: NaiveDateTime = row.try_get("created_at")?;
    Ok(Plan {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        exercises,
        created_at: created_at.and_utc(),
    })
}

impl PlanManager {
    /// Create a new plan manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all plans with their entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Plan>> {
        let rows = sqlx::query(
            "SELECT id, name, description, created_at FROM plans ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut plans = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row.try_get("id")?;
            let exercises = self.entries(id).await?;
            plans.push(plan_from_row(row, exercises)?);
        }
        Ok(plans)
    }

    /// Fetch one plan with its entries by ID
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan does not exist
    pub async fn get(&self, id: i64) -> AppResult<Plan> {
        let row = sqlx::query("SELECT id, name, description, created_at FROM plans WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Plan {id}")))?;
        let exercises = self.entries(id).await?;
        plan_from_row(&row, exercises)
    }

    /// Create a new plan with its entries in one transaction
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any entry references a missing exercise
    pub async fn create(&self, request: &CreatePlanRequest) -> AppResult<Plan> {
        self.ensure_entry_exercises(&request.exercises).await?;

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO plans (name, description) VALUES (?, ?)")
            .bind(&request.name)
            .bind(&request.description)
            .execute(&mut *tx)
            .await?;
        let plan_id = result.last_insert_rowid();
        insert_entries(&mut tx, plan_id, &request.exercises).await?;
        tx.commit().await?;

        self.get(plan_id).await
    }

    /// Update a plan; when entries are present in the request the stored
    /// entry list is replaced wholesale
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan does not exist, or
    /// `InvalidInput` if a replacement entry references a missing exercise
    pub async fn update(&self, id: i64, request: &UpdatePlanRequest) -> AppResult<Plan> {
        let current = self.get(id).await?;
        if let Some(entries) = &request.exercises {
            self.ensure_entry_exercises(entries).await?;
        }

        let name = request.name.clone().unwrap_or(current.name);
        let description = request.description.clone().unwrap_or(current.description);

        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE plans SET name = ?, description = ? WHERE id = ?")
            .bind(&name)
            .bind(&description)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if let Some(entries) = &request.exercises {
            sqlx::query("DELETE FROM plan_exercises WHERE plan_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_entries(&mut tx, id, entries).await?;
        }
        tx.commit().await?;

        self.get(id).await
    }

    /// Delete a plan; its entries cascade away with it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan does not exist
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM plans WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Plan {id}")));
        }
        Ok(())
    }

    /// Load a plan's entries ordered by position then insertion order
    async fn entries(&self, plan_id: i64) -> AppResult<Vec<PlanExercise>> {
        let sql = format!(
            "{SELECT_PLAN_EXERCISES} WHERE pe.plan_id = ? ORDER BY pe.order_index ASC, pe.id ASC"
        );
        let rows = sqlx::query(&sql).bind(plan_id).fetch_all(&self.pool).await?;
        rows.iter().map(plan_exercise_from_row).collect()
    }

    async fn ensure_entry_exercises(
        &self,
        entries: &[CreatePlanExerciseRequest],
    ) -> AppResult<()> {
        let exercises = ExerciseManager::new(self.pool.clone());
        for entry in entries {
            exercises.ensure_exists(entry.exercise_id).await?;
        }
        Ok(())
    }
}

async fn insert_entries(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    plan_id: i64,
    entries: &[CreatePlanExerciseRequest],
) -> AppResult<()> {
    for entry in entries {
        sqlx::query(
            "INSERT INTO plan_exercises (plan_id, exercise_id, target_sets, target_reps, order_index)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(plan_id)
        .bind(entry.exercise_id)
        .bind(entry.target_sets)
        .bind(entry.target_reps)
        .bind(entry.order_index)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
