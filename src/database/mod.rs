// ABOUTME: SQLite store setup: connection pool, schema creation, and default seeding
// ABOUTME: Exposes per-domain managers (exercises, workouts, plans, goals)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite record store
//!
//! Schema is created at startup and an empty database is seeded with a
//! default exercise catalog. Cascade deletes (exercise -> workouts, plan
//! entries, goals) are enforced by SQLite foreign keys, not application code.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::MuscleGroup;

/// Exercise CRUD operations
pub mod exercises;

/// Goal CRUD operations and the one-way complete transition
pub mod goals;

/// Plan CRUD operations with nested plan exercises
pub mod plans;

/// Workout CRUD operations with filtered listing
pub mod workouts;

pub use exercises::ExerciseManager;
pub use goals::GoalManager;
pub use plans::PlanManager;
pub use workouts::WorkoutManager;

/// Database schema, applied idempotently at startup
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    muscle_group TEXT NOT NULL,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    exercise_id INTEGER NOT NULL,
    date DATE NOT NULL,
    sets INTEGER NOT NULL,
    reps INTEGER NOT NULL,
    weight REAL NOT NULL,
    notes TEXT NOT NULL DEFAULT '',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (exercise_id) REFERENCES exercises(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS plans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS plan_exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    plan_id INTEGER NOT NULL,
    exercise_id INTEGER NOT NULL,
    target_sets INTEGER NOT NULL,
    target_reps INTEGER NOT NULL,
    order_index INTEGER NOT NULL,
    FOREIGN KEY (plan_id) REFERENCES plans(id) ON DELETE CASCADE,
    FOREIGN KEY (exercise_id) REFERENCES exercises(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS goals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    exercise_id INTEGER NOT NULL,
    target_weight REAL NOT NULL,
    target_reps INTEGER NOT NULL,
    deadline DATE,
    achieved BOOLEAN NOT NULL DEFAULT FALSE,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (exercise_id) REFERENCES exercises(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(date);
CREATE INDEX IF NOT EXISTS idx_workouts_exercise ON workouts(exercise_id);
";

/// Default exercise catalog seeded into an empty database
const DEFAULT_EXERCISES: &[(&str, MuscleGroup)] = &[
    ("Bench Press", MuscleGroup::Chest),
    ("Incline Bench Press", MuscleGroup::Chest),
    ("Dumbbell Press", MuscleGroup::Chest),
    ("Chest Fly", MuscleGroup::Chest),
    ("Dips", MuscleGroup::Chest),
    ("Deadlift", MuscleGroup::Back),
    ("Lat Pulldown", MuscleGroup::Back),
    ("Bent-Over Row", MuscleGroup::Back),
    ("Pull-Up", MuscleGroup::Back),
    ("Seated Row", MuscleGroup::Back),
    ("Overhead Press", MuscleGroup::Shoulders),
    ("Lateral Raise", MuscleGroup::Shoulders),
    ("Front Raise", MuscleGroup::Shoulders),
    ("Rear Delt Fly", MuscleGroup::Shoulders),
    ("Barbell Curl", MuscleGroup::Arms),
    ("Dumbbell Curl", MuscleGroup::Arms),
    ("Triceps Extension", MuscleGroup::Arms),
    ("Skull Crusher", MuscleGroup::Arms),
    ("Squat", MuscleGroup::Legs),
    ("Leg Press", MuscleGroup::Legs),
    ("Romanian Deadlift", MuscleGroup::Legs),
    ("Leg Curl", MuscleGroup::Legs),
    ("Leg Extension", MuscleGroup::Legs),
    ("Calf Raise", MuscleGroup::Legs),
    ("Crunch", MuscleGroup::Abs),
    ("Leg Raise", MuscleGroup::Abs),
    ("Plank", MuscleGroup::Abs),
    ("Ab Roller", MuscleGroup::Abs),
];

/// Handle on the SQLite store, cheap to clone
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database at `url`, apply the schema,
    /// and seed the default exercise catalog if the store is empty
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database is unreachable
    pub async fn new(url: &str) -> AppResult<Self> {
        ensure_parent_dir(url)?;

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                AppError::config(format!("Invalid database URL {url}: {e}"))
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        // In-memory databases exist per connection, so the pool must hold a
        // single never-reaped connection or state silently disappears
        let pool = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        let database = Self { pool };
        database.seed_default_exercises().await?;

        info!(url = %url, "database initialized");
        Ok(database)
    }

    /// Access the underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Exercise operations
    #[must_use]
    pub fn exercises(&self) -> ExerciseManager {
        ExerciseManager::new(self.pool.clone())
    }

    /// Workout operations
    #[must_use]
    pub fn workouts(&self) -> WorkoutManager {
        WorkoutManager::new(self.pool.clone())
    }

    /// Plan operations
    #[must_use]
    pub fn plans(&self) -> PlanManager {
        PlanManager::new(self.pool.clone())
    }

    /// Goal operations
    #[must_use]
    pub fn goals(&self) -> GoalManager {
        GoalManager::new(self.pool.clone())
    }

    /// Insert the default exercise catalog when no exercises exist yet
    async fn seed_default_exercises(&self) -> AppResult<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for (name, muscle_group) in DEFAULT_EXERCISES {
            sqlx::query("INSERT INTO exercises (name, muscle_group) VALUES (?, ?)")
                .bind(name)
                .bind(muscle_group.as_str())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        info!(count = DEFAULT_EXERCISES.len(), "seeded default exercises");
        Ok(())
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}

fn is_in_memory(url: &str) -> bool {
    let path = strip_scheme(url);
    path.is_empty() || path.starts_with(':')
}

/// Create the parent directory for a file-backed SQLite URL
fn ensure_parent_dir(url: &str) -> AppResult<()> {
    let path = strip_scheme(url);
    if path.is_empty() || path.starts_with(':') {
        // In-memory database
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}
