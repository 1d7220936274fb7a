// ABOUTME: Derived statistics types produced by the stats engine
// ABOUTME: Defines ExerciseStats, VolumeStats, PersonalRecord, GoalProgress, and Period
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived statistics types
//!
//! Every type here is a pure function of the workout/goal set at computation
//! time. Nothing in this module is persisted or independently mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exercise::MuscleGroup;
use super::goal::Goal;

/// Aggregation window for volume statistics
///
/// Windows are trailing fixed-length day counts ending at the reference date,
/// not calendar-aligned periods. The UI labels them "weekly"/"monthly"/
/// "yearly" but the computation is a rolling window and must stay that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Trailing 7 days inclusive of the reference date
    Week,
    /// Trailing 30 days inclusive of the reference date
    Month,
    /// Trailing 365 days inclusive of the reference date
    Year,
}

impl Period {
    /// Window length in days, inclusive of the reference date
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    /// Parse from a query string, defaulting unknown values to `Week`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::Week,
        }
    }

    /// String representation used in API responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// One workout record projected into an exercise history series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutHistory {
    /// Date the workout was performed
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: i64,
    /// Number of sets
    pub sets: i64,
    /// Derived volume (`sets * reps * weight`)
    pub volume: f64,
}

/// Aggregated statistics for a single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStats {
    /// Exercise ID
    pub exercise_id: i64,
    /// Exercise display name
    pub exercise_name: String,
    /// Muscle group of the exercise
    pub muscle_group: MuscleGroup,
    /// Maximum weight ever recorded (0 with no history)
    pub max_weight: f64,
    /// Reps of the max-weight record (ties prefer greater reps; 0 with no history)
    pub max_reps: i64,
    /// Number of workout records for this exercise
    pub total_sets: i64,
    /// Sum of volumes over all records
    pub total_volume: f64,
    /// All records ordered ascending by date (stable for equal dates)
    pub history: Vec<WorkoutHistory>,
}

/// Volume summed for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleVolume {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Total volume within the window
    pub volume: f64,
}

/// Volume summed for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    /// Date (days without workouts are omitted, not zero-filled)
    pub date: NaiveDate,
    /// Total volume on that date
    pub volume: f64,
}

/// Volume statistics over a rolling window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeStats {
    /// Window that was aggregated
    pub period: Period,
    /// Total volume within the window
    pub total_volume: f64,
    /// Volume per muscle group in first-seen order
    pub by_muscle: Vec<MuscleVolume>,
    /// Volume per date, ascending
    pub daily: Vec<DailyVolume>,
}

/// The single heaviest recorded set for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Exercise ID
    pub exercise_id: i64,
    /// Exercise display name
    pub exercise_name: String,
    /// Muscle group of the exercise
    pub muscle_group: MuscleGroup,
    /// Maximum weight recorded
    pub max_weight: f64,
    /// Reps of the record set (ties prefer greater reps)
    pub max_reps: i64,
    /// Date of the record set (ties prefer the most recent)
    pub date: NaiveDate,
}

/// Computed progress toward a goal
///
/// `progress` is the raw, unclamped percentage; clamping to [0, 100] happens
/// only at display time via [`GoalProgress::clamped`]. This computation never
/// touches the goal's `achieved` flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Maximum weight over qualifying sets (reps >= target), 0 if none qualify
    pub current_max: f64,
    /// `current_max / target_weight * 100`, or 0 when the target weight is 0
    pub progress: f64,
}

impl GoalProgress {
    /// Progress clamped to [0, 100] for progress-bar rendering
    #[must_use]
    pub fn clamped(&self) -> f64 {
        self.progress.clamp(0.0, 100.0)
    }
}

/// A goal merged with its computed progress for display
#[derive(Debug, Clone, Serialize)]
pub struct GoalWithProgress {
    /// The persisted goal
    #[serde(flatten)]
    pub goal: Goal,
    /// Maximum weight over qualifying sets
    pub current_max: f64,
    /// Raw progress percentage (unclamped)
    pub progress: f64,
}

impl GoalWithProgress {
    /// Merge a goal with its computed progress
    #[must_use]
    pub fn new(goal: Goal, progress: GoalProgress) -> Self {
        Self {
            goal,
            current_max: progress.current_max,
            progress: progress.progress,
        }
    }
}
