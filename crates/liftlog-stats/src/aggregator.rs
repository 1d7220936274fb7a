// ABOUTME: Pure aggregation operations: exercise stats, volume windows, records, goal progress
// ABOUTME: All functions are total; degenerate inputs yield zero/empty results, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregation operations over workout and goal data
//!
//! The window semantics deserve a note: `week`/`month`/`year` are trailing
//! fixed-length windows (7/30/365 days inclusive of the reference date), not
//! calendar periods. The UI labels imply calendar boundaries but the
//! computation has always been a rolling window; changing it would be a
//! behavior change, not a bug fix.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};
use tracing::debug;

use liftlog_core::models::{
    DailyVolume, Exercise, ExerciseStats, Goal, GoalProgress, MuscleVolume, Period,
    PersonalRecord, VolumeStats, Workout, WorkoutHistory,
};

/// True when `candidate` beats `best` as a record set: higher weight, then
/// higher reps, then more recent date
fn beats(candidate: &Workout, best: &Workout) -> bool {
    if candidate.weight != best.weight {
        return candidate.weight > best.weight;
    }
    if candidate.reps != best.reps {
        return candidate.reps > best.reps;
    }
    candidate.date > best.date
}

/// Compute aggregated statistics for one exercise
///
/// Filters `workouts` to the exercise and derives max weight, the reps of the
/// max-weight set (ties prefer greater reps), record count, total volume, and
/// the date-ascending history series. An exercise without workouts yields a
/// zero-valued result with an empty history; there is no error path.
#[must_use]
pub fn exercise_stats(exercise: &Exercise, workouts: &[Workout]) -> ExerciseStats {
    let filtered: Vec<&Workout> = workouts
        .iter()
        .filter(|w| w.exercise_id == exercise.id)
        .collect();

    let best = filtered
        .iter()
        .copied()
        .reduce(|best, w| if beats(w, best) { w } else { best });

    let mut history: Vec<WorkoutHistory> = filtered
        .iter()
        .map(|w| WorkoutHistory {
            date: w.date,
            weight: w.weight,
            reps: w.reps,
            sets: w.sets,
            volume: w.volume(),
        })
        .collect();
    // Stable sort: equal dates keep their original relative order
    history.sort_by_key(|h| h.date);

    ExerciseStats {
        exercise_id: exercise.id,
        exercise_name: exercise.name.clone(),
        muscle_group: exercise.muscle_group,
        max_weight: best.map_or(0.0, |w| w.weight),
        max_reps: best.map_or(0, |w| w.reps),
        total_sets: filtered.len() as i64,
        total_volume: filtered.iter().map(|w| w.volume()).sum(),
        history,
    }
}

/// Compute volume statistics over a rolling window ending at `reference`
///
/// The window covers the trailing `period.days()` days inclusive of the
/// reference date: for a week window a workout exactly 7 days before the
/// reference is outside, 6 days before is inside. `daily` groups by exact
/// date ascending (zero days omitted); `by_muscle` groups via the exercise
/// lookup in first-seen order. Workouts referencing an exercise absent from
/// `exercises` still count toward the total and daily series but are omitted
/// from the muscle breakdown.
#[must_use]
pub fn volume_stats(
    period: Period,
    reference: NaiveDate,
    exercises: &[Exercise],
    workouts: &[Workout],
) -> VolumeStats {
    let start = reference - Duration::days(period.days() - 1);
    let muscle_of: HashMap<i64, _> = exercises
        .iter()
        .map(|e| (e.id, e.muscle_group))
        .collect();

    let mut total_volume = 0.0;
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut by_muscle: Vec<MuscleVolume> = Vec::new();

    for workout in workouts {
        if workout.date < start || workout.date > reference {
            continue;
        }
        let volume = workout.volume();
        total_volume += volume;
        *daily.entry(workout.date).or_insert(0.0) += volume;

        if let Some(&muscle_group) = muscle_of.get(&workout.exercise_id) {
            match by_muscle.iter_mut().find(|m| m.muscle_group == muscle_group) {
                Some(entry) => entry.volume += volume,
                None => by_muscle.push(MuscleVolume {
                    muscle_group,
                    volume,
                }),
            }
        }
    }

    debug!(
        period = period.as_str(),
        %start,
        %reference,
        total_volume,
        days = daily.len(),
        "computed rolling-window volume stats"
    );

    VolumeStats {
        period,
        total_volume,
        by_muscle,
        daily: daily
            .into_iter()
            .map(|(date, volume)| DailyVolume { date, volume })
            .collect(),
    }
}

/// Compute the personal record for every exercise with at least one workout
///
/// The record is the max-weight set, ties broken by higher reps then most
/// recent date. Exercises with no workouts are omitted entirely rather than
/// reported with zero values; that asymmetry with [`exercise_stats`] is
/// deliberate. Output order follows the `exercises` slice; consumers sort for
/// display.
#[must_use]
pub fn personal_records(exercises: &[Exercise], workouts: &[Workout]) -> Vec<PersonalRecord> {
    let mut best_of: HashMap<i64, &Workout> = HashMap::new();
    for workout in workouts {
        best_of
            .entry(workout.exercise_id)
            .and_modify(|best| {
                if beats(workout, best) {
                    *best = workout;
                }
            })
            .or_insert(workout);
    }

    exercises
        .iter()
        .filter_map(|exercise| {
            best_of.get(&exercise.id).map(|record| PersonalRecord {
                exercise_id: exercise.id,
                exercise_name: exercise.name.clone(),
                muscle_group: exercise.muscle_group,
                max_weight: record.weight,
                max_reps: record.reps,
                date: record.date,
            })
        })
        .collect()
}

/// Compute progress toward a goal from the workout history of its exercise
///
/// Only sets meeting the goal's rep target qualify: a heavier set at fewer
/// reps does not count. `progress` is the raw unclamped percentage of the
/// target weight, defined as 0 when the target weight is zero or negative
/// (never NaN). The goal's `achieved` flag is not read or written here;
/// completion is a separate explicit store action.
#[must_use]
pub fn goal_progress(goal: &Goal, workouts: &[Workout]) -> GoalProgress {
    let current_max = workouts
        .iter()
        .filter(|w| w.exercise_id == goal.exercise_id && w.reps >= goal.target_reps)
        .map(|w| w.weight)
        .fold(0.0_f64, f64::max);

    let progress = if goal.target_weight > 0.0 {
        current_max / goal.target_weight * 100.0
    } else {
        0.0
    };

    GoalProgress {
        current_max,
        progress,
    }
}
