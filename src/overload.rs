//! Progressive overload suggestions
//!
//! Implements a double-progression scheme over an exercise's recent set
//! history: reps climb within a range first, and once the rep ceiling is
//! reached with every set completed, weight goes up by a fixed increment
//! and reps reset to the base target.
//!
//! The advisor looks at a window of the most recent sessions containing
//! the exercise (newest first). It only progresses the target when the
//! single most recent of those sessions was fully completed; an unfinished
//! session means the current target has not been earned yet.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{OverloadSuggestion, WorkoutSession};

/// Tunable constants for the double-progression scheme
///
/// These were hardcoded in the source app; they are configuration here so
/// a pound-plate gym can use a different increment without touching code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadConfig {
    /// Weight added once the rep ceiling is hit (kg; 2.5 is the smallest
    /// common plate pair)
    pub weight_increment: Decimal,

    /// Rep count that triggers a weight increase, inclusive
    pub rep_ceiling: u32,

    /// Rep target after a weight increase, and the cold-start default
    pub base_reps: u32,

    /// How many recent qualifying sessions to consider
    pub history_window: usize,
}

impl Default for OverloadConfig {
    fn default() -> Self {
        OverloadConfig {
            weight_increment: dec!(2.5),
            rep_ceiling: 12,
            base_reps: 8,
            history_window: 3,
        }
    }
}

/// Progressive overload suggestion engine
///
/// Pure function of its inputs: the same history always yields the same
/// suggestion. Cold-start and thin-history cases are defined defaults,
/// never errors.
pub struct OverloadAdvisor;

impl OverloadAdvisor {
    /// Suggest the next-session weight and rep target for an exercise
    ///
    /// `sessions` must be ordered newest first, as the caller fetched them.
    /// Sessions that do not contain `exercise_name` (exact match) are
    /// skipped; at most `config.history_window` qualifying sessions count.
    pub fn suggest_next_load(
        sessions: &[WorkoutSession],
        exercise_name: &str,
        config: &OverloadConfig,
    ) -> OverloadSuggestion {
        let qualifying: Vec<&WorkoutSession> = sessions
            .iter()
            .filter(|s| s.exercises.iter().any(|e| e.name == exercise_name))
            .take(config.history_window)
            .collect();

        if qualifying.is_empty() {
            return OverloadSuggestion {
                exercise_name: exercise_name.to_string(),
                suggested_weight: Decimal::ZERO,
                suggested_reps: config.base_reps,
            };
        }

        // Max weight and max reps are independent; they need not come
        // from the same set.
        let max_weight = Self::exercise_sets(&qualifying, exercise_name)
            .map(|s| s.weight)
            .max()
            .unwrap_or(Decimal::ZERO);
        let max_reps = Self::exercise_sets(&qualifying, exercise_name)
            .map(|s| s.reps)
            .max()
            .unwrap_or(0);

        let mut suggested_weight = max_weight;
        let mut suggested_reps = max_reps;

        // One session is not enough history to progress from.
        if qualifying.len() >= 2 {
            let all_sets_completed = qualifying[0]
                .exercises
                .iter()
                .find(|e| e.name == exercise_name)
                .map(|e| e.sets.iter().all(|s| s.completed))
                .unwrap_or(false);

            if all_sets_completed {
                if max_reps >= config.rep_ceiling {
                    suggested_weight = max_weight + config.weight_increment;
                    suggested_reps = config.base_reps;
                } else {
                    suggested_reps = max_reps + 1;
                }
            }
        }

        OverloadSuggestion {
            exercise_name: exercise_name.to_string(),
            suggested_weight,
            suggested_reps,
        }
    }

    fn exercise_sets<'a>(
        sessions: &'a [&WorkoutSession],
        exercise_name: &'a str,
    ) -> impl Iterator<Item = &'a crate::models::SetRecord> {
        sessions.iter().flat_map(move |s| {
            s.exercises
                .iter()
                .filter(move |e| e.name == exercise_name)
                .flat_map(|e| e.sets.iter())
        })
    }
}
