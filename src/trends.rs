//! Training trend analytics
//!
//! Derivations the progress views plot: per-session training volume,
//! per-exercise personal records, muscle group distribution, and rolling
//! recovery averages. All of it is computed from already-fetched session
//! and report data; nothing here reads a store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{RecoveryReport, WorkoutSession};

/// Total volume lifted in one session, as a dated chart point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub date: NaiveDate,

    /// Σ weight × reps over every set in the session, in kg
    pub volume: Decimal,
}

/// Heaviest set ever logged for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub exercise: String,

    /// The record weight in kg
    pub weight: Decimal,

    /// Reps performed at the record weight
    pub reps: u32,

    /// Date the record was set
    pub date: NaiveDate,
}

/// Coarse muscle groups used for distribution charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuscleGroup::Chest => write!(f, "Chest"),
            MuscleGroup::Back => write!(f, "Back"),
            MuscleGroup::Legs => write!(f, "Legs"),
            MuscleGroup::Shoulders => write!(f, "Shoulders"),
            MuscleGroup::Arms => write!(f, "Arms"),
        }
    }
}

impl MuscleGroup {
    /// Classify an exercise name by keyword, first match wins
    ///
    /// A simplified mapping; names matching no keyword are left out of
    /// the distribution entirely. "Bench Press" lands on Chest because
    /// the chest keywords are checked before the press keyword.
    pub fn classify(exercise_name: &str) -> Option<MuscleGroup> {
        let name = exercise_name.to_lowercase();

        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

        if contains_any(&["bench", "chest", "fly"]) {
            Some(MuscleGroup::Chest)
        } else if contains_any(&["row", "pull", "lat", "back"]) {
            Some(MuscleGroup::Back)
        } else if contains_any(&["squat", "leg", "deadlift", "lunge"]) {
            Some(MuscleGroup::Legs)
        } else if contains_any(&["shoulder", "press", "delt"]) {
            Some(MuscleGroup::Shoulders)
        } else if contains_any(&["curl", "extension", "tricep", "bicep"]) {
            Some(MuscleGroup::Arms)
        } else {
            None
        }
    }
}

/// Trend derivation engine over session and recovery history
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Total volume of one session: Σ weight × reps over every set
    ///
    /// Incomplete sets count; partial work is still work done.
    pub fn session_volume(session: &WorkoutSession) -> Decimal {
        session
            .exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .map(|s| s.weight * Decimal::from(s.reps))
            .sum()
    }

    /// Per-session volume points, sorted by date ascending for plotting
    pub fn volume_by_session(sessions: &[WorkoutSession]) -> Vec<VolumePoint> {
        let mut points: Vec<VolumePoint> = sessions
            .iter()
            .map(|s| VolumePoint {
                date: s.date,
                volume: Self::session_volume(s),
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }

    /// Heaviest set per exercise across the given history
    ///
    /// Scans chronologically so the record date is the day the weight was
    /// first lifted; equalling a record does not move it. Results are
    /// sorted by exercise name.
    pub fn personal_records(sessions: &[WorkoutSession]) -> Vec<PersonalRecord> {
        let mut by_date: Vec<&WorkoutSession> = sessions.iter().collect();
        by_date.sort_by_key(|s| s.date);

        let mut records: BTreeMap<String, PersonalRecord> = BTreeMap::new();
        for session in by_date {
            for exercise in &session.exercises {
                for set in &exercise.sets {
                    let improved = records
                        .get(&exercise.name)
                        .map(|r| set.weight > r.weight)
                        .unwrap_or(true);
                    if improved {
                        records.insert(
                            exercise.name.clone(),
                            PersonalRecord {
                                exercise: exercise.name.clone(),
                                weight: set.weight,
                                reps: set.reps,
                                date: session.date,
                            },
                        );
                    }
                }
            }
        }

        records.into_values().collect()
    }

    /// Exercise count per muscle group across the given history
    ///
    /// Counts exercise entries, not sets, mirroring how the distribution
    /// chart tallies them. Groups with no entries are omitted.
    pub fn muscle_group_distribution(
        sessions: &[WorkoutSession],
    ) -> BTreeMap<MuscleGroup, u32> {
        let mut distribution = BTreeMap::new();
        for session in sessions {
            for exercise in &session.exercises {
                if let Some(group) = MuscleGroup::classify(&exercise.name) {
                    *distribution.entry(group).or_insert(0) += 1;
                }
            }
        }
        distribution
    }

    /// Mean stored readiness score over the reports, one decimal place
    ///
    /// Reports without a stored score are skipped; `None` when no report
    /// carries one.
    pub fn average_readiness(reports: &[RecoveryReport]) -> Option<Decimal> {
        let scores: Vec<Decimal> = reports
            .iter()
            .filter_map(|r| r.readiness_score)
            .map(Decimal::from)
            .collect();
        if scores.is_empty() {
            return None;
        }
        let sum: Decimal = scores.iter().sum();
        Some((sum / Decimal::from(scores.len())).round_dp(1))
    }

    /// Mean sleep hours over the reports, one decimal place
    pub fn average_sleep_hours(reports: &[RecoveryReport]) -> Option<Decimal> {
        if reports.is_empty() {
            return None;
        }
        let sum: Decimal = reports.iter().map(|r| r.sleep_hours).sum();
        Some((sum / Decimal::from(reports.len())).round_dp(1))
    }
}
