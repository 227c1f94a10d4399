use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Biological sex categories used for BMR estimation
///
/// The Harris-Benedict equation is published with male and female
/// coefficient sets; `Unspecified` uses the arithmetic mean of both
/// so that users who decline to answer still get a usable estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// Non-binary or prefer-not-to-say
    Unspecified,
}

/// Habitual activity levels mapped to fixed TDEE multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise (×1.2)
    Sedentary,
    /// Light exercise 1-3 days/week (×1.375)
    Light,
    /// Moderate exercise 3-5 days/week (×1.55)
    Moderate,
    /// Hard exercise 6-7 days/week (×1.725)
    VeryActive,
    /// Physical job or twice-daily training (×1.9)
    ExtraActive,
}

/// Overall fitness goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    /// 20% calorie deficit
    Lose,
    /// Eat at TDEE
    Maintain,
    /// 10% calorie surplus
    Gain,
}

/// Body profile captured at onboarding and edited afterwards
///
/// Transient input to the nutrition goal calculation; the engine does
/// not own or persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Weight in kilograms
    pub weight_kg: Decimal,

    /// Height in centimeters
    pub height_cm: u16,

    /// Age in whole years
    pub age_years: u8,

    pub gender: Gender,

    pub activity_level: ActivityLevel,

    pub fitness_goal: FitnessGoal,
}

/// Daily calorie and macro targets derived from a body profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Daily calorie target in kcal
    pub calorie_goal: u32,

    /// Daily protein target in grams (2 g per kg body weight)
    pub protein_goal_grams: u32,

    /// Daily carbohydrate target in grams (goal-dependent calorie share at 4 kcal/g)
    pub carb_goal_grams: u32,

    /// Daily fat target in grams (goal-dependent calorie share at 9 kcal/g)
    pub fat_goal_grams: u32,

    /// Daily water target in 250 mL glasses
    pub water_goal_glasses: u32,
}

/// Daily recovery self-report, one per user per date
///
/// A later submission for the same date replaces the earlier one; that
/// merge happens at the persistence boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryReport {
    pub date: NaiveDate,

    /// Hours slept the previous night
    pub sleep_hours: Decimal,

    /// Subjective sleep quality, 1-10, higher is better
    pub sleep_quality: u8,

    /// Muscle soreness, 1-10, higher is worse
    pub soreness: u8,

    /// General fatigue, 1-10, higher is worse
    pub fatigue: u8,

    /// Perceived stress, 1-10, higher is worse
    pub stress: u8,

    /// Mood, 1-10, higher is better
    pub mood: u8,

    pub notes: Option<String>,

    /// Composite readiness score (0-10 scale) stored alongside the report
    /// once computed; recomputed only when the report is edited
    pub readiness_score: Option<u8>,
}

/// A single set within an exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Load in kilograms
    pub weight: Decimal,

    /// Repetitions performed (or targeted, if not completed)
    pub reps: u32,

    /// Whether the set was finished as prescribed
    pub completed: bool,
}

/// One exercise within a workout session with its ordered sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: Vec<SetRecord>,
}

/// Session intensity as logged by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Light,
    Moderate,
    High,
}

/// A logged strength-training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier for the session
    pub id: String,

    pub date: NaiveDate,

    /// Ordered exercises as performed
    pub exercises: Vec<ExerciseEntry>,

    pub duration_minutes: u32,

    pub intensity: Intensity,

    /// Whether the session was finished (abandoned sessions stay in history)
    pub completed: bool,

    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Create an empty session for a day's log with a fresh id
    pub fn new(date: NaiveDate, intensity: Intensity) -> Self {
        WorkoutSession {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            exercises: Vec::new(),
            duration_minutes: 0,
            intensity,
            completed: false,
            notes: None,
        }
    }
}

/// Suggested next-session target for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadSuggestion {
    pub exercise_name: String,

    /// Suggested load in kilograms
    pub suggested_weight: Decimal,

    /// Suggested repetitions per set
    pub suggested_reps: u32,
}

/// A logged meal with its nutrition facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,

    /// Time of day the meal was eaten
    pub time: Option<NaiveTime>,

    /// Energy in kcal
    pub calories: u32,

    /// Protein in grams
    pub protein: Decimal,

    /// Carbohydrates in grams
    pub carbs: Decimal,

    /// Fat in grams
    pub fat: Decimal,
}

/// One day's nutrition log: meals plus water intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutritionLog {
    pub date: NaiveDate,

    pub meals: Vec<MealEntry>,

    /// Glasses of water drunk so far today
    pub water_intake: u32,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        NutritionGoals {
            calorie_goal: 0,
            protein_goal_grams: 0,
            carb_goal_grams: 0,
            fat_goal_grams: 0,
            water_goal_glasses: crate::nutrition::WATER_GOAL_GLASSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gender_serialization() {
        let gender = Gender::Unspecified;
        let json = serde_json::to_string(&gender).unwrap();
        assert_eq!(json, "\"Unspecified\"");

        let deserialized: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Gender::Unspecified);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        // Open string sets from the source app become closed enums here;
        // unrecognized values must fail at the serde boundary.
        let result: Result<ActivityLevel, _> = serde_json::from_str("\"couch_potato\"");
        assert!(result.is_err());

        let result: Result<FitnessGoal, _> = serde_json::from_str("\"bulk\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_body_profile_roundtrip() {
        let profile = BodyProfile {
            weight_kg: dec!(75.5),
            height_cm: 180,
            age_years: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            fitness_goal: FitnessGoal::Maintain,
        };

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: BodyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn test_recovery_report_optional_fields() {
        let json = r#"{
            "date": "2025-06-01",
            "sleep_hours": 7.5,
            "sleep_quality": 8,
            "soreness": 3,
            "fatigue": 4,
            "stress": 2,
            "mood": 7,
            "notes": null,
            "readiness_score": null
        }"#;

        let report: RecoveryReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.sleep_hours, dec!(7.5));
        assert!(report.readiness_score.is_none());
    }

    #[test]
    fn test_workout_session_new() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let session = WorkoutSession::new(date, Intensity::High);

        assert_eq!(session.date, date);
        assert!(session.exercises.is_empty());
        assert!(!session.completed);
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_workout_session_roundtrip() {
        let session = WorkoutSession {
            id: "session_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            exercises: vec![ExerciseEntry {
                name: "Bench Press".to_string(),
                sets: vec![
                    SetRecord { weight: dec!(60), reps: 10, completed: true },
                    SetRecord { weight: dec!(60), reps: 8, completed: false },
                ],
            }],
            duration_minutes: 45,
            intensity: Intensity::Moderate,
            completed: true,
            notes: Some("Felt strong".to_string()),
        };

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: WorkoutSession = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, session);
        assert_eq!(deserialized.exercises[0].sets.len(), 2);
    }

    #[test]
    fn test_nutrition_goals_default_water() {
        let goals = NutritionGoals::default();
        assert_eq!(goals.water_goal_glasses, 8);
    }
}
