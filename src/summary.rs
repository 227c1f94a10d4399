//! Daily nutrition summaries
//!
//! Sums a day's meal log into totals and measures them against the user's
//! nutrition goals, the way the dashboard and nutrition views present them.
//! Water intake is tracked in glasses against the fixed daily glass goal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{DailyNutritionLog, NutritionGoals};

/// Totals for one day's logged meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub date: NaiveDate,

    /// Total energy in kcal
    pub total_calories: u32,

    /// Total protein in grams
    pub total_protein: Decimal,

    /// Total carbohydrates in grams
    pub total_carbs: Decimal,

    /// Total fat in grams
    pub total_fat: Decimal,

    /// Glasses of water drunk
    pub water_intake: u32,
}

/// One tracked quantity measured against its goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroStat {
    pub consumed: Decimal,
    pub goal: Decimal,

    /// consumed/goal as a percentage, uncapped (the progress bar clamps
    /// visually); 0 when the goal is 0
    pub percent: Decimal,

    /// Amount left before the goal, floored at zero
    pub remaining: Decimal,
}

impl MacroStat {
    fn against(consumed: Decimal, goal: Decimal) -> Self {
        let percent = if goal.is_zero() {
            Decimal::ZERO
        } else {
            (consumed / goal * dec!(100)).round_dp(1)
        };
        MacroStat {
            consumed,
            goal,
            percent,
            remaining: (goal - consumed).max(Decimal::ZERO),
        }
    }
}

/// A day's consumption measured against the nutrition goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub calories: MacroStat,
    pub protein: MacroStat,
    pub carbs: MacroStat,
    pub fat: MacroStat,

    /// Water progress as a percentage, capped at 100
    pub water_percent: Decimal,
}

impl NutritionSummary {
    /// Sum one day's meal log into totals
    pub fn from_log(log: &DailyNutritionLog) -> Self {
        NutritionSummary {
            date: log.date,
            total_calories: log.meals.iter().map(|m| m.calories).sum(),
            total_protein: log.meals.iter().map(|m| m.protein).sum(),
            total_carbs: log.meals.iter().map(|m| m.carbs).sum(),
            total_fat: log.meals.iter().map(|m| m.fat).sum(),
            water_intake: log.water_intake,
        }
    }

    /// Measure this day's totals against the user's goals
    pub fn progress(&self, goals: &NutritionGoals) -> MacroProgress {
        MacroProgress {
            calories: MacroStat::against(
                Decimal::from(self.total_calories),
                Decimal::from(goals.calorie_goal),
            ),
            protein: MacroStat::against(
                self.total_protein,
                Decimal::from(goals.protein_goal_grams),
            ),
            carbs: MacroStat::against(self.total_carbs, Decimal::from(goals.carb_goal_grams)),
            fat: MacroStat::against(self.total_fat, Decimal::from(goals.fat_goal_grams)),
            water_percent: water_progress_percent(self.water_intake, goals.water_goal_glasses),
        }
    }
}

/// Water progress as a percentage of the glass goal, capped at 100
pub fn water_progress_percent(intake: u32, goal: u32) -> Decimal {
    if goal == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(intake) / Decimal::from(goal) * dec!(100))
        .min(dec!(100))
        .round_dp(1)
}

/// Log one more glass, never exceeding the goal
pub fn add_glass(intake: u32, goal: u32) -> u32 {
    (intake + 1).min(goal)
}

/// Remove one glass, never going below zero
pub fn remove_glass(intake: u32) -> u32 {
    intake.saturating_sub(1)
}
