//! Nutrition goal calculation
//!
//! Converts a body profile into daily calorie and macro targets using the
//! Harris-Benedict BMR equation, a fixed activity multiplier table, and a
//! goal-dependent calorie adjustment and macro split.
//!
//! # Sports Science Background
//!
//! - **BMR (Basal Metabolic Rate)**: estimated resting energy expenditure.
//!   Harris-Benedict estimates it from weight, height, and age with
//!   sex-specific coefficients.
//! - **TDEE (Total Daily Energy Expenditure)**: BMR scaled by a multiplier
//!   reflecting habitual activity (1.2 sedentary through 1.9 extra active).
//! - **Goal adjustment**: a 20% deficit for fat loss, TDEE for maintenance,
//!   a 10% surplus for muscle gain.
//! - **Macros**: protein is anchored at 2 g per kg body weight regardless of
//!   goal; carbohydrate and fat targets are percentage shares of the calorie
//!   goal converted at 4 kcal/g and 9 kcal/g.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{ActivityLevel, BodyProfile, FitnessGoal, Gender, NutritionGoals};

/// Default daily water target in 250 mL glasses
pub const WATER_GOAL_GLASSES: u32 = 8;

/// Nutrition goal calculation errors
///
/// Unrecognized gender/activity/goal values cannot reach this module:
/// the closed enums reject them at the serde boundary. What remains is
/// numeric validation of the profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NutritionError {
    #[error("Invalid profile: {field} must be positive, got {value}")]
    InvalidProfile { field: &'static str, value: String },
}

/// Nutrition goal calculation engine
///
/// Pure and stateless: identical profiles always produce identical goals.
pub struct NutritionCalculator;

impl NutritionCalculator {
    /// Calculate daily nutrition goals from a body profile
    ///
    /// Invoked at onboarding and whenever the user edits weight, height,
    /// age, activity level, or goal. The caller persists the result.
    pub fn calculate_goals(profile: &BodyProfile) -> Result<NutritionGoals, NutritionError> {
        let tdee = Self::calculate_tdee(profile)?;

        let calorie_goal = match profile.fitness_goal {
            FitnessGoal::Lose => tdee * dec!(0.8),
            FitnessGoal::Maintain => tdee,
            FitnessGoal::Gain => tdee * dec!(1.1),
        };

        let (carb_pct, fat_pct) = Self::macro_split(profile.fitness_goal);

        let protein_grams = profile.weight_kg * dec!(2);
        let carb_grams = calorie_goal * carb_pct / dec!(4);
        let fat_grams = calorie_goal * fat_pct / dec!(9);

        Ok(NutritionGoals {
            calorie_goal: round_to_u32(calorie_goal),
            protein_goal_grams: round_to_u32(protein_grams),
            carb_goal_grams: round_to_u32(carb_grams),
            fat_goal_grams: round_to_u32(fat_grams),
            water_goal_glasses: WATER_GOAL_GLASSES,
        })
    }

    /// Calculate BMR using the Harris-Benedict equation
    ///
    /// - male:   `88.362 + 13.397·kg + 4.799·cm − 5.677·years`
    /// - female: `447.593 + 9.247·kg + 3.098·cm − 4.330·years`
    /// - unspecified: arithmetic mean of the male and female coefficients,
    ///   `267.9775 + 11.322·kg + 3.9485·cm − 5.0035·years`
    pub fn calculate_bmr(profile: &BodyProfile) -> Result<Decimal, NutritionError> {
        Self::validate(profile)?;

        let weight = profile.weight_kg;
        let height = Decimal::from(profile.height_cm);
        let age = Decimal::from(profile.age_years);

        let bmr = match profile.gender {
            Gender::Male => {
                dec!(88.362) + dec!(13.397) * weight + dec!(4.799) * height - dec!(5.677) * age
            }
            Gender::Female => {
                dec!(447.593) + dec!(9.247) * weight + dec!(3.098) * height - dec!(4.330) * age
            }
            Gender::Unspecified => {
                dec!(267.9775) + dec!(11.322) * weight + dec!(3.9485) * height
                    - dec!(5.0035) * age
            }
        };

        Ok(bmr)
    }

    /// Calculate TDEE: BMR scaled by the activity multiplier
    pub fn calculate_tdee(profile: &BodyProfile) -> Result<Decimal, NutritionError> {
        let bmr = Self::calculate_bmr(profile)?;
        Ok(bmr * Self::activity_multiplier(profile.activity_level))
    }

    /// Fixed TDEE multiplier for an activity level
    pub fn activity_multiplier(level: ActivityLevel) -> Decimal {
        match level {
            ActivityLevel::Sedentary => dec!(1.2),
            ActivityLevel::Light => dec!(1.375),
            ActivityLevel::Moderate => dec!(1.55),
            ActivityLevel::VeryActive => dec!(1.725),
            ActivityLevel::ExtraActive => dec!(1.9),
        }
    }

    /// Carb and fat calorie shares for a fitness goal
    fn macro_split(goal: FitnessGoal) -> (Decimal, Decimal) {
        match goal {
            FitnessGoal::Lose => (dec!(0.35), dec!(0.35)),
            FitnessGoal::Maintain => (dec!(0.40), dec!(0.30)),
            FitnessGoal::Gain => (dec!(0.45), dec!(0.25)),
        }
    }

    fn validate(profile: &BodyProfile) -> Result<(), NutritionError> {
        if profile.weight_kg <= Decimal::ZERO {
            return Err(NutritionError::InvalidProfile {
                field: "weight_kg",
                value: profile.weight_kg.to_string(),
            });
        }
        if profile.height_cm == 0 {
            return Err(NutritionError::InvalidProfile {
                field: "height_cm",
                value: profile.height_cm.to_string(),
            });
        }
        if profile.age_years == 0 {
            return Err(NutritionError::InvalidProfile {
                field: "age_years",
                value: profile.age_years.to_string(),
            });
        }
        Ok(())
    }
}

/// Round to the nearest integer, ties away from zero, clamped at zero
///
/// Matches the rounding the source app applied to every goal figure.
/// Extreme profiles (very low weight, very high age) can push a
/// Harris-Benedict BMR below zero; goals floor at 0 rather than error.
pub(crate) fn round_to_u32(value: Decimal) -> u32 {
    value
        .max(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn profile(
        weight: Decimal,
        height: u16,
        age: u8,
        gender: Gender,
        activity: ActivityLevel,
        goal: FitnessGoal,
    ) -> BodyProfile {
        BodyProfile {
            weight_kg: weight,
            height_cm: height,
            age_years: age,
            gender,
            activity_level: activity,
            fitness_goal: goal,
        }
    }

    #[test]
    fn test_bmr_male() {
        let p = profile(
            dec!(70),
            175,
            25,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        // 88.362 + 13.397*70 + 4.799*175 - 5.677*25
        let bmr = NutritionCalculator::calculate_bmr(&p).unwrap();
        assert_eq!(bmr, dec!(1724.052));
    }

    #[test]
    fn test_bmr_female() {
        let p = profile(
            dec!(60),
            165,
            30,
            Gender::Female,
            ActivityLevel::Sedentary,
            FitnessGoal::Lose,
        );
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*30
        let bmr = NutritionCalculator::calculate_bmr(&p).unwrap();
        assert_eq!(bmr, dec!(1383.683));
    }

    #[test]
    fn test_bmr_unspecified_is_mean_of_male_and_female() {
        let base = profile(
            dec!(60),
            165,
            30,
            Gender::Unspecified,
            ActivityLevel::Sedentary,
            FitnessGoal::Maintain,
        );
        let male = BodyProfile { gender: Gender::Male, ..base.clone() };
        let female = BodyProfile { gender: Gender::Female, ..base.clone() };

        let bmr = NutritionCalculator::calculate_bmr(&base).unwrap();
        let male_bmr = NutritionCalculator::calculate_bmr(&male).unwrap();
        let female_bmr = NutritionCalculator::calculate_bmr(&female).unwrap();

        assert_eq!(bmr, (male_bmr + female_bmr) / dec!(2));
    }

    #[test]
    fn test_tdee_applies_multiplier() {
        let p = profile(
            dec!(70),
            175,
            25,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        let tdee = NutritionCalculator::calculate_tdee(&p).unwrap();
        assert_eq!(tdee, dec!(1724.052) * dec!(1.55));
    }

    #[test]
    fn test_goals_maintain() {
        let p = profile(
            dec!(70),
            175,
            25,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        let goals = NutritionCalculator::calculate_goals(&p).unwrap();

        // TDEE = 1724.052 * 1.55 = 2672.2806
        assert_eq!(goals.calorie_goal, 2672);
        assert_eq!(goals.protein_goal_grams, 140);
        // 2672.2806 * 0.40 / 4 = 267.22806
        assert_eq!(goals.carb_goal_grams, 267);
        // 2672.2806 * 0.30 / 9 = 89.07602
        assert_eq!(goals.fat_goal_grams, 89);
        assert_eq!(goals.water_goal_glasses, 8);
    }

    #[test]
    fn test_goals_lose_applies_deficit() {
        let p = profile(
            dec!(60),
            165,
            30,
            Gender::Female,
            ActivityLevel::Sedentary,
            FitnessGoal::Lose,
        );
        let goals = NutritionCalculator::calculate_goals(&p).unwrap();

        // TDEE = 1383.683 * 1.2 = 1660.4196; lose = *0.8 = 1328.33568
        assert_eq!(goals.calorie_goal, 1328);
        assert_eq!(goals.protein_goal_grams, 120);
        // 1328.33568 * 0.35 / 4 = 116.229372
        assert_eq!(goals.carb_goal_grams, 116);
        // 1328.33568 * 0.35 / 9 = 51.6575...
        assert_eq!(goals.fat_goal_grams, 52);
    }

    #[test]
    fn test_goals_gain_applies_surplus() {
        let p = profile(
            dec!(80),
            180,
            22,
            Gender::Male,
            ActivityLevel::VeryActive,
            FitnessGoal::Gain,
        );
        let maintain = BodyProfile { fitness_goal: FitnessGoal::Maintain, ..p.clone() };

        let gain_goals = NutritionCalculator::calculate_goals(&p).unwrap();
        let tdee = NutritionCalculator::calculate_tdee(&maintain).unwrap();

        assert_eq!(gain_goals.calorie_goal, round_to_u32(tdee * dec!(1.1)));
        assert!(gain_goals.calorie_goal > round_to_u32(tdee));
    }

    #[test]
    fn test_protein_is_goal_independent() {
        for goal in [FitnessGoal::Lose, FitnessGoal::Maintain, FitnessGoal::Gain] {
            let p = profile(
                dec!(82.5),
                178,
                40,
                Gender::Female,
                ActivityLevel::Light,
                goal,
            );
            let goals = NutritionCalculator::calculate_goals(&p).unwrap();
            assert_eq!(goals.protein_goal_grams, 165);
        }
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let p = profile(
            dec!(0),
            175,
            25,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        let err = NutritionCalculator::calculate_goals(&p).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidProfile { field: "weight_kg", .. }));

        let p = profile(
            dec!(-70),
            175,
            25,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        assert!(NutritionCalculator::calculate_goals(&p).is_err());

        let p = profile(
            dec!(70),
            0,
            25,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        let err = NutritionCalculator::calculate_goals(&p).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidProfile { field: "height_cm", .. }));

        let p = profile(
            dec!(70),
            175,
            0,
            Gender::Male,
            ActivityLevel::Moderate,
            FitnessGoal::Maintain,
        );
        let err = NutritionCalculator::calculate_goals(&p).unwrap_err();
        assert!(matches!(err, NutritionError::InvalidProfile { field: "age_years", .. }));
    }

    #[test]
    fn test_deterministic() {
        let p = profile(
            dec!(73.2),
            171,
            33,
            Gender::Unspecified,
            ActivityLevel::ExtraActive,
            FitnessGoal::Gain,
        );
        let a = NutritionCalculator::calculate_goals(&p).unwrap();
        let b = NutritionCalculator::calculate_goals(&p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_u32(dec!(2.5)), 3);
        assert_eq!(round_to_u32(dec!(2.4)), 2);
        assert_eq!(round_to_u32(dec!(-10)), 0);
    }
}
