//! Readiness score calculation
//!
//! Collapses a daily recovery self-report into a single composite score
//! indicating how hard the user should train that day.
//!
//! # Scale
//!
//! Every sub-score is normalized to 0-10 before weighting, and the stored
//! composite stays on that 0-10 scale, the same value the calculation
//! produces, rounded. Display surfaces that want a percentage use
//! [`ReadinessScore::percent`]; the source app mixed both scales across
//! views, so this module fixes 0-10 as canonical and converts only at
//! display time.
//!
//! # Weighting
//!
//! | component      | weight | direction          |
//! |----------------|--------|--------------------|
//! | sleep hours    | 0.30   | capped at 8 h = 10 |
//! | sleep quality  | 0.20   | higher is better   |
//! | soreness       | 0.15   | inverted           |
//! | fatigue        | 0.15   | inverted           |
//! | stress         | 0.10   | inverted           |
//! | mood           | 0.10   | higher is better   |

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::RecoveryReport;

/// Readiness calculation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadinessError {
    #[error("Invalid report: {field} must be between 1 and 10, got {value}")]
    InvalidReport { field: &'static str, value: u8 },

    #[error("Invalid report: sleep_hours must be non-negative, got {value}")]
    NegativeSleep { value: String },
}

/// Composite readiness score on the canonical 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReadinessScore(u8);

impl ReadinessScore {
    /// The stored 0-10 value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Display-scale percentage (0-100)
    pub fn percent(&self) -> u8 {
        self.0 * 10
    }

    /// Training recommendation band for this score
    pub fn level(&self) -> ReadinessLevel {
        match self.percent() {
            80..=100 => ReadinessLevel::HighIntensity,
            60..=79 => ReadinessLevel::Moderate,
            _ => ReadinessLevel::Rest,
        }
    }
}

impl fmt::Display for ReadinessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Recommended training intensity bands derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    /// 80% and up
    HighIntensity,
    /// 60-79%
    Moderate,
    /// Below 60%
    Rest,
}

impl ReadinessLevel {
    /// User-facing recommendation text
    pub fn recommendation(&self) -> &'static str {
        match self {
            ReadinessLevel::HighIntensity => "Ready for high intensity",
            ReadinessLevel::Moderate => "Moderate training advised",
            ReadinessLevel::Rest => "Focus on recovery today",
        }
    }
}

/// Readiness score calculation engine
pub struct ReadinessCalculator;

impl ReadinessCalculator {
    /// Calculate the composite readiness score for a recovery report
    ///
    /// Recomputed on every submission; a report edited later gets a fresh
    /// score, older reports are never recomputed retroactively.
    pub fn calculate(report: &RecoveryReport) -> Result<ReadinessScore, ReadinessError> {
        Self::validate(report)?;

        // 8 hours of sleep earns full marks; more never over-credits.
        let sleep_score = (report.sleep_hours / dec!(8) * dec!(10)).min(dec!(10));

        let sleep_quality_score = Decimal::from(report.sleep_quality);
        let soreness_score = dec!(10) - Decimal::from(report.soreness);
        let fatigue_score = dec!(10) - Decimal::from(report.fatigue);
        let stress_score = dec!(10) - Decimal::from(report.stress);
        let mood_score = Decimal::from(report.mood);

        let composite = sleep_score * dec!(0.30)
            + sleep_quality_score * dec!(0.20)
            + soreness_score * dec!(0.15)
            + fatigue_score * dec!(0.15)
            + stress_score * dec!(0.10)
            + mood_score * dec!(0.10);

        let rounded = composite
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(0);

        Ok(ReadinessScore(rounded))
    }

    /// Return a copy of the report with its score filled in
    ///
    /// Convenience for the submit path: compute, attach, hand back for the
    /// caller to merge into that day's stored record.
    pub fn annotate(report: &RecoveryReport) -> Result<RecoveryReport, ReadinessError> {
        let score = Self::calculate(report)?;
        Ok(RecoveryReport {
            readiness_score: Some(score.value()),
            ..report.clone()
        })
    }

    fn validate(report: &RecoveryReport) -> Result<(), ReadinessError> {
        if report.sleep_hours < Decimal::ZERO {
            return Err(ReadinessError::NegativeSleep {
                value: report.sleep_hours.to_string(),
            });
        }

        let scaled: [(&'static str, u8); 5] = [
            ("sleep_quality", report.sleep_quality),
            ("soreness", report.soreness),
            ("fatigue", report.fatigue),
            ("stress", report.stress),
            ("mood", report.mood),
        ];
        for (field, value) in scaled {
            if !(1..=10).contains(&value) {
                return Err(ReadinessError::InvalidReport { field, value });
            }
        }

        Ok(())
    }
}
