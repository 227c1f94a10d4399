// Library interface for the fitrs derived-metrics engine
// This allows integration tests and the CLI to access the core functionality

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod overload;
pub mod readiness;
pub mod summary;
pub mod trends;

// Re-export commonly used types for convenience
pub use models::*;
pub use nutrition::{NutritionCalculator, NutritionError, WATER_GOAL_GLASSES};
pub use overload::{OverloadAdvisor, OverloadConfig};
pub use readiness::{ReadinessCalculator, ReadinessError, ReadinessLevel, ReadinessScore};
pub use summary::{MacroProgress, MacroStat, NutritionSummary};
pub use trends::{MuscleGroup, PersonalRecord, TrendAnalyzer, VolumePoint};

pub use config::AppConfig;
pub use error::{FitRsError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
