use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::{debug, info};

use fitrs::config::AppConfig;
use fitrs::export;
use fitrs::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use fitrs::models::{
    ActivityLevel, BodyProfile, DailyNutritionLog, FitnessGoal, Gender, NutritionGoals,
    RecoveryReport, WorkoutSession,
};
use fitrs::nutrition::NutritionCalculator;
use fitrs::overload::OverloadAdvisor;
use fitrs::readiness::{ReadinessCalculator, ReadinessLevel};
use fitrs::summary::NutritionSummary;
use fitrs::trends::TrendAnalyzer;

/// fitrs - Fitness Derived-Metrics CLI
///
/// Computes nutrition goals, daily readiness scores, and progressive
/// overload suggestions from fitness records the surrounding platform
/// has already fetched.
#[derive(Parser)]
#[command(name = "fitrs")]
#[command(version = "0.1.0")]
#[command(about = "Fitness derived-metrics engine", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate daily nutrition goals from a body profile
    Goals {
        /// Weight in kilograms
        #[arg(short, long)]
        weight: Decimal,

        /// Height in centimeters
        #[arg(long)]
        height: u16,

        /// Age in years
        #[arg(short, long)]
        age: u8,

        /// Gender (male, female, other)
        #[arg(short, long, default_value = "other")]
        gender: String,

        /// Activity level (sedentary, light, moderate, very_active, extra_active)
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Fitness goal (lose, maintain, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score a daily recovery check-in
    Readiness {
        /// Date of the report (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Hours slept
        #[arg(short, long)]
        sleep_hours: Decimal,

        /// Sleep quality, 1-10
        #[arg(long)]
        sleep_quality: u8,

        /// Muscle soreness, 1-10
        #[arg(long)]
        soreness: u8,

        /// Fatigue, 1-10
        #[arg(long)]
        fatigue: u8,

        /// Stress, 1-10
        #[arg(long)]
        stress: u8,

        /// Mood, 1-10
        #[arg(long)]
        mood: u8,

        /// Print the scored report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest the next weight/rep target for an exercise
    Suggest {
        /// Workout history file (JSON array of sessions)
        #[arg(short, long)]
        file: PathBuf,

        /// Exercise name, matched exactly
        #[arg(short, long)]
        exercise: String,

        /// Print the suggestion as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show volume, personal records, and muscle group trends
    Trends {
        /// Workout history file (JSON array of sessions)
        #[arg(short, long)]
        file: PathBuf,

        /// Export the volume series to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format (csv, json)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Summarize a day's nutrition log against goals
    Summary {
        /// Daily nutrition log file (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Nutrition goals file (JSON); percentages are skipped without it
        #[arg(short, long)]
        goals: Option<PathBuf>,
    },

    /// Show or initialize the configuration
    Config {
        /// Write a default config to the default location
        #[arg(long)]
        init: bool,
    },
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl MetricRow {
    fn new(metric: &str, value: impl ToString) -> Self {
        MetricRow {
            metric: metric.to_string(),
            value: value.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };
    let _guard = init_logging(&LogConfig {
        level,
        format: cli.log_format,
        file_path: None,
    })?;

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    match cli.command {
        Commands::Goals {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
            json,
        } => {
            let profile = BodyProfile {
                weight_kg: weight,
                height_cm: height,
                age_years: age,
                gender: parse_gender(&gender)?,
                activity_level: parse_activity(&activity)?,
                fitness_goal: parse_goal(&goal)?,
            };
            debug!(?profile, "calculating nutrition goals");
            let goals = NutritionCalculator::calculate_goals(&profile)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&goals)?);
            } else {
                print_goals(&goals);
            }
        }

        Commands::Readiness {
            date,
            sleep_hours,
            sleep_quality,
            soreness,
            fatigue,
            stress,
            mood,
            json,
        } => {
            let report = RecoveryReport {
                date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
                sleep_hours,
                sleep_quality,
                soreness,
                fatigue,
                stress,
                mood,
                notes: None,
                readiness_score: None,
            };
            let score = ReadinessCalculator::calculate(&report)?;
            info!(score = score.value(), "readiness computed");

            if json {
                let scored = ReadinessCalculator::annotate(&report)?;
                println!("{}", serde_json::to_string_pretty(&scored)?);
            } else {
                let display = match score.level() {
                    ReadinessLevel::HighIntensity => score.to_string().green().bold(),
                    ReadinessLevel::Moderate => score.to_string().yellow().bold(),
                    ReadinessLevel::Rest => score.to_string().red().bold(),
                };
                println!("Readiness: {}", display);
                println!("{}", score.level().recommendation());
            }
        }

        Commands::Suggest { file, exercise, json } => {
            let sessions = load_sessions(&file)?;
            let suggestion =
                OverloadAdvisor::suggest_next_load(&sessions, &exercise, &config.overload);

            if json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!("{}", format!("Next target for {}", suggestion.exercise_name).bold());
                println!(
                    "  {} kg × {} reps",
                    suggestion.suggested_weight, suggestion.suggested_reps
                );
                if suggestion.suggested_weight.is_zero() {
                    println!("{}", "No history yet; starting target.".dimmed());
                }
            }
        }

        Commands::Trends { file, output, format } => {
            let sessions = load_sessions(&file)?;
            let points = TrendAnalyzer::volume_by_session(&sessions);
            let records = TrendAnalyzer::personal_records(&sessions);
            let distribution = TrendAnalyzer::muscle_group_distribution(&sessions);

            let volume_rows: Vec<MetricRow> = points
                .iter()
                .map(|p| MetricRow::new(&p.date.to_string(), format!("{} kg", p.volume)))
                .collect();
            println!("{}", "Session volume".bold());
            println!("{}", Table::new(volume_rows));

            let record_rows: Vec<MetricRow> = records
                .iter()
                .map(|r| {
                    MetricRow::new(&r.exercise, format!("{} kg × {} ({})", r.weight, r.reps, r.date))
                })
                .collect();
            println!("{}", "Personal records".bold());
            println!("{}", Table::new(record_rows));

            let group_rows: Vec<MetricRow> = distribution
                .iter()
                .map(|(group, count)| MetricRow::new(&group.to_string(), count))
                .collect();
            println!("{}", "Muscle group distribution".bold());
            println!("{}", Table::new(group_rows));

            if let Some(path) = output {
                match format.as_str() {
                    "csv" => export::export_volume_csv(&points, &path)?,
                    "json" => export::export_json(&points, &path)?,
                    other => return Err(anyhow!("Unsupported export format: {}", other)),
                }
                println!("{}", format!("✓ Exported volume series to {}", path.display()).green());
            }
        }

        Commands::Summary { file, goals } => {
            let log: DailyNutritionLog = read_json(&file)?;
            let summary = NutritionSummary::from_log(&log);

            let mut rows = vec![
                MetricRow::new("Calories", format!("{} kcal", summary.total_calories)),
                MetricRow::new("Protein", format!("{} g", summary.total_protein)),
                MetricRow::new("Carbs", format!("{} g", summary.total_carbs)),
                MetricRow::new("Fat", format!("{} g", summary.total_fat)),
                MetricRow::new("Water", format!("{} glasses", summary.water_intake)),
            ];

            if let Some(goals_path) = goals {
                let goals: NutritionGoals = read_json(&goals_path)?;
                let progress = summary.progress(&goals);
                rows = vec![
                    MetricRow::new(
                        "Calories",
                        format!(
                            "{} / {} kcal ({}%)",
                            summary.total_calories, goals.calorie_goal, progress.calories.percent
                        ),
                    ),
                    MetricRow::new(
                        "Protein",
                        format!(
                            "{} / {} g ({}%)",
                            summary.total_protein, goals.protein_goal_grams, progress.protein.percent
                        ),
                    ),
                    MetricRow::new(
                        "Carbs",
                        format!(
                            "{} / {} g ({}%)",
                            summary.total_carbs, goals.carb_goal_grams, progress.carbs.percent
                        ),
                    ),
                    MetricRow::new(
                        "Fat",
                        format!(
                            "{} / {} g ({}%)",
                            summary.total_fat, goals.fat_goal_grams, progress.fat.percent
                        ),
                    ),
                    MetricRow::new(
                        "Water",
                        format!(
                            "{} / {} glasses ({}%)",
                            summary.water_intake, goals.water_goal_glasses, progress.water_percent
                        ),
                    ),
                ];
            }

            println!("{}", format!("Nutrition for {}", summary.date).bold());
            println!("{}", Table::new(rows));
        }

        Commands::Config { init } => {
            if init {
                let path = AppConfig::default_config_path();
                AppConfig::default().save_to_file(&path)?;
                println!("{}", format!("✓ Wrote default config to {}", path.display()).green());
            } else {
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn print_goals(goals: &NutritionGoals) {
    let rows = vec![
        MetricRow::new("Calories", format!("{} kcal", goals.calorie_goal)),
        MetricRow::new("Protein", format!("{} g", goals.protein_goal_grams)),
        MetricRow::new("Carbs", format!("{} g", goals.carb_goal_grams)),
        MetricRow::new("Fat", format!("{} g", goals.fat_goal_grams)),
        MetricRow::new("Water", format!("{} glasses", goals.water_goal_glasses)),
    ];
    println!("{}", "Daily nutrition goals".bold());
    println!("{}", Table::new(rows));
}

/// Load a workout history file and order it newest first
fn load_sessions(path: &PathBuf) -> Result<Vec<WorkoutSession>> {
    let mut sessions: Vec<WorkoutSession> = read_json(path)?;
    sessions.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(sessions)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

fn parse_gender(s: &str) -> Result<Gender> {
    match s.to_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        "other" | "unspecified" | "prefer_not_to_say" => Ok(Gender::Unspecified),
        _ => Err(anyhow!("Unrecognized gender: {}", s)),
    }
}

fn parse_activity(s: &str) -> Result<ActivityLevel> {
    match s.to_lowercase().as_str() {
        "sedentary" => Ok(ActivityLevel::Sedentary),
        "light" => Ok(ActivityLevel::Light),
        "moderate" => Ok(ActivityLevel::Moderate),
        "very_active" => Ok(ActivityLevel::VeryActive),
        "extra_active" => Ok(ActivityLevel::ExtraActive),
        _ => Err(anyhow!("Unrecognized activity level: {}", s)),
    }
}

fn parse_goal(s: &str) -> Result<FitnessGoal> {
    match s.to_lowercase().as_str() {
        "lose" | "lose_fat" => Ok(FitnessGoal::Lose),
        "maintain" => Ok(FitnessGoal::Maintain),
        "gain" | "build_muscle" => Ok(FitnessGoal::Gain),
        _ => Err(anyhow!("Unrecognized fitness goal: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gender() {
        assert_eq!(parse_gender("Male").unwrap(), Gender::Male);
        assert_eq!(parse_gender("f").unwrap(), Gender::Female);
        assert_eq!(parse_gender("other").unwrap(), Gender::Unspecified);
        assert!(parse_gender("robot").is_err());
    }

    #[test]
    fn test_parse_activity() {
        assert_eq!(parse_activity("very_active").unwrap(), ActivityLevel::VeryActive);
        assert!(parse_activity("lazy").is_err());
    }

    #[test]
    fn test_parse_goal_accepts_source_aliases() {
        assert_eq!(parse_goal("build_muscle").unwrap(), FitnessGoal::Gain);
        assert_eq!(parse_goal("lose_fat").unwrap(), FitnessGoal::Lose);
        assert_eq!(parse_goal("maintain").unwrap(), FitnessGoal::Maintain);
    }
}
