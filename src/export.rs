//! CSV and JSON export of derived series
//!
//! Trend points, personal records, and readiness history can be exported
//! for external plotting or spreadsheet work. The engine itself never
//! writes to the hosted store; these files are a local convenience.

use serde::Serialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

use crate::models::RecoveryReport;
use crate::trends::{PersonalRecord, VolumePoint};

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export per-session volume points to CSV, one row per session
pub fn export_volume_csv<P: AsRef<Path>>(
    points: &[VolumePoint],
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(output_path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export personal records to CSV, one row per exercise
pub fn export_records_csv<P: AsRef<Path>>(
    records: &[PersonalRecord],
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(output_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export readiness history to CSV: date, stored score, sleep hours
pub fn export_readiness_csv<P: AsRef<Path>>(
    reports: &[RecoveryReport],
    output_path: P,
) -> Result<(), ExportError> {
    #[derive(Serialize)]
    struct Row<'a> {
        date: chrono::NaiveDate,
        readiness_score: Option<u8>,
        sleep_hours: &'a rust_decimal::Decimal,
    }

    let mut writer = csv::Writer::from_path(output_path)?;
    for report in reports {
        writer.serialize(Row {
            date: report.date,
            readiness_score: report.readiness_score,
            sleep_hours: &report.sleep_hours,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Export any serializable value as pretty-printed JSON
pub fn export_json<T: Serialize, P: AsRef<Path>>(
    value: &T,
    output_path: P,
) -> Result<(), ExportError> {
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_volume_csv_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("volume.csv");

        let points = vec![
            VolumePoint {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                volume: dec!(1580),
            },
            VolumePoint {
                date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
                volume: dec!(1620.5),
            },
        ];
        export_volume_csv(&points, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("date,volume"));
        assert!(content.contains("2025-06-01,1580"));
        assert!(content.contains("2025-06-03,1620.5"));
    }

    #[test]
    fn test_records_csv_has_all_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");

        let records = vec![PersonalRecord {
            exercise: "Bench Press".to_string(),
            weight: dec!(80),
            reps: 5,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }];
        export_records_csv(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("exercise,weight,reps,date"));
        assert!(content.contains("Bench Press,80,5,2025-06-01"));
    }

    #[test]
    fn test_readiness_csv_handles_missing_scores() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("readiness.csv");

        let reports = vec![RecoveryReport {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            sleep_hours: dec!(7.5),
            sleep_quality: 7,
            soreness: 3,
            fatigue: 3,
            stress: 3,
            mood: 7,
            notes: None,
            readiness_score: None,
        }];
        export_readiness_csv(&reports, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("2025-06-01,,7.5"));
    }

    #[test]
    fn test_json_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.json");

        let points = vec![VolumePoint {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            volume: dec!(1580),
        }];
        export_json(&points, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<VolumePoint> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, points);
    }
}
