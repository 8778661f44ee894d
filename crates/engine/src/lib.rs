// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod reader;
pub mod report;

pub use bool_tally_core::{CountMap, CountMode, HeaderSplit, Tally, TallyError};

use crate::config::Config;
use crate::error::Result;
use crate::report::Report;
use std::path::Path;

/// Run the boolean counting engine on the file named by `config`.
///
/// Reads the whole file, parses it and runs the configured counting mode.
///
/// # Errors
///
/// Returns [`error::EngineError::FileRead`] if the file cannot be read, or
/// [`error::EngineError::Tally`] for an empty file or, in combination mode,
/// a file without boolean columns.
pub fn run(config: &Config) -> Result<Report> {
    let dataset = reader::load_dataset(&config.path)?;
    let tally = bool_tally_core::count_booleans(&dataset, &config.options())?;
    Ok(Report::new(&config.path, tally))
}

/// Count `path` with default options and return only the count mapping.
///
/// # Errors
///
/// Same as [`run`].
pub fn process_file(path: impl AsRef<Path>, mode: CountMode) -> Result<CountMap> {
    let config = Config::for_path(path.as_ref()).mode(mode).build()?;
    run(&config).map(|report| report.tally.counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_run_combination_scenario() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "flags.csv",
            "flag1,flag2\ntrue,false\ntrue,false\nfalse,false\n",
        );

        let report = run(&Config::for_path(&path).build().unwrap()).unwrap();
        assert_eq!(report.file_name, "flags.csv");
        assert!(report.tally.has_header);
        assert_eq!(report.tally.get("true, false"), 2);
        assert_eq!(report.tally.get("false, false"), 1);
        assert_eq!(report.tally.counts.len(), 2);
    }

    #[test]
    fn test_process_file_flat_scenario() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "flat.csv", "h1,h2\ntrue,true,false\nfalse\n");

        let counts = process_file(&path, CountMode::Flat).unwrap();
        assert_eq!(counts.get("True Count"), Some(&2));
        assert_eq!(counts.get("False Count"), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_run_reports_no_boolean_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "nums.csv", "a,b\n1,2\n3,4\n");

        let err = process_file(&path, CountMode::Combination).unwrap_err();
        assert_eq!(err.tally(), Some(&TallyError::NoBooleanColumns));
        assert_eq!(err.to_string(), "No boolean columns found");
    }

    #[test]
    fn test_run_reports_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "empty.csv", "");

        let err = process_file(&path, CountMode::Flat).unwrap_err();
        assert_eq!(err.to_string(), "CSV file is empty");
    }

    #[test]
    fn test_run_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = process_file(dir.path().join("nope.csv"), CountMode::Combination).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
        assert!(err.to_string().starts_with("Failed to read file"));
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "twice.csv", "true,false\nfalse,true\n");
        let config = Config::for_path(&path).build().unwrap();

        assert_eq!(run(&config).unwrap(), run(&config).unwrap());
    }

    #[test]
    fn test_report_serializes_flat_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "r.csv", "true,false\n");
        let config = Config::for_path(&path)
            .mode(CountMode::Flat)
            .build()
            .unwrap();

        let value = serde_json::to_value(run(&config).unwrap()).unwrap();
        assert_eq!(value["file_name"], "r.csv");
        assert_eq!(value["mode"], "flat");
        assert_eq!(value["counts"]["True Count"], 1);
        assert_eq!(value["counts"]["False Count"], 1);
    }
}
