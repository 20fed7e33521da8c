use chrono::NaiveDate;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::time_utils::{date_stamp, today};

/// Default log file, appended to on every run.
pub const DEFAULT_LOG_FILE: &str = "tracker_classification_log.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Classify Korat tilt-angle trackers over the afternoon window
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tilt-report",
    about = "Classify Korat tilt-angle trackers over the afternoon window",
    version
)]
pub struct Settings {
    /// Run date used to build file names (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_run_date)]
    pub date: Option<NaiveDate>,

    /// Directory holding the input CSV
    #[arg(long, default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory receiving both workbooks
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log file path
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Print the classification summary as JSON on stdout
    #[arg(long)]
    pub print_summary: bool,
}

fn parse_run_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

impl Settings {
    /// The date the run is for: `--date` when given, otherwise today.
    pub fn run_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(today)
    }

    /// Resolve the input and output file paths for this run.
    pub fn report_paths(&self) -> ReportPaths {
        ReportPaths::for_date(self.run_date(), &self.input_dir, &self.output_dir)
    }
}

// ── ReportPaths ────────────────────────────────────────────────────────────────

/// Date-stamped file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// `Korat_Tilt_Angel_<stamp>.csv`
    pub input: PathBuf,
    /// `filtered_data_<stamp>.xlsx`
    pub filtered: PathBuf,
    /// `Final_<stamp>.xlsx`
    pub summary: PathBuf,
}

impl ReportPaths {
    pub fn for_date(date: NaiveDate, input_dir: &Path, output_dir: &Path) -> Self {
        let stamp = date_stamp(date);
        Self {
            input: input_dir.join(format!("Korat_Tilt_Angel_{}.csv", stamp)),
            filtered: output_dir.join(format!("filtered_data_{}.xlsx", stamp)),
            summary: output_dir.join(format!("Final_{}.xlsx", stamp)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        let mut full = vec!["tilt-report"];
        full.extend_from_slice(args);
        Settings::parse_from(full)
    }

    #[test]
    fn test_defaults_match_hardcoded_behavior() {
        let s = parse(&[]);
        assert!(s.date.is_none());
        assert_eq!(s.input_dir, PathBuf::from("."));
        assert_eq!(s.output_dir, PathBuf::from("."));
        assert_eq!(s.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(s.log_level, "INFO");
        assert!(!s.print_summary);
        assert_eq!(s.run_date(), today());
    }

    #[test]
    fn test_explicit_date() {
        let s = parse(&["--date", "2024-05-01"]);
        assert_eq!(s.run_date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = Settings::try_parse_from(["tilt-report", "--date", "01-05-2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Settings::try_parse_from(["tilt-report", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_paths() {
        let s = parse(&[
            "--date",
            "2024-05-01",
            "--input-dir",
            "/data/in",
            "--output-dir",
            "/data/out",
        ]);
        let paths = s.report_paths();
        assert_eq!(
            paths.input,
            PathBuf::from("/data/in/Korat_Tilt_Angel_2024_05_01.csv")
        );
        assert_eq!(
            paths.filtered,
            PathBuf::from("/data/out/filtered_data_2024_05_01.xlsx")
        );
        assert_eq!(paths.summary, PathBuf::from("/data/out/Final_2024_05_01.xlsx"));
    }
}
