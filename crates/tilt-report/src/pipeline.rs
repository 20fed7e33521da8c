//! The daily report run: load, filter, export, classify, summarise, export.

use tilt_core::settings::ReportPaths;
use tilt_core::time_utils::TimeWindow;
use tilt_core::Result;
use tilt_data::filter::filter_by_window;
use tilt_data::reader::load_table;
use tilt_data::summary::{classify_table, ClassificationSummary, TrackerGroups};
use tilt_data::writer::{write_filtered, write_summary};
use tracing::info;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Rows kept by the time filter.
    pub filtered_rows: usize,
    pub groups: TrackerGroups,
    pub summary: ClassificationSummary,
}

/// Execute one report run against `paths`.
///
/// Output directories are created when missing. Any failure aborts the run;
/// the filtered workbook may already exist at that point.
pub fn run(paths: &ReportPaths, window: &TimeWindow) -> Result<RunOutcome> {
    info!("Script started.");

    let table = load_table(&paths.input)?;
    info!("Loaded data from {}", paths.input.display());

    let filtered = filter_by_window(&table, window);

    for out in [&paths.filtered, &paths.summary] {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_filtered(&filtered, &paths.filtered)?;
    info!("Filtered data saved to {}", paths.filtered.display());

    let classified = classify_table(&filtered);
    let groups = TrackerGroups::from_trackers(&classified);
    let summary = ClassificationSummary::from_groups(&groups)?;

    write_summary(&summary, &groups, &paths.summary)?;
    info!(
        "Tracker classification summary saved to {}",
        paths.summary.display()
    );

    Ok(RunOutcome {
        filtered_rows: filtered.records.len(),
        groups,
        summary,
    })
}
