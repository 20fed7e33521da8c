use tilt_core::models::TiltTable;
use tilt_core::time_utils::TimeWindow;
use tracing::debug;

/// Keep only the records whose time of day falls inside `window`.
///
/// Columns and row order are preserved.
pub fn filter_by_window(table: &TiltTable, window: &TimeWindow) -> TiltTable {
    let records: Vec<_> = table
        .records
        .iter()
        .filter(|r| window.contains(&r.timestamp))
        .cloned()
        .collect();

    debug!(
        "Time filter {}..={}: kept {} of {} rows",
        window.start(),
        window.end(),
        records.len(),
        table.records.len()
    );

    TiltTable {
        columns: table.columns.clone(),
        records,
    }
}
