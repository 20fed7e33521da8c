//! CSV loading for the daily tilt-angle export.
//!
//! Reads `Korat_Tilt_Angel_<date>.csv` into a [`TiltTable`]: the `DateTime`
//! column is parsed as a naive timestamp, every other column is a tracker
//! reading.

use std::path::Path;

use tilt_core::models::{TiltRecord, TiltTable};
use tilt_core::time_utils::parse_datetime;
use tilt_core::{Result, TiltError};
use tracing::debug;

/// Name of the timestamp column.
pub const DATETIME_COLUMN: &str = "DateTime";

/// Cell contents treated as a missing reading.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the CSV at `path`.
pub fn load_table(path: &Path) -> Result<TiltTable> {
    let file = std::fs::File::open(path).map_err(|source| TiltError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file)?;

    debug!(
        "Read {} rows and {} tracker columns from {}",
        table.records.len(),
        table.tracker_count(),
        path.display()
    );

    Ok(table)
}

/// Parse CSV content from any reader.
///
/// Rows shorter than the header are accepted; their trailing cells are
/// missing readings.
pub fn read_table<R: std::io::Read>(source: R) -> Result<TiltTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let dt_idx = headers
        .iter()
        .position(|h| h == DATETIME_COLUMN)
        .ok_or_else(|| TiltError::MissingColumn(DATETIME_COLUMN.to_string()))?;

    let tracker_idx: Vec<usize> = (0..headers.len()).filter(|&i| i != dt_idx).collect();
    let columns: Vec<String> = tracker_idx.iter().map(|&i| headers[i].to_string()).collect();

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let row_no = i + 1;

        let raw_ts = row.get(dt_idx).unwrap_or("");
        let timestamp = parse_datetime(raw_ts).ok_or_else(|| TiltError::TimestampParse {
            row: row_no,
            value: raw_ts.to_string(),
        })?;

        let readings = tracker_idx
            .iter()
            .zip(&columns)
            .map(|(&idx, column)| {
                let cell = row.get(idx).unwrap_or("");
                parse_reading(cell).ok_or_else(|| TiltError::ValueParse {
                    column: column.clone(),
                    row: row_no,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        records.push(TiltRecord {
            timestamp,
            readings,
        });
    }

    Ok(TiltTable { columns, records })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse one tracker cell.
///
/// Returns `Some(None)` for a missing reading and `None` when the cell is not
/// a number at all.
fn parse_reading(cell: &str) -> Option<Option<f64>> {
    let trimmed = cell.trim();
    if NA_TOKENS.contains(&trimmed) {
        return Some(None);
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_nan() {
        Some(None)
    } else {
        Some(Some(value))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
