use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behavior of a single tracker over the observation window.
///
/// Variants are declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Every reading is zero (or missing).
    Zeros,
    /// Some, but not all, readings are zero.
    Intermittent,
    /// No zeros, and every reading is the same value.
    Constant,
    /// Several distinct non-zero readings.
    Proper,
}

impl Classification {
    /// All classifications in report order.
    pub const ALL: [Classification; 4] = [
        Classification::Zeros,
        Classification::Intermittent,
        Classification::Constant,
        Classification::Proper,
    ];

    /// Classifications whose members are listed by name in the summary sheet.
    pub const LISTED: [Classification; 3] = [
        Classification::Zeros,
        Classification::Intermittent,
        Classification::Constant,
    ];

    /// Lowercase label used as a column header and in JSON output.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Zeros => "zeros",
            Classification::Intermittent => "intermittent",
            Classification::Constant => "constant",
            Classification::Proper => "proper",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltRecord {
    /// Timestamp parsed from the `DateTime` column.
    pub timestamp: NaiveDateTime,
    /// One reading per tracker column, in header order. `None` is a missing cell.
    pub readings: Vec<Option<f64>>,
}

/// The loaded input: tracker headers plus every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TiltTable {
    /// Tracker column names as they appear in the file (excluding `DateTime`).
    pub columns: Vec<String>,
    pub records: Vec<TiltRecord>,
}

impl TiltTable {
    /// Readings of column `index` across all records, in row order.
    pub fn column_values(&self, index: usize) -> Vec<Option<f64>> {
        self.records
            .iter()
            .map(|r| r.readings.get(index).copied().flatten())
            .collect()
    }

    /// Number of tracker columns.
    pub fn tracker_count(&self) -> usize {
        self.columns.len()
    }
}
