//! Per-tracker classification and the summary counts built from it.

use std::collections::BTreeMap;

use serde::Serialize;
use tilt_core::classifier::classify_tracker;
use tilt_core::models::{Classification, TiltTable};
use tilt_core::naming::{is_tracker_name, transform_tracker_name};
use tilt_core::{Result, TiltError};
use tracing::debug;

// ── Classification pass ───────────────────────────────────────────────────────

/// A tracker column after renaming, with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTracker {
    pub name: String,
    pub classification: Classification,
}

/// Rename every tracker column and classify its readings.
///
/// Output order follows the column order of `table`.
pub fn classify_table(table: &TiltTable) -> Vec<ClassifiedTracker> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            if !is_tracker_name(raw) {
                debug!("Column \"{}\" has no tracker identifier; keeping name", raw);
            }
            ClassifiedTracker {
                name: transform_tracker_name(raw),
                classification: classify_tracker(&table.column_values(idx)),
            }
        })
        .collect()
}

// ── TrackerGroups ─────────────────────────────────────────────────────────────

/// Tracker names grouped by classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrackerGroups {
    groups: BTreeMap<Classification, Vec<String>>,
}

impl TrackerGroups {
    /// Group `trackers`, keeping their relative order within each group.
    pub fn from_trackers(trackers: &[ClassifiedTracker]) -> Self {
        let mut groups: BTreeMap<Classification, Vec<String>> = Classification::ALL
            .iter()
            .map(|c| (*c, Vec::new()))
            .collect();
        for t in trackers {
            groups
                .entry(t.classification)
                .or_default()
                .push(t.name.clone());
        }
        Self { groups }
    }

    /// Names in `classification`, in column order.
    pub fn members(&self, classification: Classification) -> &[String] {
        self.groups
            .get(&classification)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of trackers across all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Rows needed to list the zeros/intermittent/constant groups side by side.
    pub fn listing_depth(&self) -> usize {
        Classification::LISTED
            .iter()
            .map(|c| self.members(*c).len())
            .max()
            .unwrap_or(0)
    }
}

// ── ClassificationSummary ─────────────────────────────────────────────────────

/// Count and share of one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub classification: Classification,
    pub count: usize,
    /// Share of all trackers, in percent.
    pub percentage: f64,
}

/// Totals and percentages for every classification, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationSummary {
    pub total_trackers: usize,
    pub entries: Vec<SummaryEntry>,
}

impl ClassificationSummary {
    /// Build the summary. Fails with [`TiltError::NoTrackers`] when there is
    /// nothing to take a percentage of.
    pub fn from_groups(groups: &TrackerGroups) -> Result<Self> {
        let total = groups.total();
        if total == 0 {
            return Err(TiltError::NoTrackers);
        }

        let entries = Classification::ALL
            .iter()
            .map(|c| {
                let count = groups.members(*c).len();
                SummaryEntry {
                    classification: *c,
                    count,
                    percentage: count as f64 / total as f64 * 100.0,
                }
            })
            .collect();

        Ok(Self {
            total_trackers: total,
            entries,
        })
    }

    pub fn entry(&self, classification: Classification) -> Option<&SummaryEntry> {
        self.entries
            .iter()
            .find(|e| e.classification == classification)
    }
}
