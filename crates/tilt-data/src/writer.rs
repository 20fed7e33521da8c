//! XLSX export of the filtered rows and the classification summary.

use std::path::Path;

use rust_xlsxwriter::{
    ColNum, Format, FormatAlign, FormatBorder, RowNum, Workbook, Worksheet, XlsxError,
};
use tilt_core::models::{Classification, TiltTable};
use tilt_core::{Result, TiltError};

use crate::reader::DATETIME_COLUMN;
use crate::summary::{ClassificationSummary, TrackerGroups};

/// Header of the first column of the summary sheet.
pub const DESCRIPTION_COLUMN: &str = "Description";

const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

// ── Public API ────────────────────────────────────────────────────────────────

/// Write the filtered rows to `path`: `DateTime` first, then every tracker
/// column under its raw header. Missing readings are left blank.
pub fn write_filtered(table: &TiltTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    fill_filtered(workbook.add_worksheet(), table).map_err(|e| spreadsheet_error(path, e))?;
    workbook.save(path).map_err(|e| spreadsheet_error(path, e))
}

/// Write the summary workbook to `path`.
///
/// Layout: a `Total` row and a `Percentage` row for every classification,
/// followed by the names of the zeros, intermittent and constant trackers
/// listed column-wise.
pub fn write_summary(
    summary: &ClassificationSummary,
    groups: &TrackerGroups,
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    fill_summary(workbook.add_worksheet(), summary, groups)
        .map_err(|e| spreadsheet_error(path, e))?;
    workbook.save(path).map_err(|e| spreadsheet_error(path, e))
}

// ── Sheet builders ────────────────────────────────────────────────────────────

fn fill_filtered(sheet: &mut Worksheet, table: &TiltTable) -> std::result::Result<(), XlsxError> {
    let header = header_format();
    let datetime = Format::new().set_num_format(DATETIME_NUM_FORMAT);

    sheet.write_string_with_format(0, 0, DATETIME_COLUMN, &header)?;
    for (i, name) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, col(i + 1)?, name, &header)?;
    }
    sheet.set_column_width(0, 19)?;

    for (r, record) in table.records.iter().enumerate() {
        let excel_row = row(r + 1)?;
        sheet.write_datetime_with_format(excel_row, 0, &record.timestamp, &datetime)?;
        for (i, reading) in record.readings.iter().enumerate() {
            if let Some(value) = reading {
                sheet.write_number(excel_row, col(i + 1)?, *value)?;
            }
        }
    }
    Ok(())
}

fn fill_summary(
    sheet: &mut Worksheet,
    summary: &ClassificationSummary,
    groups: &TrackerGroups,
) -> std::result::Result<(), XlsxError> {
    let header = header_format();

    sheet.write_string_with_format(0, 0, DESCRIPTION_COLUMN, &header)?;
    for (i, c) in Classification::ALL.iter().enumerate() {
        sheet.write_string_with_format(0, col(i + 1)?, c.label(), &header)?;
    }

    sheet.write_string(1, 0, "Total")?;
    sheet.write_string(2, 0, "Percentage")?;
    for (i, c) in Classification::ALL.iter().enumerate() {
        if let Some(entry) = summary.entry(*c) {
            sheet.write_number(1, col(i + 1)?, entry.count as f64)?;
            sheet.write_number(2, col(i + 1)?, entry.percentage)?;
        }
    }

    // Listing rows start below the two summary rows; `proper` is never listed
    // and shorter groups are left blank.
    for r in 0..groups.listing_depth() {
        for (i, c) in Classification::LISTED.iter().enumerate() {
            if let Some(name) = groups.members(*c).get(r) {
                sheet.write_string(row(r + 3)?, col(i + 1)?, name)?;
            }
        }
    }

    sheet.set_column_width(0, 12)?;
    for i in 0..Classification::LISTED.len() {
        sheet.set_column_width(col(i + 1)?, 36)?;
    }
    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
}

// Indices past the integer range are reported like any other out-of-range
// cell instead of wrapping onto earlier rows or columns.
fn row(index: usize) -> std::result::Result<RowNum, XlsxError> {
    RowNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn col(index: usize) -> std::result::Result<ColNum, XlsxError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn spreadsheet_error(path: &Path, source: XlsxError) -> TiltError {
    TiltError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
