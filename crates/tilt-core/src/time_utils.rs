use chrono::{Local, NaiveDate, NaiveDateTime};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Format of the `DateTime` column in the input CSV.
pub const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// First time of day (inclusive) kept by the afternoon filter.
pub const WINDOW_START: &str = "13:00";

/// Last time of day (inclusive) kept by the afternoon filter.
pub const WINDOW_END: &str = "14:15";

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse a `DD-MM-YYYY HH:MM` cell. Leading and trailing whitespace is ignored.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT).ok()
}

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// An inclusive time-of-day window compared on `HH:MM` strings.
///
/// Bounds are compared lexicographically, so they must be zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    start: String,
    end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The fixed 13:00–14:15 afternoon window.
    pub fn afternoon() -> Self {
        Self::new(WINDOW_START, WINDOW_END)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether the time of day of `ts` lies inside the window.
    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        let hhmm = ts.format("%H:%M").to_string();
        hhmm.as_str() >= self.start.as_str() && hhmm.as_str() <= self.end.as_str()
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::afternoon()
    }
}

// ── Date stamps ───────────────────────────────────────────────────────────────

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format `date` as the `YYYY_MM_DD` stamp used in file names.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y_%m_%d").to_string()
}
