use serde::{Deserialize, Serialize};

/// Default spacing between consecutive sample rows: one millisecond.
pub const DEFAULT_SAMPLE_INTERVAL_SECS: f64 = 0.001;

/// Ordered matrix of numeric sample rows with a derived time extent.
///
/// Row order defines temporal order: row 0 is the earliest sample. Rows are
/// plain numeric vectors and may have heterogeneous lengths; the model does
/// not check row widths (documented limitation, kept as-is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    rows: Vec<Vec<f64>>,
    interval: f64,
}

impl Default for PlotData {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotData {
    /// Creates an empty series with the default 1ms sample interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            interval: DEFAULT_SAMPLE_INTERVAL_SECS,
        }
    }

    /// Builds a series by appending each row of the source matrix in order.
    #[must_use]
    pub fn from_rows<I, T>(matrix: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<f64>>,
    {
        let mut data = Self::new();
        for row in matrix {
            data.push_row(row.into());
        }
        data
    }

    /// Appends one sample row; the interval is not rescaled.
    pub fn push_row(&mut self, row: Vec<f64>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Seconds between consecutive rows.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f64) {
        self.interval = interval;
    }

    /// Total series extent: `interval * row_count`.
    ///
    /// The value is derived on read and never stored, so it stays
    /// consistent through any sequence of interval mutations.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.interval * self.rows.len() as f64
    }

    /// Maps a target duration back onto the interval as
    /// `interval = row_count / duration`.
    ///
    /// This mapping is not the inverse of [`PlotData::duration`]: after
    /// `set_duration(d)` a reader observes `duration() == row_count^2 / d`,
    /// not `d`.
    pub fn set_duration(&mut self, duration: f64) {
        self.set_interval(self.rows.len() as f64 / duration);
    }
}
