use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_values_to_f64, unix_seconds};
use crate::error::{PrepError, PrepResult};

/// One row of raw tabular input.
///
/// Field 0 is the x coordinate; fields `1..width()` hold one y value per
/// series. A `None` value means the loader had no sample for that series.
///
/// x must be finite and rows must be ordered by ascending x; window lookups
/// binary-search on it. Deserialization rejects a non-finite x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleFields")]
pub struct RawSample {
    pub x: f64,
    pub values: Vec<Option<f64>>,
}

#[derive(Deserialize)]
struct RawSampleFields {
    x: f64,
    #[serde(default)]
    values: Vec<Option<f64>>,
}

impl TryFrom<RawSampleFields> for RawSample {
    type Error = PrepError;

    fn try_from(fields: RawSampleFields) -> PrepResult<Self> {
        Self::try_new(fields.x, fields.values)
    }
}

impl RawSample {
    /// Builds a row without checking x; the caller guarantees it is finite.
    /// Use [`RawSample::try_new`] for untrusted input.
    #[must_use]
    pub fn new(x: f64, values: Vec<Option<f64>>) -> Self {
        Self { x, values }
    }

    /// Builds a row with every y value present.
    #[must_use]
    pub fn from_values(x: f64, values: &[f64]) -> Self {
        Self {
            x,
            values: values.iter().copied().map(Some).collect(),
        }
    }

    pub fn try_new(x: f64, values: Vec<Option<f64>>) -> PrepResult<Self> {
        if !x.is_finite() {
            return Err(PrepError::InvalidData(
                "sample x must be finite".to_owned(),
            ));
        }
        Ok(Self { x, values })
    }

    pub fn from_decimal_time(time: DateTime<Utc>, values: &[Option<Decimal>]) -> PrepResult<Self> {
        Ok(Self {
            x: unix_seconds(time),
            values: decimal_values_to_f64(values)?,
        })
    }

    /// Number of fields in the row, x included.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.len() + 1
    }

    /// Returns the y field at `index`; index 0 is x and yields `None`, as
    /// does any index past the end of the row.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<Option<f64>> {
        if index == 0 {
            return None;
        }
        self.values.get(index - 1).copied()
    }
}

/// A plotted sample. `y == None` is a gap; `Some(NaN)` is a measured value
/// that cannot be plotted. Both are skipped by averaging and range scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y: Some(y) }
    }

    #[must_use]
    pub fn gap(x: f64) -> Self {
        Self { x, y: None }
    }

    #[must_use]
    pub fn is_gap(self) -> bool {
        self.y.is_none()
    }

    /// Returns y when it is present and not NaN.
    #[must_use]
    pub fn valid_y(self) -> Option<f64> {
        self.y.filter(|y| !y.is_nan())
    }
}

/// Min/max of the valid y values in a scanned series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Widens this range to also cover `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Inclusive x interval used to narrow range scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XWindow {
    pub start: f64,
    pub end: f64,
}

impl XWindow {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `(low, high)` regardless of the order the bounds were given in.
    #[must_use]
    pub fn normalized(self) -> (f64, f64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        let (low, high) = self.normalized();
        x >= low && x <= high
    }
}
