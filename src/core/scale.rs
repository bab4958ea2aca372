use serde::{Deserialize, Serialize};

/// Vertical-axis mapping the prepared series will be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Uniform spacing in raw value units.
    #[default]
    Linear,
    /// Uniform spacing in log units; only values > 0 can be plotted.
    Log,
}

impl ScaleMode {
    /// Applies the scale's validity rule to a raw y value.
    ///
    /// On a log scale non-positive values have no position on the axis and
    /// become gaps. NaN is passed through unchanged; downstream consumers
    /// skip it the same way they skip gaps.
    #[must_use]
    pub fn admit(self, y: Option<f64>) -> Option<f64> {
        match (self, y) {
            (Self::Log, Some(value)) if value <= 0.0 => None,
            (_, y) => y,
        }
    }
}
