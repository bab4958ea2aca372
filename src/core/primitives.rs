use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PrepError, PrepResult};

/// Converts loader-side decimal y values, keeping missing values as `None`.
///
/// Errors name the field index the value would occupy in the row (x is 0).
pub fn decimal_values_to_f64(values: &[Option<Decimal>]) -> PrepResult<Vec<Option<f64>>> {
    values
        .iter()
        .enumerate()
        .map(|(offset, value)| match value {
            Some(value) => value.to_f64().map(Some).ok_or_else(|| {
                PrepError::InvalidData(format!(
                    "field {} value {value} cannot be represented as f64",
                    offset + 1
                ))
            }),
            None => Ok(None),
        })
        .collect()
}

/// Unix seconds with millisecond resolution, the x unit of timestamped rows.
#[must_use]
pub fn unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
