use std::borrow::Cow;

use tracing::{debug, trace, warn};

use crate::core::{Point, RawSample, ValueRange, XWindow};
use crate::error::PrepResult;

use super::HandlerConfig;

/// The three per-series transforms a chart engine runs before drawing.
///
/// Implementations must keep the output of `extract_series` and
/// `rolling_average` index-aligned with their input.
pub trait DataHandler {
    fn extract_series(
        &self,
        raw: &[RawSample],
        series_index: usize,
        config: &HandlerConfig,
    ) -> PrepResult<Vec<Point>>;

    fn rolling_average<'a>(
        &self,
        series: &'a [Point],
        roll_period: usize,
        config: &HandlerConfig,
    ) -> PrepResult<Cow<'a, [Point]>>;

    fn extreme_y_values(
        &self,
        series: &[Point],
        window: Option<XWindow>,
        config: &HandlerConfig,
    ) -> Option<ValueRange>;
}

/// Handler for plain single-value line series.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHandler;

impl DataHandler for DefaultHandler {
    fn extract_series(
        &self,
        raw: &[RawSample],
        series_index: usize,
        config: &HandlerConfig,
    ) -> PrepResult<Vec<Point>> {
        match crate::core::extract_series(raw, series_index, config.scale_mode) {
            Ok(series) => {
                debug!(
                    series_index,
                    rows = raw.len(),
                    gaps = series.iter().filter(|point| point.is_gap()).count(),
                    scale_mode = ?config.scale_mode,
                    "extract series"
                );
                Ok(series)
            }
            Err(err) => {
                warn!(error = %err, series_index, "rejecting series extraction");
                Err(err)
            }
        }
    }

    fn rolling_average<'a>(
        &self,
        series: &'a [Point],
        roll_period: usize,
        _config: &HandlerConfig,
    ) -> PrepResult<Cow<'a, [Point]>> {
        let averaged = crate::core::rolling_average(series, roll_period).inspect_err(|err| {
            warn!(error = %err, "rejecting rolling average");
        })?;
        trace!(
            len = series.len(),
            roll_period,
            borrowed = matches!(averaged, Cow::Borrowed(_)),
            "rolling average"
        );
        Ok(averaged)
    }

    fn extreme_y_values(
        &self,
        series: &[Point],
        window: Option<XWindow>,
        _config: &HandlerConfig,
    ) -> Option<ValueRange> {
        let range = crate::core::extreme_y_values(series, window);
        trace!(len = series.len(), windowed = window.is_some(), ?range, "extreme y values");
        range
    }
}
