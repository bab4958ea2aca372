#[cfg(feature = "parallel-prep")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Point, RawSample, ValueRange, XWindow};
use crate::error::PrepResult;

use super::{DataHandler, DefaultHandler, HandlerConfig};

/// One series after extraction, smoothing and range discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedSeries {
    pub series_index: usize,
    pub points: Vec<Point>,
    pub range: Option<ValueRange>,
}

/// Runs extract -> rolling average -> extreme values for the series of a raw
/// sample matrix.
///
/// Series are processed independently; with the `parallel-prep` feature
/// `prepare_all` spreads them across the rayon pool.
#[derive(Debug, Clone)]
pub struct SeriesPipeline<H: DataHandler = DefaultHandler> {
    handler: H,
    config: HandlerConfig,
}

impl SeriesPipeline<DefaultHandler> {
    pub fn with_default_handler(config: HandlerConfig) -> PrepResult<Self> {
        Self::new(DefaultHandler, config)
    }
}

impl<H: DataHandler> SeriesPipeline<H> {
    pub fn new(handler: H, config: HandlerConfig) -> PrepResult<Self> {
        let config = config.validate()?;
        Ok(Self { handler, config })
    }

    #[must_use]
    pub fn config(&self) -> HandlerConfig {
        self.config
    }

    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn set_config(&mut self, config: HandlerConfig) -> PrepResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Prepares a single series; `series_index` is a field index (first series is 1).
    pub fn prepare(
        &self,
        raw: &[RawSample],
        series_index: usize,
        window: Option<XWindow>,
    ) -> PrepResult<PreparedSeries> {
        let extracted = self
            .handler
            .extract_series(raw, series_index, &self.config)?;
        let points = self
            .handler
            .rolling_average(&extracted, self.config.roll_period, &self.config)?
            .into_owned();
        let range = self
            .handler
            .extreme_y_values(&points, window, &self.config);
        Ok(PreparedSeries {
            series_index,
            points,
            range,
        })
    }

    /// Prepares every series present in the first row, in series order.
    pub fn prepare_all(
        &self,
        raw: &[RawSample],
        window: Option<XWindow>,
    ) -> PrepResult<Vec<PreparedSeries>>
    where
        H: Sync,
    {
        let Some(first) = raw.first() else {
            return Ok(Vec::new());
        };
        let series_count = first.width() - 1;
        debug!(rows = raw.len(), series_count, "prepare all series");

        #[cfg(feature = "parallel-prep")]
        {
            (1..=series_count)
                .into_par_iter()
                .map(|series_index| self.prepare(raw, series_index, window))
                .collect()
        }

        #[cfg(not(feature = "parallel-prep"))]
        {
            (1..=series_count)
                .map(|series_index| self.prepare(raw, series_index, window))
                .collect()
        }
    }
}

/// Union of the ranges of all prepared series that have one.
#[must_use]
pub fn combined_range(prepared: &[PreparedSeries]) -> Option<ValueRange> {
    prepared
        .iter()
        .filter_map(|series| series.range)
        .reduce(ValueRange::union)
}
