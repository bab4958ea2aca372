//! chart-prep: series preparation for time-series charts.
//!
//! Turns raw sample rows into per-series point sequences, smooths them with a
//! trailing moving average and finds the y range a vertical axis needs. Values
//! that cannot be plotted become gaps instead of errors.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{DataHandler, DefaultHandler, HandlerConfig, SeriesPipeline};
pub use error::{PrepError, PrepResult};
