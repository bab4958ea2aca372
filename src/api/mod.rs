mod data_handler;
mod handler_config;
mod series_pipeline;

pub use data_handler::{DataHandler, DefaultHandler};
pub use handler_config::HandlerConfig;
pub use series_pipeline::{PreparedSeries, SeriesPipeline, combined_range};
