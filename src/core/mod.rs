pub mod extract;
pub mod primitives;
pub mod range;
pub mod rolling;
pub mod scale;
pub mod types;
pub mod windowing;

pub use extract::extract_series;
pub use range::extreme_y_values;
pub use rolling::rolling_average;
pub use scale::ScaleMode;
pub use types::{Point, RawSample, ValueRange, XWindow};
pub use windowing::{indexes_in_window, points_in_window};
