use crate::core::windowing::points_in_window;
use crate::core::{Point, ValueRange, XWindow};

/// Finds the smallest and largest valid y value of a series.
///
/// Gaps and NaN values are ignored. With a `window`, only points whose x lies
/// inside it are scanned; without one the whole slice is. Returns `None` when
/// nothing valid was seen, which callers must not read as a `0..0` range.
#[must_use]
pub fn extreme_y_values(series: &[Point], window: Option<XWindow>) -> Option<ValueRange> {
    let scanned = match window {
        Some(window) => points_in_window(series, window),
        None => series,
    };

    let mut range: Option<ValueRange> = None;
    for y in scanned.iter().filter_map(|point| point.valid_y()) {
        range = Some(match range {
            None => ValueRange::new(y, y),
            Some(current) => ValueRange {
                min: if y < current.min { y } else { current.min },
                max: if y > current.max { y } else { current.max },
            },
        });
    }
    range
}
