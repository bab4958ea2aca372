use crate::core::{Point, XWindow};

/// Returns the inclusive `(first, last)` indexes of points whose x falls inside
/// `window`, or `None` when no point does.
///
/// Points must be ordered by ascending x; both ends are located by binary
/// search.
#[must_use]
pub fn indexes_in_window(points: &[Point], window: XWindow) -> Option<(usize, usize)> {
    let (low, high) = window.normalized();
    let first = points.partition_point(|point| point.x < low);
    let end = points.partition_point(|point| point.x <= high);
    if first >= end {
        return None;
    }
    Some((first, end - 1))
}

/// Returns the contiguous slice of points whose x falls inside `window`.
#[must_use]
pub fn points_in_window(points: &[Point], window: XWindow) -> &[Point] {
    match indexes_in_window(points, window) {
        Some((first, last)) => &points[first..=last],
        None => &[],
    }
}
