use std::borrow::Cow;

use crate::core::Point;
use crate::error::{PrepError, PrepResult};

/// Smooths a series with a trailing mean over up to `window_size` points.
///
/// The window for index `i` covers `[i + 1 - w, i]`, clipped at the start of
/// the series, where `w` is `window_size` clamped to the series length. Gaps
/// and NaN values are left out of both the sum and the count; a window with
/// no valid value yields a gap. A window of one returns the input borrowed.
pub fn rolling_average(series: &[Point], window_size: usize) -> PrepResult<Cow<'_, [Point]>> {
    if window_size == 0 {
        return Err(PrepError::InvalidWindow { window_size });
    }

    let window = window_size.min(series.len());
    if window <= 1 {
        return Ok(Cow::Borrowed(series));
    }

    let averaged: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let start = (index + 1).saturating_sub(window);
            Point {
                x: point.x,
                y: window_mean(&series[start..=index]),
            }
        })
        .collect();
    Ok(Cow::Owned(averaged))
}

/// Mean of the valid y values in `window`, summed front to back.
///
/// Each window is summed from scratch so a value leaving the window can never
/// leave rounding residue or an overflow behind in later results.
fn window_mean(window: &[Point]) -> Option<f64> {
    let (sum, count) = window
        .iter()
        .filter_map(|point| point.valid_y())
        .fold((0.0_f64, 0_usize), |(sum, count), y| (sum + y, count + 1));
    (count > 0).then(|| sum / count as f64)
}
