use crate::core::{Point, RawSample, ScaleMode};
use crate::error::{PrepError, PrepResult};

/// Projects one series out of a raw sample matrix.
///
/// Every row produces exactly one point, so the output stays index-aligned
/// with `raw`. Values the scale cannot plot are encoded as gaps in place.
/// `series_index` is a field index: 0 is x, so the first series is 1.
pub fn extract_series(
    raw: &[RawSample],
    series_index: usize,
    mode: ScaleMode,
) -> PrepResult<Vec<Point>> {
    if let Some((row, sample)) = raw
        .iter()
        .enumerate()
        .find(|(_, sample)| series_index == 0 || series_index >= sample.width())
    {
        return Err(PrepError::SeriesIndexOutOfRange {
            row,
            series_index,
            width: sample.width(),
        });
    }

    let mut series = Vec::with_capacity(raw.len());
    for sample in raw {
        let y = sample.field(series_index).flatten();
        series.push(Point {
            x: sample.x,
            y: mode.admit(y),
        });
    }
    Ok(series)
}
