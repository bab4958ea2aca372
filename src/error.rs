use thiserror::Error;

pub type PrepResult<T> = Result<T, PrepError>;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error(
        "series index out of range: index={series_index}, row={row}, width={width} (x is field 0)"
    )]
    SeriesIndexOutOfRange {
        row: usize,
        series_index: usize,
        width: usize,
    },

    #[error("invalid rolling window: window_size={window_size} (must be >= 1)")]
    InvalidWindow { window_size: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
