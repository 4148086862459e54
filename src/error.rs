use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("samples must be ordered by timestamp: index {index} ({time_ms} ms) precedes {previous_ms} ms")]
    UnorderedSamples {
        index: usize,
        time_ms: i64,
        previous_ms: i64,
    },

    #[error("invalid chart config: {0}")]
    Config(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
