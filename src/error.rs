use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid measure at record {index}: {value}")]
    InvalidMeasure { index: usize, value: f64 },

    #[error("group sum is no longer finite after record {index}")]
    SumOverflow { index: usize },

    #[error("degenerate domain: start and end are both {value}")]
    DegenerateDomain { value: f64 },

    #[error("unknown band key: {key}")]
    UnknownKey { key: String },

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid domain: min={min}, max={max}")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid range: start={start}, end={end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    Config(String),
}
