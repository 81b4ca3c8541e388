use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown easing curve `{0}`")]
    UnknownEasing(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("set {set_index} has {actual} entries, expected {expected}")]
    EntryCountMismatch {
        set_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("set {set_index} entry {entry_index} has label `{actual}`, expected `{expected}`")]
    LabelMismatch {
        set_index: usize,
        entry_index: usize,
        expected: String,
        actual: String,
    },

    #[error("at least {required} label positions are required, got {actual}")]
    InsufficientLabelPositions { required: usize, actual: usize },

    #[error("degenerate layout: {0}")]
    DegenerateLayout(String),
}
