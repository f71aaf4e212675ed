use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Step size {0} is outside (0, 1]")]
    InvalidStep(f64),

    #[error("Path has no points to traverse")]
    EmptyPath,

    #[error("Point index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PathError>;
