use thiserror::Error;

#[derive(Debug, Error)]
pub enum BezError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BezError>;
