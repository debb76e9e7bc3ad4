use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrimError>;

#[derive(Debug, Error)]
pub enum TrimError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
