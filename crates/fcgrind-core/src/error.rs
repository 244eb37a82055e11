use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrindError>;

#[derive(Debug, Error)]
pub enum GrindError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),
}
