use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasklensError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type TasklensResult<T> = Result<T, TasklensError>;
