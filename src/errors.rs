use thiserror::Error;

pub type NyayResult<T> = Result<T, NyayError>;

#[derive(Debug, Error)]
pub enum NyayError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NyayError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        NyayError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        NyayError::Logging(msg.into())
    }
}
