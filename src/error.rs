use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecTreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid value for --{flag}: {reason}")]
    InvalidInput { flag: &'static str, reason: String },

    #[error("Root mismatch: expected {expected}, got {got}")]
    RootMismatch { expected: String, got: String },
}

pub type Result<T> = std::result::Result<T, ExecTreeError>;
