//! Error types for browser-rum

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RumError>;

#[derive(Error, Debug)]
pub enum RumError {
    #[error("Obfuscation key is empty")]
    EmptyObfuscationKey,

    #[error("Transaction has no start time")]
    TransactionNotStarted,

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
