//! Error types for polyquery

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing {0}! Check your environment or .env file.")]
    MissingCredential(&'static str),

    #[error("Chat API error: {0}")]
    Chat(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
