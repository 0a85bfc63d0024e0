//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Navigation error: {0}")]
    Navigation(#[from] callchooser_navigation::NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No phone number to contact")]
    EmptyNumber,

    #[error("Phone number must contain only digits: {0}")]
    InvalidNumber(String),

    #[error("Unknown messenger: {0}")]
    UnknownMessenger(String),

    #[error("Invalid contact link: {0}")]
    InvalidLink(#[from] url::ParseError),
}
