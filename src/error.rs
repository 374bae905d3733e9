use std::{
    fmt,
    io
};
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TrailError {
    #[error("Invalid trail configuration!\n{0}")]
    InvalidConfiguration(String),
    #[error("Failed to resolve target position!\n{0}")]
    Resolution(String),
    #[error("Failed accessing {path}!\n{source}")]
    Io {
        path: String,
        source: io::Error
    },
    #[error("Failed (de)serializing {path}!\n{source}")]
    Serialization {
        path: String,
        source: serde_json::Error
    }
}
impl TrailError {
    pub fn invalid<T: fmt::Display>(message: T) -> TrailError {
        TrailError::InvalidConfiguration(message.to_string())
    }
    pub fn resolution<T: fmt::Display>(message: T) -> TrailError {
        TrailError::Resolution(message.to_string())
    }
    pub fn is_configuration(&self) -> bool {
        matches!(self, TrailError::InvalidConfiguration(_))
    }
}
pub type Result<T> = std::result::Result<T, TrailError>;
