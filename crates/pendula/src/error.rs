//! Error types for pendula.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PendulaError {
    #[error("pendulum length must be from 0.1 to 2m, got {length}")]
    LengthOutOfRange { length: f64 },

    #[error("initial height must be strictly between -{length} and {length}, got {height}")]
    HeightOutOfRange { height: f64, length: f64 },

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PendulaError>;
