use std::fmt::{self, Display};

/// Errors produced by model validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidHolding(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidHolding(msg) => {
                write!(f, "invalid holding: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
