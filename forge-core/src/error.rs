use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    Validation(String),
    Command(String),
    Io(#[from] std::io::Error),
    Filesystem(String),
    Internal(String),
    Other(#[from] anyhow::Error),
}

impl Display for ForgeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ForgeError::Validation(s) => write!(f, "Validation error: {}", s),
            ForgeError::Command(s) => write!(f, "Command failed: {}", s),
            ForgeError::Io(e) => write!(f, "I/O error: {}", e),
            ForgeError::Filesystem(s) => write!(f, "Filesystem error: {}", s),
            ForgeError::Internal(s) => write!(f, "Internal error: {}", s),
            ForgeError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;
