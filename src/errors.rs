// src/errors.rs
use std::fmt;

#[derive(Debug)]
pub enum RegnumError {
    ConfigError(String),
}

impl fmt::Display for RegnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegnumError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for RegnumError {}
