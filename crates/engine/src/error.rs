//! The module contains the errors the engine can throw.
use thiserror::Error;

use crate::store::StoreError;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("username \"{0}\" is already taken")]
    DuplicateUsername(String),
    #[error("invalid username or credential")]
    InvalidCredentials,
    #[error("\"{0}\" entry not found")]
    EntryNotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid payment: {0}")]
    InvalidPayment(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateUsername(a), Self::DuplicateUsername(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::EntryNotFound(a), Self::EntryNotFound(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::InvalidPayment(a), Self::InvalidPayment(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
