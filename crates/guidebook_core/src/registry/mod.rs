//! Registration sink contract and in-memory registry.
//!
//! # Responsibility
//! - Define the single `register` boundary every guide sink implements.
//! - Provide the in-memory registry used by hosting browsers and tests.
//!
//! # Invariants
//! - One registration call delivers exactly one guide document.
//! - Re-registering byte-identical content is accepted; conflicting content
//!   for an existing slug is rejected.

use crate::db::DbError;
use crate::model::guide::GuideValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod guide_registry;
pub mod sink;

pub use guide_registry::GuideRegistry;
pub use sink::GuideSink;

/// Result type for registration sinks.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Shared error taxonomy for every `GuideSink` implementation.
#[derive(Debug)]
pub enum RegistryError {
    /// Document failed slug validation at the registration boundary.
    Validation(GuideValidationError),
    /// Slug already registered with different content.
    ContentConflict(String),
    /// Persistent sink storage failure.
    Db(DbError),
    /// Persisted state failed decoding on the read path.
    InvalidData(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ContentConflict(slug) => write!(
                f,
                "guide `{slug}` is already registered with different content"
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted guide data: {message}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ContentConflict(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<GuideValidationError> for RegistryError {
    fn from(value: GuideValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RegistryError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RegistryError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
