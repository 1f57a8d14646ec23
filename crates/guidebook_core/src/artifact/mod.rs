//! Guide artifact decoding, encoding and file loading.
//!
//! # Responsibility
//! - Parse on-disk JsonP guide artifacts into `GuideDocument` values.
//! - Re-encode documents into the same artifact form without content loss.
//!
//! # Invariants
//! - Decoding then encoding a document reproduces the payload exactly.
//! - The HTML payload is never transformed, only carried.

use crate::model::guide::GuideValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod jsonp;
mod loader;

pub use loader::{find_guide_files, load_guide_file};

/// Result type for artifact codec and loader APIs.
pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// Artifact-layer error for wrapper parsing, payload decoding and file IO.
#[derive(Debug)]
pub enum ArtifactError {
    /// Input text is not a recognizable JsonP guide callback.
    MissingWrapper,
    /// Callback payload is not the expected JSON object.
    Payload(serde_json::Error),
    /// Callback identifier fails guide slug rules.
    Validation(GuideValidationError),
    /// Callback identifier disagrees with the guide directory name.
    SlugMismatch { callback: String, directory: String },
    /// Underlying file IO failure, with the path that failed.
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ArtifactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingWrapper => {
                write!(f, "artifact is not a `Ext.data.JsonP.<slug>({{...}});` callback")
            }
            Self::Payload(err) => write!(f, "artifact payload is not a guide object: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::SlugMismatch {
                callback,
                directory,
            } => write!(
                f,
                "callback slug `{callback}` does not match guide directory `{directory}`"
            ),
            Self::Io { path, source } => {
                write!(f, "failed to read guide artifact `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::MissingWrapper | Self::SlugMismatch { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<GuideValidationError> for ArtifactError {
    fn from(value: GuideValidationError) -> Self {
        Self::Validation(value)
    }
}
