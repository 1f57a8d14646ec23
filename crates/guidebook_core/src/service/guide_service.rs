//! Guide registrar service.
//!
//! # Responsibility
//! - Deliver exactly one guide document per artifact to the injected sink.
//! - Provide file and directory convenience entry points over the codec.
//!
//! # Invariants
//! - One artifact produces exactly one `register` call; no retries, no
//!   duplicate delivery, no batching of a single artifact.
//! - Documents pass through the service unchanged.

use crate::artifact::{find_guide_files, load_guide_file, ArtifactError};
use crate::model::guide::GuideDocument;
use crate::registry::{GuideSink, RegistryError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Service error for registrar use-cases.
#[derive(Debug)]
pub enum GuideServiceError {
    Artifact(ArtifactError),
    Registry(RegistryError),
}

impl Display for GuideServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Artifact(err) => write!(f, "{err}"),
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GuideServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Artifact(err) => Some(err),
            Self::Registry(err) => Some(err),
        }
    }
}

impl From<ArtifactError> for GuideServiceError {
    fn from(value: ArtifactError) -> Self {
        Self::Artifact(value)
    }
}

impl From<RegistryError> for GuideServiceError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

/// Content registrar over an injected registration sink.
pub struct GuideService<S: GuideSink> {
    sink: S,
}

impl<S: GuideSink> GuideService<S> {
    /// Creates a registrar delivering into the provided sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the registrar and returns the sink with its registrations.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Hands one guide document to the sink.
    ///
    /// # Contract
    /// - Performs exactly one `register` call.
    /// - Sink failures propagate unchanged.
    pub fn register_document(
        &mut self,
        document: &GuideDocument,
    ) -> Result<(), GuideServiceError> {
        self.sink.register(document)?;
        info!(
            "event=guide_register module=service status=ok slug={} bytes={}",
            document.slug,
            document.content_len()
        );
        Ok(())
    }

    /// Loads one artifact file and registers its document.
    ///
    /// Returns the registered document so callers can report on it.
    pub fn register_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<GuideDocument, GuideServiceError> {
        let document = load_guide_file(path)?;
        self.register_document(&document)?;
        Ok(document)
    }

    /// Registers every guide artifact found under a guides root.
    ///
    /// Artifacts are processed in sorted directory order, one registration
    /// per artifact. The first failure aborts the walk; already-registered
    /// documents stay with the sink.
    pub fn register_dir(
        &mut self,
        root: impl AsRef<Path>,
    ) -> Result<Vec<String>, GuideServiceError> {
        let mut slugs = Vec::new();
        for file in find_guide_files(root)? {
            let document = self.register_file(file)?;
            slugs.push(document.slug);
        }
        Ok(slugs)
    }
}
