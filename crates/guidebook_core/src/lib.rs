//! Core guide-registration logic for the Guidebook documentation browser.
//! This crate is the single source of truth for the registration contract.

pub mod artifact;
pub mod db;
pub mod logging;
pub mod model;
pub mod registry;
pub mod repo;
pub mod service;

pub use artifact::{find_guide_files, load_guide_file, ArtifactError, ArtifactResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::guide::{GuideDocument, GuideValidationError};
pub use registry::{GuideRegistry, GuideSink, RegistryError, RegistryResult};
pub use repo::guide_repo::{GuideRepository, SqliteGuideRepository};
pub use service::guide_service::{GuideService, GuideServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
