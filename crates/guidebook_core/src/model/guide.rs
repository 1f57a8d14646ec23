//! Guide document domain model.
//!
//! # Responsibility
//! - Define the slug/content pair handed to registration sinks.
//! - Enforce slug shape rules shared by every layer of the crate.
//!
//! # Invariants
//! - `slug` is non-empty ASCII matching `[a-z0-9_-]+` and never changes.
//! - `content` is opaque markup; no layer parses, escapes or rewrites it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One documentation page: a short topic slug plus its markup body.
///
/// The content blob is treated as raw bytes-in-a-string: embedded quotes,
/// newlines and angle brackets must survive every boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideDocument {
    /// Topic slug, e.g. `accessibility` or `drag_and_drop`.
    pub slug: String,
    /// Opaque HTML payload for the hosting documentation browser.
    pub content: String,
}

impl GuideDocument {
    /// Creates a guide document with a validated slug.
    ///
    /// # Errors
    /// - Returns `GuideValidationError` when the slug is empty or contains
    ///   characters outside `[a-z0-9_-]`.
    pub fn new(
        slug: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, GuideValidationError> {
        let document = Self {
            slug: slug.into(),
            content: content.into(),
        };
        document.validate()?;
        Ok(document)
    }

    /// Validates declaration-level guide invariants.
    pub fn validate(&self) -> Result<(), GuideValidationError> {
        let trimmed = self.slug.trim();
        if trimmed.is_empty() {
            return Err(GuideValidationError::EmptySlug);
        }
        if trimmed != self.slug || !is_valid_slug(trimmed) {
            return Err(GuideValidationError::InvalidSlug(self.slug.clone()));
        }
        Ok(())
    }

    /// Returns content length in bytes, as reported in load diagnostics.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

fn is_valid_slug(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Slug validation errors for guide documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideValidationError {
    EmptySlug,
    InvalidSlug(String),
}

impl Display for GuideValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySlug => write!(f, "guide slug must not be empty"),
            Self::InvalidSlug(value) => write!(
                f,
                "guide slug is invalid: `{value}` (expected lowercase ascii, digits, `_` or `-`)"
            ),
        }
    }
}

impl Error for GuideValidationError {}
