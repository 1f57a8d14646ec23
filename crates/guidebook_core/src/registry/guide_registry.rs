//! In-memory guide registry.

use crate::model::guide::GuideDocument;
use crate::registry::sink::GuideSink;
use crate::registry::{RegistryError, RegistryResult};
use std::collections::BTreeMap;

/// Keyed in-memory registration sink.
///
/// This is the registry a hosting documentation browser keeps for the
/// lifetime of a session: registered documents are retrievable by slug and
/// listed in sorted order.
#[derive(Debug, Default)]
pub struct GuideRegistry {
    guides: BTreeMap<String, GuideDocument>,
}

impl GuideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns one registered guide by slug.
    pub fn get(&self, slug: &str) -> Option<&GuideDocument> {
        self.guides.get(slug.trim())
    }

    /// Returns whether a slug has been registered.
    pub fn contains(&self, slug: &str) -> bool {
        self.guides.contains_key(slug.trim())
    }

    /// Returns sorted registered slugs.
    pub fn slugs(&self) -> Vec<String> {
        self.guides.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

impl GuideSink for GuideRegistry {
    /// Registers one guide document.
    ///
    /// # Contract
    /// - Re-registering a slug with byte-identical content is a no-op.
    /// - Re-registering a slug with different content is rejected, keeping
    ///   the originally registered content immutable.
    fn register(&mut self, document: &GuideDocument) -> RegistryResult<()> {
        document.validate()?;

        if let Some(existing) = self.guides.get(document.slug.as_str()) {
            if existing.content == document.content {
                return Ok(());
            }
            return Err(RegistryError::ContentConflict(document.slug.clone()));
        }

        self.guides.insert(document.slug.clone(), document.clone());
        Ok(())
    }
}
