//! Guide repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable register/get/list APIs over `guides` storage.
//! - Enforce the same registration contract as the in-memory registry.
//!
//! # Invariants
//! - Write paths validate the document before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Stored content is returned byte-for-byte.

use crate::model::guide::GuideDocument;
use crate::registry::sink::GuideSink;
use crate::registry::{RegistryError, RegistryResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for registered guide storage.
pub trait GuideRepository {
    fn register_guide(&self, document: &GuideDocument) -> RegistryResult<()>;
    fn get_guide(&self, slug: &str) -> RegistryResult<Option<GuideDocument>>;
    fn list_slugs(&self) -> RegistryResult<Vec<String>>;
}

/// SQLite-backed guide repository.
pub struct SqliteGuideRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGuideRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GuideRepository for SqliteGuideRepository<'_> {
    fn register_guide(&self, document: &GuideDocument) -> RegistryResult<()> {
        document.validate()?;

        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT content FROM guides WHERE slug = ?1;",
                [document.slug.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        if let Some(content) = existing {
            if content == document.content {
                return Ok(());
            }
            return Err(RegistryError::ContentConflict(document.slug.clone()));
        }

        self.conn.execute(
            "INSERT INTO guides (slug, content) VALUES (?1, ?2);",
            params![document.slug.as_str(), document.content.as_str()],
        )?;

        Ok(())
    }

    fn get_guide(&self, slug: &str) -> RegistryResult<Option<GuideDocument>> {
        let row: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT slug, content FROM guides WHERE slug = ?1;",
                [slug.trim()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((stored_slug, content)) => {
                let document = GuideDocument::new(stored_slug.as_str(), content).map_err(|_| {
                    RegistryError::InvalidData(format!(
                        "invalid slug value `{stored_slug}` in guides.slug"
                    ))
                })?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    fn list_slugs(&self) -> RegistryResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT slug FROM guides ORDER BY slug ASC;")?;
        let mut rows = stmt.query([])?;

        let mut slugs = Vec::new();
        while let Some(row) = rows.next()? {
            slugs.push(row.get(0)?);
        }
        Ok(slugs)
    }
}

impl GuideSink for SqliteGuideRepository<'_> {
    fn register(&mut self, document: &GuideDocument) -> RegistryResult<()> {
        self.register_guide(document)
    }
}
