//! Canonical domain model for documentation guides.
//!
//! # Responsibility
//! - Define the guide record shared by codec, registry and storage layers.
//! - Keep one slug-centric identity shape for every sink implementation.
//!
//! # Invariants
//! - Every guide is identified by a validated, stable slug.
//! - Guide content is opaque text and is never rewritten by this crate.

pub mod guide;
