//! Persistent guide storage.
//!
//! # Responsibility
//! - Keep SQL details inside the persistence boundary.
//! - Expose a storage-backed registration sink for hosts that retain
//!   guides across runs.

pub mod guide_repo;
