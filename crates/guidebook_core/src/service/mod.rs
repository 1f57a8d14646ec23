//! Use-case services for guide registration.
//!
//! # Responsibility
//! - Provide stable registrar entry points for hosting systems.
//! - Delegate storage decisions to the injected sink.

pub mod guide_service;
