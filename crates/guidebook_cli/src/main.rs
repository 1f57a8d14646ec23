//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `guidebook_core` linkage.
//! - Register guide artifacts from an optional guides root and list them.

use guidebook_core::{default_log_level, init_logging, GuideRegistry, GuideService};
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_dir = std::env::temp_dir().join("guidebook").join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // Registration still works without file logging; report and go on.
        eprintln!("logging disabled: {err}");
    }

    println!("guidebook_core version={}", guidebook_core::core_version());

    let Some(root) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    let mut service = GuideService::new(GuideRegistry::new());
    match service.register_dir(&root) {
        Ok(slugs) => {
            let registry = service.into_sink();
            for slug in slugs {
                let bytes = registry.get(&slug).map_or(0, |guide| guide.content_len());
                println!("registered slug={slug} bytes={bytes}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("guide registration failed: {err}");
            ExitCode::FAILURE
        }
    }
}
