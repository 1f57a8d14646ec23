//! Guide artifact file loading.
//!
//! # Responsibility
//! - Read and decode guide artifacts from their on-disk layout.
//! - Emit `guide_load` logging events with duration and status.
//!
//! # Invariants
//! - Artifacts live at `<guides-root>/<slug>/README.js`; when the file sits
//!   in such a directory, the callback slug must match the directory name.
//! - Loading never mutates artifact files.

use crate::artifact::{jsonp, ArtifactError, ArtifactResult};
use crate::model::guide::GuideDocument;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

const GUIDE_FILE_NAME: &str = "README.js";

/// Loads and decodes one guide artifact file.
///
/// # Side effects
/// - Emits `guide_load` logging events with duration and status.
///
/// # Errors
/// - `Io` when the file cannot be read.
/// - Codec errors from [`jsonp::decode`].
/// - `SlugMismatch` when the enclosing guide directory disagrees with the
///   callback slug.
pub fn load_guide_file(path: impl AsRef<Path>) -> ArtifactResult<GuideDocument> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = read_and_decode(path);
    match &result {
        Ok(document) => info!(
            "event=guide_load module=artifact status=ok slug={} bytes={} duration_ms={}",
            document.slug,
            document.content_len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=guide_load module=artifact status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

/// Finds guide artifact files under a guides root directory.
///
/// Returns `<root>/<slug>/README.js` paths sorted by directory name, so
/// batch registration order is deterministic. Subdirectories without a
/// `README.js` are skipped.
pub fn find_guide_files(root: impl AsRef<Path>) -> ArtifactResult<Vec<PathBuf>> {
    let root = root.as_ref();
    let entries = std::fs::read_dir(root).map_err(|source| ArtifactError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ArtifactError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let candidate = entry.path().join(GUIDE_FILE_NAME);
        if entry.path().is_dir() && candidate.is_file() {
            files.push(candidate);
        }
    }

    files.sort();
    Ok(files)
}

fn read_and_decode(path: &Path) -> ArtifactResult<GuideDocument> {
    let text = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = jsonp::decode(&text)?;

    if let Some(directory) = guide_directory_name(path) {
        if directory != document.slug {
            return Err(ArtifactError::SlugMismatch {
                callback: document.slug,
                directory,
            });
        }
    }

    Ok(document)
}

// The directory cross-check only applies to the canonical layout; loading
// a loose `some-guide.js` file skips it.
fn guide_directory_name(path: &Path) -> Option<String> {
    if path.file_name()?.to_str()? != GUIDE_FILE_NAME {
        return None;
    }
    let parent = path.parent()?.file_name()?.to_str()?;
    Some(parent.to_string())
}
