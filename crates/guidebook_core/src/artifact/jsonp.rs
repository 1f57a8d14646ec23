//! JsonP guide artifact codec.
//!
//! # Responsibility
//! - Decode `Ext.data.JsonP.<slug>({"guide": "<html>"});` artifact text.
//! - Encode a `GuideDocument` back into the same callback form.
//!
//! # Invariants
//! - `decode(encode(document)) == document` for every valid document.
//! - The `guide` payload string is carried byte-for-byte; embedded quotes,
//!   newlines and angle brackets round-trip through JSON escaping only.

use crate::artifact::{ArtifactError, ArtifactResult};
use crate::model::guide::GuideDocument;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Callback namespace used by guide artifacts.
pub const CALLBACK_PREFIX: &str = "Ext.data.JsonP.";

// Whole-artifact shape: callback path, one parenthesized payload, optional
// trailing semicolon. The payload group is greedy so the last `)` closes
// the callback even when the HTML itself contains parentheses.
static CALLBACK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A\s*Ext\.data\.JsonP\.([A-Za-z0-9_$-]+)\((.*)\)\s*;?\s*\z")
        .expect("valid callback regex")
});

/// JSON payload carried inside the callback.
///
/// Guide artifacts carry exactly one key; unknown keys are rejected so a
/// decode/encode cycle can never silently drop data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuidePayload {
    guide: String,
}

/// Decodes one JsonP guide artifact into a `GuideDocument`.
///
/// # Errors
/// - `MissingWrapper` when the callback shape is absent.
/// - `Payload` when the parenthesized body is not a `{"guide": ...}` object.
/// - `Validation` when the callback slug fails guide slug rules.
pub fn decode(text: &str) -> ArtifactResult<GuideDocument> {
    let captures = CALLBACK_RE
        .captures(text)
        .ok_or(ArtifactError::MissingWrapper)?;

    let slug = &captures[1];
    let payload: GuidePayload = serde_json::from_str(&captures[2])?;

    Ok(GuideDocument::new(slug, payload.guide)?)
}

/// Encodes a `GuideDocument` into JsonP artifact text.
///
/// Output matches the generated-file layout byte-for-byte: two-space
/// indented JSON object inside the callback, closed with `);` and no
/// trailing newline.
///
/// # Errors
/// - `Payload` when JSON serialization fails (not expected for string data).
pub fn encode(document: &GuideDocument) -> ArtifactResult<String> {
    let payload = serde_json::to_string_pretty(&GuidePayload {
        guide: document.content.clone(),
    })?;
    Ok(format!("{CALLBACK_PREFIX}{}({payload});", document.slug))
}
