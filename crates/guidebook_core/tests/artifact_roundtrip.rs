use guidebook_core::artifact::jsonp::{decode, encode};
use guidebook_core::ArtifactError;

const ACCESSIBILITY_ARTIFACT: &str = include_str!("fixtures/accessibility/README.js");

#[test]
fn decodes_accessibility_artifact() {
    let document = decode(ACCESSIBILITY_ARTIFACT).unwrap();

    assert_eq!(document.slug, "accessibility");
    assert!(document
        .content
        .starts_with("<h1>Accessibility</h1>\n\n<hr />\n\n<p>"));
    assert!(document.content.ends_with("<p>Please check back soon</p>\n"));
}

#[test]
fn decoded_content_preserves_markup_escapes() {
    let document = decode(ACCESSIBILITY_ARTIFACT).unwrap();

    // Embedded quotes arrive unescaped, entities and angle brackets verbatim.
    assert!(document
        .content
        .contains("src=\"http://player.vimeo.com/video/17840717?byline=0&amp;portrait=0\""));
    assert!(document.content.contains("\n\n<ul>\n<li>"));
    assert!(!document.content.contains("\\n"));
    assert!(!document.content.contains("\\\""));
}

#[test]
fn reencoding_reproduces_artifact_bytes_exactly() {
    let document = decode(ACCESSIBILITY_ARTIFACT).unwrap();
    let encoded = encode(&document).unwrap();

    assert_eq!(encoded, ACCESSIBILITY_ARTIFACT);
}

#[test]
fn decode_encode_decode_is_stable() {
    let first = decode(ACCESSIBILITY_ARTIFACT).unwrap();
    let second = decode(&encode(&first).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.content.as_bytes(), second.content.as_bytes());
}

#[test]
fn truncated_artifact_is_rejected() {
    let truncated = &ACCESSIBILITY_ARTIFACT[..ACCESSIBILITY_ARTIFACT.len() / 2];
    let err = decode(truncated).unwrap_err();
    assert!(matches!(
        err,
        ArtifactError::MissingWrapper | ArtifactError::Payload(_)
    ));
}
