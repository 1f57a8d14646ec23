use guidebook_core::{
    GuideDocument, GuideRegistry, GuideService, GuideServiceError, GuideSink, RegistryResult,
};
use std::fs;
use std::path::Path;

const ACCESSIBILITY_ARTIFACT: &str = include_str!("fixtures/accessibility/README.js");

/// Substitute sink that records every registration call verbatim.
#[derive(Default)]
struct RecordingSink {
    calls: Vec<(String, String)>,
}

impl GuideSink for RecordingSink {
    fn register(&mut self, document: &GuideDocument) -> RegistryResult<()> {
        self.calls
            .push((document.slug.clone(), document.content.clone()));
        Ok(())
    }
}

fn write_guide_artifact(root: &Path, slug: &str, text: &str) {
    let dir = root.join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("README.js"), text).unwrap();
}

#[test]
fn loading_accessibility_registers_exactly_once() {
    let guides_root = tempfile::tempdir().unwrap();
    write_guide_artifact(guides_root.path(), "accessibility", ACCESSIBILITY_ARTIFACT);

    let mut service = GuideService::new(RecordingSink::default());
    service
        .register_file(guides_root.path().join("accessibility/README.js"))
        .unwrap();

    let sink = service.into_sink();
    assert_eq!(sink.calls.len(), 1);
    assert_eq!(sink.calls[0].0, "accessibility");
}

#[test]
fn registered_content_is_byte_identical_to_artifact_payload() {
    let guides_root = tempfile::tempdir().unwrap();
    write_guide_artifact(guides_root.path(), "accessibility", ACCESSIBILITY_ARTIFACT);

    let mut service = GuideService::new(RecordingSink::default());
    let document = service
        .register_file(guides_root.path().join("accessibility/README.js"))
        .unwrap();

    let sink = service.into_sink();
    assert_eq!(sink.calls[0].1.as_bytes(), document.content.as_bytes());
    assert!(sink.calls[0]
        .1
        .contains("src=\"http://player.vimeo.com/video/17840717?byline=0&amp;portrait=0\""));
}

#[test]
fn loading_twice_produces_two_identical_calls() {
    let guides_root = tempfile::tempdir().unwrap();
    write_guide_artifact(guides_root.path(), "accessibility", ACCESSIBILITY_ARTIFACT);
    let path = guides_root.path().join("accessibility/README.js");

    let mut service = GuideService::new(RecordingSink::default());
    service.register_file(&path).unwrap();
    service.register_file(&path).unwrap();

    let sink = service.into_sink();
    assert_eq!(sink.calls.len(), 2);
    assert_eq!(sink.calls[0], sink.calls[1]);
}

#[test]
fn register_document_applies_no_transformation() {
    let content = "<h1>Accessibility</h1>\n\n<hr />\n\n<p>...</p>\n";
    let document = GuideDocument::new("accessibility", content).unwrap();

    let mut service = GuideService::new(RecordingSink::default());
    service.register_document(&document).unwrap();

    let sink = service.into_sink();
    assert_eq!(
        sink.calls,
        vec![("accessibility".to_string(), content.to_string())]
    );
}

#[test]
fn register_dir_walks_guides_in_sorted_order() {
    let guides_root = tempfile::tempdir().unwrap();
    write_guide_artifact(
        guides_root.path(),
        "theming",
        "Ext.data.JsonP.theming({\"guide\": \"<h1>Theming</h1>\\n\"});",
    );
    write_guide_artifact(guides_root.path(), "accessibility", ACCESSIBILITY_ARTIFACT);
    write_guide_artifact(
        guides_root.path(),
        "forms",
        "Ext.data.JsonP.forms({\"guide\": \"<h1>Forms</h1>\\n\"});",
    );
    // Directory without an artifact file is skipped.
    fs::create_dir_all(guides_root.path().join("drafts")).unwrap();

    let mut service = GuideService::new(GuideRegistry::new());
    let slugs = service.register_dir(guides_root.path()).unwrap();
    assert_eq!(slugs, vec!["accessibility", "forms", "theming"]);

    let registry = service.into_sink();
    assert_eq!(registry.len(), 3);
    assert_eq!(
        registry.get("forms").unwrap().content,
        "<h1>Forms</h1>\n"
    );
}

#[test]
fn mismatched_guide_directory_is_rejected() {
    let guides_root = tempfile::tempdir().unwrap();
    write_guide_artifact(guides_root.path(), "renamed", ACCESSIBILITY_ARTIFACT);

    let mut service = GuideService::new(RecordingSink::default());
    let err = service
        .register_file(guides_root.path().join("renamed/README.js"))
        .unwrap_err();

    assert!(matches!(err, GuideServiceError::Artifact(_)));
    assert!(service.sink().calls.is_empty());
}
