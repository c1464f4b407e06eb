use overlay_core::{InitialFocus, Media};
use overlay_web::api::OpenRequest;

#[test]
fn bare_target_opens_inline_content() {
    let request: OpenRequest =
        serde_json::from_str(r#"{ "target": "form-modal" }"#).expect("parse request");
    let (content, options) = request.into_parts();
    assert_eq!(content.target, "form-modal");
    assert_eq!(content.media, Media::Inline);
    assert_eq!(options.initial_focus, InitialFocus::FirstFocusable);
    assert!(options.gallery.is_none());
}

#[test]
fn image_request_carries_media_and_text() {
    let request: OpenRequest = serde_json::from_str(
        r#"{
            "target": "lightbox",
            "media": { "kind": "image", "src": "assets/river.jpg", "alt": "River at dusk" },
            "title": "River",
            "description": "Taken at dusk",
            "focus": "[data-overlay-close]"
        }"#,
    )
    .expect("parse request");
    let (content, options) = request.into_parts();
    assert_eq!(
        content.media,
        Media::Image {
            src: "assets/river.jpg".into(),
            alt: Some("River at dusk".into()),
        }
    );
    assert_eq!(options.title.as_deref(), Some("River"));
    assert_eq!(options.description.as_deref(), Some("Taken at dusk"));
    assert_eq!(
        options.initial_focus,
        InitialFocus::Matching("[data-overlay-close]".into())
    );
}

#[test]
fn frame_request_parses() {
    let request: OpenRequest = serde_json::from_str(
        r#"{ "target": "preview-modal", "media": { "kind": "frame", "url": "docs/brochure.pdf" } }"#,
    )
    .expect("parse request");
    let (content, _) = request.into_parts();
    assert_eq!(
        content.media,
        Media::Frame {
            url: "docs/brochure.pdf".into()
        }
    );
}

#[test]
fn request_without_target_is_rejected() {
    let parsed = serde_json::from_str::<OpenRequest>(r#"{ "title": "Orphan" }"#);
    assert!(parsed.is_err());
}
