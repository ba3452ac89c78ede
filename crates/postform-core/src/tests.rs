//! End-to-end behaviour of the draft form: validation, preview toggling,
//! submission, and preview rendering.

use crate::preview::{FieldKind, FieldLayout, ViewMode};
use crate::{DraftPost, Field, FieldError, FormState, PostFormError, render_markdown};

fn scenario_form() -> FormState {
    let mut form = FormState::default();
    form.set_title("Hi");
    form.set_image_url("https://image.unsplash.com/x.jpg");
    form.set_content("0123456789");
    form.set_premium(false);
    form.set_published(false);
    form
}

// =============================================================================
// Submit gating
// =============================================================================

#[test]
fn test_short_titles_disable_submit() {
    let mut form = scenario_form();
    for title in ["", "a", "é"] {
        form.set_title(title);
        assert!(!form.is_valid(), "{title:?}");
        assert!(form.submit().is_err());
    }
}

#[test]
fn test_foreign_or_unparsable_image_urls_disable_submit() {
    let mut form = scenario_form();
    for url in [
        "https://example.com/x.jpg",
        "ftp://files.example.com/x.jpg",
        "not a url",
        "image.unsplash.com/x.jpg",
    ] {
        form.set_image_url(url);
        assert!(!form.is_valid(), "{url}");
        assert!(form.visible_error(Field::ImageUrl).is_some(), "{url}");
    }
    form.set_image_url("");
    assert!(!form.is_valid());
    assert_eq!(form.visible_error(Field::ImageUrl), None);
}

#[test]
fn test_astral_title_and_content_enable_submit() {
    let mut form = scenario_form();
    form.set_title("🙂");
    form.set_content("🙂🙂🙂🙂🙂");
    assert!(form.is_valid());
    assert!(form.submit().is_ok());
}

#[test]
fn test_short_content_disables_submit() {
    let mut form = scenario_form();
    form.set_content("123456789");
    assert!(!form.is_valid());
    form.set_content("1234567890");
    assert!(form.is_valid());
}

#[test]
fn test_unparsable_url_message() {
    let mut form = scenario_form();
    form.set_image_url("nope");
    assert_eq!(
        form.visible_error(Field::ImageUrl),
        Some(&FieldError::MalformedUrl)
    );
    insta::assert_snapshot!(form.visible_error(Field::ImageUrl).unwrap().message(), @"Invalid URL");
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_valid_scenario_submits_exact_json() {
    let form = scenario_form();
    assert!(form.is_valid());

    let submission = form.submit().unwrap();
    let expected = r#"{
  "title": "Hi",
  "image_url": "https://image.unsplash.com/x.jpg",
  "content": "0123456789",
  "isPremium": false,
  "isPublished": false
}"#;
    assert_eq!(submission.json(), expected);
    assert_eq!(submission.notice().body, expected);
    assert_eq!(
        submission.notice().title,
        "You submitted the following values:"
    );
}

#[test]
fn test_example_dot_com_scenario() {
    let mut form = scenario_form();
    form.set_image_url("https://example.com/x.jpg");
    let error = form.visible_error(Field::ImageUrl).unwrap();
    assert!(error.message().contains("Invalid image URL"));
    match form.submit() {
        Err(PostFormError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(Field::ImageUrl), Some(error));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_empty_title_scenario() {
    let mut form = scenario_form();
    form.set_title("");
    assert_eq!(form.visible_error(Field::Title), None);
    assert!(!form.is_valid());
}

// =============================================================================
// Preview toggling
// =============================================================================

#[test]
fn test_preview_round_trip_keeps_values() {
    let mut form = scenario_form();
    form.set_premium(true);
    let before: DraftPost = form.values().clone();

    let mut mode = ViewMode::default();
    let editing = FieldLayout::for_mode(mode, FieldKind::Body);
    mode.toggle();
    let _ = FieldLayout::for_mode(mode, FieldKind::Body);
    let _ = render_markdown(&form.values().content);
    mode.toggle();

    assert_eq!(form.values(), &before);
    assert_eq!(FieldLayout::for_mode(mode, FieldKind::Body), editing);
    assert!(form.is_valid());
}

// =============================================================================
// Markdown preview
// =============================================================================

#[test]
fn test_render_heading() {
    insta::assert_snapshot!(render_markdown("# Hello").trim_end(), @"<h1>Hello</h1>");
}

#[test]
fn test_render_inline_formatting() {
    insta::assert_snapshot!(
        render_markdown("Some *emphasis* and **strong** and `code`").trim_end(),
        @"<p>Some <em>emphasis</em> and <strong>strong</strong> and <code>code</code></p>"
    );
}

#[test]
fn test_render_image() {
    insta::assert_snapshot!(
        render_markdown("![a cat](https://image.unsplash.com/cat.jpg)").trim_end(),
        @r#"<p><img src="https://image.unsplash.com/cat.jpg" alt="a cat" /></p>"#
    );
}

#[test]
fn test_render_list() {
    assert_eq!(
        render_markdown("- one\n- two"),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n"
    );
}

#[test]
fn test_render_two_paragraphs() {
    assert_eq!(
        render_markdown("First paragraph.\n\nSecond paragraph."),
        "<p>First paragraph.</p>\n<p>Second paragraph.</p>\n"
    );
}

#[test]
fn test_render_escapes_raw_html() {
    let html = render_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_render_drops_script_links() {
    let html = render_markdown("[click](javascript:alert(1))");
    assert!(html.contains(r#"<a href="">click</a>"#), "{html}");
}

#[test]
fn test_render_front_matter_is_plain_text() {
    let html = render_markdown("---\ntitle: x\n---\n\nbody");
    assert!(html.contains("title: x"), "{html}");
    assert!(html.contains("<p>body</p>"), "{html}");
}

#[test]
fn test_render_empty() {
    assert_eq!(render_markdown(""), "");
}
