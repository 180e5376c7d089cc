//! Regression tests for the story gallery
//!
//! These verify the structural content of the generated page: story
//! sections, float containers, and the theme-derived style block. Token
//! emission is sorted, so exact-content assertions are safe here.

use ui_float::{render_gallery, stories, HtmlConfig, Theme};

fn fragment_config() -> HtmlConfig {
    HtmlConfig::new()
        .with_pretty_print(false)
        .with_standalone(false)
}

#[test]
fn test_gallery_renders_all_stories() {
    let html = render_gallery(&stories::all(), &HtmlConfig::default(), &Theme::default());

    for id in ["basic", "with-placement", "with-offset"] {
        assert!(
            html.contains(&format!(r#"<section class="ui-story" id="{}">"#, id)),
            "missing story section {}",
            id
        );
    }
    // 1 basic + 9 placements + 3 offset cases
    assert_eq!(html.matches(r#"data-ui="Float""#).count(), 13);
}

#[test]
fn test_standalone_document_shape() {
    let html = render_gallery(&stories::all(), &HtmlConfig::default(), &Theme::default());

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Float component gallery</title>"));
    assert!(html.contains(":root {"));
    assert!(html.ends_with("</body>\n</html>\n"));
}

#[test]
fn test_root_custom_properties_are_sorted() {
    let html = render_gallery(&stories::all(), &HtmlConfig::default(), &Theme::default());

    let outline = html.find("--outline:").expect("outline token emitted");
    let primary = html.find("--primary:").expect("primary token emitted");
    let surface = html.find("--surface:").expect("surface token emitted");
    assert!(outline < primary && primary < surface);
}

#[test]
fn test_fragment_output_has_no_document_chrome() {
    let html = render_gallery(&stories::all(), &fragment_config(), &Theme::default());

    assert!(html.starts_with("<section"));
    assert!(!html.contains("<!DOCTYPE"));
    assert!(!html.contains("<style>"));
    assert!(!html.contains('\n'));
}

#[test]
fn test_offsets_resolve_through_custom_theme() {
    let theme = Theme::from_str(
        r#"
[spaces]
md = "12px"
"#,
    )
    .expect("Should parse");

    let html = render_gallery(&[stories::with_offset()], &fragment_config(), &theme);
    assert!(html.contains("inset-block-start: 12px"));
    assert!(!html.contains(": md"));
}

#[test]
fn test_basic_story_markup() {
    let html = render_gallery(&[stories::basic()], &fragment_config(), &Theme::default());

    insta::assert_snapshot!(
        html,
        @r#"<section class="ui-story" id="basic"><h2>Basic</h2><div class="ui-story-box"><div class="ui-float" style="align-items: center; display: inline-flex; justify-content: center; position: absolute; inset-block-start: 0; inset-block-end: auto; inset-inline-start: auto; inset-inline-end: 0; translate: 50% -50%" data-ui="Float"><span class="ui-badge">New</span></div></div></section>"#
    );
}
