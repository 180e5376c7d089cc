//! Visual documentation stories for the float component
//!
//! Each story builds the element tree for one documented usage example;
//! `render_gallery` assembles them into an HTML page. Story chrome (the
//! anchor boxes and badges) references theme colors through CSS custom
//! properties emitted in a `:root` block, the same values a host theming
//! engine would provide.

use crate::float::{Float, FloatOffset, FloatPlacement};
use crate::html::{Element, HtmlConfig};
use crate::theme::Theme;

/// A named documentation example
#[derive(Debug, Clone)]
pub struct Story {
    /// Stable identifier, usable as a URL fragment
    pub name: &'static str,
    /// Human-readable heading
    pub title: &'static str,
    /// The example's element tree
    pub root: Element,
}

/// The floated badge content shared by all stories
fn badge(text: &str) -> Element {
    Element::new("span").with_class("ui-badge").with_text(text)
}

/// A relatively positioned box for a float to anchor against
fn story_box(float: Float) -> Element {
    Element::new("div")
        .with_class("ui-story-box")
        .with_child(float.into_element())
}

/// Default placement: a badge on the top-right corner of a container
pub fn basic() -> Story {
    Story {
        name: "basic",
        title: "Basic",
        root: story_box(Float::new().with_child(badge("New"))),
    }
}

/// One container per placement token, in a 3x3 grid
pub fn with_placement() -> Story {
    let mut grid = Element::new("div").with_class("ui-story-grid");
    for placement in FloatPlacement::ALL {
        grid = grid.with_child(story_box(
            Float::new()
                .with_placement(placement)
                .with_child(badge("New")),
        ));
    }
    Story {
        name: "with-placement",
        title: "With placement",
        root: grid,
    }
}

/// Uniform and per-axis offsets
pub fn with_offset() -> Story {
    let cases: [(FloatOffset, FloatPlacement); 3] = [
        (FloatOffset::uniform("md"), FloatPlacement::StartStart),
        (FloatOffset::per_axis("0", "md"), FloatPlacement::CenterStart),
        (FloatOffset::per_axis("md", "0"), FloatPlacement::EndEnd),
    ];

    let mut grid = Element::new("div").with_class("ui-story-grid");
    for (offset, placement) in cases {
        grid = grid.with_child(story_box(
            Float::new()
                .with_placement(placement)
                .with_offset(offset)
                .with_child(badge("New")),
        ));
    }
    Story {
        name: "with-offset",
        title: "With offset",
        root: grid,
    }
}

/// All stories in documentation order
pub fn all() -> Vec<Story> {
    vec![basic(), with_placement(), with_offset()]
}

/// Assemble stories into an HTML gallery
///
/// With `config.standalone` set, wraps the stories in a full document
/// carrying a `<style>` block with `:root` custom properties from the
/// theme; otherwise emits only the story sections. Spacing tokens inside
/// the rendered markup are resolved through the theme.
pub fn render_gallery(stories: &[Story], config: &HtmlConfig, theme: &Theme) -> String {
    let newline = if config.pretty_print { "\n" } else { "" };
    let indent = if config.pretty_print { "  " } else { "" };
    let mut out = String::new();

    if config.standalone {
        for line in [
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<title>Float component gallery</title>",
            "<style>",
        ] {
            out.push_str(line);
            out.push_str(newline);
        }
        out.push_str(&gallery_css(theme));
        for line in ["</style>", "</head>", "<body>", "<h1>Float</h1>"] {
            out.push_str(line);
            out.push_str(newline);
        }
    }

    for story in stories {
        out.push_str(&format!(
            "<section class=\"ui-story\" id=\"{}\">{}",
            story.name, newline
        ));
        out.push_str(&format!("{}<h2>{}</h2>{}", indent, story.title, newline));
        out.push_str(&story.root.render_at(config, Some(theme), 1));
        out.push_str(newline);
        out.push_str("</section>");
        out.push_str(newline);
    }

    if config.standalone {
        out.push_str("</body>");
        out.push_str(newline);
        out.push_str("</html>");
        out.push_str(newline);
    }

    out
}

/// Chrome styles for the gallery page
fn gallery_css(theme: &Theme) -> String {
    let mut css = String::from(":root {\n");
    for (token, value) in theme.sorted_colors() {
        css.push_str(&format!("  --{}: {};\n", token, value));
    }
    css.push_str("}\n");

    let page_margin = theme.resolve_space("xl");
    let grid_gap = theme.resolve_space("lg");
    let story_gap = theme.resolve_space("2xl");
    css.push_str(&format!(
        "body {{ color: var(--text); font-family: system-ui, sans-serif; margin: {page_margin}; }}\n\
         .ui-story {{ margin-block-end: {story_gap}; }}\n\
         .ui-story-grid {{ display: grid; gap: {grid_gap}; grid-template-columns: repeat(3, max-content); }}\n\
         .ui-story-box {{ background: var(--surface); block-size: 8rem; inline-size: 8rem; position: relative; }}\n\
         .ui-badge {{ background: var(--primary); border-radius: 0.375rem; color: var(--primary-contrast); font-size: 0.875rem; padding-inline: 0.375rem; }}\n"
    ));
    css
}
