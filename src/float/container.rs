//! The float container element

use crate::html::{Element, Node};

use super::offset::FloatOffset;
use super::placement::FloatPlacement;
use super::style::PlacementStyle;

/// Structural class token attached to every float container
pub const FLOAT_CLASS: &str = "ui-float";

/// Introspection tag carried on the rendered element
pub const FLOAT_UI_TAG: &str = "Float";

/// Attribute names owned by the component itself
///
/// Passthrough attributes with these names are dropped; the corresponding
/// component field wins.
const RESERVED_ATTRS: &[&str] = &["offset", "placement", "class", "style", "data-ui"];

/// Float anchors an element to the edge of its closest positioned
/// ancestor: notification badges, status dots, corner decorations.
///
/// The container is absolutely positioned on the chosen edge and shifted
/// by half its own size so it centers on the anchor point. Everything
/// beyond `placement`, `offset` and `class` is forwarded to the rendered
/// element untouched.
///
/// # Example
///
/// ```rust
/// use ui_float::{Float, FloatPlacement, HtmlConfig};
///
/// let badge = Float::new()
///     .with_placement(FloatPlacement::EndEnd)
///     .with_text("3");
///
/// let html = badge.into_element().render(&HtmlConfig::default());
/// assert!(html.contains("ui-float"));
/// assert!(html.contains("position: absolute"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Float {
    placement: FloatPlacement,
    offset: FloatOffset,
    class: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Float {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchor placement (default `start-end`)
    pub fn with_placement(mut self, placement: FloatPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the position offset, usually used when the container has a
    /// border radius
    pub fn with_offset(mut self, offset: impl Into<FloatOffset>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Append a class to the structural `ui-float` token
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Forward an arbitrary host attribute to the rendered element.
    ///
    /// Reserved names (`offset`, `placement`, `class`, `style`,
    /// `data-ui`) are dropped so that the component fields keep
    /// precedence.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if !RESERVED_ATTRS.contains(&name.as_str()) {
            self.attrs.push((name, value.into()));
        }
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// The computed position styles for the current placement and offset
    pub fn placement_style(&self) -> PlacementStyle {
        PlacementStyle::resolve(self.placement, &self.offset)
    }

    /// Base styles shared by every float container
    fn base_declarations() -> [(&'static str, &'static str); 4] {
        [
            ("align-items", "center"),
            ("display", "inline-flex"),
            ("justify-content", "center"),
            ("position", "absolute"),
        ]
    }

    /// Build the container element: base styles, computed placement
    /// styles, class tokens, type tag, then passthrough attributes and
    /// children.
    pub fn into_element(self) -> Element {
        let mut element = Element::new("div").with_class(FLOAT_CLASS);
        if let Some(class) = &self.class {
            element = element.with_class(class);
        }

        for (property, value) in Self::base_declarations() {
            element = element.with_style(property, value);
        }
        for (property, value) in self.placement_style().declarations() {
            element = element.with_style(property, value);
        }

        element = element.with_attr("data-ui", FLOAT_UI_TAG);
        for (name, value) in self.attrs {
            element = element.with_attr(name, value);
        }
        for child in self.children {
            element = element.with_node(child);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::html::HtmlConfig;

    use super::*;

    fn compact() -> HtmlConfig {
        HtmlConfig::new().with_pretty_print(false)
    }

    #[test]
    fn test_structural_class_is_always_first() {
        let element = Float::new().with_class("badge-host").into_element();
        assert_eq!(element.classes, vec!["ui-float", "badge-host"]);
    }

    #[test]
    fn test_base_styles_present() {
        let element = Float::new().into_element();
        assert_eq!(element.style("position"), Some("absolute"));
        assert_eq!(element.style("display"), Some("inline-flex"));
        assert_eq!(element.style("align-items"), Some("center"));
        assert_eq!(element.style("justify-content"), Some("center"));
    }

    #[test]
    fn test_default_placement_styles() {
        // start-end with zero offset: anchored to the top and right edges
        let element = Float::new().into_element();
        assert_eq!(element.style("inset-block-start"), Some("0"));
        assert_eq!(element.style("inset-block-end"), Some("auto"));
        assert_eq!(element.style("inset-inline-start"), Some("auto"));
        assert_eq!(element.style("inset-inline-end"), Some("0"));
        assert_eq!(element.style("translate"), Some("50% -50%"));
    }

    #[test]
    fn test_type_tag() {
        let element = Float::new().into_element();
        assert_eq!(element.attr("data-ui"), Some("Float"));
    }

    #[test]
    fn test_passthrough_attrs_forwarded() {
        let element = Float::new()
            .with_attr("id", "cart-badge")
            .with_attr("aria-hidden", "true")
            .into_element();
        assert_eq!(element.attr("id"), Some("cart-badge"));
        assert_eq!(element.attr("aria-hidden"), Some("true"));
    }

    #[test]
    fn test_reserved_attrs_dropped() {
        let element = Float::new()
            .with_offset("md")
            .with_attr("offset", "lg")
            .with_attr("style", "position: static")
            .into_element();
        // The component fields win over same-named passthrough attributes
        assert_eq!(element.attr("offset"), None);
        assert_eq!(element.style("inset-inline-end"), Some("md"));
        assert_eq!(element.style("position"), Some("absolute"));
    }

    #[test]
    fn test_rendered_markup() {
        let html = Float::new()
            .with_placement(FloatPlacement::EndCenter)
            .with_text("New")
            .into_element()
            .render(&compact());
        assert_eq!(
            html,
            "<div class=\"ui-float\" style=\"align-items: center; display: inline-flex; \
             justify-content: center; position: absolute; inset-block-start: auto; \
             inset-block-end: 0; inset-inline: 50%; translate: 0% 50%\" \
             data-ui=\"Float\">New</div>"
        );
    }

    #[test]
    fn test_children_are_nested() {
        let html = Float::new()
            .with_child(Element::new("span").with_class("dot"))
            .into_element()
            .render(&compact());
        assert!(html.contains("<span class=\"dot\"></span>"));
    }
}
