//! HTML generation for component markup
//!
//! A minimal element factory standing in for the host framework: builds an
//! element tree and serializes it with escaping. Only carries what the
//! float container and its stories need; anything layout-related is left
//! to the consuming browser.

use crate::theme::Theme;

use super::HtmlConfig;

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with classes, inline styles and attributes
///
/// Classes, styles and attributes keep insertion order, so serialization
/// is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub styles: Vec<(String, String)>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: vec![],
            styles: vec![],
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append an inline style declaration
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
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

    pub fn with_node(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Look up an inline style declaration by property name
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Look up an attribute by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize this element and its subtree
    pub fn render(&self, config: &HtmlConfig) -> String {
        self.render_at(config, None, 0)
    }

    /// Serialize with style values resolved through a theme
    ///
    /// Stands in for the host theming engine: spacing tokens in style
    /// values are replaced with their concrete lengths, everything else
    /// passes through verbatim.
    pub fn render_with_theme(&self, config: &HtmlConfig, theme: &Theme) -> String {
        self.render_at(config, Some(theme), 0)
    }

    pub(crate) fn render_at(
        &self,
        config: &HtmlConfig,
        theme: Option<&Theme>,
        depth: usize,
    ) -> String {
        let mut out = String::new();
        self.write_into(&mut out, config, theme, depth);
        out
    }

    fn write_into(
        &self,
        out: &mut String,
        config: &HtmlConfig,
        theme: Option<&Theme>,
        depth: usize,
    ) {
        let indent = if config.pretty_print {
            "  ".repeat(depth)
        } else {
            String::new()
        };
        let newline = if config.pretty_print { "\n" } else { "" };

        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);

        if let Some(id) = &self.id {
            out.push_str(&format!(r#" id="{}""#, escape_html(id)));
        }
        if !self.classes.is_empty() {
            out.push_str(&format!(
                r#" class="{}""#,
                escape_html(&self.classes.join(" "))
            ));
        }
        if !self.styles.is_empty() {
            let css = self
                .styles
                .iter()
                .map(|(property, value)| {
                    let value = match theme {
                        Some(theme) => theme.resolve_space(value),
                        None => value.clone(),
                    };
                    format!("{}: {}", property, value)
                })
                .collect::<Vec<_>>()
                .join("; ");
            out.push_str(&format!(r#" style="{}""#, escape_html(&css)));
        }
        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }
        out.push('>');

        let text_only = self
            .children
            .iter()
            .all(|child| matches!(child, Node::Text(_)));

        if self.children.is_empty() || text_only {
            // Keep leaf elements on one line
            for child in &self.children {
                if let Node::Text(text) = child {
                    out.push_str(&escape_html(text));
                }
            }
            out.push_str(&format!("</{}>", self.tag));
            return;
        }

        out.push_str(newline);
        for child in &self.children {
            match child {
                Node::Element(element) => {
                    element.write_into(out, config, theme, depth + 1);
                }
                Node::Text(text) => {
                    if config.pretty_print {
                        out.push_str(&"  ".repeat(depth + 1));
                    }
                    out.push_str(&escape_html(text));
                }
            }
            out.push_str(newline);
        }
        out.push_str(&indent);
        out.push_str(&format!("</{}>", self.tag));
    }
}

/// Escape special HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
