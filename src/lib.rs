//! ui-float - an anchored overlay primitive for component libraries
//!
//! `Float` anchors an element to the edge of its closest positioned
//! ancestor: notification badges, status dots, corner decorations. The
//! crate computes the inset/translate style set for the nine anchor
//! placements, renders the container markup, and ships the component's
//! documentation stories as a generated gallery.
//!
//! # Example
//!
//! ```rust
//! use ui_float::{Float, FloatPlacement, HtmlConfig};
//!
//! let html = Float::new()
//!     .with_placement(FloatPlacement::EndEnd)
//!     .with_text("3")
//!     .into_element()
//!     .render(&HtmlConfig::default());
//!
//! assert!(html.contains("ui-float"));
//! assert!(html.contains("inset-block-end: 0"));
//! ```
//!
//! The resolver itself is a pure function and can be used without
//! rendering anything:
//!
//! ```rust
//! use ui_float::{FloatPlacement, PlacementStyle};
//!
//! let style = PlacementStyle::resolve(FloatPlacement::StartStart, &"md".into());
//! assert_eq!(style.translate.css_value(), "-50% -50%");
//! ```

pub mod float;
pub mod html;
pub mod stories;
pub mod theme;

pub use float::{
    AxisAlign, AxisInsets, Float, FloatOffset, FloatPlacement, Inset, PlacementStyle, Translate,
    TranslateShift,
};
pub use html::{Element, HtmlConfig, Node};
pub use stories::{render_gallery, Story};
pub use theme::{Theme, ThemeError};
