//! Float component: placement tokens, offsets and the container element
//!
//! The core is `PlacementStyle::resolve`, a pure mapping from a placement
//! and an offset to the inset/translate declarations that anchor the
//! container; `Float` is the thin wrapper that turns those declarations
//! into a rendered element.

pub mod container;
pub mod offset;
pub mod placement;
pub mod style;

pub use container::{Float, FLOAT_CLASS, FLOAT_UI_TAG};
pub use offset::{FloatOffset, Inset};
pub use placement::{AxisAlign, FloatPlacement};
pub use style::{AxisInsets, PlacementStyle, Translate, TranslateShift};
