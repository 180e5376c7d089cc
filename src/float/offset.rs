//! Offset values between the anchor edge and the float

use std::fmt;

/// A single inset value in the host styling system
///
/// Kept opaque: a keyword (`auto`), a length with unit (`4px`, `0.5rem`)
/// or a theme token (`md`). The resolver passes the value through
/// unmodified; token resolution belongs to whoever serializes the final
/// markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inset(String);

impl Inset {
    pub fn new(value: impl Into<String>) -> Self {
        Inset(value.into())
    }

    /// The `auto` keyword, releasing an edge to the layout engine
    pub fn auto() -> Self {
        Inset::new("auto")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Inset {
    fn default() -> Self {
        Inset::new("0")
    }
}

impl fmt::Display for Inset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Inset {
    fn from(value: &str) -> Self {
        Inset::new(value)
    }
}

impl From<String> for Inset {
    fn from(value: String) -> Self {
        Inset::new(value)
    }
}

/// Offset of the float from its anchor edge
///
/// A uniform offset applies the same inset to both axes; a per-axis pair
/// gives `(block, inline)` independently. Defaults to `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FloatOffset {
    Uniform(Inset),
    PerAxis { block: Inset, inline: Inset },
}

impl FloatOffset {
    pub fn uniform(value: impl Into<Inset>) -> Self {
        FloatOffset::Uniform(value.into())
    }

    pub fn per_axis(block: impl Into<Inset>, inline: impl Into<Inset>) -> Self {
        FloatOffset::PerAxis {
            block: block.into(),
            inline: inline.into(),
        }
    }

    /// The `(block, inline)` pair, duplicating a uniform value across both
    /// axes.
    pub fn pair(&self) -> (Inset, Inset) {
        match self {
            FloatOffset::Uniform(value) => (value.clone(), value.clone()),
            FloatOffset::PerAxis { block, inline } => (block.clone(), inline.clone()),
        }
    }
}

impl Default for FloatOffset {
    fn default() -> Self {
        FloatOffset::Uniform(Inset::default())
    }
}

impl From<&str> for FloatOffset {
    fn from(value: &str) -> Self {
        FloatOffset::uniform(value)
    }
}

impl From<Inset> for FloatOffset {
    fn from(value: Inset) -> Self {
        FloatOffset::Uniform(value)
    }
}

impl From<[&str; 2]> for FloatOffset {
    fn from([block, inline]: [&str; 2]) -> Self {
        FloatOffset::per_axis(block, inline)
    }
}

impl From<(&str, &str)> for FloatOffset {
    fn from((block, inline): (&str, &str)) -> Self {
        FloatOffset::per_axis(block, inline)
    }
}
