//! Placement style resolution
//!
//! `PlacementStyle::resolve` is the core of the component: a pure mapping
//! from a placement and an offset to the inset and translate declarations
//! that pin the float to its anchor point. The float sits on the chosen
//! container edge and is shifted by half its own size so that it centers
//! on the anchor point.

use super::offset::{FloatOffset, Inset};
use super::placement::{AxisAlign, FloatPlacement};

/// Post-layout shift along one translate axis
///
/// Always `-50%`, `0%` or `50%`, determined solely by which axis branch
/// fired during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateShift {
    Negative,
    Zero,
    Positive,
}

impl TranslateShift {
    pub fn css_value(self) -> &'static str {
        match self {
            TranslateShift::Negative => "-50%",
            TranslateShift::Zero => "0%",
            TranslateShift::Positive => "50%",
        }
    }
}

/// 2D translate, inline (x) shift first as in the CSS `translate` property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translate {
    pub x: TranslateShift,
    pub y: TranslateShift,
}

impl Translate {
    pub fn css_value(&self) -> String {
        format!("{} {}", self.x.css_value(), self.y.css_value())
    }
}

/// Inset declarations for one axis
///
/// Exactly one form applies per axis: the float is either anchored to one
/// edge with the opposite edge released to `auto`, or centered with both
/// edges at `50%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisInsets {
    Anchored { start: Inset, end: Inset },
    Centered,
}

/// Computed position styles for a float container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementStyle {
    pub block: AxisInsets,
    pub inline: AxisInsets,
    pub translate: Translate,
}

impl PlacementStyle {
    /// Resolve a placement and offset into concrete style attributes.
    ///
    /// Pure and deterministic: identical inputs always produce identical
    /// output, and the inputs are never modified. The block axis drives
    /// the vertical (`y`) shift, the inline axis the horizontal (`x`) one.
    pub fn resolve(placement: FloatPlacement, offset: &FloatOffset) -> Self {
        let (block, inline) = placement.axes();
        let (offset_block, offset_inline) = offset.pair();

        let (block_insets, shift_y) = resolve_axis(block, offset_block);
        let (inline_insets, shift_x) = resolve_axis(inline, offset_inline);

        PlacementStyle {
            block: block_insets,
            inline: inline_insets,
            translate: Translate {
                x: shift_x,
                y: shift_y,
            },
        }
    }

    /// Emit CSS declarations in a stable order: block insets, inline
    /// insets, then the composed translate.
    pub fn declarations(&self) -> Vec<(String, String)> {
        let mut decls = axis_declarations(&self.block, "block");
        decls.extend(axis_declarations(&self.inline, "inline"));
        decls.push(("translate".to_string(), self.translate.css_value()));
        decls
    }

    /// The declarations as a single CSS text, `property: value` pairs
    /// joined with `; `
    pub fn css_text(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn resolve_axis(align: AxisAlign, offset: Inset) -> (AxisInsets, TranslateShift) {
    match align {
        AxisAlign::Start => (
            AxisInsets::Anchored {
                start: offset,
                end: Inset::auto(),
            },
            TranslateShift::Negative,
        ),
        AxisAlign::End => (
            AxisInsets::Anchored {
                start: Inset::auto(),
                end: offset,
            },
            TranslateShift::Positive,
        ),
        AxisAlign::Center => (AxisInsets::Centered, TranslateShift::Zero),
    }
}

fn axis_declarations(insets: &AxisInsets, axis: &str) -> Vec<(String, String)> {
    match insets {
        AxisInsets::Anchored { start, end } => vec![
            (format!("inset-{}-start", axis), start.to_string()),
            (format!("inset-{}-end", axis), end.to_string()),
        ],
        AxisInsets::Centered => vec![(format!("inset-{}", axis), "50%".to_string())],
    }
}
