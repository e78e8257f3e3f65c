//! Box model: placed boxes, their typed attributes, and the ordered store.
//!
//! This module defines what sits on top of the template (`LayoutBox`,
//! `BoxKind`), sparse-update types for incremental edits (`GeometryPatch`,
//! `StylePatch`), and the store that owns every live box (`BoxStore`).
//!
//! The store is the only place geometry invariants are enforced: every
//! position write is clamped into the container and every size write is
//! floored at the resize minimum. Nothing outside this module can produce an
//! out-of-bounds box.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    FONT_COLOR_DEFAULT, FONT_FAMILY_DEFAULT, FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, IMAGE_BOX_HEIGHT,
    IMAGE_BOX_WIDTH, MIN_BOX_HEIGHT, MIN_BOX_WIDTH, TEXT_BOX_HEIGHT, TEXT_BOX_WIDTH,
};
use crate::transform::{Point, Size};

/// Unique identifier for a box.
pub type BoxId = Uuid;

/// Horizontal text alignment inside a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// CSS / canvas `textAlign` keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Styling carried by text boxes only.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in display-space pixels, always within `[8, 200]`.
    pub font_size: u32,
    /// CSS color string.
    pub color: String,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: Align,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            color: FONT_COLOR_DEFAULT.to_owned(),
            font_family: FONT_FAMILY_DEFAULT.to_owned(),
            bold: false,
            italic: false,
            underline: false,
            align: Align::Left,
        }
    }
}

/// Clamp a font size into the supported range.
#[must_use]
pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

/// Which variant a box is, with the variant's own attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoxKind {
    /// Renders the bound column's value as styled text.
    Text(TextStyle),
    /// Renders the image found at the bound column's URL, fitted into the box.
    Image,
}

impl BoxKind {
    /// Initial display-space size for a new box of this kind.
    #[must_use]
    pub fn default_size(&self) -> Size {
        match self {
            Self::Text(_) => Size::new(TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT),
            Self::Image => Size::new(IMAGE_BOX_WIDTH, IMAGE_BOX_HEIGHT),
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Text style, if this is a text box.
    #[must_use]
    pub fn text_style(&self) -> Option<&TextStyle> {
        match self {
            Self::Text(style) => Some(style),
            Self::Image => None,
        }
    }
}

/// A placed, column-bound overlay region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBox {
    pub id: BoxId,
    /// Data column whose values fill this box.
    pub column: String,
    /// Left edge relative to the container origin, in display space.
    pub x: f64,
    /// Top edge relative to the container origin, in display space.
    pub y: f64,
    /// Declared width in display space.
    pub width: f64,
    /// Declared height in display space.
    pub height: f64,
    pub kind: BoxKind,
}

impl LayoutBox {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The stored size. Export always reads this rather than a measured one.
    #[must_use]
    pub fn declared_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Sparse geometry update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl GeometryPatch {
    /// A patch that moves the box to `at`.
    #[must_use]
    pub fn position(at: Point) -> Self {
        Self { x: Some(at.x), y: Some(at.y), ..Self::default() }
    }

    /// A patch that resizes the box to `size`.
    #[must_use]
    pub fn size(size: Size) -> Self {
        Self { width: Some(size.width), height: Some(size.height), ..Self::default() }
    }

    /// Full snapshot of a box's geometry.
    #[must_use]
    pub fn of(b: &LayoutBox) -> Self {
        Self { x: Some(b.x), y: Some(b.y), width: Some(b.width), height: Some(b.height) }
    }
}

/// Sparse text-style update. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    pub font_size: Option<u32>,
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub align: Option<Align>,
}

/// Clamp `value` so that `[value, value + extent]` stays inside `[0, limit]`.
///
/// When `extent` exceeds `limit` the box pins to the origin.
#[must_use]
pub fn clamp_axis(value: f64, extent: f64, limit: f64) -> f64 {
    value.min(limit - extent).max(0.0)
}

/// Ordered store of boxes. Index order is z-order: later boxes draw on top.
#[derive(Debug, Default)]
pub struct BoxStore {
    boxes: Vec<LayoutBox>,
}

impl BoxStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Create a box of `kind` bound to `column`, centered in `container`, and
    /// append it on top of every existing box.
    pub fn create(&mut self, kind: BoxKind, column: &str, container: Size) -> &LayoutBox {
        let size = kind.default_size();
        let x = clamp_axis(container.width / 2.0 - size.width / 2.0, size.width, container.width);
        let y = clamp_axis(container.height / 2.0 - size.height / 2.0, size.height, container.height);
        let idx = self.boxes.len();
        self.boxes.push(LayoutBox {
            id: Uuid::new_v4(),
            column: column.to_owned(),
            x,
            y,
            width: size.width,
            height: size.height,
            kind,
        });
        &self.boxes[idx]
    }

    /// Remove a box by id, returning it if it was present.
    pub fn remove(&mut self, id: &BoxId) -> Option<LayoutBox> {
        let idx = self.index_of(id)?;
        Some(self.boxes.remove(idx))
    }

    /// Return a reference to a box by id.
    #[must_use]
    pub fn get(&self, id: &BoxId) -> Option<&LayoutBox> {
        self.boxes.iter().find(|b| b.id == *id)
    }

    /// Apply a geometry update, enforcing the box invariants.
    ///
    /// Sizes are floored at the resize minimum. Positions are clamped into
    /// `container` using the box's (possibly just updated) size. A size-only
    /// patch never moves the box, so a resize may grow past the container.
    /// Returns false if the box doesn't exist.
    pub fn update_geometry(&mut self, id: &BoxId, patch: &GeometryPatch, container: Size) -> bool {
        let Some(b) = self.get_mut(id) else {
            return false;
        };
        if let Some(w) = patch.width {
            b.width = w.max(MIN_BOX_WIDTH);
        }
        if let Some(h) = patch.height {
            b.height = h.max(MIN_BOX_HEIGHT);
        }
        if let Some(x) = patch.x {
            b.x = clamp_axis(x, b.width, container.width);
        }
        if let Some(y) = patch.y {
            b.y = clamp_axis(y, b.height, container.height);
        }
        true
    }

    /// Apply a text-style update. Font sizes are clamped into range.
    ///
    /// Returns false if the box doesn't exist or is not a text box.
    pub fn update_style(&mut self, id: &BoxId, patch: &StylePatch) -> bool {
        let Some(BoxKind::Text(style)) = self.get_mut(id).map(|b| &mut b.kind) else {
            return false;
        };
        if let Some(size) = patch.font_size {
            style.font_size = clamp_font_size(size);
        }
        if let Some(ref color) = patch.color {
            style.color.clone_from(color);
        }
        if let Some(ref family) = patch.font_family {
            style.font_family.clone_from(family);
        }
        if let Some(bold) = patch.bold {
            style.bold = bold;
        }
        if let Some(italic) = patch.italic {
            style.italic = italic;
        }
        if let Some(underline) = patch.underline {
            style.underline = underline;
        }
        if let Some(align) = patch.align {
            style.align = align;
        }
        true
    }

    /// Rebind a box to another data column. Applies to both variants.
    pub fn set_column(&mut self, id: &BoxId, column: &str) -> bool {
        let Some(b) = self.get_mut(id) else {
            return false;
        };
        column.clone_into(&mut b.column);
        true
    }

    /// Remove every box.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Boxes in z-order, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutBox> {
        self.boxes.iter()
    }

    /// Ids in z-order, bottom first.
    #[must_use]
    pub fn ids(&self) -> Vec<BoxId> {
        self.boxes.iter().map(|b| b.id).collect()
    }

    /// Number of boxes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the store contains no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    fn index_of(&self, id: &BoxId) -> Option<usize> {
        self.boxes.iter().position(|b| b.id == *id)
    }

    fn get_mut(&mut self, id: &BoxId) -> Option<&mut LayoutBox> {
        self.boxes.iter_mut().find(|b| b.id == *id)
    }
}
