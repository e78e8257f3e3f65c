//! Export: original-image-space box configurations for the rendering service.
//!
//! `serialize` is a pure read of the box store. It never mutates editor state
//! and returns the same output for the same input, so hosts may call it as
//! often as they like.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Align, BoxKind, BoxStore, LayoutBox};
use crate::surface::Template;
use crate::transform::{Scale, round2};

/// One box as the rendering service consumes it, in original-image pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxConfig {
    pub column: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub kind: ConfigKind,
}

/// Variant-specific export fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigKind {
    Image {
        #[serde(rename = "isImage")]
        is_image: bool,
    },
    #[allow(clippy::struct_excessive_bools)]
    Text {
        /// Font size scaled by the horizontal factor only.
        size: f64,
        color: String,
        #[serde(rename = "fontFamily")]
        font_family: String,
        bold: bool,
        italic: bool,
        underline: bool,
        align: Align,
    },
}

/// Convert every box to original-image space, preserving z-order.
#[must_use]
pub fn serialize(boxes: &BoxStore, template: &Template) -> Vec<BoxConfig> {
    boxes.iter().map(|b| config_for(b, template.scale)).collect()
}

/// Convert a single box using `scale`.
#[must_use]
pub fn config_for(b: &LayoutBox, scale: Scale) -> BoxConfig {
    let origin = scale.to_original(b.position());
    let size = scale.size_to_original(b.declared_size());
    let kind = match &b.kind {
        BoxKind::Image => ConfigKind::Image { is_image: true },
        BoxKind::Text(style) => ConfigKind::Text {
            size: scale.length_to_original(f64::from(style.font_size)),
            color: style.color.clone(),
            font_family: style.font_family.clone(),
            bold: style.bold,
            italic: style.italic,
            underline: style.underline,
            align: style.align,
        },
    };
    BoxConfig {
        column: b.column.clone(),
        x: round2(origin.x),
        y: round2(origin.y),
        width: round2(size.width),
        height: round2(size.height),
        kind,
    }
}
