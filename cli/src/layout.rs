//! Layout files: box placements in display space, applied through the editor.
//!
//! Placement never writes geometry directly. Each entry is created, styled,
//! resized and dragged through `EditorCore`'s pointer entry points, so the
//! same clamp and minimum-size rules hold as for interactive editing.

use std::path::Path;

use editor::consts::{FONT_COLOR_DEFAULT, FONT_FAMILY_DEFAULT, FONT_SIZE_DEFAULT};
use editor::doc::{Align, BoxId};
use editor::engine::{Action, EditorCore};
use editor::input::{BoxPart, Button};
use editor::selection::PanelTab;
use editor::transform::Point;
use serde::Deserialize;

use crate::CliError;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Text,
    Image,
}

/// Optional text styling, named like the exported box configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutStyle {
    pub size: Option<u32>,
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: Option<Align>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutEntry {
    pub kind: LayoutKind,
    pub column: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub style: LayoutStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayoutFile {
    pub boxes: Vec<LayoutEntry>,
}

/// Parse a layout file.
///
/// # Errors
///
/// [`CliError::InvalidJson`] naming `path`.
pub fn parse(path: &Path, bytes: &[u8]) -> Result<LayoutFile, CliError> {
    serde_json::from_slice(bytes).map_err(|source| CliError::InvalidJson { path: path.to_path_buf(), source })
}

/// Place every entry in order. Returns the created box ids.
///
/// # Errors
///
/// Editor rejections, e.g. [`editor::error::ValidationError::NoData`] when
/// no rows are loaded.
pub fn place(core: &mut EditorCore, layout: &LayoutFile) -> Result<Vec<BoxId>, CliError> {
    layout.boxes.iter().map(|entry| place_entry(core, entry)).collect()
}

fn place_entry(core: &mut EditorCore, entry: &LayoutEntry) -> Result<BoxId, CliError> {
    let actions = match entry.kind {
        LayoutKind::Text => {
            core.set_form_column(PanelTab::Text, &entry.column);
            core.add_text_box()?
        }
        LayoutKind::Image => {
            core.set_form_column(PanelTab::Image, &entry.column);
            core.add_image_box()?
        }
    };
    let id = actions
        .iter()
        .find_map(|a| match a {
            Action::BoxCreated(b) => Some(b.id),
            _ => None,
        })
        .ok_or_else(|| CliError::Placement(entry.column.clone()))?;

    if entry.kind == LayoutKind::Text {
        apply_style(core, &entry.style);
    }

    let Some(current) = core.get(&id).cloned() else {
        return Err(CliError::Placement(entry.column.clone()));
    };

    // Resize before moving so the final position is clamped with the final size.
    if entry.width.is_some() || entry.height.is_some() {
        let dw = entry.width.map_or(0.0, |w| w - current.width);
        let dh = entry.height.map_or(0.0, |h| h - current.height);
        let grip = Point::new(current.x + current.width, current.y + current.height);
        gesture(core, id, BoxPart::ResizeHandle, grip, Point::new(dw, dh));
    }

    let grab = current.position();
    gesture(core, id, BoxPart::Header, grab, Point::new(entry.x - current.x, entry.y - current.y));

    tracing::debug!(%id, column = %entry.column, "layout entry placed");
    Ok(id)
}

fn apply_style(core: &mut EditorCore, style: &LayoutStyle) {
    core.set_font_size(style.size.unwrap_or(FONT_SIZE_DEFAULT));
    core.set_font_color(style.color.as_deref().unwrap_or(FONT_COLOR_DEFAULT));
    core.set_font_family(style.font_family.as_deref().unwrap_or(FONT_FAMILY_DEFAULT));
    if style.bold {
        core.toggle_bold();
    }
    if style.italic {
        core.toggle_italic();
    }
    if style.underline {
        core.toggle_underline();
    }
    if let Some(align) = style.align {
        core.set_align(align);
    }
}

/// Press on `part` at `from` and release `delta` away.
fn gesture(core: &mut EditorCore, id: BoxId, part: BoxPart, from: Point, delta: Point) {
    core.on_pointer_down(id, part, from, Button::Primary);
    core.on_pointer_up(Point::new(from.x + delta.x, from.y + delta.y));
}
