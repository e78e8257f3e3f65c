//! Rendering: draws the editor surface to a 2D context.
//!
//! Split in two. [`scene`] turns editor state into a flat list of
//! [`BoxView`]s with resolved preview content and no browser types, so it is
//! testable natively. [`draw`] is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]; it paints a scene and mutates
//! nothing.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{BOX_PADDING_PX, DELETE_BUTTON_PX, HEADER_HEIGHT_PX, RESIZE_HANDLE_PX};
use crate::doc::{Align, BoxId, BoxKind, TextStyle};
use crate::engine::EditorCore;
use crate::input::BoxPart;
use crate::transform::{Point, Size};

/// Selection dash segment length in pixels.
const SELECTION_DASH_PX: f64 = 4.0;

/// Body label of a text box whose column has no first-row value.
pub const TEXT_PLACEHOLDER: &str = "Text Preview";

/// Body label of an image box; the host paints the referenced image over it.
pub const IMAGE_PLACEHOLDER: &str = "Image Placeholder";

/// What a box shows inside its body.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// First-row value of the bound column, drawn with the box's style.
    Text { value: String, style: TextStyle },
    /// First-row value of the bound column, interpreted as an image reference.
    Image { url: String },
    /// No value to show yet.
    Placeholder { label: String },
}

/// One box as it should appear on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxView {
    pub id: BoxId,
    pub origin: Point,
    pub size: Size,
    pub selected: bool,
    /// Header caption.
    pub column: String,
    pub content: Content,
}

impl BoxView {
    /// Which part of this box `p` falls on, if any.
    #[must_use]
    pub fn part_at(&self, p: Point) -> Option<BoxPart> {
        let local = p.delta_from(self.origin);
        if local.x < 0.0 || local.y < 0.0 || local.x > self.size.width || local.y > self.size.height {
            return None;
        }
        if local.y <= HEADER_HEIGHT_PX {
            if local.x >= self.size.width - DELETE_BUTTON_PX {
                return Some(BoxPart::DeleteButton);
            }
            return Some(BoxPart::Header);
        }
        if local.x >= self.size.width - RESIZE_HANDLE_PX && local.y >= self.size.height - RESIZE_HANDLE_PX {
            return Some(BoxPart::ResizeHandle);
        }
        Some(BoxPart::Body)
    }
}

/// Everything `draw` needs for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub size: Size,
    /// Boxes in creation order; later boxes paint over earlier ones.
    pub boxes: Vec<BoxView>,
}

impl Scene {
    /// Boxes from bottom to top: creation order, with the selected box raised
    /// above all others.
    #[must_use]
    pub fn stacked(&self) -> impl DoubleEndedIterator<Item = &BoxView> {
        let rest = self.boxes.iter().filter(|v| !v.selected);
        rest.chain(self.boxes.iter().filter(|v| v.selected))
    }

    /// Topmost box part under `p`.
    #[must_use]
    pub fn hit(&self, p: Point) -> Option<(BoxId, BoxPart)> {
        self.stacked().rev().find_map(|b| b.part_at(p).map(|part| (b.id, part)))
    }
}

/// Resolve editor state into a paintable scene.
#[must_use]
pub fn scene(core: &EditorCore) -> Scene {
    let boxes = core
        .boxes()
        .iter()
        .map(|b| {
            let example = core.example_value(&b.id);
            let content = match (&b.kind, example) {
                (BoxKind::Text(style), Some(value)) => Content::Text { value, style: style.clone() },
                (BoxKind::Image, Some(url)) => Content::Image { url },
                (BoxKind::Text(_), None) => Content::Placeholder { label: TEXT_PLACEHOLDER.to_owned() },
                (BoxKind::Image, None) => Content::Placeholder { label: IMAGE_PLACEHOLDER.to_owned() },
            };
            BoxView {
                id: b.id,
                origin: b.position(),
                size: b.declared_size(),
                selected: core.is_selected(&b.id),
                column: b.column.clone(),
                content,
            }
        })
        .collect();
    Scene { size: core.container(), boxes }
}

/// CSS font shorthand for a text style.
#[must_use]
pub fn font_shorthand(style: &TextStyle) -> String {
    let italic = if style.italic { "italic " } else { "" };
    let bold = if style.bold { "bold " } else { "" };
    format!("{italic}{bold}{}px {}", style.font_size, style.font_family)
}

/// Draw the full scene: template, boxes, then selection outlines.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, template: Option<&HtmlImageElement>) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.size.width, scene.size.height);

    if let Some(image) = template {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            0.0,
            0.0,
            scene.size.width,
            scene.size.height,
        )?;
    }

    for view in scene.stacked() {
        draw_box(ctx, view)?;
    }
    for view in scene.boxes.iter().filter(|v| v.selected) {
        draw_selection(ctx, view)?;
    }
    Ok(())
}

fn draw_box(ctx: &CanvasRenderingContext2d, view: &BoxView) -> Result<(), JsValue> {
    let Point { x, y } = view.origin;
    let Size { width, height } = view.size;

    ctx.save();

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.35)");
    ctx.fill_rect(x, y, width, height);
    ctx.set_stroke_style_str("rgba(0, 123, 255, 0.8)");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(x, y, width, height);

    // Header band with column caption and delete button.
    ctx.set_fill_style_str("rgba(0, 123, 255, 0.85)");
    ctx.fill_rect(x, y, width, HEADER_HEIGHT_PX);
    ctx.set_fill_style_str("#fff");
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_font("11px sans-serif");
    let caption_w = (width - DELETE_BUTTON_PX - 2.0 * BOX_PADDING_PX).max(0.0);
    ctx.fill_text(&fit_text(ctx, &view.column, caption_w), x + BOX_PADDING_PX, y + HEADER_HEIGHT_PX * 0.5)?;
    ctx.set_fill_style_str("#dc3545");
    ctx.fill_rect(x + width - DELETE_BUTTON_PX, y + 1.0, DELETE_BUTTON_PX - 1.0, HEADER_HEIGHT_PX - 2.0);
    ctx.set_fill_style_str("#fff");
    ctx.set_text_align("center");
    ctx.fill_text("×", x + width - DELETE_BUTTON_PX * 0.5, y + HEADER_HEIGHT_PX * 0.5)?;

    let body = BodyRect {
        x: x + BOX_PADDING_PX,
        y: y + HEADER_HEIGHT_PX + BOX_PADDING_PX,
        width: (width - 2.0 * BOX_PADDING_PX).max(0.0),
        height: (height - HEADER_HEIGHT_PX - 2.0 * BOX_PADDING_PX).max(0.0),
    };
    match &view.content {
        Content::Text { value, style } => draw_text(ctx, &body, value, style)?,
        Content::Image { .. } => draw_label(ctx, &body, IMAGE_PLACEHOLDER)?,
        Content::Placeholder { label } => draw_label(ctx, &body, label)?,
    }

    // Resize grip.
    ctx.set_fill_style_str("rgba(0, 123, 255, 0.85)");
    ctx.fill_rect(x + width - RESIZE_HANDLE_PX, y + height - RESIZE_HANDLE_PX, RESIZE_HANDLE_PX, RESIZE_HANDLE_PX);

    ctx.restore();
    Ok(())
}

struct BodyRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn draw_text(ctx: &CanvasRenderingContext2d, body: &BodyRect, value: &str, style: &TextStyle) -> Result<(), JsValue> {
    let font_size = f64::from(style.font_size);
    ctx.set_font(&font_shorthand(style));
    ctx.set_fill_style_str(&style.color);
    ctx.set_stroke_style_str(&style.color);
    ctx.set_text_baseline("top");
    ctx.set_text_align(style.align.as_str());

    let anchor_x = match style.align {
        Align::Left => body.x,
        Align::Center => body.x + body.width * 0.5,
        Align::Right => body.x + body.width,
    };

    let line_h = font_size * 1.2;
    let mut y = body.y;
    for line in wrap_text_lines(ctx, value, body.width) {
        if y + font_size > body.y + body.height {
            break;
        }
        ctx.fill_text(&line, anchor_x, y)?;
        if style.underline {
            let w = measured_text_width(ctx, &line);
            let start = match style.align {
                Align::Left => anchor_x,
                Align::Center => anchor_x - w * 0.5,
                Align::Right => anchor_x - w,
            };
            ctx.set_line_width((font_size / 14.0).max(1.0));
            ctx.begin_path();
            ctx.move_to(start, y + font_size);
            ctx.line_to(start + w, y + font_size);
            ctx.stroke();
        }
        y += line_h;
    }
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, body: &BodyRect, label: &str) -> Result<(), JsValue> {
    ctx.set_font("12px sans-serif");
    ctx.set_fill_style_str("#555");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let fitted = fit_text(ctx, label, body.width);
    ctx.fill_text(&fitted, body.x + body.width * 0.5, body.y + body.height * 0.5)
}

fn draw_selection(ctx: &CanvasRenderingContext2d, view: &BoxView) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str("#1E90FF");
    ctx.set_line_width(2.0);
    let dash_array = js_sys::Array::new();
    dash_array.push(&SELECTION_DASH_PX.into());
    dash_array.push(&SELECTION_DASH_PX.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.stroke_rect(view.origin.x - 1.0, view.origin.y - 1.0, view.size.width + 2.0, view.size.height + 2.0);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn wrap_text_lines(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> Vec<String> {
    let mut out = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measured_text_width(ctx, &candidate) <= max_w {
                current = candidate;
            } else {
                out.push(std::mem::replace(&mut current, word.to_owned()));
            }
        }
        out.push(current);
    }
    out
}

fn fit_text(ctx: &CanvasRenderingContext2d, text: &str, max_w: f64) -> String {
    if measured_text_width(ctx, text) <= max_w {
        return text.to_owned();
    }
    let ellipsis = "...";
    let mut chars: Vec<char> = text.chars().collect();
    while chars.pop().is_some() {
        let candidate = format!("{}{ellipsis}", chars.iter().collect::<String>());
        if measured_text_width(ctx, &candidate) <= max_w {
            return candidate;
        }
    }
    String::new()
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => f64::INFINITY,
    }
}
