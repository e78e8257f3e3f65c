//! Shared numeric constants for the editor crate.

// ── Canvas surface ──────────────────────────────────────────────

/// Largest display width a template is fitted into, in CSS pixels.
pub const DISPLAY_MAX_WIDTH: f64 = 800.0;

/// Largest display height a template is fitted into, in CSS pixels.
pub const DISPLAY_MAX_HEIGHT: f64 = 600.0;

// ── Box geometry ────────────────────────────────────────────────

/// Smallest width a box can be resized to, in display pixels.
pub const MIN_BOX_WIDTH: f64 = 100.0;

/// Smallest height a box can be resized to, in display pixels.
pub const MIN_BOX_HEIGHT: f64 = 50.0;

/// Initial size of a freshly created text box.
pub const TEXT_BOX_WIDTH: f64 = 150.0;
pub const TEXT_BOX_HEIGHT: f64 = 60.0;

/// Initial size of a freshly created image box.
pub const IMAGE_BOX_WIDTH: f64 = 200.0;
pub const IMAGE_BOX_HEIGHT: f64 = 200.0;

// ── Text style ──────────────────────────────────────────────────

pub const FONT_SIZE_MIN: u32 = 8;
pub const FONT_SIZE_MAX: u32 = 200;
pub const FONT_SIZE_DEFAULT: u32 = 16;

/// Increment applied by the font size step buttons.
pub const FONT_SIZE_STEP: u32 = 2;

pub const FONT_COLOR_DEFAULT: &str = "#000000";
pub const FONT_FAMILY_DEFAULT: &str = "Arial";

// ── Chrome ──────────────────────────────────────────────────────

/// Height of the drag header band drawn at the top of each box.
pub const HEADER_HEIGHT_PX: f64 = 18.0;

/// Side length of the square resize handle in the bottom-right corner.
pub const RESIZE_HANDLE_PX: f64 = 12.0;

/// Side length of the square delete button in the top-right corner.
pub const DELETE_BUTTON_PX: f64 = 16.0;

/// Inner padding between a box frame and its content.
pub const BOX_PADDING_PX: f64 = 5.0;

// ── Data ────────────────────────────────────────────────────────

/// Number of rows the data collaborator returns for live preview.
pub const PREVIEW_ROW_LIMIT: usize = 20;
