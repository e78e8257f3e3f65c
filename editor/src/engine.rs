use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::collab::{DataSet, DownloadRequest, PreviewRequest, TemplateSource};
use crate::consts::{FONT_COLOR_DEFAULT, FONT_FAMILY_DEFAULT, FONT_SIZE_DEFAULT, FONT_SIZE_STEP};
use crate::controls::{Control, Controls};
use crate::doc::{
    Align, BoxId, BoxKind, BoxStore, GeometryPatch, LayoutBox, StylePatch, TextStyle, clamp_font_size,
};
use crate::error::{CollaboratorError, EditorError, ValidationError};
use crate::export::{self, BoxConfig};
use crate::input::{BoxPart, Button, InputState};
use crate::render;
use crate::selection::{PanelSnapshot, PanelTab, Selection};
use crate::surface::{Surface, Template};
use crate::transform::{Point, Scale, Size};
use crate::upload::{self, FileSelection};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from editor entry points for the host to reconcile.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new template frame is active; all prior boxes were discarded.
    TemplateLoaded { display: Size, scale: Scale },
    /// Data rows are available; column pickers should offer `columns`.
    DataLoaded { columns: Vec<String> },
    BoxCreated(LayoutBox),
    /// Live geometry change during a gesture.
    BoxUpdated { id: BoxId, fields: GeometryPatch },
    /// Final geometry at the end of a gesture.
    BoxCommitted { id: BoxId, fields: GeometryPatch },
    BoxDeleted { id: BoxId },
    /// The selection moved. The property panel must show the snapshot, or
    /// reset when `None`.
    SelectionChanged(Option<PanelSnapshot>),
    /// Attributes of the selected box changed; the panel must reflect them.
    PanelUpdated(PanelSnapshot),
    /// Bound content of a box must be re-rendered (font, image fit).
    PreviewRefresh { id: BoxId },
    PreviewsReady(Vec<String>),
    RenderNeeded,
}

/// Values currently entered in the property panel's form controls.
///
/// New boxes take their column and text style from here, and selecting a box
/// mirrors the box's attributes back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyForm {
    pub text_column: Option<String>,
    pub image_column: Option<String>,
    pub font_size: u32,
    pub color: String,
    pub font_family: String,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            text_column: None,
            image_column: None,
            font_size: FONT_SIZE_DEFAULT,
            color: FONT_COLOR_DEFAULT.to_owned(),
            font_family: FONT_FAMILY_DEFAULT.to_owned(),
        }
    }
}

impl PropertyForm {
    fn mirror(&mut self, snapshot: &PanelSnapshot) {
        match snapshot.tab {
            PanelTab::Image => self.image_column = Some(snapshot.column.clone()),
            PanelTab::Text => self.text_column = Some(snapshot.column.clone()),
        }
        if let Some(style) = &snapshot.text {
            self.font_size = style.font_size;
            self.color.clone_from(&style.color);
            self.font_family.clone_from(&style.font_family);
        }
    }
}

/// Core editor state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Every mutation of boxes, selection and gesture state goes
/// through the methods below; the fields are private so the clamp and
/// single-selection invariants hold at one place.
#[derive(Debug, Default)]
pub struct EditorCore {
    surface: Surface,
    boxes: BoxStore,
    selection: Selection,
    input: InputState,
    form: PropertyForm,
    controls: Controls,
    data: Option<DataSet>,
    previews: Vec<String>,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Template ---

    /// Validate a template selection and disable the upload control.
    ///
    /// # Errors
    ///
    /// Validation failures, or [`ValidationError::Busy`] if an upload is in flight.
    pub fn begin_template_upload(&mut self, selection: Option<&FileSelection>) -> Result<(), EditorError> {
        upload::check_template(selection).inspect_err(|e| tracing::warn!(error = %e, "template selection rejected"))?;
        self.controls.begin(Control::TemplateUpload)?;
        Ok(())
    }

    /// Re-enable the upload control and, on success, load the template.
    ///
    /// The control is enabled again whether or not `result` is an error.
    ///
    /// # Errors
    ///
    /// The upload's own error, or a [`crate::error::LoadError`] from loading.
    pub fn finish_template_upload(
        &mut self,
        result: Result<TemplateSource, EditorError>,
    ) -> Result<Vec<Action>, EditorError> {
        self.controls.finish(Control::TemplateUpload);
        let source = result.inspect_err(|e| tracing::warn!(error = %e, "template upload failed"))?;
        self.load_template(&source)
    }

    /// Establish a new frame from a decoded template.
    ///
    /// Prior boxes, selection, gesture and previews are discarded only once
    /// the new template is accepted; a rejected template leaves everything
    /// as it was.
    ///
    /// # Errors
    ///
    /// [`crate::error::LoadError`] if the image has unusable dimensions.
    pub fn load_template(&mut self, source: &TemplateSource) -> Result<Vec<Action>, EditorError> {
        let template = match self.surface.load(source) {
            Ok(template) => template,
            Err(e) => {
                tracing::warn!(reference = %source.reference, error = %e, "template rejected");
                return Err(e.into());
            }
        };
        let display_size = template.display;
        let scale = template.scale;
        tracing::info!(
            reference = %template.reference,
            width = template.original.width,
            height = template.original.height,
            display_width = display_size.width,
            display_height = display_size.height,
            "template loaded"
        );

        self.boxes.clear();
        self.selection.clear();
        self.input = InputState::Idle;
        self.previews.clear();

        Ok(vec![
            Action::TemplateLoaded { display: display_size, scale },
            Action::SelectionChanged(None),
            Action::RenderNeeded,
        ])
    }

    // --- Data ---

    /// Validate a data selection and disable the upload control.
    ///
    /// # Errors
    ///
    /// Validation failures, or [`ValidationError::Busy`] if an upload is in flight.
    pub fn begin_data_upload(&mut self, selection: Option<&FileSelection>) -> Result<(), EditorError> {
        upload::check_data(selection).inspect_err(|e| tracing::warn!(error = %e, "data selection rejected"))?;
        self.controls.begin(Control::DataUpload)?;
        Ok(())
    }

    /// Re-enable the upload control and, on success, load the rows.
    ///
    /// # Errors
    ///
    /// The collaborator's error; prior data is kept.
    pub fn finish_data_upload(&mut self, result: Result<DataSet, CollaboratorError>) -> Result<Vec<Action>, EditorError> {
        self.controls.finish(Control::DataUpload);
        let data = result.inspect_err(|e| tracing::warn!(error = %e, "data upload failed"))?;
        Ok(self.load_data(data))
    }

    /// Replace the loaded data set. Column pickers reset to the first column.
    pub fn load_data(&mut self, data: DataSet) -> Vec<Action> {
        let first = data.columns.first().cloned();
        self.form.text_column.clone_from(&first);
        self.form.image_column = first;
        tracing::info!(columns = data.columns.len(), rows = data.total_rows, "data loaded");

        let columns = data.columns.clone();
        self.data = Some(data);

        let mut actions = vec![Action::DataLoaded { columns }];
        actions.extend(self.boxes.ids().into_iter().map(|id| Action::PreviewRefresh { id }));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Box lifecycle ---

    /// Add a text box bound to the form's text column, styled from the form.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoData`] when no data rows are loaded.
    pub fn add_text_box(&mut self) -> Result<Vec<Action>, EditorError> {
        let column = self.creation_column(self.form.text_column.as_deref())?;
        let style = TextStyle {
            font_size: clamp_font_size(self.form.font_size),
            color: self.form.color.clone(),
            font_family: self.form.font_family.clone(),
            ..TextStyle::default()
        };
        Ok(self.create_box(BoxKind::Text(style), &column))
    }

    /// Add an image box bound to the form's image column.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoData`] when no data rows are loaded.
    pub fn add_image_box(&mut self) -> Result<Vec<Action>, EditorError> {
        let column = self.creation_column(self.form.image_column.as_deref())?;
        Ok(self.create_box(BoxKind::Image, &column))
    }

    /// Delete a box. Clears the selection first if it pointed at this box.
    pub fn delete_box(&mut self, id: BoxId) -> Vec<Action> {
        if self.boxes.remove(&id).is_none() {
            return Vec::new();
        }
        tracing::debug!(%id, "box deleted");

        let mut actions = vec![Action::BoxDeleted { id }];
        if self.selection.clear_if(&id) {
            actions.push(Action::SelectionChanged(None));
        }
        if self.input.active_id() == Some(id) {
            self.input = InputState::Idle;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn creation_column(&self, preferred: Option<&str>) -> Result<String, ValidationError> {
        let data = self.data.as_ref().filter(|d| d.has_rows()).ok_or(ValidationError::NoData)?;
        preferred
            .map(str::to_owned)
            .or_else(|| data.columns.first().cloned())
            .ok_or(ValidationError::NoData)
            .inspect_err(|e| tracing::warn!(error = %e, "box creation rejected"))
    }

    fn create_box(&mut self, kind: BoxKind, column: &str) -> Vec<Action> {
        let container = self.surface.container();
        let created = self.boxes.create(kind, column, container).clone();
        let id = created.id;
        tracing::debug!(%id, column, "box created");

        let mut actions = vec![Action::BoxCreated(created)];
        actions.extend(self.select(id));
        actions.push(Action::PreviewRefresh { id });
        actions
    }

    // --- Selection ---

    /// Select a box, replacing any previous selection, and publish its
    /// attributes to the property panel. Unknown ids are ignored.
    pub fn select(&mut self, id: BoxId) -> Vec<Action> {
        let Some(b) = self.boxes.get(&id) else {
            return Vec::new();
        };
        let snapshot = PanelSnapshot::of(b);
        self.selection.select(id);
        self.form.mirror(&snapshot);
        vec![Action::SelectionChanged(Some(snapshot)), Action::RenderNeeded]
    }

    // --- Pointer input ---

    /// Pointer pressed on `part` of box `id`.
    ///
    /// Selection is applied before the gesture starts, so panel listeners
    /// observe the new selection before any geometry from this gesture.
    pub fn on_pointer_down(&mut self, id: BoxId, part: BoxPart, pointer: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_idle() {
            return Vec::new();
        }
        let Some(start_size) = self.boxes.get(&id).map(LayoutBox::declared_size) else {
            return Vec::new();
        };

        match part {
            BoxPart::DeleteButton => self.delete_box(id),
            BoxPart::Body => self.select(id),
            BoxPart::Header => {
                let actions = self.select(id);
                self.input = InputState::Dragging { id, last_pointer: pointer };
                actions
            }
            BoxPart::ResizeHandle => {
                let actions = self.select(id);
                self.input = InputState::Resizing { id, start_pointer: pointer, start_size };
                actions
            }
        }
    }

    /// Pointer moved anywhere in the document.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, last_pointer } => self.drag_to(id, last_pointer, pointer),
            InputState::Resizing { id, start_pointer, start_size } => {
                self.resize_to(id, InputState::resized(start_size, start_pointer, pointer))
            }
        }
    }

    /// Pointer released anywhere in the document. Ends the active gesture
    /// and commits the box's final geometry.
    pub fn on_pointer_up(&mut self, pointer: Point) -> Vec<Action> {
        let Some(id) = self.input.active_id() else {
            return Vec::new();
        };
        let mut actions = self.on_pointer_move(pointer);
        self.input = InputState::Idle;
        if let Some(b) = self.boxes.get(&id) {
            actions.push(Action::BoxCommitted { id, fields: GeometryPatch::of(b) });
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn drag_to(&mut self, id: BoxId, last_pointer: Point, pointer: Point) -> Vec<Action> {
        let Some(origin) = self.boxes.get(&id).map(LayoutBox::position) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        let delta = pointer.delta_from(last_pointer);
        let target = Point::new(origin.x + delta.x, origin.y + delta.y);
        self.boxes.update_geometry(&id, &GeometryPatch::position(target), self.surface.container());
        self.input = InputState::Dragging { id, last_pointer: pointer };

        let Some(moved) = self.boxes.get(&id).map(LayoutBox::position) else {
            return Vec::new();
        };
        vec![Action::BoxUpdated { id, fields: GeometryPatch::position(moved) }, Action::RenderNeeded]
    }

    fn resize_to(&mut self, id: BoxId, size: Size) -> Vec<Action> {
        if !self.boxes.update_geometry(&id, &GeometryPatch::size(size), self.surface.container()) {
            self.input = InputState::Idle;
            return Vec::new();
        }
        let Some(resized) = self.boxes.get(&id).map(LayoutBox::declared_size) else {
            return Vec::new();
        };
        vec![
            Action::BoxUpdated { id, fields: GeometryPatch::size(resized) },
            Action::PreviewRefresh { id },
            Action::RenderNeeded,
        ]
    }

    // --- Style controls ---

    pub fn toggle_bold(&mut self) -> Vec<Action> {
        let Some(bold) = self.selected_style().map(|s| !s.bold) else {
            return Vec::new();
        };
        self.edit_selected_text(&StylePatch { bold: Some(bold), ..StylePatch::default() })
    }

    pub fn toggle_italic(&mut self) -> Vec<Action> {
        let Some(italic) = self.selected_style().map(|s| !s.italic) else {
            return Vec::new();
        };
        self.edit_selected_text(&StylePatch { italic: Some(italic), ..StylePatch::default() })
    }

    pub fn toggle_underline(&mut self) -> Vec<Action> {
        let Some(underline) = self.selected_style().map(|s| !s.underline) else {
            return Vec::new();
        };
        self.edit_selected_text(&StylePatch { underline: Some(underline), ..StylePatch::default() })
    }

    /// Step the selected text box's font size up by two, capped at 200.
    pub fn increase_font_size(&mut self) -> Vec<Action> {
        let Some(size) = self.selected_style().map(|s| s.font_size.saturating_add(FONT_SIZE_STEP)) else {
            return Vec::new();
        };
        self.set_font_size(size)
    }

    /// Step the selected text box's font size down by two, floored at 8.
    pub fn decrease_font_size(&mut self) -> Vec<Action> {
        let Some(size) = self.selected_style().map(|s| s.font_size.saturating_sub(FONT_SIZE_STEP)) else {
            return Vec::new();
        };
        self.set_font_size(size)
    }

    /// Set the form's font size (clamped) and apply it to the selected text box.
    pub fn set_font_size(&mut self, size: u32) -> Vec<Action> {
        let size = clamp_font_size(size);
        self.form.font_size = size;
        self.edit_selected_text(&StylePatch { font_size: Some(size), ..StylePatch::default() })
    }

    /// Set the form's color and apply it to the selected text box.
    pub fn set_font_color(&mut self, color: &str) -> Vec<Action> {
        color.clone_into(&mut self.form.color);
        self.edit_selected_text(&StylePatch { color: Some(color.to_owned()), ..StylePatch::default() })
    }

    /// Set the form's font family and apply it to the selected text box.
    pub fn set_font_family(&mut self, family: &str) -> Vec<Action> {
        family.clone_into(&mut self.form.font_family);
        self.edit_selected_text(&StylePatch { font_family: Some(family.to_owned()), ..StylePatch::default() })
    }

    pub fn set_align(&mut self, align: Align) -> Vec<Action> {
        self.edit_selected_text(&StylePatch { align: Some(align), ..StylePatch::default() })
    }

    /// Choose the column new boxes of `tab`'s kind will bind to.
    pub fn set_form_column(&mut self, tab: PanelTab, column: &str) {
        let slot = match tab {
            PanelTab::Text => &mut self.form.text_column,
            PanelTab::Image => &mut self.form.image_column,
        };
        *slot = Some(column.to_owned());
    }

    /// Rebind the selected box (either kind) to `column`.
    pub fn set_column(&mut self, column: &str) -> Vec<Action> {
        let Some(id) = self.selection.current() else {
            return Vec::new();
        };
        if !self.boxes.set_column(&id, column) {
            return Vec::new();
        }
        self.publish_selected(id)
    }

    fn selected_style(&self) -> Option<&TextStyle> {
        let id = self.selection.current()?;
        self.boxes.get(&id)?.kind.text_style()
    }

    fn edit_selected_text(&mut self, patch: &StylePatch) -> Vec<Action> {
        let Some(id) = self.selection.current() else {
            return Vec::new();
        };
        if !self.boxes.update_style(&id, patch) {
            return Vec::new();
        }
        self.publish_selected(id)
    }

    fn publish_selected(&mut self, id: BoxId) -> Vec<Action> {
        let Some(snapshot) = self.boxes.get(&id).map(PanelSnapshot::of) else {
            return Vec::new();
        };
        self.form.mirror(&snapshot);
        vec![Action::PanelUpdated(snapshot), Action::PreviewRefresh { id }, Action::RenderNeeded]
    }

    // --- Export / preview / download ---

    /// Original-image-space configuration of every box.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoTemplate`] before a template is loaded.
    pub fn export_configs(&self) -> Result<Vec<BoxConfig>, EditorError> {
        let template = self.surface.template().ok_or(ValidationError::NoTemplate)?;
        Ok(export::serialize(&self.boxes, template))
    }

    /// Build the preview request and disable the preview control.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Incomplete`] without template, data rows and at
    /// least one box; [`ValidationError::Busy`] while a preview is in flight.
    pub fn begin_preview(&mut self) -> Result<PreviewRequest, EditorError> {
        let (Some(template), Some(data)) = (self.surface.template(), self.data.as_ref()) else {
            return Err(ValidationError::Incomplete.into());
        };
        if self.boxes.is_empty() || !data.has_rows() {
            return Err(ValidationError::Incomplete.into());
        }
        self.controls.begin(Control::Preview)?;
        Ok(PreviewRequest {
            template: template.reference.clone(),
            csv_data: data.export_rows().to_vec(),
            text_boxes: export::serialize(&self.boxes, template),
        })
    }

    /// Re-enable the preview control and store the rendered references.
    ///
    /// # Errors
    ///
    /// The collaborator's error; previously stored previews are kept.
    pub fn finish_preview(&mut self, result: Result<Vec<String>, CollaboratorError>) -> Result<Vec<Action>, EditorError> {
        self.controls.finish(Control::Preview);
        let urls = result.inspect_err(|e| tracing::warn!(error = %e, "preview generation failed"))?;
        tracing::info!(count = urls.len(), "previews ready");
        self.previews.clone_from(&urls);
        Ok(vec![Action::PreviewsReady(urls)])
    }

    /// Build the download request and disable the download control.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoPreviews`] before any previews exist;
    /// [`ValidationError::Busy`] while a download is in flight.
    pub fn begin_download(&mut self) -> Result<DownloadRequest, EditorError> {
        if self.previews.is_empty() {
            return Err(ValidationError::NoPreviews.into());
        }
        self.controls.begin(Control::Download)?;
        Ok(DownloadRequest { preview_urls: self.previews.clone() })
    }

    /// Re-enable the download control and hand back the archive bytes.
    ///
    /// # Errors
    ///
    /// The collaborator's error.
    pub fn finish_download(&mut self, result: Result<Vec<u8>, CollaboratorError>) -> Result<Vec<u8>, EditorError> {
        self.controls.finish(Control::Download);
        let archive = result.inspect_err(|e| tracing::warn!(error = %e, "download failed"))?;
        tracing::info!(bytes = archive.len(), "archive downloaded");
        Ok(archive)
    }

    // --- Queries ---

    /// Whether the host should offer `control` to the user right now.
    #[must_use]
    pub fn is_enabled(&self, control: Control) -> bool {
        if self.controls.is_busy(control) {
            return false;
        }
        control != Control::Download || !self.previews.is_empty()
    }

    /// The currently selected box, if any.
    #[must_use]
    pub fn selection(&self) -> Option<BoxId> {
        self.selection.current()
    }

    #[must_use]
    pub fn is_selected(&self, id: &BoxId) -> bool {
        self.selection.is_selected(id)
    }

    #[must_use]
    pub fn boxes(&self) -> &BoxStore {
        &self.boxes
    }

    /// Look up a box by ID.
    #[must_use]
    pub fn get(&self, id: &BoxId) -> Option<&LayoutBox> {
        self.boxes.get(id)
    }

    #[must_use]
    pub fn template(&self) -> Option<&Template> {
        self.surface.template()
    }

    /// The box container in display space.
    #[must_use]
    pub fn container(&self) -> Size {
        self.surface.container()
    }

    #[must_use]
    pub fn data(&self) -> Option<&DataSet> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn form(&self) -> &PropertyForm {
        &self.form
    }

    #[must_use]
    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    /// First-row value bound to box `id`, for live preview.
    #[must_use]
    pub fn example_value(&self, id: &BoxId) -> Option<String> {
        let b = self.boxes.get(id)?;
        self.data.as_ref()?.example_value(&b.column)
    }
}

/// The full editor. Wraps `EditorCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    template_image: Option<HtmlImageElement>,
    pub core: EditorCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, template_image: None, core: EditorCore::new() }
    }

    /// Load a decoded template and size the canvas to its display frame.
    ///
    /// # Errors
    ///
    /// See [`EditorCore::load_template`]; the canvas is untouched on error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn load_template(
        &mut self,
        source: &TemplateSource,
        image: HtmlImageElement,
    ) -> Result<Vec<Action>, EditorError> {
        let actions = self.core.load_template(source)?;
        let frame = self.core.container();
        self.canvas.set_width(frame.width as u32);
        self.canvas.set_height(frame.height as u32);
        self.template_image = Some(image);
        Ok(actions)
    }

    // --- Delegated input events ---

    /// Pointer pressed at canvas coordinates `pointer`. Resolves the box part
    /// under the pointer and forwards to [`EditorCore::on_pointer_down`].
    pub fn on_canvas_pointer_down(&mut self, pointer: Point, button: Button) -> Vec<Action> {
        match render::scene(&self.core).hit(pointer) {
            Some((id, part)) => self.core.on_pointer_down(id, part, pointer, button),
            None => Vec::new(),
        }
    }

    pub fn on_pointer_down(&mut self, id: BoxId, part: BoxPart, pointer: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(id, part, pointer, button)
    }

    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        self.core.on_pointer_move(pointer)
    }

    pub fn on_pointer_up(&mut self, pointer: Point) -> Vec<Action> {
        self.core.on_pointer_up(pointer)
    }

    // --- Render ---

    /// Reconcile the canvas with the model if any action asked for it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn apply(&self, actions: &[Action]) -> Result<(), JsValue> {
        if actions.iter().any(|a| matches!(a, Action::RenderNeeded)) {
            return self.render();
        }
        Ok(())
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(&ctx, &render::scene(&self.core), self.template_image.as_ref())
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }
}
