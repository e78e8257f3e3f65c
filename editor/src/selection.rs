//! Single-box selection and the property-panel snapshot it publishes.
//!
//! The selected flag is not stored on boxes. `Selection` holds at most one
//! id, so mutual exclusion holds by construction: selecting a box replaces
//! the previous id in one assignment, never passing through a state where
//! two boxes read as selected.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::Serialize;

use crate::doc::{BoxId, BoxKind, LayoutBox, TextStyle};

/// Which tab of the property panel a box is edited from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelTab {
    Text,
    Image,
}

/// Attributes the property panel must show for the selected box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSnapshot {
    pub id: BoxId,
    pub tab: PanelTab,
    pub column: String,
    /// Present for text boxes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

impl PanelSnapshot {
    /// Capture the panel-visible attributes of `b`.
    #[must_use]
    pub fn of(b: &LayoutBox) -> Self {
        let (tab, text) = match &b.kind {
            BoxKind::Text(style) => (PanelTab::Text, Some(style.clone())),
            BoxKind::Image => (PanelTab::Image, None),
        };
        Self { id: b.id, tab, column: b.column.clone(), text }
    }
}

/// The single "currently selected box" reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<BoxId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, returning the previously selected id if it differs.
    pub fn select(&mut self, id: BoxId) -> Option<BoxId> {
        let previous = self.current.replace(id);
        previous.filter(|prev| *prev != id)
    }

    /// The selected box, if any.
    #[must_use]
    pub fn current(&self) -> Option<BoxId> {
        self.current
    }

    #[must_use]
    pub fn is_selected(&self, id: &BoxId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Clear the selection if `id` is the selected box. Returns whether it was.
    pub fn clear_if(&mut self, id: &BoxId) -> bool {
        if self.is_selected(id) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
