use uuid::Uuid;

use super::*;
use crate::doc::{Align, BoxStore};
use crate::transform::Size;

#[test]
fn new_selection_is_empty() {
    let sel = Selection::new();
    assert!(sel.current().is_none());
}

#[test]
fn select_sets_current() {
    let mut sel = Selection::new();
    let id = Uuid::new_v4();
    assert_eq!(sel.select(id), None);
    assert_eq!(sel.current(), Some(id));
    assert!(sel.is_selected(&id));
}

#[test]
fn select_replaces_previous() {
    let mut sel = Selection::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    sel.select(a);
    assert_eq!(sel.select(b), Some(a));
    assert!(!sel.is_selected(&a));
    assert!(sel.is_selected(&b));
}

#[test]
fn reselect_same_reports_no_previous() {
    let mut sel = Selection::new();
    let a = Uuid::new_v4();
    sel.select(a);
    assert_eq!(sel.select(a), None);
    assert_eq!(sel.current(), Some(a));
}

#[test]
fn at_most_one_selected_after_any_sequence() {
    let ids: Vec<BoxId> = (0..5).map(|_| Uuid::new_v4()).collect();
    let mut sel = Selection::new();
    for step in 0..40 {
        sel.select(ids[(step * 7 + 3) % ids.len()]);
        let selected = ids.iter().filter(|id| sel.is_selected(id)).count();
        assert_eq!(selected, 1);
    }
}

#[test]
fn clear_if_only_clears_matching() {
    let mut sel = Selection::new();
    let a = Uuid::new_v4();
    sel.select(a);
    assert!(!sel.clear_if(&Uuid::new_v4()));
    assert_eq!(sel.current(), Some(a));
    assert!(sel.clear_if(&a));
    assert!(sel.current().is_none());
}

#[test]
fn clear_resets() {
    let mut sel = Selection::new();
    sel.select(Uuid::new_v4());
    sel.clear();
    assert!(sel.current().is_none());
}

// =============================================================
// PanelSnapshot
// =============================================================

#[test]
fn snapshot_of_text_box_carries_style() {
    let mut store = BoxStore::new();
    let style = TextStyle { font_size: 24, align: Align::Right, ..TextStyle::default() };
    let b = store.create(BoxKind::Text(style.clone()), "title", Size::new(800.0, 600.0));
    let snap = PanelSnapshot::of(b);
    assert_eq!(snap.tab, PanelTab::Text);
    assert_eq!(snap.column, "title");
    assert_eq!(snap.text, Some(style));
}

#[test]
fn snapshot_of_image_box_has_no_style() {
    let mut store = BoxStore::new();
    let b = store.create(BoxKind::Image, "photo", Size::new(800.0, 600.0));
    let snap = PanelSnapshot::of(b);
    assert_eq!(snap.tab, PanelTab::Image);
    assert!(snap.text.is_none());
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["tab"], "image");
    assert!(json.get("text").is_none());
}
