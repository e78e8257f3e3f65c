//! End-to-end editing scenarios driven only through the public `EditorCore` API.
#![allow(clippy::float_cmp)]

use editor::collab::{DataSet, Row, TemplateSource};
use editor::doc::{BoxId, GeometryPatch};
use editor::engine::{Action, EditorCore};
use editor::export::{self, ConfigKind};
use editor::input::{BoxPart, Button};
use editor::selection::PanelTab;
use editor::transform::{Point, Scale};
use serde_json::json;

fn template(width: u32, height: u32) -> TemplateSource {
    TemplateSource {
        reference: "template.png".to_owned(),
        image_url: "/static/uploads/template.png".to_owned(),
        width,
        height,
    }
}

fn rows() -> DataSet {
    let rows: Vec<Row> = json!([
        { "name": "Ada Lovelace", "title": "Analyst", "photo": "ada.png" },
        { "name": "Grace Hopper", "title": "Admiral", "photo": "grace.png" },
        { "name": "Edsger Dijkstra", "title": "Professor", "photo": "ewd.png" },
    ])
    .as_array()
    .unwrap()
    .iter()
    .map(|r| r.as_object().unwrap().clone())
    .collect();
    DataSet::from_rows(rows)
}

fn editor(width: u32, height: u32) -> EditorCore {
    let mut core = EditorCore::new();
    core.load_template(&template(width, height)).unwrap();
    core.load_data(rows());
    core
}

fn created(actions: &[Action]) -> BoxId {
    actions
        .iter()
        .find_map(|a| match a {
            Action::BoxCreated(b) => Some(b.id),
            _ => None,
        })
        .unwrap()
}

/// Drag box `id` by its header so its origin lands on `target`.
fn drag_to(core: &mut EditorCore, id: BoxId, target: Point) {
    let b = core.get(&id).unwrap().clone();
    let grab = Point::new(b.x + 10.0, b.y + 5.0);
    core.on_pointer_down(id, BoxPart::Header, grab, Button::Primary);
    let release = Point::new(grab.x + (target.x - b.x), grab.y + (target.y - b.y));
    core.on_pointer_move(release);
    core.on_pointer_up(release);
}

/// Resize box `id` by its handle to `width` x `height`.
fn resize_to(core: &mut EditorCore, id: BoxId, width: f64, height: f64) {
    let b = core.get(&id).unwrap().clone();
    let grab = Point::new(b.x + b.width - 2.0, b.y + b.height - 2.0);
    core.on_pointer_down(id, BoxPart::ResizeHandle, grab, Button::Primary);
    let release = Point::new(grab.x + (width - b.width), grab.y + (height - b.height));
    core.on_pointer_move(release);
    core.on_pointer_up(release);
}

#[test]
fn placed_text_box_exports_in_original_space() {
    // 1600x1200 is displayed at 800x600: two original pixels per display pixel.
    let mut core = editor(1600, 1200);
    let id = created(&core.add_text_box().unwrap());
    drag_to(&mut core, id, Point::new(100.0, 100.0));

    let configs = core.export_configs().unwrap();
    assert_eq!(configs.len(), 1);
    let c = &configs[0];
    assert_eq!((c.x, c.y, c.width, c.height), (200.0, 200.0, 300.0, 120.0));
    assert_eq!(c.column, "name");
    assert!(matches!(&c.kind, ConfigKind::Text { size, .. } if *size == 32.0));
}

#[test]
fn half_scale_box_config() {
    let mut core = editor(800, 600);
    let id = created(&core.add_text_box().unwrap());
    drag_to(&mut core, id, Point::new(100.0, 100.0));

    let b = core.get(&id).unwrap();
    let c = export::config_for(b, Scale { x: 0.5, y: 0.5 });
    assert_eq!((c.x, c.y, c.width, c.height), (50.0, 50.0, 75.0, 30.0));
    assert!(matches!(&c.kind, ConfigKind::Text { size, .. } if *size == 8.0));
}

#[test]
fn image_box_dragged_past_origin_clamps() {
    let mut core = editor(800, 600);
    let id = created(&core.add_image_box().unwrap());
    drag_to(&mut core, id, Point::new(0.0, 0.0));
    assert_eq!((core.get(&id).unwrap().x, core.get(&id).unwrap().y), (0.0, 0.0));

    core.on_pointer_down(id, BoxPart::Header, Point::new(10.0, 5.0), Button::Primary);
    let actions = core.on_pointer_move(Point::new(-40.0, -45.0));
    assert_eq!(
        actions[0],
        Action::BoxUpdated { id, fields: GeometryPatch { x: Some(0.0), y: Some(0.0), width: None, height: None } }
    );
    core.on_pointer_up(Point::new(-40.0, -45.0));
    assert_eq!((core.get(&id).unwrap().x, core.get(&id).unwrap().y), (0.0, 0.0));
}

#[test]
fn reselecting_first_box_reflects_its_attributes() {
    let mut core = editor(800, 600);
    let first = created(&core.add_text_box().unwrap());
    core.toggle_bold();
    core.set_font_size(28);

    core.set_form_column(PanelTab::Text, "title");
    let second = created(&core.add_text_box().unwrap());
    core.toggle_italic();
    assert!(core.is_selected(&second));

    let actions = core.select(first);
    assert!(core.is_selected(&first));
    assert!(!core.is_selected(&second));

    let Some(Action::SelectionChanged(Some(panel))) = actions.first() else {
        panic!("expected a panel snapshot, got {actions:?}");
    };
    let style = panel.text.as_ref().unwrap();
    assert_eq!(panel.column, "name");
    assert_eq!(style.font_size, 28);
    assert!(style.bold);
    assert!(!style.italic);
    assert_eq!(core.form().font_size, 28);
    assert_eq!(core.form().text_column.as_deref(), Some("name"));
}

#[test]
fn every_box_stays_inside_container_through_gestures() {
    let mut core = editor(1000, 500);
    let container = core.container();
    let mut ids = Vec::new();
    for i in 0..6 {
        let id = if i % 2 == 0 {
            created(&core.add_text_box().unwrap())
        } else {
            created(&core.add_image_box().unwrap())
        };
        ids.push(id);
    }

    let targets = [(-300.0, 40.0), (900.0, -10.0), (5000.0, 5000.0), (-1.0, -1.0), (120.5, 77.25), (799.0, 399.0)];
    for (id, (x, y)) in ids.iter().zip(targets) {
        drag_to(&mut core, *id, Point::new(x, y));
        let b = core.get(id).unwrap();
        assert!(b.x >= 0.0 && b.y >= 0.0, "{b:?}");
        assert!(b.x + b.width <= container.width + 1e-9, "{b:?}");
        assert!(b.y + b.height <= container.height + 1e-9, "{b:?}");
    }
}

#[test]
fn resize_never_goes_below_minimum() {
    let mut core = editor(800, 600);
    let id = created(&core.add_text_box().unwrap());
    for (w, h) in [(10.0, 10.0), (-50.0, 500.0), (250.0, 1.0), (99.9, 49.9)] {
        resize_to(&mut core, id, w, h);
        let b = core.get(&id).unwrap();
        assert!(b.width >= 100.0 && b.height >= 50.0, "{b:?}");
    }
    resize_to(&mut core, id, 240.0, 90.0);
    let b = core.get(&id).unwrap();
    assert_eq!((b.width, b.height), (240.0, 90.0));
}

#[test]
fn deleted_box_leaves_no_trace() {
    let mut core = editor(800, 600);
    let keep = created(&core.add_image_box().unwrap());
    let gone = created(&core.add_text_box().unwrap());
    core.delete_box(gone);

    assert_eq!(core.selection(), None);
    assert!(core.toggle_bold().is_empty());
    assert!(core.set_font_size(40).is_empty());
    assert_eq!(core.export_configs().unwrap().len(), 1);
    assert_eq!(core.export_configs().unwrap()[0].column, core.get(&keep).unwrap().column);
}

#[test]
fn export_is_idempotent_and_ordered() {
    let mut core = editor(1200, 900);
    let a = created(&core.add_text_box().unwrap());
    let b = created(&core.add_image_box().unwrap());
    drag_to(&mut core, b, Point::new(33.3, 12.7));
    drag_to(&mut core, a, Point::new(400.0, 10.0));

    let first = core.export_configs().unwrap();
    let second = core.export_configs().unwrap();
    assert_eq!(first, second);
    assert!(matches!(first[0].kind, ConfigKind::Text { .. }));
    assert!(matches!(first[1].kind, ConfigKind::Image { .. }));

    let payload = serde_json::to_value(&first[1]).unwrap();
    assert_eq!(payload["isImage"], json!(true));
    assert_eq!(payload["x"], json!(49.95));
}
