#![allow(clippy::float_cmp)]

use super::*;

fn source(width: u32, height: u32) -> TemplateSource {
    TemplateSource {
        reference: "card.png".into(),
        image_url: "/static/uploads/card.png".into(),
        width,
        height,
    }
}

#[test]
fn large_template_is_fitted_and_scaled() {
    let t = Template::from_source(&source(1600, 1200)).unwrap();
    assert_eq!(t.original, Size::new(1600.0, 1200.0));
    assert_eq!(t.display, Size::new(800.0, 600.0));
    assert_eq!(t.scale.x, 2.0);
    assert_eq!(t.scale.y, 2.0);
    assert_eq!(t.reference, "card.png");
}

#[test]
fn small_template_keeps_original_size() {
    let t = Template::from_source(&source(400, 300)).unwrap();
    assert_eq!(t.display, Size::new(400.0, 300.0));
    assert_eq!(t.scale.x, 1.0);
    assert_eq!(t.scale.y, 1.0);
}

#[test]
fn panoramic_template_preserves_aspect() {
    let t = Template::from_source(&source(3200, 600)).unwrap();
    assert_eq!(t.display, Size::new(800.0, 150.0));
    assert_eq!(t.scale.x, 4.0);
    assert_eq!(t.scale.y, 4.0);
}

#[test]
fn zero_dimension_is_load_error() {
    let err = Template::from_source(&source(0, 600)).unwrap_err();
    assert_eq!(err, LoadError::EmptyImage { width: 0, height: 600 });
}

#[test]
fn surface_starts_empty_with_zero_container() {
    let surface = Surface::new();
    assert!(surface.template().is_none());
    assert_eq!(surface.container(), Size::default());
}

#[test]
fn surface_load_sets_container() {
    let mut surface = Surface::new();
    surface.load(&source(1600, 1200)).unwrap();
    assert_eq!(surface.container(), Size::new(800.0, 600.0));
}

#[test]
fn failed_load_keeps_previous_template() {
    let mut surface = Surface::new();
    surface.load(&source(1600, 1200)).unwrap();
    assert!(surface.load(&source(0, 0)).is_err());
    let t = surface.template().unwrap();
    assert_eq!(t.original, Size::new(1600.0, 1200.0));
}

#[test]
fn reload_recomputes_scale() {
    let mut surface = Surface::new();
    surface.load(&source(1600, 1200)).unwrap();
    let t = surface.load(&source(800, 600)).unwrap();
    assert_eq!(t.scale.x, 1.0);
    assert_eq!(t.scale.y, 1.0);
}
