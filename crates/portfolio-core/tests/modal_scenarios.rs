//! End-to-end scenarios for the project modal
//!
//! Drives the modal through the input router the same way the page does:
//! card clicks, gallery controls, thumbnails, and keyboard shortcuts.

use portfolio_core::{
    Catalog, InputEvent, InputRouter, Key, ModalController, ModalVisibility,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("portfolio_core=debug")
        .with_test_writer()
        .try_init();
}

fn page() -> (InputRouter, ModalController) {
    init_tracing();
    let catalog = Catalog::builtin().expect("built-in catalog parses");
    (InputRouter::default(), ModalController::new(catalog))
}

fn click_card(router: &InputRouter, modal: &mut ModalController, id: &str) -> bool {
    router.dispatch(modal, InputEvent::CardClick(id.to_string()))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn single_image_project_hides_navigation() {
    let (router, mut modal) = page();
    assert!(click_card(&router, &mut modal, "ui-story"));

    let view = modal.view().expect("modal open");
    assert!(!view.show_nav);
    assert_eq!(view.main_image, "./assets/images/ui_story.png");
    assert_eq!(view.thumbnails.len(), 1);

    router.dispatch(&mut modal, InputEvent::Key(Key::ArrowRight));
    assert_eq!(modal.gallery().active_index(), 0);
    router.dispatch(&mut modal, InputEvent::Key(Key::ArrowLeft));
    assert_eq!(modal.gallery().active_index(), 0);
}

#[test]
fn four_image_gallery_wraps_forward() {
    let (router, mut modal) = page();
    click_card(&router, &mut modal, "fursah");
    assert!(modal.view().unwrap().show_nav);

    for expected in 1..=3 {
        router.dispatch(&mut modal, InputEvent::NextClick);
        assert_eq!(modal.gallery().active_index(), expected);
    }
    router.dispatch(&mut modal, InputEvent::NextClick);
    assert_eq!(modal.gallery().active_index(), 0);
}

#[test]
fn prev_from_first_image_lands_on_last() {
    let (router, mut modal) = page();
    click_card(&router, &mut modal, "fursah");
    router.dispatch(&mut modal, InputEvent::PrevClick);

    let view = modal.view().unwrap();
    assert_eq!(view.active_index, 3);
    assert_eq!(view.main_image, "./assets/images/fursah_4.png");
    assert!(view.thumbnails[3].active);
}

#[test]
fn opening_another_project_replaces_gallery() {
    let (router, mut modal) = page();
    click_card(&router, &mut modal, "boxit4me");
    router.dispatch(&mut modal, InputEvent::ThumbnailClick(2));

    click_card(&router, &mut modal, "meezan360");
    let view = modal.view().unwrap();
    let meezan = modal.catalog().lookup("meezan360").unwrap();

    assert_eq!(view.project_id, "meezan360");
    assert_eq!(view.active_index, 0);
    assert_eq!(modal.gallery().images(), meezan.images.as_slice());
    assert!(view
        .thumbnails
        .iter()
        .all(|t| !t.src.contains("boxit4me")));
    assert_eq!(view.thumbnails.len(), meezan.images.len());
}

#[test]
fn every_project_renders_its_record() {
    let (router, mut modal) = page();
    let catalog = modal.catalog().clone();

    for record in catalog.iter() {
        assert!(click_card(&router, &mut modal, &record.id));
        let view = modal.view().unwrap();
        assert_eq!(view.title, record.title);
        assert_eq!(view.category, record.category);
        assert_eq!(view.description, record.description);
        assert_eq!(view.tech, record.tech);
        assert_eq!(view.features, record.features);
        assert_eq!(view.app_link, record.app_link);
        assert_eq!(view.show_nav, record.images.len() > 1);
    }
}

#[test]
fn markup_in_text_fields_is_kept_verbatim() {
    init_tracing();
    let catalog = Catalog::from_json(
        r#"[{
            "id": "x",
            "title": "<b>Bold</b>",
            "category": "<script>alert(1)</script>",
            "platform": "ios",
            "description": "a & b",
            "images": ["x.png"]
        }]"#,
    )
    .unwrap();
    let mut modal = ModalController::new(catalog);
    modal.open("x");

    let view = modal.view().unwrap();
    assert_eq!(view.title, "<b>Bold</b>");
    assert_eq!(view.category, "<script>alert(1)</script>");
    assert_eq!(view.description, "a & b");
}

#[test]
fn unknown_card_is_silent() {
    let (router, mut modal) = page();
    assert!(!click_card(&router, &mut modal, "not-a-project"));
    assert_eq!(modal.visibility(), ModalVisibility::Closed);
    assert!(!modal.scroll_locked());
}

#[test]
fn escape_closes_and_further_keys_are_ignored() {
    let (router, mut modal) = page();
    click_card(&router, &mut modal, "fursah");
    router.dispatch(&mut modal, InputEvent::Key(Key::ArrowRight));
    assert!(router.dispatch(&mut modal, InputEvent::Key(Key::Escape)));
    assert!(!modal.scroll_locked());

    assert!(!router.dispatch(&mut modal, InputEvent::Key(Key::ArrowRight)));
    assert!(!router.dispatch(&mut modal, InputEvent::Key(Key::Escape)));
    assert_eq!(modal.gallery().active_index(), 1);
}

#[test]
fn close_twice_matches_close_once() {
    let (router, mut modal) = page();
    click_card(&router, &mut modal, "boxit4me");

    let mut once = modal.clone();
    router.dispatch(&mut once, InputEvent::CloseClick);

    router.dispatch(&mut modal, InputEvent::CloseClick);
    router.dispatch(&mut modal, InputEvent::BackdropClick);

    assert_eq!(once.visibility(), modal.visibility());
    assert_eq!(once.view(), modal.view());
    assert_eq!(once.gallery(), modal.gallery());
}
