use std::rc::Rc;

use super::*;
use crate::store::MemoryStore;
use crate::surface::MemorySurface;
use crate::toggle::BOUND_ATTR;

#[test]
fn glyph_offers_the_other_theme() {
    assert_eq!(toggle_glyph(Theme::Dark), "\u{2600}");
    assert_eq!(toggle_glyph(Theme::Light), "\u{263e}");
}

#[test]
fn glyph_changes_on_toggle() {
    let theme = Theme::Light;
    assert_ne!(toggle_glyph(theme), toggle_glyph(theme.toggled()));
}

#[test]
fn restore_theme_applies_stored_dark_on_mount() {
    let store = Rc::new(MemoryStore::with_entry("theme", "dark"));
    let surface = Rc::new(MemorySurface::default());
    let toggle = PreferenceToggle::new(Rc::clone(&store), Rc::clone(&surface));

    assert_eq!(restore_theme(&toggle), Theme::Dark);
    assert!(surface.is_dark());
}

#[test]
fn restore_theme_reports_page_state_without_preference() {
    let surface = Rc::new(MemorySurface::new(true));
    let toggle = PreferenceToggle::new(MemoryStore::new(), Rc::clone(&surface));
    assert_eq!(restore_theme(&toggle), Theme::Dark);

    let toggle = PreferenceToggle::new(MemoryStore::unavailable(), MemorySurface::default());
    assert_eq!(restore_theme(&toggle), Theme::Light);
}

#[test]
fn restored_then_clicked_survives_reload() {
    let store = Rc::new(MemoryStore::new());

    let toggle = PreferenceToggle::new(Rc::clone(&store), MemorySurface::default());
    assert_eq!(restore_theme(&toggle), Theme::Light);
    toggle.handle_toggle_activation();

    let reloaded = PreferenceToggle::new(Rc::clone(&store), MemorySurface::default());
    assert_eq!(restore_theme(&reloaded), Theme::Dark);
}

#[test]
fn rendered_mark_matches_install_attribute() {
    // The view! macro spells the attribute out literally.
    assert_eq!(BOUND_ATTR, "data-theme-toggle-bound");
}
