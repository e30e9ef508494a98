// Host-side tests for the logo item set.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod items {
    include!("../src/core/items.rs");
}

use items::*;

fn partners() -> ItemSet {
    ItemSet::new(vec![
        LogoItem::new("agrisol", "AgriSol", Some("/partners/agrisol".to_string())),
        LogoItem::new("greenfield", "Greenfield Co-op", None),
        LogoItem::new("terra", "Terra Labs", Some("https://terra.example".to_string())),
    ])
}

#[test]
fn doubled_sequence_repeats_items_in_order() {
    let set = partners();
    let ids: Vec<&str> = set.doubled().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        ["agrisol", "greenfield", "terra", "agrisol", "greenfield", "terra"]
    );
    assert_eq!(set.doubled().count(), 2 * set.len());
}

#[test]
fn items_without_id_are_dropped() {
    let set = ItemSet::new(vec![
        LogoItem::new("", "Nameless", None),
        LogoItem::new("  ", "Blank", None),
        LogoItem::new("ok", "Ok", None),
    ]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.items()[0].id, "ok");
}

#[test]
fn navigation_target_maps_id_to_href() {
    let set = partners();
    assert_eq!(set.navigation_target("agrisol"), Some("/partners/agrisol"));
    assert_eq!(set.navigation_target("terra"), Some("https://terra.example"));
    assert_eq!(set.navigation_target("greenfield"), None);
    assert_eq!(set.navigation_target("unknown"), None);
}

#[test]
fn blank_href_is_not_a_target() {
    let set = ItemSet::new(vec![LogoItem::new("x", "X", Some("   ".to_string()))]);
    assert_eq!(set.navigation_target("x"), None);
    assert!(set.get("x").is_some());
}

#[test]
fn empty_set() {
    let set = ItemSet::default();
    assert!(set.is_empty());
    assert_eq!(set.doubled().count(), 0);
}

#[test]
fn click_on_a_logo_resolves_to_that_logo() {
    let mut pressed = PressedLogo::default();
    pressed.press(Some("agrisol".to_string()));
    assert_eq!(pressed.resolve_click(Some("terra")).as_deref(), Some("terra"));
}

#[test]
fn captured_click_on_the_root_falls_back_to_the_pressed_logo() {
    let set = partners();
    let mut pressed = PressedLogo::default();
    pressed.press(Some("terra".to_string()));
    assert_eq!(pressed.pressed(), Some("terra"));

    let id = pressed.resolve_click(None);
    assert_eq!(id.as_deref(), Some("terra"));
    assert_eq!(
        id.as_deref().and_then(|id| set.navigation_target(id)),
        Some("https://terra.example")
    );
}

#[test]
fn a_click_consumes_the_press() {
    let mut pressed = PressedLogo::default();
    pressed.press(Some("agrisol".to_string()));
    assert!(pressed.resolve_click(None).is_some());
    assert_eq!(pressed.pressed(), None);
    assert_eq!(pressed.resolve_click(None), None);
}

#[test]
fn press_on_a_gap_clears_the_previous_logo() {
    let mut pressed = PressedLogo::default();
    pressed.press(Some("agrisol".to_string()));
    pressed.press(None);
    assert_eq!(pressed.resolve_click(None), None);
}
