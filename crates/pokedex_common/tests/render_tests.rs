//! Golden tests for deterministic card rendering.
//!
//! Tests verify:
//! - A backend payload renders to the expected field text
//! - Stat bars are clamped at 180
//! - Output is deterministic (same input = same output)

use pokedex_common::format::{format_height, format_weight, PLACEHOLDER_IMAGE};
use pokedex_common::page::render_document;
use pokedex_common::{render_card, LookupResult, PageState};

/// Helper to parse a payload shaped like the one `pokedexd` serves
fn payload(held_items: &str, stats: &str) -> LookupResult {
    let json = format!(
        r#"{{
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "baseExperience": 267,
            "order": 7,
            "sprite": "",
            "types": ["fire", "flying"],
            "heldItems": {held_items},
            "abilities": [{{"name": "blaze", "hidden": false}}, {{"name": "solar-power", "hidden": true}}],
            "stats": {stats},
            "moves": ["mega-punch", "fire-punch", "thunder-punch"]
        }}"#
    );
    serde_json::from_str(&json).expect("payload parses")
}

#[test]
fn test_card_from_payload() {
    let card = render_card(&payload("[]", r#"[{"name": "hp", "value": 78}]"#));

    assert_eq!(card.id, "#0006");
    assert_eq!(card.name, "Charizard");
    assert_eq!(card.types, "Fire • Flying");
    assert_eq!(card.image_src, PLACEHOLDER_IMAGE);
    assert_eq!(card.image_alt, "charizard");
    assert_eq!(card.height, "1.7 m");
    assert_eq!(card.weight, "90.5 kg");
    assert_eq!(card.base_experience, "267");
    assert_eq!(card.order, "7");
    assert_eq!(card.abilities, vec!["Blaze", "Solar-power (hidden)"]);
    assert_eq!(card.moves, vec!["Mega-punch", "Fire-punch", "Thunder-punch"]);
    assert_eq!(card.items, vec!["None"]);
}

#[test]
fn test_stat_bars_clamped() {
    let card = render_card(&payload(
        "[]",
        r#"[{"name": "hp", "value": 60}, {"name": "attack", "value": 90}, {"name": "speed", "value": 200}]"#,
    ));

    let widths: Vec<String> = card.stats.iter().map(|s| s.width_css()).collect();
    assert_eq!(widths, vec!["33.3%", "50%", "100%"]);
}

#[test]
fn test_height_weight_display() {
    assert_eq!(format_height(7), "0.7 m");
    assert_eq!(format_weight(69), "6.9 kg");
}

#[test]
fn test_held_items_rendered_when_present() {
    let card = render_card(&payload(r#"["charcoal"]"#, "[]"));
    assert_eq!(card.items, vec!["Charcoal"]);
    assert!(card.stats.is_empty());
}

#[test]
fn test_render_is_deterministic() {
    let result = payload(r#"["charcoal"]"#, r#"[{"name": "hp", "value": 78}]"#);

    let mut first = PageState::new();
    first.show_card(render_card(&result));
    let mut second = PageState::new();
    second.show_card(render_card(&result));

    assert_eq!(render_document(&first), render_document(&second));
}

#[test]
fn test_new_result_replaces_previous_card() {
    let mut page = PageState::new();
    page.show_card(render_card(&payload("[]", "[]")));

    let mut other = payload("[]", "[]");
    other.id = 25;
    other.name = "pikachu".into();
    page.show_card(render_card(&other));

    let html = render_document(&page);
    assert!(html.contains("Pikachu"));
    assert!(!html.contains("Charizard"));
}
