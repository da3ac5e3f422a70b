//! Map a raw PokéAPI document onto a [`LookupResult`].
//!
//! Missing nodes map to zero, empty string or `false`; the upstream schema
//! is not validated beyond that.

use pokedex_common::{Ability, LookupResult, Stat};
use serde_json::Value;

const OFFICIAL_ARTWORK: &str = "/sprites/other/official-artwork/front_default";
const DEFAULT_SPRITE: &str = "/sprites/front_default";

pub fn summarize(root: &Value, move_limit: usize) -> LookupResult {
    LookupResult {
        id: uint(root, "/id"),
        name: text(root, "/name"),
        types: names(root, "types", "/type/name"),
        sprite: sprite(root),
        height: uint(root, "/height"),
        weight: uint(root, "/weight"),
        base_experience: uint(root, "/base_experience"),
        order: root
            .pointer("/order")
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(0),
        abilities: entries(root, "abilities")
            .map(|node| {
                Ability::new(
                    text(node, "/ability/name"),
                    node.pointer("/is_hidden")
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                )
            })
            .collect(),
        moves: entries(root, "moves")
            .take(move_limit)
            .map(|node| text(node, "/move/name"))
            .collect(),
        held_items: names(root, "held_items", "/item/name"),
        stats: entries(root, "stats")
            .map(|node| Stat::new(text(node, "/stat/name"), uint(node, "/base_stat")))
            .collect(),
    }
}

/// Official artwork, else the default front sprite, else nothing.
fn sprite(root: &Value) -> Option<String> {
    root.pointer(OFFICIAL_ARTWORK)
        .and_then(Value::as_str)
        .or_else(|| root.pointer(DEFAULT_SPRITE).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn entries<'a>(root: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    root.get(key)
        .and_then(Value::as_array)
        .map(|a| a.iter())
        .into_iter()
        .flatten()
}

fn names(root: &Value, key: &str, pointer: &str) -> Vec<String> {
    entries(root, key).map(|node| text(node, pointer)).collect()
}

fn text(node: &Value, pointer: &str) -> String {
    node.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn uint(node: &Value, pointer: &str) -> u32 {
    node.pointer(pointer)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}
