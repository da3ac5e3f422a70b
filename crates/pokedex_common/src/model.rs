//! Lookup Result wire model.
//!
//! JSON uses camelCase (`baseExperience`, `heldItems`). List fields default
//! to empty so a partial payload still renders.

use serde::{Deserialize, Serialize};

/// Structured data returned by the backend for one queried name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    /// Image URL; the backend sends an empty string when no artwork exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub base_experience: u32,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub held_items: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl LookupResult {
    /// Sprite URL if one is present and non-empty.
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprite.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Ability {
    pub fn new(name: impl Into<String>, hidden: bool) -> Self {
        Self {
            name: name.into(),
            hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_backend_payload() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "baseExperience": 112,
            "order": 35,
            "sprite": "https://img.example/25.png",
            "types": ["electric"],
            "heldItems": ["oran-berry"],
            "abilities": [{"name": "static", "hidden": false}, {"name": "lightning-rod", "hidden": true}],
            "stats": [{"name": "hp", "value": 35}],
            "moves": ["mega-punch"]
        }"#;

        let result: LookupResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id, 25);
        assert_eq!(result.base_experience, 112);
        assert_eq!(result.held_items, vec!["oran-berry"]);
        assert!(result.abilities[1].hidden);
        assert_eq!(result.sprite_url(), Some("https://img.example/25.png"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let result: LookupResult = serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();
        assert!(result.types.is_empty());
        assert!(result.held_items.is_empty());
        assert!(result.sprite_url().is_none());
    }

    #[test]
    fn test_empty_sprite_is_absent() {
        let result: LookupResult =
            serde_json::from_str(r#"{"id": 1, "name": "missingno", "sprite": ""}"#).unwrap();
        assert!(result.sprite_url().is_none());
    }
}
