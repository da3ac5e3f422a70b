//! Formatting helpers for Lookup Result fields.

use serde_json::Value;

use crate::model::Ability;

/// Stat values at or above this fill the whole bar.
pub const STAT_BAR_MAX: u32 = 180;

/// Image shown when the result carries no sprite.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/200x200?text=No+Image";

/// Entry rendered when the held-items list is empty.
pub const NO_ITEMS: &str = "None";

/// Separator between category tags.
pub const TYPE_SEPARATOR: &str = " • ";

/// Upper-case the first character of `value`, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// [`capitalize`] for untyped JSON; non-string values pass through unchanged.
pub fn capitalize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(capitalize(s)),
        other => other.clone(),
    }
}

/// Ability label with a `(hidden)` marker for hidden abilities.
pub fn format_ability(ability: &Ability) -> String {
    if ability.hidden {
        format!("{} (hidden)", ability.name)
    } else {
        ability.name.clone()
    }
}

/// `#` followed by the id padded to four digits.
pub fn format_dex_id(id: u32) -> String {
    format!("#{:04}", id)
}

/// Decimetres as metres, one decimal: `7` → `0.7 m`.
pub fn format_height(decimetres: u32) -> String {
    format!("{} m", tenths(decimetres))
}

/// Hectograms as kilograms, one decimal: `69` → `6.9 kg`.
pub fn format_weight(hectograms: u32) -> String {
    format!("{} kg", tenths(hectograms))
}

fn tenths(value: u32) -> String {
    format!("{}.{}", value / 10, value % 10)
}

/// Category tags, capitalized and joined with [`TYPE_SEPARATOR`].
pub fn format_types(types: &[String]) -> String {
    types
        .iter()
        .map(|t| capitalize(t))
        .collect::<Vec<_>>()
        .join(TYPE_SEPARATOR)
}

/// Bar width in percent: `min(value, 180) / 1.8`, so never above 100.
pub fn stat_bar_width(value: u32) -> f64 {
    f64::from(value.min(STAT_BAR_MAX)) * 100.0 / f64::from(STAT_BAR_MAX)
}

/// Percentage with at most one decimal and no trailing `.0`: `33.3%`, `50%`.
pub fn format_percent(width: f64) -> String {
    let text = format!("{:.1}", width);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}%", text)
}

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
