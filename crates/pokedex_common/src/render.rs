//! Pure mapping from a [`LookupResult`] to display-ready card fields.
//!
//! Nothing here touches page state; [`crate::page::PageState::show_card`]
//! installs the produced [`CardView`].

use serde::Serialize;

use crate::format::{
    capitalize, escape_html, format_ability, format_dex_id, format_height, format_percent,
    format_types, format_weight, stat_bar_width, NO_ITEMS, PLACEHOLDER_IMAGE,
};
use crate::model::{LookupResult, Stat};

/// Text content of every card field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub types: String,
    pub image_src: String,
    pub image_alt: String,
    pub height: String,
    pub weight: String,
    pub base_experience: String,
    pub order: String,
    /// Pill labels, already capitalized.
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    pub items: Vec<String>,
    pub stats: Vec<StatBar>,
}

/// One row of the stat chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    pub name: String,
    pub value: u32,
    /// Fill percentage in `0.0..=100.0`.
    pub width: f64,
}

impl StatBar {
    pub fn from_stat(stat: &Stat) -> Self {
        Self {
            name: stat.name.clone(),
            value: stat.value,
            width: stat_bar_width(stat.value),
        }
    }

    /// CSS width, e.g. `33.3%`.
    pub fn width_css(&self) -> String {
        format_percent(self.width)
    }
}

/// Map a Lookup Result onto the card template.
pub fn render_card(result: &LookupResult) -> CardView {
    let items = if result.held_items.is_empty() {
        vec![NO_ITEMS.to_string()]
    } else {
        pills(&result.held_items)
    };

    let abilities: Vec<String> = result.abilities.iter().map(format_ability).collect();

    CardView {
        id: format_dex_id(result.id),
        name: capitalize(&result.name),
        types: format_types(&result.types),
        image_src: result
            .sprite_url()
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        image_alt: result.name.clone(),
        height: format_height(result.height),
        weight: format_weight(result.weight),
        base_experience: result.base_experience.to_string(),
        order: result.order.to_string(),
        abilities: pills(&abilities),
        moves: pills(&result.moves),
        items,
        stats: result.stats.iter().map(StatBar::from_stat).collect(),
    }
}

fn pills(values: &[String]) -> Vec<String> {
    values.iter().map(|v| capitalize(v)).collect()
}

/// `<li>` list markup for a pill container.
pub fn pills_html(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// Stat chart markup for the stats container.
pub fn stats_html(stats: &[StatBar]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                concat!(
                    "<div class=\"stat-bar\">",
                    "<span>{name}</span>",
                    "<div class=\"bar\"><span class=\"bar-fill\" style=\"width: {width}\"></span></div>",
                    "<strong>{value}</strong>",
                    "</div>"
                ),
                name = escape_html(&stat.name),
                width = stat.width_css(),
                value = stat.value,
            )
        })
        .collect()
}
