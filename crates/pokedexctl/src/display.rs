//! Terminal rendering of the search page.

use owo_colors::OwoColorize;
use pokedex_common::page::PageState;
use pokedex_common::{CardView, StatusTone};

const HR: &str = "────────────────────────────────────────────────────────";
const BAR_CELLS: usize = 24;
const FULL: &str = "█";
const EMPTY: &str = "░";

/// Render the page as terminal text. `color` toggles ANSI styling.
pub fn render_page_text(page: &PageState, color: bool) -> String {
    let mut out = String::new();

    if let Some(card) = &page.card {
        out.push_str(&card_text(card, color));
    } else if page.placeholder_visible {
        out.push_str("Search for a Pokémon to see its details.\n");
    }

    if let Some(status) = &page.status {
        let line = match (color, status.tone) {
            (false, _) => status.text.clone(),
            (true, StatusTone::Success) => status.text.truecolor(52, 211, 153).to_string(),
            (true, StatusTone::Error) => status.text.truecolor(255, 122, 24).to_string(),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn card_text(card: &CardView, color: bool) -> String {
    let kw = 12; // key width
    let mut out = String::new();

    let title = format!("{} {}", card.id, card.name);
    if color {
        out.push_str(&format!("\n{}\n", title.bold()));
        out.push_str(&format!("{}\n", HR.dimmed()));
    } else {
        out.push_str(&format!("\n{}\n{}\n", title, HR));
    }

    kv(&mut out, "types", &card.types, kw);
    kv(&mut out, "image", &card.image_src, kw);
    kv(&mut out, "height", &card.height, kw);
    kv(&mut out, "weight", &card.weight, kw);
    kv(&mut out, "base exp", &card.base_experience, kw);
    kv(&mut out, "order", &card.order, kw);
    kv(&mut out, "abilities", &card.abilities.join(", "), kw);

    out.push_str("\nstats\n");
    for stat in &card.stats {
        out.push_str(&format!(
            "  {:<16} {} {:>4}\n",
            stat.name,
            bar(stat.width, color),
            stat.value
        ));
    }

    out.push('\n');
    kv(&mut out, "moves", &card.moves.join(", "), kw);
    kv(&mut out, "held items", &card.items.join(", "), kw);
    out.push_str(HR);
    out.push('\n');
    out
}

fn kv(out: &mut String, key: &str, value: &str, width: usize) {
    out.push_str(&format!("{:width$} {}\n", key, value, width = width));
}

fn bar(width: f64, color: bool) -> String {
    let filled = ((width / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    let full = FULL.repeat(filled);
    let empty = EMPTY.repeat(BAR_CELLS - filled);
    if color {
        format!("{}{}", full.yellow(), empty.dimmed())
    } else {
        format!("{}{}", full, empty)
    }
}

/// Print the page to stdout
pub fn print_page(page: &PageState, color: bool) {
    print!("{}", render_page_text(page, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_common::{render_card, LookupResult, Stat};

    fn page_with_card() -> PageState {
        let result = LookupResult {
            id: 143,
            name: "snorlax".into(),
            types: vec!["normal".into()],
            sprite: None,
            height: 21,
            weight: 4600,
            base_experience: 189,
            order: 230,
            abilities: vec![],
            moves: vec!["headbutt".into()],
            held_items: vec![],
            stats: vec![Stat::new("hp", 160), Stat::new("speed", 30)],
        };
        let mut page = PageState::new();
        page.searching("snorlax");
        page.show_card(render_card(&result));
        page.served(Some("4ms"));
        page.toggle_loading(false);
        page
    }

    #[test]
    fn test_placeholder_before_search() {
        let text = render_page_text(&PageState::new(), false);
        assert_eq!(text, "Search for a Pokémon to see its details.\n");
    }

    #[test]
    fn test_card_text() {
        let text = render_page_text(&page_with_card(), false);
        assert!(text.contains("#0143 Snorlax"));
        assert!(text.contains("height       2.1 m"));
        assert!(text.contains("weight       460.0 kg"));
        assert!(text.contains("held items   None"));
        assert!(text.ends_with("Served in 4ms ⚡\n"));
    }

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar(100.0, false), FULL.repeat(BAR_CELLS));
        assert_eq!(bar(0.0, false), EMPTY.repeat(BAR_CELLS));
        assert_eq!(bar(50.0, false).matches(FULL).count(), 12);
    }

    #[test]
    fn test_failure_status_only() {
        let mut page = PageState::new();
        page.set_status("not found", false);
        let text = render_page_text(&page, false);
        assert!(text.ends_with("not found\n"));
    }
}
