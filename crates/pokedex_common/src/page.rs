//! Page state for the search view.
//!
//! Holds what the page template shows: the status line, the submit control,
//! the placeholder and the result card. Controllers mutate a `PageState`
//! they own and hand it to a renderer; nothing is bound globally.

use serde::Serialize;

use crate::format::escape_html;
use crate::render::{pills_html, stats_html, CardView};

/// Submit-control label while idle.
pub const SEARCH_LABEL: &str = "Search";

/// Submit-control label while a request is in flight.
pub const SEARCHING_LABEL: &str = "Searching...";

/// Status shown when the response has no `x-response-time` header.
pub const CACHED_SPEED: &str = "cached speed";

/// Colour cue of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Error,
}

impl StatusTone {
    /// CSS colour for the tone.
    pub fn color(self) -> &'static str {
        match self {
            StatusTone::Success => "#34d399",
            StatusTone::Error => "#ff7a18",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            disabled: false,
            label: SEARCH_LABEL.to_string(),
        }
    }
}

/// Everything the search page displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    /// Last query typed into the input.
    pub query: String,
    /// `None` until the first submission.
    pub status: Option<StatusLine>,
    pub submit: SubmitControl,
    pub placeholder_visible: bool,
    /// `None` while the card is hidden.
    pub card: Option<CardView>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            status: None,
            submit: SubmitControl::default(),
            placeholder_visible: true,
            card: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, success: bool) {
        self.status = Some(StatusLine {
            text: text.into(),
            tone: if success {
                StatusTone::Success
            } else {
                StatusTone::Error
            },
        });
    }

    /// Disable or re-enable the submit control.
    pub fn toggle_loading(&mut self, loading: bool) {
        self.submit.disabled = loading;
        let label = if loading { SEARCHING_LABEL } else { SEARCH_LABEL };
        self.submit.label = label.to_string();
    }

    /// Hide the placeholder and show `card`, replacing any previous result.
    pub fn show_card(&mut self, card: CardView) {
        self.placeholder_visible = false;
        self.card = Some(card);
    }

    /// Status for a submission that has just been sent.
    pub fn searching(&mut self, query: &str) {
        self.query = query.to_string();
        self.set_status(format!("Searching for {}...", query), false);
        self.toggle_loading(true);
    }

    /// Status for a rendered result.
    pub fn served(&mut self, response_time: Option<&str>) {
        let took = response_time.unwrap_or(CACHED_SPEED);
        self.set_status(format!("Served in {} ⚡", took), true);
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}

/// Render the full page document with the fixed element ids.
pub fn render_document(page: &PageState) -> String {
    let mut html = String::new();
    html.push_str(DOCUMENT_HEAD);

    html.push_str("<form id=\"search-form\" method=\"get\" action=\"/\">");
    html.push_str(&format!(
        "<input id=\"pokemon-name\" name=\"name\" type=\"text\" value=\"{}\" autocomplete=\"off\">",
        escape_html(&page.query)
    ));
    html.push_str(&format!(
        "<button type=\"submit\"{}>{}</button>",
        if page.submit.disabled { " disabled" } else { "" },
        escape_html(&page.submit.label)
    ));
    html.push_str("</form>\n");

    match &page.status {
        Some(status) => html.push_str(&format!(
            "<p id=\"status\" style=\"color: {}\">{}</p>\n",
            status.tone.color(),
            escape_html(&status.text)
        )),
        None => html.push_str("<p id=\"status\"></p>\n"),
    }

    html.push_str(&format!(
        "<div id=\"results-placeholder\"{}>Search for a Pokémon to see its details.</div>\n",
        if page.placeholder_visible {
            ""
        } else {
            " style=\"display: none\""
        }
    ));

    match &page.card {
        Some(card) => html.push_str(&card_html(card)),
        None => html.push_str("<article id=\"pokemon-card\" class=\"hidden\"></article>\n"),
    }

    html.push_str(DOCUMENT_TAIL);
    html
}

fn card_html(card: &CardView) -> String {
    format!(
        concat!(
            "<article id=\"pokemon-card\">\n",
            "<header><span id=\"pokemon-id\">{id}</span>",
            "<h2 id=\"pokemon-name-display\">{name}</h2>",
            "<p id=\"pokemon-types\">{types}</p></header>\n",
            "<img id=\"pokemon-image\" src=\"{src}\" alt=\"{alt}\">\n",
            "<dl>",
            "<dt>Height</dt><dd id=\"pokemon-height\">{height}</dd>",
            "<dt>Weight</dt><dd id=\"pokemon-weight\">{weight}</dd>",
            "<dt>Base experience</dt><dd id=\"pokemon-exp\">{exp}</dd>",
            "<dt>Order</dt><dd id=\"pokemon-order\">{order}</dd>",
            "</dl>\n",
            "<h3>Abilities</h3><ul id=\"pokemon-abilities\">{abilities}</ul>\n",
            "<h3>Stats</h3><div id=\"pokemon-stats\">{stats}</div>\n",
            "<h3>Moves</h3><ul id=\"pokemon-moves\">{moves}</ul>\n",
            "<h3>Held items</h3><ul id=\"pokemon-items\">{items}</ul>\n",
            "</article>\n"
        ),
        id = escape_html(&card.id),
        name = escape_html(&card.name),
        types = escape_html(&card.types),
        src = escape_html(&card.image_src),
        alt = escape_html(&card.image_alt),
        height = escape_html(&card.height),
        weight = escape_html(&card.weight),
        exp = escape_html(&card.base_experience),
        order = escape_html(&card.order),
        abilities = pills_html(&card.abilities),
        stats = stats_html(&card.stats),
        moves = pills_html(&card.moves),
        items = pills_html(&card.items),
    )
}

const DOCUMENT_HEAD: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
    "<title>Pokédex</title>\n",
    "<style>",
    ".hidden{display:none}",
    ".bar{background:#1f2937;border-radius:4px;height:8px;flex:1}",
    ".bar-fill{display:block;background:#f59e0b;height:100%;border-radius:4px}",
    ".stat-bar{display:flex;gap:8px;align-items:center}",
    "</style>\n",
    "</head>\n<body>\n<main>\n"
);

const DOCUMENT_TAIL: &str = "</main>\n</body>\n</html>\n";
