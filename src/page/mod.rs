//! Page model
//!
//! The page consists of two display regions: the shows list, which holds one
//! card per search result, and the episodes area, which is hidden until an
//! episode list has been rendered into it. Rendering functions receive the
//! region they write to explicitly, so nothing here is global.

mod events;
mod render;

pub use events::{CardElement, ClickEvent, SearchSubmit, delegate_click};
pub use render::{SummaryMode, episode_entry, populate_episodes, populate_shows};

use crate::metadata_retrieval::Show;

/// A rendered show card.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCard {
    /// The show this card was rendered from; its id is the card's metadata
    show: Show,
    /// HTML markup of the card
    markup: String,
}

impl ShowCard {
    pub(crate) fn new(show: Show, markup: String) -> Self {
        Self { show, markup }
    }

    /// The show id embedded in the card (`data-show-id`).
    pub fn show_id(&self) -> u64 {
        self.show.id
    }

    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// The region holding the show cards of the latest search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowsList {
    cards: Vec<ShowCard>,
}

impl ShowsList {
    /// Removes every card.
    pub fn empty(&mut self) {
        self.cards.clear();
    }

    pub fn append(&mut self, card: ShowCard) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolves the show id of the card at the given position, if any.
    pub fn closest_show_id(&self, card: usize) -> Option<u64> {
        self.cards.get(card).map(ShowCard::show_id)
    }
}

/// The region holding the episode list of the selected show.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodesArea {
    hidden: bool,
    entries: Vec<String>,
}

impl Default for EpisodesArea {
    fn default() -> Self {
        Self {
            hidden: true,
            entries: Vec::new(),
        }
    }
}

impl EpisodesArea {
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn reveal(&mut self) {
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Removes every list entry, leaving the visibility untouched.
    pub fn empty(&mut self) {
        self.entries.clear();
    }

    pub fn append(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// The whole page: search form plus the two display regions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub shows_list: ShowsList,
    pub episodes_area: EpisodesArea,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the page as a standalone HTML document.
    ///
    /// The search form is rendered with the given term as its current value.
    pub fn to_html(&self, term: &str) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str("  <title>TV Show Search</title>\n");
        html.push_str(
            "  <link rel=\"stylesheet\" href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\">\n",
        );
        html.push_str("</head>\n<body class=\"bg-dark text-light\">\n");
        html.push_str("<main class=\"container\">\n");
        html.push_str("  <h1>TV Show Search</h1>\n");

        html.push_str("  <form id=\"searchForm\" class=\"form-inline mb-4\">\n");
        html.push_str(&format!(
            "    <input id=\"searchForm-term\" class=\"form-control\" name=\"term\" value=\"{}\">\n",
            html_escape::encode_double_quoted_attribute(term)
        ));
        html.push_str("    <button class=\"btn btn-primary\">Go!</button>\n");
        html.push_str("  </form>\n");

        html.push_str("  <div id=\"showsList\" class=\"row\">\n");
        for card in self.shows_list.cards() {
            html.push_str(card.markup());
        }
        html.push_str("  </div>\n");

        if self.episodes_area.is_hidden() {
            html.push_str("  <section id=\"episodesArea\" style=\"display: none\">\n");
        } else {
            html.push_str("  <section id=\"episodesArea\">\n");
        }
        html.push_str("    <h2>Episodes</h2>\n");
        html.push_str("    <ul id=\"episodesList\">\n");
        for entry in self.episodes_area.entries() {
            html.push_str(&format!("      <li>{}</li>\n", html_escape::encode_text(entry)));
        }
        html.push_str("    </ul>\n");
        html.push_str("  </section>\n");

        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}
