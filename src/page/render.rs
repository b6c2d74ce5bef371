//! Rendering of shows and episodes into the page regions.

use super::{EpisodesArea, ShowCard, ShowsList};
use crate::metadata_retrieval::{Episode, Show};
use std::fmt::Display;

/// How show summaries are inserted into card markup.
///
/// Summaries arrive as HTML from the metadata source. `Raw` inserts them
/// unchanged, so whatever markup the source sends ends up in the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryMode {
    /// Insert the summary markup as-is
    #[default]
    Raw,
    /// HTML-escape the summary before inserting it
    Escaped,
}

fn show_card_markup(show: &Show, summary_mode: SummaryMode) -> String {
    let summary = show.summary.as_deref().unwrap_or_default();
    let summary = match summary_mode {
        SummaryMode::Raw => summary.to_string(),
        SummaryMode::Escaped => html_escape::encode_text(summary).into_owned(),
    };
    let name = html_escape::encode_text(&show.name);
    let alt = html_escape::encode_double_quoted_attribute(&show.name);

    format!(
        r#"    <div data-show-id="{id}" class="Show col-md-12 col-lg-6 mb-4">
      <div class="media">
        <img src="{image}" alt="{alt}" class="w-25 me-3">
        <div class="media-body">
          <h5 class="text-primary">{name}</h5>
          <div><small>{summary}</small></div>
          <button class="btn btn-outline-light btn-sm Show-getEpisodes">
            Episodes
          </button>
        </div>
      </div>
    </div>
"#,
        id = show.id,
        image = html_escape::encode_double_quoted_attribute(&show.image),
    )
}

/// Replaces the contents of the shows list with one card per show.
///
/// Cards keep the order of `shows`.
pub fn populate_shows(shows_list: &mut ShowsList, shows: &[Show], summary_mode: SummaryMode) {
    shows_list.empty();

    for show in shows {
        let markup = show_card_markup(show, summary_mode);
        shows_list.append(ShowCard::new(show.clone(), markup));
    }
}

/// Renders a field as given, spelling out an absent value as `null`.
fn or_null<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "null".to_string(), |value| value.to_string())
}

/// Formats the list entry of a single episode.
pub fn episode_entry(episode: &Episode) -> String {
    format!(
        "{} (Season {}, Number {})",
        or_null(episode.name.as_deref()),
        or_null(episode.season),
        or_null(episode.number)
    )
}

/// Replaces the episode list and reveals the episodes area.
///
/// The area is revealed even when `episodes` is empty.
pub fn populate_episodes(episodes_area: &mut EpisodesArea, episodes: &[Episode]) {
    episodes_area.empty();
    episodes_area.reveal();

    for episode in episodes {
        episodes_area.append(episode_entry(episode));
    }
}
