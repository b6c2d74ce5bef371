//! showfinder - Search TV shows and list their episodes
//!
//! This library looks up TV shows on TVMaze, renders the results as show
//! cards into an in-memory page, and on request fetches and renders the
//! episode list of a selected show.

mod app;
mod config;
mod fence;
mod metadata_retrieval;
mod page;

pub use app::ShowFinder;
pub use config::Settings;
pub use fence::{RequestFence, RequestToken};
pub use metadata_retrieval::{
    BROKEN_IMG_URL, Episode, MetadataRetrievalError, Show, ShowProvider, TVMAZE_API_URL,
    TvMazeProvider,
};
pub use page::{
    CardElement, ClickEvent, EpisodesArea, Page, SearchSubmit, ShowCard, ShowsList, SummaryMode,
    delegate_click, episode_entry, populate_episodes, populate_shows,
};

use std::io;
use thiserror::Error;

/// The two pipelines driven by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Search form submission: look up shows and render cards
    ShowSearch,
    /// "Episodes" button: look up and render a show's episodes
    EpisodeListing,
}

/// Progress event emitted while a pipeline runs
///
/// These events allow library users to report what is happening, or to
/// remain silent.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A search was submitted
    SearchStarted { term: String },

    /// Search results were rendered into the shows list
    ShowsRendered { count: usize },

    /// Episodes of a show were requested
    EpisodesRequested { show_id: u64 },

    /// The episode list was rendered and revealed
    EpisodesRendered { show_id: u64, count: usize },

    /// A response arrived after a newer request of the same pipeline was
    /// started and was dropped
    StaleResponse { pipeline: Pipeline },
}

/// Result of a pipeline run that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The response was rendered with this many entries
    Rendered { count: usize },
    /// The response was superseded by a newer request and dropped
    Stale,
}

/// Top-level error type for showfinder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error during metadata retrieval
    #[error("Metadata retrieval error: {0}")]
    MetadataRetrieval(#[from] MetadataRetrievalError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
