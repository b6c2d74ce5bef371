/// Data structures and traits for TV show metadata retrieval.
///
/// This module provides the show and episode records produced by a lookup,
/// as well as the trait implemented by metadata providers.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{TVMAZE_API_URL, TvMazeProvider};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image reference used for shows the source provides no image for.
pub const BROKEN_IMG_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur during metadata retrieval operations.
#[derive(Debug, Error)]
pub enum MetadataRetrievalError {
    /// Request to the metadata provider failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The requested show does not exist
    #[error("Show not found: {0}")]
    ShowNotFound(u64),
}

/// A TV show as returned by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Identifier assigned by the metadata source
    pub id: u64,
    /// The show's display name
    pub name: String,
    /// Summary in HTML markup, if the source has one
    pub summary: Option<String>,
    /// Image URL, never empty (see [`BROKEN_IMG_URL`])
    pub image: String,
}

/// A single episode of a show.
///
/// Fields are kept as the source sent them; TVMaze leaves the number of
/// specials null, and some episodes have no title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Identifier assigned by the metadata source
    pub id: u64,
    /// The episode title
    pub name: Option<String>,
    /// The season this episode belongs to
    pub season: Option<u32>,
    /// The episode number within the season
    pub number: Option<u32>,
}

/// Trait for metadata providers that can search shows and list episodes.
///
/// Implementors perform exactly one remote request per call and hand back
/// the complete result; there is no paging, retrying or caching.
pub trait ShowProvider {
    /// Searches for shows matching a free-text term.
    ///
    /// The term is passed through unchanged and may be empty. Results keep
    /// the order the source returned them in.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, MetadataRetrievalError>;

    /// Fetches the episode list of the show with the given identifier.
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, MetadataRetrievalError>;
}
