/// TVMaze metadata provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{BROKEN_IMG_URL, Episode, MetadataRetrievalError, Show, ShowProvider};
use reqwest::StatusCode;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default location of the TVMaze API.
pub const TVMAZE_API_URL: &str = "https://api.tvmaze.com";

/// Metadata provider for the TVMaze API.
///
/// Searches use the `/search/shows` endpoint, episode lists the
/// `/shows/:id/episodes` endpoint.
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeProvider {
    /// Creates a new TVMaze provider talking to the public API.
    pub fn new() -> Self {
        Self::with_base_url(TVMAZE_API_URL)
    }

    /// Creates a provider talking to a different API location.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the API location this provider sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Converts a TVMaze show to our internal Show structure.
    ///
    /// A missing image, or one without a usable medium URL, is replaced by
    /// the placeholder image.
    fn convert_show(tvmaze_show: TvMazeShow) -> Show {
        let image = tvmaze_show
            .image
            .and_then(|image| image.medium)
            .filter(|medium| !medium.is_empty())
            .unwrap_or_else(|| BROKEN_IMG_URL.to_string());

        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show.summary,
            image,
        }
    }

    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name,
            season: tvmaze_episode.season,
            number: tvmaze_episode.number,
        }
    }

    /// Checks the response status and parses its JSON body.
    ///
    /// Parse errors carry serde_json's message, which names the unexpected
    /// value and its line and column in the body.
    fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, MetadataRetrievalError> {
        let status = response.status();
        if !status.is_success() {
            return Err(MetadataRetrievalError::RequestError(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| MetadataRetrievalError::ParseError(e.to_string()))
    }
}

impl Default for TvMazeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowProvider for TvMazeProvider {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, MetadataRetrievalError> {
        let url = format!("{}/search/shows", self.base_url);
        debug!(%url, term, "searching shows");

        let response = self
            .client
            .get(&url)
            .query(&[("q", term)])
            .send()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        let results: Vec<TvMazeSearchResult> = Self::parse_response(response)?;
        debug!(count = results.len(), "search returned");

        Ok(results
            .into_iter()
            .map(|result| Self::convert_show(result.show))
            .collect())
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, MetadataRetrievalError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        debug!(%url, "fetching episodes");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(MetadataRetrievalError::ShowNotFound(show_id));
        }

        let episodes: Vec<TvMazeEpisode> = Self::parse_response(response)?;
        debug!(show_id, count = episodes.len(), "episodes returned");

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show_from_json(json: &str) -> Show {
        let result: TvMazeSearchResult = serde_json::from_str(json).unwrap();
        TvMazeProvider::convert_show(result.show)
    }

    #[test]
    fn test_show_without_image_uses_placeholder() {
        let show = show_from_json(
            r#"{"score": 0.9, "show": {"id": 1, "name": "Batman", "summary": null, "image": null}}"#,
        );

        assert_eq!(show.id, 1);
        assert_eq!(show.name, "Batman");
        assert_eq!(show.summary, None);
        assert_eq!(show.image, BROKEN_IMG_URL);
    }

    #[test]
    fn test_show_with_missing_image_field_uses_placeholder() {
        let show = show_from_json(r#"{"show": {"id": 1, "name": "Batman", "summary": ""}}"#);
        assert_eq!(show.image, BROKEN_IMG_URL);
        assert_eq!(show.summary.as_deref(), Some(""));
    }

    #[test]
    fn test_show_with_empty_medium_uses_placeholder() {
        let show = show_from_json(
            r#"{"show": {"id": 2, "name": "X", "summary": null, "image": {"medium": "", "original": "o.jpg"}}}"#,
        );
        assert_eq!(show.image, BROKEN_IMG_URL);
    }

    #[test]
    fn test_show_keeps_medium_image_and_summary() {
        let show = show_from_json(
            r#"{"show": {
                "id": 1767,
                "name": "The Bletchley Circle",
                "summary": "<p><b>The Bletchley Circle</b> follows four women.</p>",
                "image": {
                    "medium": "http://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg",
                    "original": "http://static.tvmaze.com/uploads/images/original_untouched/147/369403.jpg"
                }
            }}"#,
        );

        assert_eq!(
            show.image,
            "http://static.tvmaze.com/uploads/images/medium_portrait/147/369403.jpg"
        );
        assert_eq!(
            show.summary.as_deref(),
            Some("<p><b>The Bletchley Circle</b> follows four women.</p>")
        );
    }

    #[test]
    fn test_convert_episode_is_verbatim() {
        let episode: TvMazeEpisode = serde_json::from_str(
            r#"{"id": 10, "name": "Pilot", "season": 1, "number": 1, "airdate": "2020-01-01"}"#,
        )
        .unwrap();

        assert_eq!(
            TvMazeProvider::convert_episode(episode),
            Episode {
                id: 10,
                name: Some("Pilot".to_string()),
                season: Some(1),
                number: Some(1),
            }
        );
    }

    #[test]
    fn test_special_without_number_is_kept() {
        let episode: TvMazeEpisode = serde_json::from_str(
            r#"{"id": 11, "name": "Christmas Special", "season": 1, "number": null}"#,
        )
        .unwrap();

        assert_eq!(
            TvMazeProvider::convert_episode(episode),
            Episode {
                id: 11,
                name: Some("Christmas Special".to_string()),
                season: Some(1),
                number: None,
            }
        );
    }

    #[test]
    fn test_untitled_episode_keeps_null_name() {
        let episode: TvMazeEpisode =
            serde_json::from_str(r#"{"id": 12, "name": null, "season": 2, "number": 3}"#).unwrap();

        assert_eq!(TvMazeProvider::convert_episode(episode).name, None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider = TvMazeProvider::with_base_url("http://localhost:1234/");
        assert_eq!(provider.base_url(), "http://localhost:1234");
        assert_eq!(TvMazeProvider::new().base_url(), TVMAZE_API_URL);
    }
}
