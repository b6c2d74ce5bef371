//! Search and episode pipelines
//!
//! [`ShowFinder`] owns the page and a metadata provider and wires the two
//! page events to their pipelines: a search submission runs show lookup and
//! show rendering, an "Episodes" click runs episode lookup and episode
//! rendering. Lookups run without holding the page lock; rendering takes
//! it. Progress callbacks run with the page unlocked.

use crate::config::Settings;
use crate::fence::RequestFence;
use crate::metadata_retrieval::{ShowProvider, TvMazeProvider};
use crate::page::{
    ClickEvent, Page, SearchSubmit, SummaryMode, delegate_click, populate_episodes,
    populate_shows,
};
use crate::{Pipeline, PipelineOutcome, ProgressEvent, ShowFinderError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Drives the show search and episode listing pipelines for one page.
pub struct ShowFinder<P>
where
    P: ShowProvider,
{
    provider: P,
    summary_mode: SummaryMode,
    page: Mutex<Page>,
    search_fence: RequestFence,
    episodes_fence: RequestFence,
}

impl ShowFinder<TvMazeProvider> {
    /// Creates a finder backed by TVMaze, configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            TvMazeProvider::with_base_url(settings.api_base_url.as_str()),
            settings.summary_mode,
        )
    }
}

impl<P> ShowFinder<P>
where
    P: ShowProvider,
{
    /// Creates a finder with an empty page.
    pub fn new(provider: P, summary_mode: SummaryMode) -> Self {
        Self {
            provider,
            summary_mode,
            page: Mutex::new(Page::new()),
            search_fence: RequestFence::new(),
            episodes_fence: RequestFence::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Locks and returns the page.
    pub fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handles a search form submission.
    ///
    /// The episodes area is hidden before the lookup starts, and episode
    /// requests still in flight are superseded, so episodes of a previously
    /// selected show never appear next to the new results.
    pub fn submit_search<F>(
        &self,
        submit: &SearchSubmit,
        mut progress: F,
    ) -> Result<PipelineOutcome, ShowFinderError>
    where
        F: FnMut(ProgressEvent),
    {
        progress(ProgressEvent::SearchStarted {
            term: submit.term.clone(),
        });

        let token = self.search_fence.issue();
        self.episodes_fence.issue();
        self.page().episodes_area.hide();

        let shows = self.provider.search_shows(&submit.term)?;

        {
            let mut page = self.page();
            if !self.search_fence.is_current(token) {
                drop(page);
                warn!(token = token.value(), term = %submit.term, "dropping stale search response");
                progress(ProgressEvent::StaleResponse {
                    pipeline: Pipeline::ShowSearch,
                });
                return Ok(PipelineOutcome::Stale);
            }
            populate_shows(&mut page.shows_list, &shows, self.summary_mode);
        }
        debug!(count = shows.len(), "rendered shows");

        progress(ProgressEvent::ShowsRendered { count: shows.len() });
        Ok(PipelineOutcome::Rendered { count: shows.len() })
    }

    /// Handles a click anywhere inside the shows list.
    ///
    /// Returns `Ok(None)` if the click was not on an "Episodes" button of a
    /// rendered card.
    pub fn click<F>(
        &self,
        event: &ClickEvent,
        progress: F,
    ) -> Result<Option<PipelineOutcome>, ShowFinderError>
    where
        F: FnMut(ProgressEvent),
    {
        let show_id = delegate_click(&self.page().shows_list, event);

        match show_id {
            Some(show_id) => self.show_episodes(show_id, progress).map(Some),
            None => {
                debug!(?event, "click not dispatched");
                Ok(None)
            }
        }
    }

    /// Fetches the episodes of a show and renders them into the episodes area.
    pub fn show_episodes<F>(
        &self,
        show_id: u64,
        mut progress: F,
    ) -> Result<PipelineOutcome, ShowFinderError>
    where
        F: FnMut(ProgressEvent),
    {
        progress(ProgressEvent::EpisodesRequested { show_id });

        let token = self.episodes_fence.issue();
        let episodes = self.provider.fetch_episodes(show_id)?;

        {
            let mut page = self.page();
            if !self.episodes_fence.is_current(token) {
                drop(page);
                warn!(token = token.value(), show_id, "dropping stale episodes response");
                progress(ProgressEvent::StaleResponse {
                    pipeline: Pipeline::EpisodeListing,
                });
                return Ok(PipelineOutcome::Stale);
            }
            populate_episodes(&mut page.episodes_area, &episodes);
        }
        debug!(show_id, count = episodes.len(), "rendered episodes");

        progress(ProgressEvent::EpisodesRendered {
            show_id,
            count: episodes.len(),
        });
        Ok(PipelineOutcome::Rendered {
            count: episodes.len(),
        })
    }
}
