//! Runtime settings

use crate::metadata_retrieval::TVMAZE_API_URL;
use crate::page::SummaryMode;

/// Settings controlling where lookups go and how results are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the TVMaze API
    pub api_base_url: String,
    /// How show summaries are inserted into cards
    pub summary_mode: SummaryMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: TVMAZE_API_URL.to_string(),
            summary_mode: SummaryMode::Raw,
        }
    }
}
