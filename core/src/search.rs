//! Simulated location search.
//!
//! No geocoder is called. Any non-empty query "finds" the configured target
//! viewport.

use serde::{Deserialize, Serialize};

use crate::error::DrishtiError;
use crate::geo::Viewport;
use crate::time::{Timer, millis};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Where every search lands. New Delhi by default.
    pub target: Viewport,
    pub search_delay_ms: u32,
    pub navigate_delay_ms: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            target: Viewport::new(28.6139, 77.2090, 10),
            search_delay_ms: 1000,
            navigate_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Searching { query: String },
    Found { query: String },
    /// Close the dialog; the map recenters right after.
    Closed,
}

impl SearchStatus {
    pub fn message(&self) -> String {
        match self {
            Self::Searching { query } => format!("Searching for \"{query}\"..."),
            Self::Found { .. } => "Location found! Navigating...".to_string(),
            Self::Closed => String::new(),
        }
    }
}

pub async fn run_search<T: Timer>(
    timer: &T,
    settings: &SearchSettings,
    query: &str,
    mut on_status: impl FnMut(SearchStatus),
) -> Result<Viewport, DrishtiError> {
    if query.is_empty() {
        return Err(DrishtiError::EmptySearchQuery);
    }
    tracing::info!(query, "searching location");

    on_status(SearchStatus::Searching {
        query: query.to_string(),
    });
    timer.sleep(millis(settings.search_delay_ms)).await;
    on_status(SearchStatus::Found {
        query: query.to_string(),
    });
    timer.sleep(millis(settings.navigate_delay_ms)).await;
    on_status(SearchStatus::Closed);

    Ok(settings.target)
}
