//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::messages::ui_events::Focus;
use crate::messages::{RenderState, ViewStatus};
use crate::models::{FetchFailure, PageInfoSummary};

/// Where the current (or last) search stands.
///
/// Each variant carries the query it was started with, so the result on
/// screen always names what it answers even after the input is edited.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        id: u64,
        query: String,
    },
    Loaded {
        query: String,
        payload: serde_json::Value,
        time_ms: u64,
        fetched_at: DateTime<Local>,
    },
    Failed {
        query: String,
        error: FetchFailure,
    },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    /// Id of the in-flight request, if any
    pub fn pending_id(&self) -> Option<u64> {
        match self {
            SearchState::Loading { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The last successful payload, only while it is on screen
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            SearchState::Loaded { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        match self {
            SearchState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    fn to_view_status(&self) -> ViewStatus {
        match self {
            SearchState::Idle => ViewStatus::Idle,
            SearchState::Loading { query, .. } => ViewStatus::Loading { query: query.clone() },
            SearchState::Loaded { query, payload, time_ms, fetched_at } => ViewStatus::Loaded {
                query: query.clone(),
                pretty: serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
                summary: PageInfoSummary::from_payload(payload).map(|s| s.one_line()),
                time_ms: *time_ms,
                fetched_at: fetched_at.format("%H:%M:%S").to_string(),
            },
            SearchState::Failed { query, error } => ViewStatus::Failed {
                query: query.clone(),
                message: error.to_string(),
            },
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Query input
    pub query: String,
    pub cursor_position: usize,

    // Search lifecycle
    pub search: SearchState,
    pub next_request_id: u64,

    // UI state
    pub focus: Focus,
    pub result_scroll: u16,
    pub show_help: bool,

    // Shown in the status bar
    pub api_host: String,
}

impl AppState {
    pub fn new(api_host: impl Into<String>) -> Self {
        AppState {
            query: String::new(),
            cursor_position: 0,
            search: SearchState::Idle,
            next_request_id: 1,
            focus: Focus::Input,
            result_scroll: 0,
            show_help: false,
            api_host: api_host.into(),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn is_loading(&self) -> bool {
        self.search.is_loading()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            query: self.query.clone(),
            cursor_position: self.cursor_position,
            focus: self.focus,
            status: self.search.to_view_status(),
            result_scroll: self.result_scroll,
            show_help: self.show_help,
            api_host: self.api_host.clone(),
        }
    }
}
