//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_API_HOST;
use crate::messages::ui_events::Focus;

/// What the page below the search bar shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    Loaded {
        query: String,
        /// Two-space indented JSON
        pretty: String,
        summary: Option<String>,
        time_ms: u64,
        fetched_at: String,
    },
    Failed {
        query: String,
        message: String,
    },
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub query: String,
    pub cursor_position: usize,
    pub focus: Focus,
    pub status: ViewStatus,
    pub result_scroll: u16,
    pub show_help: bool,
    pub api_host: String,
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, ViewStatus::Loading { .. })
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            query: String::new(),
            cursor_position: 0,
            focus: Focus::Input,
            status: ViewStatus::Idle,
            result_scroll: 0,
            show_help: false,
            api_host: String::from(DEFAULT_API_HOST),
        }
    }
}
