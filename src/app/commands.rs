//! Command handlers - business logic for processing UI events

use chrono::Local;

use crate::app::state::SearchState;
use crate::app::AppState;
use crate::messages::ui_events::Trigger;
use crate::messages::{NetworkCommand, NetworkResponse};

const PAGE_SCROLL: u16 = 10;

impl AppState {
    // ========================
    // Query editing
    // ========================

    pub fn enter_char(&mut self, c: char) {
        if self.cursor_position <= self.query.len() {
            self.query.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.query[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.query.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor_position < self.query.len() {
            self.query.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.query[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.query.len() {
            self.cursor_position = self.query[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.query.len();
    }

    // ========================
    // Search lifecycle
    // ========================

    /// Start a search for the current query.
    ///
    /// Rejected while another search is in flight, whichever control fired.
    /// On success the previous result is dropped before the command is
    /// returned, so nothing stale is ever shown next to the busy state.
    pub fn trigger_search(&mut self, trigger: Trigger) -> Option<NetworkCommand> {
        if let Some(pending) = self.search.pending_id() {
            tracing::debug!(pending, trigger = trigger.as_str(), "Search already in flight, ignoring trigger");
            return None;
        }

        let id = self.next_id();
        let target = self.query.clone();
        tracing::info!(id, target = %target, trigger = trigger.as_str(), "Starting search");

        self.search = SearchState::Loading {
            id,
            query: target.clone(),
        };
        self.result_scroll = 0;

        Some(NetworkCommand::FetchPageInfo { id, target })
    }

    /// Apply a network response, ignoring anything that is not the in-flight request
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        let query = match &self.search {
            SearchState::Loading { id: pending, query } if *pending == id => query.clone(),
            _ => {
                tracing::debug!(id, "Dropping stale response");
                return;
            }
        };

        self.search = match response {
            NetworkResponse::Loaded { payload, time_ms, .. } => {
                tracing::info!(id, time_ms, "Search loaded");
                SearchState::Loaded {
                    query,
                    payload,
                    time_ms,
                    fetched_at: Local::now(),
                }
            }
            NetworkResponse::Failed { failure, time_ms, .. } => {
                tracing::error!(id, time_ms, query = %query, kind = failure.kind.as_str(), error = %failure.message, "Search failed");
                SearchState::Failed { query, error: failure }
            }
        };
    }

    // ========================
    // Focus & scrolling
    // ========================

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.search.payload().is_some() {
            self.result_scroll = self.result_scroll.saturating_add(1);
        }
    }

    pub fn page_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(PAGE_SCROLL);
    }

    pub fn page_down(&mut self) {
        if self.search.payload().is_some() {
            self.result_scroll = self.result_scroll.saturating_add(PAGE_SCROLL);
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
