//! # Page Info TUI
//!
//! A terminal front-end for the page info API: type a URL, press Enter, and
//! the JSON the backend returns for that page is shown pretty-printed.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (search state machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, SearchState};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent, ViewStatus};
pub use models::{FailureKind, FetchFailure, PageInfoSummary};
pub use network::{FetchError, NetworkActor, PageInfoClient};
