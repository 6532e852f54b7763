//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        api_host: impl Into<String>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(api_host),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Query editing
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::Delete => self.state.delete_char_forward(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::CursorHome => self.state.move_cursor_home(),
            UiEvent::CursorEnd => self.state.move_cursor_end(),

            UiEvent::Search(trigger) => {
                if let Some(cmd) = self.state.trigger_search(trigger) {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Focus
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),

            // Scrolling
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),
            UiEvent::PageUp => self.state.page_up(),
            UiEvent::PageDown => self.state.page_down(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::Trigger;
    use crate::messages::ViewStatus;
    use crate::models::{FailureKind, FetchFailure};
    use serde_json::json;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    impl Harness {
        fn start() -> Self {
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
            let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();
            let actor = AppActor::new("http://api.test", net_cmd_tx, render_tx);
            tokio::spawn(actor.run(ui_rx, net_resp_rx));
            Harness { ui_tx, net_resp_tx, net_cmd_rx, render_rx }
        }

        fn type_text(&self, text: &str) {
            for c in text.chars() {
                self.ui_tx.send(UiEvent::CharInput(c)).unwrap();
            }
        }

        /// Render state after `n` more updates
        async fn render_after(&mut self, n: usize) -> RenderState {
            let mut last = None;
            for _ in 0..n {
                last = self.render_rx.recv().await;
            }
            last.unwrap()
        }
    }

    #[tokio::test]
    async fn test_search_round_trip() {
        let mut h = Harness::start();
        let initial = h.render_after(1).await;
        assert_eq!(initial.status, ViewStatus::Idle);
        assert_eq!(initial.api_host, "http://api.test");

        h.type_text("https://example.com");
        let typed = h.render_after("https://example.com".len()).await;
        assert_eq!(typed.query, "https://example.com");

        h.ui_tx.send(UiEvent::Search(Trigger::EnterKey)).unwrap();
        let loading = h.render_after(1).await;
        assert!(loading.is_loading());

        let cmd = h.net_cmd_rx.recv().await.unwrap();
        assert_eq!(
            cmd,
            NetworkCommand::FetchPageInfo { id: 1, target: "https://example.com".to_string() }
        );

        h.net_resp_tx
            .send(NetworkResponse::Loaded { id: 1, payload: json!({"title": "Example"}), time_ms: 5 })
            .unwrap();
        let done = h.render_after(1).await;
        assert!(!done.is_loading());
        match done.status {
            ViewStatus::Loaded { pretty, .. } => assert_eq!(pretty, "{\n  \"title\": \"Example\"\n}"),
            other => panic!("unexpected status {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_network_error_leaves_no_result() {
        let mut h = Harness::start();
        h.render_after(1).await;

        h.ui_tx.send(UiEvent::Search(Trigger::Click)).unwrap();
        h.render_after(1).await;
        let cmd = h.net_cmd_rx.recv().await.unwrap();
        assert_eq!(cmd, NetworkCommand::FetchPageInfo { id: 1, target: String::new() });

        h.net_resp_tx
            .send(NetworkResponse::Failed {
                id: 1,
                failure: FetchFailure { kind: FailureKind::Transport, message: "down".to_string() },
                time_ms: 1,
            })
            .unwrap();
        let done = h.render_after(1).await;
        assert!(!done.is_loading());
        assert!(matches!(done.status, ViewStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn test_rapid_enter_presses_issue_one_request() {
        let mut h = Harness::start();
        h.render_after(1).await;

        h.type_text("a");
        for _ in 0..5 {
            h.ui_tx.send(UiEvent::Search(Trigger::EnterKey)).unwrap();
        }
        let state = h.render_after(6).await;
        assert!(state.is_loading());

        assert!(matches!(h.net_cmd_rx.recv().await, Some(NetworkCommand::FetchPageInfo { id: 1, .. })));
        assert!(h.net_cmd_rx.try_recv().is_err());

        h.net_resp_tx
            .send(NetworkResponse::Loaded { id: 1, payload: json!(null), time_ms: 1 })
            .unwrap();
        let done = h.render_after(1).await;
        assert!(!done.is_loading());
    }

    #[tokio::test]
    async fn test_quit_shuts_down_network() {
        let mut h = Harness::start();
        h.render_after(1).await;
        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
    }
}
