//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// What the user did to start a search
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trigger {
    /// Enter pressed inside the query input
    EnterKey,
    /// Enter or Space on the focused Search button
    Button,
    /// Left click on the Search button
    Click,
}

impl Trigger {
    pub fn as_str(&self) -> &str {
        match self {
            Trigger::EnterKey => "enter",
            Trigger::Button => "button",
            Trigger::Click => "click",
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Query editing
    CharInput(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Search
    Search(Trigger),

    // Focus
    NextFocus,
    PrevFocus,

    // Result scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Which control has keyboard focus
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    #[default]
    Input,
    Button,
    Result,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Result,
            Focus::Result => Focus::Input,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Input => Focus::Result,
            Focus::Button => Focus::Input,
            Focus::Result => Focus::Button,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context.
///
/// `is_loading` disables the Search button, the same way a disabled form
/// control swallows activation. Enter inside the input is still forwarded;
/// the app layer decides whether a search may start.
pub fn key_to_ui_event(key: KeyEvent, focus: Focus, is_loading: bool, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            KeyCode::Char('a') if focus == Focus::Input => Some(UiEvent::CursorHome),
            KeyCode::Char('e') if focus == Focus::Input => Some(UiEvent::CursorEnd),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Tab => return Some(UiEvent::NextFocus),
        KeyCode::BackTab => return Some(UiEvent::PrevFocus),
        KeyCode::F(1) => return Some(UiEvent::ToggleHelp),
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(UiEvent::Search(Trigger::EnterKey)),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Delete => Some(UiEvent::Delete),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Home => Some(UiEvent::CursorHome),
            KeyCode::End => Some(UiEvent::CursorEnd),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
        Focus::Button => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !is_loading => Some(UiEvent::Search(Trigger::Button)),
            KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            _ => None,
        },
        Focus::Result => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
            KeyCode::PageUp => Some(UiEvent::PageUp),
            KeyCode::PageDown => Some(UiEvent::PageDown),
            KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            _ => None,
        },
    }
}

/// Convert a mouse event. `button_area` is where the Search button was last drawn.
pub fn mouse_to_ui_event(mouse: MouseEvent, button_area: Rect, is_loading: bool, show_help: bool) -> Option<UiEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if show_help => Some(UiEvent::CloseHelp),
        MouseEventKind::Down(MouseButton::Left)
            if !is_loading && button_area.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(UiEvent::Search(Trigger::Click))
        }
        MouseEventKind::ScrollUp => Some(UiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_in_input_triggers_even_while_loading() {
        for loading in [false, true] {
            assert_eq!(
                key_to_ui_event(press(KeyCode::Enter), Focus::Input, loading, false),
                Some(UiEvent::Search(Trigger::EnterKey))
            );
        }
    }

    #[test]
    fn test_disabled_button_swallows_activation() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), Focus::Button, false, false),
            Some(UiEvent::Search(Trigger::Button))
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), Focus::Button, true, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char(' ')), Focus::Button, true, false), None);
    }

    #[test]
    fn test_input_takes_every_printable_char() {
        for c in ['q', '?', 'j', ' ', 'é'] {
            assert_eq!(
                key_to_ui_event(press(KeyCode::Char(c)), Focus::Input, false, false),
                Some(UiEvent::CharInput(c))
            );
        }
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [Focus::Input, Focus::Button, Focus::Result] {
            assert_eq!(key_to_ui_event(key, focus, false, true), Some(UiEvent::Quit));
        }
    }

    #[test]
    fn test_help_popup_eats_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), Focus::Input, false, true),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, Focus::Input, false, false), None);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Input.next().next().next(), Focus::Input);
        assert_eq!(Focus::Input.prev(), Focus::Result);
        assert_eq!(Focus::Button.prev(), Focus::Input);
    }

    #[test]
    fn test_click_on_button() {
        let button = Rect::new(40, 2, 12, 3);
        assert_eq!(
            mouse_to_ui_event(click(45, 3), button, false, false),
            Some(UiEvent::Search(Trigger::Click))
        );
        assert_eq!(mouse_to_ui_event(click(45, 3), button, true, false), None);
        assert_eq!(mouse_to_ui_event(click(10, 3), button, false, false), None);
    }
}
