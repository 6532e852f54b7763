//! Terminal rendering - draws a `RenderState` into a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, QUERY_PLACEHOLDER};
use crate::messages::ui_events::Focus;
use crate::messages::{RenderState, ViewStatus};

const BUTTON_WIDTH: u16 = 12;

/// Draw the whole page. Returns where the Search button landed, for mouse hit testing.
pub fn draw_ui(f: &mut Frame, state: &RenderState) -> Rect {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Query + button
            Constraint::Min(0),    // Result
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )));
    f.render_widget(title, chunks[0]);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(chunks[1]);

    draw_query_input(f, state, search_row[0]);
    draw_search_button(f, state, search_row[1]);
    draw_result(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    search_row[1]
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_query_input(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Input;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_focused))
        .title(" URL ");

    let inner_width = usize::from(area.width.saturating_sub(2));
    let chars_before = state.query[..state.cursor_position.min(state.query.len())].chars().count();
    // First visible char, keeping the cursor cell inside the box
    let offset = chars_before.saturating_sub(inner_width.saturating_sub(1));

    let content = if state.query.is_empty() {
        Line::from(Span::styled(QUERY_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(state.query.chars().skip(offset).take(inner_width).collect::<String>())
    };
    f.render_widget(Paragraph::new(content).block(block), area);

    if is_focused && !state.show_help {
        let column = u16::try_from(chars_before - offset).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let cursor_x = area.x.saturating_add(1).saturating_add(column).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y.saturating_add(1)));
    }
}

fn draw_search_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Button;

    let (label_style, border_style) = if state.is_loading() {
        let dim = Style::default().fg(Color::DarkGray);
        (dim, dim)
    } else if is_focused {
        (Style::default().fg(Color::Black).bg(Color::Yellow).bold(), focus_style(true))
    } else {
        (Style::default().fg(Color::Cyan).bold(), Style::default())
    };

    let button = Paragraph::new(Span::styled("Search", label_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(button, area);
}

fn draw_result(f: &mut Frame, state: &RenderState, area: Rect) {
    match &state.status {
        ViewStatus::Idle | ViewStatus::Loading { .. } | ViewStatus::Failed { .. } => {}
        ViewStatus::Loaded { query, pretty, summary, time_ms, fetched_at } => {
            let title = match summary {
                Some(summary) => format!(" {} ", summary),
                None => format!(" {} ", query),
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(state.focus == Focus::Result))
                .title(title)
                .title_bottom(Line::from(format!(" {}ms @ {} ", time_ms, fetched_at)).right_aligned());

            let result = Paragraph::new(highlight_json(pretty))
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((state.result_scroll, 0));
            f.render_widget(result, area);
        }
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match (&state.status, state.focus) {
        (ViewStatus::Loading { .. }, _) => Span::raw(" Loading... "),
        (ViewStatus::Failed { message, .. }, _) => {
            Span::styled(format!(" No result: {} ", message), Style::default().fg(Color::Red))
        }
        (_, Focus::Input) => Span::raw(" Enter:search | Tab:next | F1:help | Ctrl+C:quit "),
        (_, Focus::Button) => Span::raw(" Enter/Space:search | Tab:next | ?:help | q:quit "),
        (_, Focus::Result) => Span::raw(" ↑/↓ PgUp/PgDn:scroll | Tab:next | ?:help | q:quit "),
    };

    let bar = Paragraph::new(Line::from(vec![
        hints,
        Span::styled(format!("[{}]", state.api_host), Style::default().fg(Color::Cyan)),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 PAGE INFO - Keyboard Shortcuts

 SEARCH
   Enter              Search (in the URL field)
   Enter / Space      Search (on the button)
   Mouse click        Search (on the button)

 EDITING
   ← / →              Move cursor
   Home / End         Start / end of line
   Backspace / Del    Delete

 NAVIGATION
   Tab / Shift+Tab    Cycle URL / button / result
   ↑ / ↓              Scroll result
   PgUp / PgDn        Scroll result by a page

 GENERAL
   F1 / ?             Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// JSON syntax highlighting, one `Line` per input line
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        let c = chars[i];
        match c {
            '"' => {
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(chars.len());
                let is_key = chars[i..].iter().find(|c| !c.is_whitespace()) == Some(&':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                spans.push(styled(&chars[start..i], color));
            }
            '{' | '}' | '[' | ']' => {
                i += 1;
                spans.push(styled(&chars[start..i], Color::Yellow));
            }
            '-' | '0'..='9' => {
                while i < chars.len() && matches!(chars[i], '-' | '+' | '.' | 'e' | 'E' | '0'..='9') {
                    i += 1;
                }
                spans.push(styled(&chars[start..i], Color::LightBlue));
            }
            c if c.is_ascii_alphabetic() => {
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if matches!(word.as_str(), "true" | "false" | "null") {
                    spans.push(Span::styled(word, Style::default().fg(Color::Magenta)));
                } else {
                    spans.push(Span::raw(word));
                }
            }
            _ => {
                while i < chars.len() && !matches!(chars[i], '"' | '{' | '}' | '[' | ']' | '-' | '0'..='9')
                    && !chars[i].is_ascii_alphabetic()
                {
                    i += 1;
                }
                spans.push(Span::raw(chars[start..i].iter().collect::<String>()));
            }
        }
    }

    Line::from(spans)
}

fn styled(chars: &[char], color: Color) -> Span<'static> {
    Span::styled(chars.iter().collect::<String>(), Style::default().fg(color))
}
