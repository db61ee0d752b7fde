//! Dashboard main renderer

use super::components::{alert, footer, header, logs, selection_bar, stats, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let banner_height = if state.error.is_some() { 3 } else { 0 };
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    stats::render_stats(f, main_chunks[1], state);
    if let Some(message) = &state.error {
        selection_bar::render_error_banner(f, main_chunks[2], message);
    }
    selection_bar::render_selection_bar(f, main_chunks[3], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(main_chunks[4]);

    table::render_table(f, content_chunks[0], state);
    logs::render_logs_panel(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[5], state);

    if let Some(message) = &state.alert {
        alert::render_alert(f, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArtworkPage;
    use crate::catalog::types::PaginationInfo;
    use crate::consts::cli_consts::{FETCH_FAILED_MESSAGE, INVALID_COUNT_MESSAGE};
    use crate::environment::Environment;
    use crate::selection::tests::artworks;
    use crate::ui::app::UIConfig;
    use crate::workers::{FetchResponse, PageRequest};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(Environment::Direct, UIConfig::new(true));
        let request: PageRequest = state.start_page(5);
        state.apply_fetch_response(FetchResponse {
            request,
            result: Ok(ArtworkPage {
                pagination: PaginationInfo {
                    total: 5000,
                    limit: 12,
                    ..PaginationInfo::default()
                },
                data: artworks(49..=60),
            }),
        });
        state
    }

    #[test]
    fn test_renders_rows_totals_and_paginator() {
        let mut state = loaded_state();
        state.toggle_cursor_row();
        let text = screen_text(&state);

        assert!(text.contains("Artwork 49"));
        assert!(text.contains("Artwork 60"));
        assert!(text.contains("5000"));
        assert!(text.contains("Page 5 of 417 (records 49-60 of 5000)"));
        assert!(text.contains("[x]"));
        assert!(text.contains("[-]"));
    }

    #[test]
    fn test_renders_empty_message() {
        let state = DashboardState::new(Environment::Direct, UIConfig::new(false));
        assert!(screen_text(&state).contains("No artworks found."));
    }

    #[test]
    fn test_renders_error_banner_and_alert() {
        let mut state = loaded_state();
        state.error = Some(FETCH_FAILED_MESSAGE.to_string());
        state.alert = Some(INVALID_COUNT_MESSAGE.to_string());
        let text = screen_text(&state);

        assert!(text.contains(FETCH_FAILED_MESSAGE));
        assert!(text.contains(INVALID_COUNT_MESSAGE));
        assert!(text.contains("INVALID INPUT"));
    }
}
