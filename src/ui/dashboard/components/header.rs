//! Dashboard header component
//!
//! Renders the title and the loading gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and fetch progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(
        "ART INSTITUTE DASHBOARD v{} - server-side pagination with persistent row selection",
        version
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let page = state.paginator.current_page();
    let (progress_text, gauge_color, progress_percent) = if state.loading {
        // Animated loading gauge - loops every 20 ticks
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            format!("LOADING - Fetching page {}", page),
            Color::LightBlue,
            progress,
        )
    } else if state.error.is_some() {
        (
            format!("FAILED - Page {} could not be loaded", page),
            Color::LightRed,
            100,
        )
    } else {
        (
            format!("READY - Showing page {}", state.displayed_page.unwrap_or(page)),
            Color::LightGreen,
            100,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
