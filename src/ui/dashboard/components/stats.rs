//! Dashboard stats cards
//!
//! Renders total records, selected rows and the environment

use super::super::state::DashboardState;
use crate::environment::Environment;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(card, area);
}

pub fn render_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "TOTAL RECORDS",
        state.paginator.total_records.to_string(),
        Color::Cyan,
    );
    render_card(
        f,
        cards[1],
        "SELECTED ROWS",
        state.selection.len().to_string(),
        Color::LightGreen,
    );
    render_card(
        f,
        cards[2],
        "PAGE",
        format!(
            "{} / {}",
            state.paginator.current_page(),
            state.paginator.page_count()
        ),
        Color::LightYellow,
    );

    let env_color = match state.environment {
        Environment::Direct => Color::Green,
        Environment::Relay => Color::LightBlue,
        Environment::Custom { .. } => Color::Yellow,
    };
    render_card(
        f,
        cards[3],
        "SOURCE",
        state.environment.to_string(),
        env_color,
    );
}
