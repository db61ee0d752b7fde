//! "Select first N" field and the fetch error banner

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_selection_bar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let editing = state.input_mode == InputMode::EditingCount;
    let field_style = if editing {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let field = if state.select_count_input.is_empty() && !editing {
        "Select first N rows".to_string()
    } else if editing {
        format!("{}_", state.select_count_input)
    } else {
        state.select_count_input.clone()
    };

    let line = Line::from(vec![
        Span::styled("N: ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {:<20}", field), field_style),
        Span::raw("  "),
        Span::styled(
            "[Enter] Apply",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "[C] Clear",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let border_color = if editing { Color::LightYellow } else { Color::DarkGray };
    let bar = Paragraph::new(line).block(
        Block::default()
            .title("BULK SELECT")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(bar, area);
}

pub fn render_error_banner(f: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(message.to_string())
        .style(
            Style::default()
                .fg(Color::Rgb(153, 27, 27))
                .bg(Color::Rgb(254, 226, 226))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(banner, area);
}
