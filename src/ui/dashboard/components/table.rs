//! Artworks table component
//!
//! Renders the displayed page with checkbox column and the paginator bar

use super::super::state::DashboardState;
use super::super::utils::{cell_text, year_text};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState,
};

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const PARTIAL: &str = "[-]";

/// Header checkbox: all, some or none of the displayed rows selected.
fn header_checkbox(state: &DashboardState) -> &'static str {
    let checked = state.selection.checked_on(&state.artworks).len();
    match checked {
        0 => UNCHECKED,
        n if n == state.artworks.len() => CHECKED,
        _ => PARTIAL,
    }
}

fn table_block(state: &DashboardState) -> Block<'static> {
    let title = if state.loading {
        "ARTWORKS (loading...)"
    } else {
        "ARTWORKS"
    };
    let mut paginator = state.paginator.summary();
    if let Some(shown) = state.displayed_page {
        if shown != state.paginator.current_page() {
            paginator.push_str(&format!(" | showing page {}", shown));
        }
    }
    Block::default()
        .title(title)
        .title_bottom(Line::from(format!(" ◀ {} ▶ ", paginator)).alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn render_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = table_block(state);

    if state.artworks.is_empty() {
        let message = if state.loading {
            "Loading artworks..."
        } else {
            "No artworks found."
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block.padding(Padding::top(1)));
        f.render_widget(empty, area);
        return;
    }

    // Rough column budgets for the text columns; ratatui clips whatever is left over.
    let inner_width = area.width.saturating_sub(2) as usize;
    let title_width = inner_width * 35 / 100;
    let origin_width = inner_width * 15 / 100;
    let artist_width = inner_width * 30 / 100;

    let header_style = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(header_checkbox(state)),
        Cell::from("Title"),
        Cell::from("Origin"),
        Cell::from("Artist"),
        Cell::from("Start Year"),
        Cell::from("End Year"),
    ])
    .style(header_style)
    .bottom_margin(1);

    let rows = state.artworks.iter().map(|artwork| {
        let checked = state.is_checked(artwork);
        let row_style = if checked {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new(vec![
            Cell::from(if checked { CHECKED } else { UNCHECKED }),
            Cell::from(cell_text(artwork.title.as_deref(), title_width)),
            Cell::from(cell_text(artwork.place_of_origin.as_deref(), origin_width)),
            Cell::from(cell_text(artwork.artist_display.as_deref(), artist_width)),
            Cell::from(year_text(artwork.date_start)),
            Cell::from(year_text(artwork.date_end)),
        ])
        .style(row_style)
    });

    let widths = [
        Constraint::Length(3),
        Constraint::Percentage(35),
        Constraint::Percentage(15),
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::Rgb(40, 44, 64)).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(table, area, &mut table_state);
}
