//! Dashboard footer component
//!
//! Renders the key bindings

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = match state.input_mode {
        InputMode::Table => {
            "[↑↓] Move  [Space] Toggle  [A] Toggle page  [←→] Page  [N] Select first N  [C] Clear  [Q] Quit"
        }
        InputMode::EditingCount => "[0-9] Type N  [Enter] Apply  [Esc] Back to table",
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
