//! Text input bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use snakkis_core::ui_text;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.input_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Melding (Enter sender, Tab bytter fokus) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = if app.input.is_empty() {
        Paragraph::new(ui_text::INPUT_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.input.as_str()).style(Style::default().fg(Color::White))
    };
    frame.render_widget(input, inner);

    // Show cursor
    if app.input_focused {
        frame.set_cursor_position(Position::new(
            inner.x + app.input.chars().count() as u16,
            inner.y,
        ));
    }
}
