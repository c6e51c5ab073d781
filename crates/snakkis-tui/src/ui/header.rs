//! Header bar — the fixed greeting on a flag-red band.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use snakkis_core::ui_text;

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Red));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {}", ui_text::HEADER_TITLE),
            Style::default().fg(Color::White).bold(),
        ),
        Span::raw("  🏆"),
    ]))
    .style(Style::default().bg(Color::Red));
    frame.render_widget(title, inner);
}
