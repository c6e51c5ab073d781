//! The decorative walking character strip along the top row.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    if area.width < 4 {
        return;
    }

    let walker = &app.walker;
    let col = walker.col.min(area.width.saturating_sub(2)) as usize;

    // Two-cell sprite, legs alternating each frame.
    let sprite = match (walker.heading_right, walker.stride) {
        (true, true) => "o/",
        (true, false) => "o|",
        (false, true) => "\\o",
        (false, false) => "|o",
    };

    let style = if walker.blink > 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow).bold()
    };

    let mut spans = vec![Span::raw(" ".repeat(col))];
    spans.push(Span::styled(sprite, style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
