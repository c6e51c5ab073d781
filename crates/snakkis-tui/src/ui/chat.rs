//! Scrollable chat feed — user and bot messages plus a typing hint.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use snakkis_core::ui_text;

use crate::app::{App, FeedSide};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Samtale ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.feed.is_empty() && app.pending_replies == 0 {
        let empty = Paragraph::new("Si hei! 👋")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // Build display lines from messages (bottom-up with scroll offset)
    let visible_height = inner.height as usize;
    let total = app.feed.len();
    let end = total.saturating_sub(app.scroll_offset);
    let start = end.saturating_sub(visible_height * 2); // overshoot for wrapping

    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.feed[start..end] {
        let (fg, prefix) = match entry.side {
            FeedSide::User => (Color::Blue, "du  > "),
            FeedSide::Bot => (Color::Green, "venn> "),
        };

        let mut spans = vec![Span::styled(
            format!("{} ", entry.stamp),
            Style::default().fg(Color::DarkGray),
        )];
        spans.push(Span::styled(
            format!("{}{}", prefix, entry.text),
            Style::default().fg(fg),
        ));
        lines.push(Line::from(spans));
    }

    // Typing hint while canned replies are outstanding
    if app.pending_replies > 0 && app.scroll_offset == 0 {
        lines.push(Line::styled(
            format!("      venn> {}", ui_text::TYPING_INDICATOR),
            Style::default().fg(Color::DarkGray).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
