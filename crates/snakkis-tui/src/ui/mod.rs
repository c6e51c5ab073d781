//! TUI layout compositing — assembles all UI panels.

mod character;
mod chat;
mod header;
mod input;
mod topics;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use snakkis_core::ui_text;

use crate::app::App;

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // ┌──────────────────────────────────┐
    // │ Walking character strip          │
    // ├──────────────────────────────────┤
    // │ Header (flag-red greeting)       │
    // ├──────────┬──────────┬────────────┤
    // │  Topic   │  Topic   │  Topic     │
    // ├──────────┴──────────┴────────────┤
    // │ Chat feed                        │
    // │                                  │
    // ├──────────────────────────────────┤
    // │ Footer helper text               │
    // ├──────────────────────────────────┤
    // │ Input                            │
    // └──────────────────────────────────┘

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // character
            Constraint::Length(3), // header
            Constraint::Length(3), // topics
            Constraint::Min(8),    // chat
            Constraint::Length(2), // footer
            Constraint::Length(3), // input
        ])
        .split(area);

    character::draw(frame, app, main_layout[0]);
    header::draw(frame, main_layout[1]);
    topics::draw(frame, app, main_layout[2]);
    chat::draw(frame, app, main_layout[3]);
    draw_footer(frame, main_layout[4]);
    input::draw(frame, app, main_layout[5]);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::styled(ui_text::FOOTER_PRIMARY, Style::default().fg(Color::Gray)),
        Line::styled(
            ui_text::FOOTER_SECONDARY,
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
