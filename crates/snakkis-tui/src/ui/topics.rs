//! Topic cards — one bordered card per topic, selection highlighted.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use snakkis_core::types::TopicTag;

use crate::app::App;

fn tag_icon(tag: TopicTag) -> &'static str {
    match tag {
        TopicTag::Math => "🧠",
        TopicTag::Nature => "📖",
        TopicTag::Music => "🎵",
    }
}

fn tag_color(tag: TopicTag) -> Color {
    match tag {
        TopicTag::Math => Color::Blue,
        TopicTag::Nature => Color::Green,
        TopicTag::Music => Color::Magenta,
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    if app.topics.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = app
        .topics
        .iter()
        .map(|_| Constraint::Ratio(1, app.topics.len() as u32))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, topic) in app.topics.iter().enumerate() {
        let selected = app.selected_topic == Some(i);
        let border_style = if selected {
            Style::default().fg(Color::LightBlue).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(cards[i]);
        frame.render_widget(block, cards[i]);

        let label = Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", tag_icon(topic.tag))),
            Span::styled(
                topic.display_name.clone(),
                Style::default().fg(tag_color(topic.tag)).bold(),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(label, inner);
    }
}
