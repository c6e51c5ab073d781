//! App state, input handling, event mapping.

use tokio::sync::mpsc;

use snakkis_core::config::Config;
use snakkis_core::events::ConversationEvent;
use snakkis_core::session::SessionCommand;
use snakkis_core::types::{MessageOrigin, Topic};

/// A message in the chat feed.
#[derive(Clone)]
pub struct FeedEntry {
    pub side: FeedSide,
    pub text: String,
    pub stamp: String, // HH:MM
}

#[derive(Clone, Copy, PartialEq)]
pub enum FeedSide {
    User,
    Bot,
}

/// The walking character at the top of the screen.
pub struct Walker {
    pub col: u16,
    pub heading_right: bool,
    pub stride: bool,
    pub blink: u8,
}

impl Walker {
    fn new() -> Self {
        Walker {
            col: 0,
            heading_right: true,
            stride: false,
            blink: 0,
        }
    }

    /// Advance one animation frame across a strip of the given width.
    pub fn tick(&mut self, width: u16) {
        use rand::Rng;

        self.stride = !self.stride;
        if self.blink > 0 {
            self.blink -= 1;
        } else if rand::thread_rng().gen_ratio(1, 40) {
            self.blink = 2;
        }

        // Two cells of sprite, so turn around one column early.
        let max_col = width.saturating_sub(2);
        if self.heading_right {
            if self.col >= max_col {
                self.heading_right = false;
            } else {
                self.col += 1;
            }
        } else if self.col == 0 {
            self.heading_right = true;
        } else {
            self.col -= 1;
        }
    }
}

/// The main application state.
pub struct App {
    pub topics: Vec<Topic>,
    pub selected_topic: Option<usize>,
    pub feed: Vec<FeedEntry>,
    pub pending_replies: usize,
    pub input: String,
    pub input_focused: bool,
    pub scroll_offset: usize,
    pub walker: Walker,
    pub should_quit: bool,
    pub command_tx: mpsc::Sender<SessionCommand>,
}

impl App {
    pub fn new(config: &Config, command_tx: mpsc::Sender<SessionCommand>) -> Self {
        App {
            topics: config.topics(),
            selected_topic: None,
            feed: Vec::new(),
            pending_replies: 0,
            input: String::new(),
            input_focused: true,
            scroll_offset: 0,
            walker: Walker::new(),
            should_quit: false,
            command_tx,
        }
    }

    /// Handle a session event.
    pub fn handle_event(&mut self, event: ConversationEvent) {
        match event {
            ConversationEvent::Message(msg) => {
                let side = match msg.origin {
                    MessageOrigin::User => FeedSide::User,
                    MessageOrigin::Bot => FeedSide::Bot,
                };
                self.feed.push(FeedEntry {
                    side,
                    text: msg.text,
                    stamp: short_stamp(&msg.sent_at),
                });
                // Auto-scroll to bottom
                self.scroll_offset = 0;
            }
            ConversationEvent::Pending(p) => {
                self.pending_replies = p.count;
            }
            ConversationEvent::Topic(t) => {
                self.selected_topic = self.topics.iter().position(|topic| topic.id == t.id);
            }
        }
    }

    // ── Input handling ──

    pub async fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.sync_draft().await;
    }

    pub async fn pop_char(&mut self) {
        self.input.pop();
        self.sync_draft().await;
    }

    async fn sync_draft(&self) {
        let _ = self
            .command_tx
            .send(SessionCommand::UpdateDraft(self.input.clone()))
            .await;
    }

    /// Submit the current input to the session.
    pub async fn send_message(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.input.clear();
        let _ = self.command_tx.send(SessionCommand::Submit).await;
    }

    // ── Topic selection ──

    pub async fn next_topic(&mut self) {
        if self.topics.is_empty() {
            return;
        }
        let idx = match self.selected_topic {
            Some(i) => (i + 1) % self.topics.len(),
            None => 0,
        };
        self.select_topic(idx).await;
    }

    pub async fn prev_topic(&mut self) {
        if self.topics.is_empty() {
            return;
        }
        let idx = match self.selected_topic {
            Some(0) | None => self.topics.len() - 1,
            Some(i) => i - 1,
        };
        self.select_topic(idx).await;
    }

    async fn select_topic(&mut self, idx: usize) {
        let id = self.topics[idx].id.clone();
        let _ = self
            .command_tx
            .send(SessionCommand::SelectTopic(id))
            .await;
    }

    // ── Scrolling ──

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(3);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}

/// RFC 3339 stamp -> local "HH:MM" for the feed gutter.
fn short_stamp(sent_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(sent_at)
        .map(|t| t.with_timezone(&chrono::Local).format("%H:%M").to_string())
        .unwrap_or_default()
}
