//! The chat session — owns a Conversation, accepts commands, and
//! schedules the canned replies.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::conversation::{Conversation, ReplyTicket};
use crate::events::ConversationEvent;
use crate::types::{PendingData, TopicData};

/// Commands that can be sent TO the session (from a frontend).
#[derive(Debug)]
pub enum SessionCommand {
    UpdateDraft(String),
    Submit,
    SelectTopic(String),
    Stop,
}

/// The chat session — runs as an independent tokio task.
///
/// Each accepted submission spawns one timer task which hands its
/// ticket back over an internal channel; state mutation happens only
/// here, on the session task. On Stop, outstanding timers are aborted
/// and pending tickets are invalidated so nothing mutates a disposed
/// conversation.
pub struct ChatSession {
    conversation: Conversation,
    config: Config,

    event_tx: broadcast::Sender<ConversationEvent>,
    command_tx: mpsc::Sender<SessionCommand>,
    command_rx: Option<mpsc::Receiver<SessionCommand>>,

    reply_tx: mpsc::Sender<ReplyTicket>,
    reply_rx: Option<mpsc::Receiver<ReplyTicket>>,

    timers: Vec<JoinHandle<()>>,
}

impl ChatSession {
    pub fn new(config: Config) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let (command_tx, command_rx) = mpsc::channel(32);
        let (reply_tx, reply_rx) = mpsc::channel(32);

        Self {
            conversation: Conversation::with_reply_text(&config.reply_text),
            config,
            event_tx,
            command_tx,
            command_rx: Some(command_rx),
            reply_tx,
            reply_rx: Some(reply_rx),
            timers: Vec::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.event_tx.subscribe()
    }

    pub fn command_sender(&self) -> mpsc::Sender<SessionCommand> {
        self.command_tx.clone()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    fn broadcast(&self, event: ConversationEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Broadcast the message just appended, plus the new pending count.
    fn broadcast_appended(&self) {
        if let Some(msg) = self.conversation.messages().last() {
            self.broadcast(ConversationEvent::Message(msg.clone()));
        }
        self.broadcast(ConversationEvent::Pending(PendingData {
            count: self.conversation.pending_replies(),
        }));
    }

    /// Spawn one timer for a freshly issued ticket.
    fn schedule_reply(&mut self, ticket: ReplyTicket) {
        let delay = self.config.reply_delay();
        let reply_tx = self.reply_tx.clone();
        self.timers.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = reply_tx.send(ticket).await;
        }));
        self.timers.retain(|t| !t.is_finished());
    }

    // ── Main loop ──

    pub async fn run(&mut self) {
        let mut command_rx = self.command_rx.take().expect("command_rx already taken");
        let mut reply_rx = self.reply_rx.take().expect("reply_rx already taken");

        info!("Chat session started");

        loop {
            tokio::select! {
                cmd = command_rx.recv() => {
                    match cmd {
                        Some(SessionCommand::UpdateDraft(text)) => {
                            self.conversation.update_draft(text);
                        }
                        Some(SessionCommand::Submit) => {
                            if let Some(ticket) = self.conversation.submit() {
                                self.schedule_reply(ticket);
                                self.broadcast_appended();
                            }
                        }
                        Some(SessionCommand::SelectTopic(id)) => {
                            self.conversation.select_topic(id.clone());
                            self.broadcast(ConversationEvent::Topic(TopicData { id }));
                        }
                        Some(SessionCommand::Stop) | None => break,
                    }
                }
                Some(ticket) = reply_rx.recv() => {
                    if self.conversation.deliver_reply(ticket) {
                        self.broadcast_appended();
                    }
                }
            }
        }

        // Teardown: a late timer must not touch the conversation again.
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        self.conversation.cancel_pending();

        info!("Chat session stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;

    use crate::conversation::DEFAULT_REPLY_TEXT;
    use crate::types::MessageOrigin;

    type Shared = Arc<RwLock<ChatSession>>;

    async fn start_session(
        config: Config,
    ) -> (
        Shared,
        mpsc::Sender<SessionCommand>,
        broadcast::Receiver<ConversationEvent>,
        JoinHandle<()>,
    ) {
        let session = ChatSession::new(config);
        let command_tx = session.command_sender();
        let event_rx = session.subscribe();
        let session = Arc::new(RwLock::new(session));

        let run_session = session.clone();
        let handle = tokio::spawn(async move {
            run_session.write().await.run().await;
        });

        (session, command_tx, event_rx, handle)
    }

    async fn submit(tx: &mpsc::Sender<SessionCommand>, text: &str) {
        tx.send(SessionCommand::UpdateDraft(text.into())).await.unwrap();
        tx.send(SessionCommand::Submit).await.unwrap();
    }

    fn expect_message(event: ConversationEvent, origin: MessageOrigin, text: &str) {
        match event {
            ConversationEvent::Message(msg) => {
                assert_eq!(msg.origin, origin);
                assert_eq!(msg.text, text);
            }
            other => panic!("expected message event, got {:?}", other),
        }
    }

    fn expect_pending(event: ConversationEvent, count: usize) {
        match event {
            ConversationEvent::Pending(p) => assert_eq!(p.count, count),
            other => panic!("expected pending event, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_exactly_the_delay() {
        let (_session, tx, mut rx, _handle) = start_session(Config::default()).await;
        let t0 = tokio::time::Instant::now();

        submit(&tx, "Hei").await;

        // The user message is committed immediately.
        expect_message(rx.recv().await.unwrap(), MessageOrigin::User, "Hei");
        expect_pending(rx.recv().await.unwrap(), 1);
        assert_eq!(t0.elapsed(), Duration::ZERO);

        // Let the timer task register its sleep, then walk the clock to
        // just before the deadline: no reply yet.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(999)).await;
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        // One more millisecond and the canned reply lands.
        tokio::time::advance(Duration::from_millis(1)).await;
        expect_message(rx.recv().await.unwrap(), MessageOrigin::Bot, DEFAULT_REPLY_TEXT);
        expect_pending(rx.recv().await.unwrap(), 0);
        assert_eq!(t0.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_delay_is_honored() {
        let config = Config {
            reply_delay_ms: 250,
            ..Config::default()
        };
        let (_session, tx, mut rx, _handle) = start_session(config).await;
        let t0 = tokio::time::Instant::now();

        submit(&tx, "Hei").await;
        expect_message(rx.recv().await.unwrap(), MessageOrigin::User, "Hei");
        expect_pending(rx.recv().await.unwrap(), 1);

        // The paused clock auto-advances straight to the timer deadline.
        expect_message(rx.recv().await.unwrap(), MessageOrigin::Bot, DEFAULT_REPLY_TEXT);
        assert_eq!(t0.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_submit_emits_nothing() {
        let (session, tx, mut rx, handle) = start_session(Config::default()).await;

        submit(&tx, "   ").await;
        tx.send(SessionCommand::Stop).await.unwrap();
        handle.await.unwrap();

        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
        let session = session.read().await;
        assert!(session.conversation().messages().is_empty());
        assert_eq!(session.conversation().draft(), "   ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_delay_suppresses_reply() {
        let (session, tx, mut rx, handle) = start_session(Config::default()).await;

        submit(&tx, "Hei").await;
        tx.send(SessionCommand::Stop).await.unwrap();
        handle.await.unwrap();

        // The user message went out, the canned reply never did.
        expect_message(rx.recv().await.unwrap(), MessageOrigin::User, "Hei");
        expect_pending(rx.recv().await.unwrap(), 1);
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        let session = session.read().await;
        assert_eq!(session.conversation().messages().len(), 1);
        assert_eq!(session.conversation().pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_submits_reply_per_trigger() {
        let (session, tx, mut rx, handle) = start_session(Config::default()).await;
        let t0 = tokio::time::Instant::now();

        submit(&tx, "A").await;
        submit(&tx, "B").await;

        expect_message(rx.recv().await.unwrap(), MessageOrigin::User, "A");
        expect_pending(rx.recv().await.unwrap(), 1);
        expect_message(rx.recv().await.unwrap(), MessageOrigin::User, "B");
        expect_pending(rx.recv().await.unwrap(), 2);

        // Both triggers fired at the same paused instant, so both
        // replies land together at the delay boundary.
        expect_message(rx.recv().await.unwrap(), MessageOrigin::Bot, DEFAULT_REPLY_TEXT);
        expect_pending(rx.recv().await.unwrap(), 1);
        expect_message(rx.recv().await.unwrap(), MessageOrigin::Bot, DEFAULT_REPLY_TEXT);
        expect_pending(rx.recv().await.unwrap(), 0);
        assert_eq!(t0.elapsed(), Duration::from_millis(1000));

        tx.send(SessionCommand::Stop).await.unwrap();
        handle.await.unwrap();

        let session = session.read().await;
        let origins: Vec<MessageOrigin> = session
            .conversation()
            .messages()
            .iter()
            .map(|m| m.origin)
            .collect();
        assert_eq!(
            origins,
            vec![
                MessageOrigin::User,
                MessageOrigin::User,
                MessageOrigin::Bot,
                MessageOrigin::Bot,
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_topic_broadcasts_and_stays_cosmetic() {
        let (session, tx, mut rx, handle) = start_session(Config::default()).await;

        tx.send(SessionCommand::UpdateDraft("Hei".into())).await.unwrap();
        tx.send(SessionCommand::SelectTopic("math".into())).await.unwrap();

        match rx.recv().await.unwrap() {
            ConversationEvent::Topic(t) => assert_eq!(t.id, "math"),
            other => panic!("expected topic event, got {:?}", other),
        }

        tx.send(SessionCommand::Stop).await.unwrap();
        handle.await.unwrap();

        let session = session.read().await;
        assert_eq!(session.conversation().selected_topic(), Some("math"));
        assert_eq!(session.conversation().draft(), "Hei");
        assert!(session.conversation().messages().is_empty());
    }
}
