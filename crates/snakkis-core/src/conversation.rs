//! The conversation state holder — draft text, message list, selected
//! topic, and pending-reply bookkeeping.

use tracing::debug;

use crate::types::Message;

/// Canned acknowledgement appended for every accepted submission.
pub const DEFAULT_REPLY_TEXT: &str = "Bra! (Good!) 👍";

/// Delay before a canned reply lands, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Handle for one scheduled canned reply.
///
/// Issued by [`Conversation::submit`], redeemed by
/// [`Conversation::deliver_reply`]. A ticket from an earlier epoch is
/// stale and redeems to a no-op, which is what keeps a late timer from
/// mutating a torn-down conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    epoch: u64,
    seq: u64,
}

/// The conversation state machine.
///
/// Per conversation the states are Idle and AwaitingReply(n), where n
/// is the number of outstanding tickets: an accepted submit moves
/// n → n+1, a redeemed ticket moves n → n-1, and
/// [`Conversation::cancel_pending`] drops straight back to Idle.
#[derive(Debug, Clone)]
pub struct Conversation {
    draft: String,
    messages: Vec<Message>,
    selected_topic: Option<String>,
    reply_text: String,
    epoch: u64,
    next_seq: u64,
    pending: Vec<u64>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_reply_text(DEFAULT_REPLY_TEXT)
    }

    pub fn with_reply_text(reply_text: impl Into<String>) -> Self {
        Conversation {
            draft: String::new(),
            messages: Vec::new(),
            selected_topic: None,
            reply_text: reply_text.into(),
            epoch: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    // ── Operations ──

    /// Replace the draft unconditionally. No validation, no side
    /// effects.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commit the draft as a user message.
    ///
    /// A whitespace-only draft makes the whole operation a no-op: no
    /// message is appended, no ticket is issued, and the draft is left
    /// untouched. Otherwise the trimmed text is appended, the draft is
    /// cleared, and exactly one reply ticket is issued.
    pub fn submit(&mut self) -> Option<ReplyTicket> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.draft.clear();
        self.messages.push(Message::user(text));

        let ticket = ReplyTicket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.push(ticket.seq);
        debug!("User message committed, {} reply(ies) pending", self.pending.len());
        Some(ticket)
    }

    /// Select a topic card. Purely cosmetic — never touches messages
    /// or the draft.
    pub fn select_topic(&mut self, id: impl Into<String>) {
        self.selected_topic = Some(id.into());
    }

    /// Redeem a reply ticket, appending the canned acknowledgement.
    ///
    /// Returns true iff the ticket belongs to the current epoch and is
    /// still pending. Stale and already-redeemed tickets mutate
    /// nothing.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) -> bool {
        if ticket.epoch != self.epoch {
            debug!("Dropping stale reply ticket from epoch {}", ticket.epoch);
            return false;
        }
        let Some(idx) = self.pending.iter().position(|&seq| seq == ticket.seq) else {
            debug!("Dropping already-redeemed reply ticket {}", ticket.seq);
            return false;
        };
        self.pending.remove(idx);
        self.messages.push(Message::bot(self.reply_text.clone()));
        debug!("Canned reply delivered, {} still pending", self.pending.len());
        true
    }

    /// Invalidate every outstanding reply ticket.
    ///
    /// Called on teardown or reset so a timer firing late cannot touch
    /// a disposed conversation.
    pub fn cancel_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!("Cancelling {} pending reply(ies)", self.pending.len());
        }
        self.epoch += 1;
        self.pending.clear();
    }

    // ── Accessors ──

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    /// The AwaitingReply(n) counter.
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageOrigin;

    #[test]
    fn test_submit_appends_and_clears_draft() {
        let mut convo = Conversation::new();
        convo.update_draft("  Hei  ");
        let ticket = convo.submit();

        assert!(ticket.is_some());
        assert_eq!(convo.messages().len(), 1);
        assert_eq!(convo.messages()[0].text, "Hei");
        assert_eq!(convo.messages()[0].origin, MessageOrigin::User);
        assert_eq!(convo.draft(), "");
        assert_eq!(convo.pending_replies(), 1);
    }

    #[test]
    fn test_whitespace_submit_is_total_noop() {
        let mut convo = Conversation::new();
        convo.update_draft("   ");
        let ticket = convo.submit();

        assert!(ticket.is_none());
        assert!(convo.messages().is_empty());
        // The whole operation is a no-op, including non-clearing.
        assert_eq!(convo.draft(), "   ");
        assert!(convo.is_idle());
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let mut convo = Conversation::new();
        assert!(convo.submit().is_none());
        assert!(convo.messages().is_empty());
    }

    #[test]
    fn test_update_draft_replaces_unconditionally() {
        let mut convo = Conversation::new();
        convo.update_draft("a");
        convo.update_draft("");
        convo.update_draft("b");
        assert_eq!(convo.draft(), "b");
        assert!(convo.messages().is_empty());
    }

    #[test]
    fn test_select_topic_never_touches_messages_or_draft() {
        let mut convo = Conversation::new();
        convo.update_draft("Hei");
        convo.select_topic("math");
        convo.select_topic("music");

        assert_eq!(convo.selected_topic(), Some("music"));
        assert_eq!(convo.draft(), "Hei");
        assert!(convo.messages().is_empty());
        assert!(convo.is_idle());
    }

    #[test]
    fn test_deliver_reply_appends_canned_text() {
        let mut convo = Conversation::new();
        convo.update_draft("Hei");
        let ticket = convo.submit().unwrap();

        assert!(convo.deliver_reply(ticket));
        assert_eq!(convo.messages().len(), 2);
        assert_eq!(convo.messages()[1].text, DEFAULT_REPLY_TEXT);
        assert_eq!(convo.messages()[1].origin, MessageOrigin::Bot);
        assert!(convo.is_idle());
    }

    #[test]
    fn test_double_redemption_is_noop() {
        let mut convo = Conversation::new();
        convo.update_draft("Hei");
        let ticket = convo.submit().unwrap();

        assert!(convo.deliver_reply(ticket));
        assert!(!convo.deliver_reply(ticket));
        assert_eq!(convo.messages().len(), 2);
    }

    #[test]
    fn test_cancel_pending_invalidates_tickets() {
        let mut convo = Conversation::new();
        convo.update_draft("Hei");
        let ticket = convo.submit().unwrap();
        convo.cancel_pending();

        assert!(convo.is_idle());
        assert!(!convo.deliver_reply(ticket));
        // Only the user message survives.
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn test_rapid_submits_keep_order() {
        let mut convo = Conversation::new();
        convo.update_draft("A");
        let t1 = convo.submit().unwrap();
        convo.update_draft("B");
        let t2 = convo.submit().unwrap();

        assert_eq!(convo.pending_replies(), 2);
        let texts: Vec<&str> = convo.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);

        // Replies redeem in delay-expiry order, after both user messages.
        assert!(convo.deliver_reply(t1));
        assert!(convo.deliver_reply(t2));
        assert_eq!(convo.messages().len(), 4);
        assert_eq!(convo.messages()[2].origin, MessageOrigin::Bot);
        assert_eq!(convo.messages()[3].origin, MessageOrigin::Bot);
        assert!(convo.is_idle());
    }

    #[test]
    fn test_reply_interleaves_with_newer_user_message() {
        let mut convo = Conversation::new();
        convo.update_draft("A");
        let t1 = convo.submit().unwrap();

        // Reply for "A" lands, then the user sends "B".
        assert!(convo.deliver_reply(t1));
        convo.update_draft("B");
        convo.submit().unwrap();

        let texts: Vec<&str> = convo.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["A", DEFAULT_REPLY_TEXT, "B"]);
    }

    #[test]
    fn test_custom_reply_text() {
        let mut convo = Conversation::with_reply_text("Flott!");
        convo.update_draft("Hei");
        let ticket = convo.submit().unwrap();
        assert!(convo.deliver_reply(ticket));
        assert_eq!(convo.messages()[1].text, "Flott!");
    }
}
