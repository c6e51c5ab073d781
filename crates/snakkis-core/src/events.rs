//! ConversationEvent enum — broadcast from a ChatSession to frontends
//! via tokio::broadcast.

use serde::{Deserialize, Serialize};

use crate::types::{Message, PendingData, TopicData};

/// Events broadcast from a chat session task to all subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ConversationEvent {
    /// A message was appended to the conversation (user or bot).
    #[serde(rename = "message")]
    Message(Message),

    /// The selected topic changed.
    #[serde(rename = "topic")]
    Topic(TopicData),

    /// The number of outstanding canned replies changed.
    #[serde(rename = "pending")]
    Pending(PendingData),
}
