//! Core types — Message, Topic, and event payloads.

use serde::{Deserialize, Serialize};

// ── Messages ──

/// Who authored a message: the child, or the canned reply stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    User,
    Bot,
}

impl std::fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageOrigin::User => write!(f, "user"),
            MessageOrigin::Bot => write!(f, "bot"),
        }
    }
}

/// One entry in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub origin: MessageOrigin,
    /// RFC 3339 creation stamp, used by frontends for display only.
    pub sent_at: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::stamped(text, MessageOrigin::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::stamped(text, MessageOrigin::Bot)
    }

    fn stamped(text: impl Into<String>, origin: MessageOrigin) -> Self {
        Message {
            text: text.into(),
            origin,
            sent_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// ── Topics ──

/// Visual grouping for a topic card. Frontends map these to icons and
/// accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicTag {
    Math,
    Nature,
    Music,
}

impl std::fmt::Display for TopicTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicTag::Math => write!(f, "math"),
            TopicTag::Nature => write!(f, "nature"),
            TopicTag::Music => write!(f, "music"),
        }
    }
}

/// A selectable topic card. Static, defined at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub display_name: String,
    pub tag: TopicTag,
}

// ── Built-in topic catalog ──

pub const BUILTIN_TOPICS: &[(&str, &str, TopicTag)] = &[
    ("math", "Matematikk", TopicTag::Math),
    ("nature", "Natur", TopicTag::Nature),
    ("music", "Musikk", TopicTag::Music),
];

/// The built-in catalog as owned topics.
pub fn builtin_topics() -> Vec<Topic> {
    BUILTIN_TOPICS
        .iter()
        .map(|&(id, name, tag)| Topic {
            id: id.to_string(),
            display_name: name.to_string(),
            tag,
        })
        .collect()
}

pub fn topic_by_id<'a>(topics: &'a [Topic], id: &str) -> Option<&'a Topic> {
    topics.iter().find(|t| t.id == id)
}

// ── Event payloads (broadcast from the session to frontends) ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicData {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingData {
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let topics = builtin_topics();
        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0].display_name, "Matematikk");
        assert_eq!(topics[1].tag, TopicTag::Nature);
    }

    #[test]
    fn test_topic_by_id() {
        let topics = builtin_topics();
        assert_eq!(
            topic_by_id(&topics, "music").map(|t| t.display_name.as_str()),
            Some("Musikk")
        );
        assert!(topic_by_id(&topics, "history").is_none());
    }
}
