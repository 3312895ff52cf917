use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;

/// A recorded conversation as handed over by the conversation store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub session_id: i64,
    #[serde(default)]
    pub topic_id: Option<i64>,
    #[serde(default)]
    pub topic_title: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub model: Option<String>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(session_id: i64, messages: Vec<Message>) -> Self {
        Self {
            session_id,
            topic_id: None,
            topic_title: None,
            module: None,
            started_at: None,
            finished_at: None,
            model: None,
            messages,
        }
    }

    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            session_id: self.session_id,
            topic_id: self.topic_id,
            topic_title: self.topic_title.clone(),
            module: self.module.clone(),
            started_at: self.started_at,
            finished_at: self.finished_at,
            model: self.model.clone(),
            message_count: self.messages.len(),
        }
    }
}

/// What the store needs to create the document that owns a conversation's chunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub session_id: i64,
    pub topic_id: Option<i64>,
    pub topic_title: Option<String>,
    pub module: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub model: Option<String>,
    pub message_count: usize,
}
