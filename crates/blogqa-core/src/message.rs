//! Conversation message types.
//!
//! `ChatMessage` is the wire shape exchanged with the service as chat
//! history. `DisplayMessage` is what the conversation holds and renders.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Speaker of a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// The person asking questions.
    Human,
    /// The generated answer.
    Ai,
}

/// A single `{role, content}` pair as sent in `chat_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A cited document returned alongside an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// Whether an answer can receive feedback.
///
/// The service identifies an answer by `message_id`; feedback also needs the
/// question that produced it. Both exist together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The service did not issue a usable message id.
    Pending,
    /// The answer is addressable for feedback.
    Settled { message_id: String, question: String },
}

impl Settlement {
    /// Builds a settlement from a server response.
    ///
    /// An empty `message_id` is treated as absent.
    pub fn from_response(message_id: &str, question: &str) -> Self {
        if message_id.trim().is_empty() {
            Self::Pending
        } else {
            Self::Settled {
                message_id: message_id.to_string(),
                question: question.to_string(),
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }
}

/// An answer as displayed in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiMessage {
    pub content: String,
    pub sources: Vec<Source>,
    pub settlement: Settlement,
}

impl AiMessage {
    /// `(message_id, question)` when the answer accepts feedback.
    pub fn feedback_target(&self) -> Option<(&str, &str)> {
        match &self.settlement {
            Settlement::Settled {
                message_id,
                question,
            } => Some((message_id.as_str(), question.as_str())),
            Settlement::Pending => None,
        }
    }
}

/// A message held by the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMessage {
    Human { content: String },
    Ai(AiMessage),
}

impl DisplayMessage {
    pub fn human(content: impl Into<String>) -> Self {
        Self::Human {
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Human { .. } => Role::Human,
            Self::Ai(_) => Role::Ai,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Human { content } => content,
            Self::Ai(ai) => &ai.content,
        }
    }

    /// Sources are empty for human messages.
    pub fn sources(&self) -> &[Source] {
        match self {
            Self::Human { .. } => &[],
            Self::Ai(ai) => &ai.sources,
        }
    }

    pub fn as_ai(&self) -> Option<&AiMessage> {
        match self {
            Self::Ai(ai) => Some(ai),
            Self::Human { .. } => None,
        }
    }

    /// Reduces the message to its history form, dropping citations and
    /// feedback identifiers.
    pub fn to_chat_message(&self) -> ChatMessage {
        ChatMessage {
            role: self.role(),
            content: self.content().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage {
            role: Role::Ai,
            content: "hi".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"role":"ai","content":"hi"}"#);
        assert_eq!("human".parse::<Role>().unwrap(), Role::Human);
    }

    #[test]
    fn test_empty_message_id_is_pending() {
        assert_eq!(Settlement::from_response("", "q"), Settlement::Pending);
        assert!(Settlement::from_response("m1", "q").is_settled());
    }

    #[test]
    fn test_to_chat_message_strips_sources() {
        let msg = DisplayMessage::Ai(AiMessage {
            content: "answer".into(),
            sources: vec![Source {
                title: "Post A".into(),
                url: "http://x".into(),
            }],
            settlement: Settlement::from_response("m1", "What is RAG?"),
        });

        assert_eq!(
            msg.to_chat_message(),
            ChatMessage {
                role: Role::Ai,
                content: "answer".into()
            }
        );
        assert_eq!(
            msg.as_ai().and_then(AiMessage::feedback_target),
            Some(("m1", "What is RAG?"))
        );
    }
}
