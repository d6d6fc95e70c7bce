use serde::{Deserialize, Serialize};

/// Fallback bot text used when the backend answers without a usable reply.
pub const DEFAULT_GREETING: &str =
    "Hello! 👋 I’m FinVerse-AI, your personal finance assistant.";

/// Fixed bot text shown when the chat request fails for any reason.
pub const CONNECTION_ERROR: &str = "⚠️ Connection error. Please try again later.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl TryFrom<&str> for ChatRole {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Self::User),
            "bot" => Ok(Self::Bot),
            _ => Err("invalid chat role"),
        }
    }
}

/// One chat turn as held in panel history and rendered in the message list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }
}

/// Request body for `POST /api/chat`. Carries the raw, untrimmed input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body for `POST /api/chat`. The reply field is optional on the
/// wire; an absent or empty reply falls back to [`DEFAULT_GREETING`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ChatResponse {
    #[must_use]
    pub fn reply_or_default(self) -> String {
        self.reply
            .filter(|reply| !reply.is_empty())
            .unwrap_or_else(|| DEFAULT_GREETING.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [ChatRole::User, ChatRole::Bot] {
            assert_eq!(ChatRole::try_from(role.as_str()), Ok(role));
        }
        assert!(ChatRole::try_from("assistant").is_err());
    }

    #[test]
    fn request_serializes_with_message_field() {
        let request = ChatRequest {
            message: "  How do I budget?  ".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"message":"  How do I budget?  "}"#);
    }

    #[test]
    fn response_decodes_missing_reply_as_none() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.reply, None);
        assert_eq!(response.reply_or_default(), DEFAULT_GREETING);
    }

    #[test]
    fn response_decodes_present_reply() {
        let response: ChatResponse = serde_json::from_str(r#"{"reply":"X"}"#).unwrap();
        assert_eq!(response.reply_or_default(), "X");
    }

    #[test]
    fn empty_reply_falls_back_to_greeting() {
        let response: ChatResponse = serde_json::from_str(r#"{"reply":""}"#).unwrap();
        assert_eq!(response.reply_or_default(), DEFAULT_GREETING);
    }

    #[test]
    fn message_constructors_tag_roles() {
        let user = ChatMessage::user("hi");
        let bot = ChatMessage::bot("hello");

        assert_eq!(user.role, ChatRole::User);
        assert_eq!(user.text, "hi");
        assert_eq!(bot.role, ChatRole::Bot);
    }

    #[test]
    fn message_serializes_role_snake_case() {
        let json = serde_json::to_string(&ChatMessage::bot("hello")).unwrap();
        assert_eq!(json, r#"{"role":"bot","text":"hello"}"#);
    }
}
