//! Request and reply payloads of the chat endpoint.
//!
//! ```json
//! // request
//! { "message": "open spotify", "history": [ ... ] }
//! // reply
//! { "response": "I would open spotify for you ...", "emotion": "calm" }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::emotion::Emotion;
use crate::error::ChatError;
use crate::message::{ConversationHistory, Message};

/// Body of `POST /api/chat`.
///
/// `message` is optional at the serde level so an absent or `null` value
/// surfaces as a validation error rather than a decode failure. `history`
/// is informational and never causes a request to fail: entries that are
/// not well-formed messages are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_history")]
    pub history: ConversationHistory,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: ConversationHistory) -> Self {
        Self {
            message: Some(message.into()),
            history,
        }
    }

    /// Build a request from an already-parsed JSON body.
    ///
    /// `message` follows truthiness rules: absent, `null`, `false`, `0` and
    /// `""` all count as missing and yield a request without a message.
    /// Any other non-string message, or a `null` body, is
    /// [`ChatError::Internal`].
    pub fn from_json(body: Value) -> Result<Self, ChatError> {
        if body.is_null() {
            return Err(ChatError::Internal("request body is null".to_string()));
        }

        let message = match body.get("message") {
            None => None,
            Some(value) if is_falsy(value) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => {
                return Err(ChatError::Internal(format!(
                    "message must be a string, got {other}"
                )));
            }
        };

        let history = body
            .get("history")
            .cloned()
            .map(history_from_value)
            .unwrap_or_default();

        Ok(Self { message, history })
    }

    /// The message text, or [`ChatError::MissingMessage`] when absent or empty.
    pub fn require_message(&self) -> Result<&str, ChatError> {
        match self.message.as_deref() {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ChatError::MissingMessage),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn history_from_value(value: Value) -> ConversationHistory {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<Message>(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn lenient_history<'de, D>(deserializer: D) -> Result<ConversationHistory, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(history_from_value)
}

/// Successful reply from the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub emotion: Emotion,
}

impl ChatReply {
    pub fn new(response: impl Into<String>, emotion: Emotion) -> Self {
        Self {
            response: response.into(),
            emotion,
        }
    }
}

/// Error body returned for both validation and internal failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_require_message_present() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi","history":[]}"#).unwrap();
        assert_eq!(req.require_message().unwrap(), "hi");
    }

    #[test]
    fn test_require_message_absent_null_or_empty() {
        for body in [r#"{"history":[]}"#, r#"{"message":null}"#, r#"{"message":""}"#] {
            let req: ChatRequest = serde_json::from_str(body).unwrap();
            assert!(matches!(req.require_message(), Err(ChatError::MissingMessage)));
        }
    }

    #[test]
    fn test_whitespace_message_is_not_empty() {
        let req = ChatRequest::new("   ", Vec::new());
        assert_eq!(req.require_message().unwrap(), "   ");
    }

    #[test]
    fn test_history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(req.history.is_empty());
    }

    fn from_json(body: Value) -> Result<ChatRequest, ChatError> {
        ChatRequest::from_json(body)
    }

    #[test]
    fn test_from_json_falsy_messages_are_missing() {
        for body in [
            json!({}),
            json!({"message": null}),
            json!({"message": false}),
            json!({"message": 0}),
            json!({"message": 0.0}),
            json!({"message": ""}),
            json!({"history": "bogus"}),
            json!([1, 2, 3]),
        ] {
            let req = from_json(body.clone()).unwrap();
            assert!(
                matches!(req.require_message(), Err(ChatError::MissingMessage)),
                "{body}"
            );
        }
    }

    #[test]
    fn test_from_json_truthy_non_string_is_internal() {
        for body in [
            json!({"message": true}),
            json!({"message": 42}),
            json!({"message": ["hi"]}),
            json!({"message": {"text": "hi"}}),
            Value::Null,
        ] {
            assert!(matches!(from_json(body.clone()), Err(ChatError::Internal(_))), "{body}");
        }
    }

    #[test]
    fn test_from_json_keeps_well_formed_history_only() {
        let req = from_json(json!({
            "message": "hi",
            "history": [
                {"text": "Hello!", "sender": "jarvis", "timestamp": "2024-05-01T12:30:00Z", "emotion": "cheerful"},
                {"text": "x", "sender": "system", "timestamp": "2024-05-01T12:30:00Z"},
                {"text": "no timestamp", "sender": "user"},
                "not even an object"
            ]
        }))
        .unwrap();
        assert_eq!(req.require_message().unwrap(), "hi");
        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].text, "Hello!");
    }

    #[test]
    fn test_from_json_odd_history_shapes_are_empty() {
        for history in [Value::Null, json!("bogus"), json!(7), json!({"a": 1})] {
            let req = from_json(json!({"message": "hi", "history": history})).unwrap();
            assert!(req.history.is_empty());
        }
    }

    #[test]
    fn test_serde_history_is_lenient() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","history":null}"#).unwrap();
        assert!(req.history.is_empty());
        let req: ChatRequest =
            serde_json::from_str(r#"{"message":"hi","history":[{"sender":"robot"}]}"#).unwrap();
        assert!(req.history.is_empty());
    }

    #[test]
    fn test_reply_serializes_flat() {
        let reply = ChatReply::new("No problem at all.", Emotion::Calm);
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, serde_json::json!({"response": "No problem at all.", "emotion": "calm"}));
    }
}
