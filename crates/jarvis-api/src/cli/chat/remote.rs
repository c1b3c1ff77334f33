//! HTTP client for talking to a running Jarvis server.
//!
//! Sends the same `{message, history}` body the browser client sends and
//! accepts the same reply shape.

use std::time::Duration;

use serde::Deserialize;

use jarvis_types::chat::{ChatReply, ChatRequest};
use jarvis_types::emotion::Emotion;
use jarvis_types::message::Message;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reply as it arrives on the wire. A missing or unrecognized emotion
/// is shown as calm.
#[derive(Debug, Deserialize)]
struct WireReply {
    response: String,
    #[serde(default)]
    emotion: Option<String>,
}

/// Client for `POST {base}/api/chat`.
pub struct RemoteClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message. Non-2xx statuses are errors.
    pub async fn send(&self, message: &str, history: &[Message]) -> Result<ChatReply, reqwest::Error> {
        let body = ChatRequest::new(message, history.to_vec());

        let reply: WireReply = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let emotion = reply
            .emotion
            .and_then(|e| e.parse::<Emotion>().ok())
            .unwrap_or_default();
        Ok(ChatReply::new(reply.response, emotion))
    }
}
