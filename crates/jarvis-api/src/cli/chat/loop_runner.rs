//! The interactive chat loop.
//!
//! Keeps the session history in memory, shows a spinner while Jarvis is
//! "thinking", and prints each reply with its emotion. Nothing survives
//! the session.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use jarvis_core::replies;
use jarvis_observe::chat_attrs;
use jarvis_types::chat::ChatReply;
use jarvis_types::emotion::Emotion;
use jarvis_types::message::{ConversationHistory, Message};

use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::remote::RemoteClient;
use super::{banner, renderer};
use crate::state::AppState;
use crate::turn::run_turn;

/// Where replies come from.
pub enum ChatBackend {
    /// Responder running in this process.
    Local(AppState),
    /// A Jarvis server reached over HTTP.
    Remote(RemoteClient),
}

impl ChatBackend {
    /// Human-readable description for the banner.
    pub fn describe(&self) -> String {
        match self {
            ChatBackend::Local(_) => "local".to_string(),
            ChatBackend::Remote(client) => client.endpoint().to_string(),
        }
    }

    /// Get a reply for `message` given the history before it.
    ///
    /// Never fails: remote errors become the standard apology, tagged
    /// serious.
    pub async fn reply(&self, message: &str, history: &[Message]) -> ChatReply {
        match self {
            ChatBackend::Local(state) => {
                run_turn(state, message, history, chat_attrs::TRANSPORT_CLI).await
            }
            ChatBackend::Remote(client) => match client.send(message, history).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(error = %err, endpoint = client.endpoint(), "Chat request failed");
                    ChatReply::new(replies::CLIENT_ERROR, Emotion::Serious)
                }
            },
        }
    }
}

/// A new session history holding only the opening greeting.
pub fn opening_history() -> ConversationHistory {
    vec![Message::from_agent(replies::OPENING, Emotion::Cheerful)]
}

/// Send one user line and append both sides of the exchange to `history`.
///
/// The request carries the history as it was before this message.
pub async fn exchange(backend: &ChatBackend, history: &mut ConversationHistory, text: &str) -> ChatReply {
    let user_message = Message::from_user(text);
    let reply = backend.reply(text, history).await;

    history.push(user_message);
    history.push(Message::from_agent(reply.response.clone(), reply.emotion));
    reply
}

/// Run the chat loop until `/exit`, Ctrl+D or a readline failure.
pub async fn run_chat_loop(backend: ChatBackend) -> anyhow::Result<()> {
    banner::print_welcome_banner(&backend.describe());

    let mut history = opening_history();
    renderer::print_agent_message(replies::OPENING, Emotion::Cheerful);
    println!();

    let (mut chat_input, _stdout) = ChatInput::new(renderer::user_prompt())?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("  {}", style("Press Ctrl+D or type /exit to leave.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if text.is_empty() {
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::History => renderer::print_history(&history),
                ChatCommand::Exit => break,
                ChatCommand::Unknown(name) => {
                    println!(
                        "  {} Unknown command {}. Type /help for the list.",
                        style("?").yellow(),
                        style(name).cyan()
                    );
                }
            }
            continue;
        }

        let spinner = thinking_spinner();
        let reply = exchange(&backend, &mut history, &text).await;
        spinner.finish_and_clear();

        renderer::print_agent_message(&reply.response, reply.emotion);
        println!();
    }

    chat_input.flush();
    tracing::debug!(messages = history.len(), "Chat session ended");
    println!("\n  {}", style("Goodbye!").dim());
    Ok(())
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
