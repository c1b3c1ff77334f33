//! Styled terminal output for chat messages.
//!
//! Each agent reply carries an emotion label colored the way the browser
//! client tints its avatar: cheerful yellow, calm cyan, serious red.

use console::{StyledObject, style};

use jarvis_types::emotion::Emotion;
use jarvis_types::message::{Message, Sender};

/// Maximum characters of a message shown by `/history`.
const HISTORY_PREVIEW_CHARS: usize = 72;

/// Prompt shown before user input.
pub fn user_prompt() -> String {
    format!("{} ", style("you >").green().bold())
}

/// Emotion name styled in its color.
pub fn emotion_label(emotion: Emotion) -> StyledObject<&'static str> {
    let label = style(emotion.as_str());
    match emotion {
        Emotion::Cheerful => label.yellow(),
        Emotion::Calm => label.cyan(),
        Emotion::Serious => label.red(),
    }
}

/// Print one agent reply with its emotion label.
pub fn print_agent_message(text: &str, emotion: Emotion) {
    println!(
        "  {} {}",
        style("Jarvis").bold(),
        style(format!("[{}]", emotion_label(emotion))).dim()
    );
    println!("  {text}");
}

/// Print every message of the session in order.
pub fn print_history(history: &[Message]) {
    println!();
    println!("  {}", style("Conversation:").bold());
    println!();
    for message in history {
        let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S");
        let who = match message.sender {
            Sender::User => style("you".to_string()).green(),
            Sender::Agent => {
                let emotion = message.emotion.unwrap_or_default();
                style(format!("jarvis/{}", emotion_label(emotion)))
            }
        };
        println!(
            "  {} {} {}",
            style(time).dim(),
            who,
            preview(&message.text, HISTORY_PREVIEW_CHARS)
        );
    }
    println!();
}

/// Shorten `text` to at most `max_chars` characters, marking the cut
/// with `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
