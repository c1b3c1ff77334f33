//! `jarvis ask`: one message in, one reply out, no thinking delay.

use jarvis_observe::chat_attrs;
use jarvis_types::chat::ChatRequest;

use crate::cli::chat::renderer;
use crate::state::AppState;
use crate::turn::run_turn;

pub async fn ask(state: &AppState, message: &str, json: bool) -> anyhow::Result<()> {
    let request = ChatRequest::new(message, Vec::new());
    let message = request.require_message()?;

    let reply = run_turn(state, message, &request.history, chat_attrs::TRANSPORT_CLI).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!();
        renderer::print_agent_message(&reply.response, reply.emotion);
        println!();
    }
    Ok(())
}
