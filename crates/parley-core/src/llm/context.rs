//! Bounded request construction.
//!
//! Turns a stored transcript plus a new user message into the
//! provider-agnostic [`ChatRequest`]. Only the most recent
//! [`CONTEXT_WINDOW`] stored messages are sent; the stored transcript
//! itself is never truncated.

use parley_types::chat::ChatMessage;
use parley_types::llm::{ChatRequest, GenerationParams, Message};

/// Number of stored messages included as context in each request.
pub const CONTEXT_WINDOW: usize = 10;

/// Leading directive injected when Hinglish mode is on.
pub const HINGLISH_INSTRUCTION: &str = "You are a helpful AI assistant. Please respond in Hinglish \
(mix of Hindi and English, casual tone, use Roman script for Hindi words). \
Keep your responses natural and conversational.";

/// Build a request from `history` (oldest first) and the new `message`.
///
/// The instruction, when present, sits outside the window: it never
/// displaces a history message.
pub fn build_request(history: &[ChatMessage], message: &str, hinglish_mode: bool) -> ChatRequest {
    let start = history.len().saturating_sub(CONTEXT_WINDOW);

    let mut messages: Vec<Message> = history[start..].iter().map(Message::from).collect();
    messages.push(Message::user(message));

    ChatRequest {
        instruction: hinglish_mode.then(|| HINGLISH_INSTRUCTION.to_string()),
        messages,
        params: GenerationParams::default(),
    }
}
