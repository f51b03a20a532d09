//! Transcript assembly from heterogeneous message records.

use serde_json::Value;

/// Field aliases that may carry a message's utterance text, in priority order.
const TEXT_FIELD_ALIASES: [&str; 4] = ["text", "content", "message", "transcript"];

/// Extract the utterance text from a single message record.
///
/// Messages from the conversation service are loosely shaped: depending on
/// the message kind the text may live under any of several keys. The first
/// alias holding a non-empty value wins. Scalar values are coerced to their
/// textual form; objects, arrays and nulls yield nothing.
pub fn message_text(message: &Value) -> Option<String> {
    for alias in TEXT_FIELD_ALIASES {
        let Some(value) = message.get(alias) else {
            continue;
        };
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

/// Join the texts of a message sequence into a single transcript.
///
/// Messages that yield no text under any alias are skipped; the surviving
/// texts are joined with a single newline, preserving fetch order. An empty
/// sequence produces an empty string.
pub fn assemble_transcript(messages: &[Value]) -> String {
    messages
        .iter()
        .filter_map(message_text)
        .collect::<Vec<_>>()
        .join("\n")
}
