use crate::api::models::Reply;
use crate::error::{CliGptError, Result};
use crate::models::{Message, Role};
use serde_json::Value;

fn protocol(msg: &str) -> CliGptError {
    CliGptError::ProtocolError(msg.to_string())
}

/// Parse a raw completion body into the first choice and the reported model.
pub fn parse_completion(body: &str) -> Result<Reply> {
    let response_json: Value = serde_json::from_str(body)
        .map_err(|e| CliGptError::ProtocolError(format!("response is not JSON: {}", e)))?;
    extract_reply(&response_json)
}

pub fn extract_reply(response_json: &Value) -> Result<Reply> {
    let message = extract_message(response_json)?;
    let model = response_json
        .get("model")
        .and_then(|m| m.as_str())
        .ok_or_else(|| protocol("No model in response"))?;

    Ok(Reply {
        message,
        model: model.to_string(),
    })
}

pub fn extract_message(response_json: &Value) -> Result<Message> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| protocol("No choices in response"))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| protocol("Empty choices array"))?;

    let message = first_choice
        .get("message")
        .ok_or_else(|| protocol("No message in response"))?;

    let role = match message.get("role") {
        Some(role) => serde_json::from_value::<Role>(role.clone())
            .map_err(|_| protocol("Unknown message role in response"))?,
        None => Role::Assistant,
    };

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .ok_or_else(|| protocol("No content in response message"))?;

    Ok(Message {
        role,
        content: content.to_string(),
    })
}
