use crate::models::Message;
use serde::Serialize;

pub const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
pub struct RequestBody<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub temperature: f32,
}

impl<'a> RequestBody<'a> {
    pub fn new(model: &'a str, messages: &'a [Message]) -> Self {
        Self {
            model,
            messages,
            temperature: TEMPERATURE,
        }
    }
}

/// A completed exchange: the first choice's message and the model the
/// service says answered, which can differ from the one requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub message: Message,
    pub model: String,
}
