use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ConverseRequest {
    pub model_id: String,
    pub messages: Vec<Message>,
}

impl ConverseRequest {
    /// Builds the single-turn request: one user message wrapping the prompt.
    pub fn user_prompt(model_id: impl Into<String>, input_text: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            messages: vec![Message::user(input_text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: Vec<ContentBlock>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            content: vec![ContentBlock { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

/// The converse result as returned to the caller, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverseResponse {
    pub output: ConverseOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverseOutput {
    pub message: Message,
}
