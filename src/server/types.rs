use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub input_text: String,
    pub session_id: String,
}

impl PromptRequest {
    /// Parses the raw request body, keeping malformed JSON and missing or
    /// mistyped fields as distinct error kinds.
    pub fn parse(body: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| Error::malformed_input(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| Error::missing_field(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
