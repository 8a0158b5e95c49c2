mod client;
mod types;

pub use client::{BedrockClient, BedrockConnector, ConverseClient, ConverseConnector};
pub use types::{ContentBlock, ConverseOutput, ConverseRequest, ConverseResponse, Message};
