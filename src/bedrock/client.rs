use super::types::{ContentBlock, ConverseOutput, ConverseRequest, ConverseResponse, Message};
use crate::{Error, Result, config::AwsConfig, secrets::Credentials};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::config::{
    BehaviorVersion, Credentials as AwsCredentials, Region,
};
use aws_sdk_bedrockruntime::types as bedrock;
use tracing::{debug, error};

#[async_trait]
pub trait ConverseClient: Send + Sync {
    async fn converse(&self, request: ConverseRequest) -> Result<ConverseResponse>;
}

/// Opens an authenticated inference session from a resolved credential pair.
/// Each invocation gets its own session; nothing is pooled across requests.
pub trait ConverseConnector: Send + Sync {
    fn connect(&self, credentials: &Credentials) -> Box<dyn ConverseClient>;
}

pub struct BedrockConnector {
    region: String,
    endpoint_url: Option<String>,
}

impl BedrockConnector {
    pub fn new(config: &AwsConfig) -> Self {
        Self {
            region: config.region.clone(),
            endpoint_url: config.bedrock_endpoint.clone(),
        }
    }
}

impl ConverseConnector for BedrockConnector {
    fn connect(&self, credentials: &Credentials) -> Box<dyn ConverseClient> {
        let provider = AwsCredentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "secrets-manager",
        );

        let mut builder = aws_sdk_bedrockruntime::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(provider);
        if let Some(endpoint) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Box::new(BedrockClient::new(Client::from_conf(builder.build())))
    }
}

pub struct BedrockClient {
    client: Client,
}

impl BedrockClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConverseClient for BedrockClient {
    async fn converse(&self, request: ConverseRequest) -> Result<ConverseResponse> {
        debug!(
            "Sending converse request with {} messages to model {}",
            request.messages.len(),
            request.model_id
        );

        let mut messages = Vec::new();
        for message in &request.messages {
            messages.push(to_bedrock_message(message)?);
        }

        let output = self
            .client
            .converse()
            .model_id(&request.model_id)
            .set_messages(Some(messages))
            .send()
            .await
            .map_err(|e| {
                error!("Bedrock converse call failed: {}", e);
                Error::inference(e.to_string())
            })?;

        from_bedrock_output(output)
    }
}

fn to_bedrock_message(message: &Message) -> Result<bedrock::Message> {
    let role = match message.role.as_deref() {
        Some("user") | None => bedrock::ConversationRole::User,
        Some("assistant") => bedrock::ConversationRole::Assistant,
        Some(other) => {
            return Err(Error::inference(format!("unknown message role: {other}")));
        }
    };

    let mut builder = bedrock::Message::builder().role(role);
    for block in &message.content {
        builder = builder.content(bedrock::ContentBlock::Text(block.text.clone()));
    }

    builder
        .build()
        .map_err(|e| Error::inference(format!("failed to build message: {e}")))
}

fn from_bedrock_output(
    output: aws_sdk_bedrockruntime::operation::converse::ConverseOutput,
) -> Result<ConverseResponse> {
    let message = output
        .output()
        .ok_or_else(|| Error::inference("converse response has no output"))?
        .as_message()
        .map_err(|_| Error::inference("converse output is not a message"))?;

    let content = message
        .content()
        .iter()
        .map(|block| match block.as_text() {
            Ok(text) => Ok(ContentBlock { text: text.clone() }),
            Err(_) => Err(Error::inference("converse output content is not text")),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ConverseResponse {
        output: ConverseOutput {
            message: Message {
                role: Some(message.role().as_str().to_string()),
                content,
            },
        },
    })
}
