use crate::{
    Result,
    bedrock::{ConverseConnector, ConverseRequest, ConverseResponse},
    config::AwsConfig,
    secrets::{Credentials, SecretStore},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs one credentialed inference call: resolve the configured secret, open
/// a session with the resolved key pair, converse once, return the result.
pub struct Invoker {
    secret_name: String,
    inference_profile_id: String,
    secrets: Arc<dyn SecretStore>,
    connector: Arc<dyn ConverseConnector>,
}

impl Invoker {
    pub fn new(
        config: &AwsConfig,
        secrets: Arc<dyn SecretStore>,
        connector: Arc<dyn ConverseConnector>,
    ) -> Self {
        Self {
            secret_name: config.secret_name.clone(),
            inference_profile_id: config.inference_profile_id.clone(),
            secrets,
            connector,
        }
    }

    pub async fn invoke(&self, input_text: &str, session_id: &str) -> Result<ConverseResponse> {
        debug!(
            "Resolving secret '{}' for session: {}",
            self.secret_name, session_id
        );
        let value = self.secrets.get_secret(&self.secret_name).await?;
        let credentials = Credentials::from_value(value)?;

        let client = self.connector.connect(&credentials);
        let request = ConverseRequest::user_prompt(&self.inference_profile_id, input_text);
        let response = client.converse(request).await?;

        info!(
            "Converse output for session {}: {:?}",
            session_id, response.output.message.content
        );

        Ok(response)
    }
}
