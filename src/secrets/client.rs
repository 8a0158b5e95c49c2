use super::types::SecretValue;
use crate::{Error, Result, config::AwsConfig};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::Client;
use std::collections::HashMap;
use tracing::{debug, error};

#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<SecretValue>;
}

pub struct SecretsManagerStore {
    client: Client,
}

impl SecretsManagerStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(conf: aws_sdk_secretsmanager::Config) -> Self {
        Self::new(Client::from_conf(conf))
    }

    /// Builds a store on the default credential provider chain for the
    /// configured region, honoring an endpoint override when one is set.
    pub async fn from_env(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.secrets_endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;

        Self::new(Client::new(&shared))
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    async fn get_secret(&self, name: &str) -> Result<SecretValue> {
        debug!("Retrieving secret: {}", name);

        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                error!("Error retrieving secret {}: {}", name, e);
                Error::credential(e.to_string())
            })?;

        if let Some(secret_string) = output.secret_string() {
            let record: HashMap<String, String> =
                serde_json::from_str(secret_string).map_err(|e| {
                    error!("Secret {} is not a JSON object: {}", name, e);
                    Error::credential(format!("secret '{name}' is not a JSON object: {e}"))
                })?;
            Ok(SecretValue::Structured(record))
        } else if let Some(blob) = output.secret_binary() {
            Ok(SecretValue::Binary(blob.as_ref().to_vec()))
        } else {
            Err(Error::credential(format!("secret '{name}' has no value")))
        }
    }
}
