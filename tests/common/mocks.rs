use async_trait::async_trait;
use bedrock_gateway::{
    Error, Result,
    bedrock::{
        ContentBlock, ConverseClient, ConverseConnector, ConverseOutput, ConverseRequest,
        ConverseResponse, Message,
    },
    secrets::{Credentials, SecretStore, SecretValue},
};
use std::sync::{Arc, Mutex};

/// Mock secret store for testing
#[derive(Debug, Default)]
pub struct MockSecretStore {
    pub values: Arc<Mutex<Vec<SecretValue>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, value: SecretValue) -> Self {
        self.values.lock().unwrap().push(value);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn requested_names(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn get_secret(&self, name: &str) -> Result<SecretValue> {
        self.requests.lock().unwrap().push(name.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::credential(error.clone()));
        }

        let mut values = self.values.lock().unwrap();
        if values.is_empty() {
            return Err(Error::credential("no more mock secret values available"));
        }

        Ok(values.remove(0))
    }
}

/// Mock connector: records the credentials each session was opened with and
/// hands out clients that drain a shared scripted response queue.
#[derive(Debug, Default)]
pub struct MockConnector {
    pub responses: Arc<Mutex<Vec<ConverseResponse>>>,
    pub requests: Arc<Mutex<Vec<ConverseRequest>>>,
    pub credentials: Arc<Mutex<Vec<Credentials>>>,
    pub error: Option<String>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: ConverseResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn connected_credentials(&self) -> Vec<Credentials> {
        self.credentials.lock().unwrap().clone()
    }

    pub fn converse_requests(&self) -> Vec<ConverseRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ConverseConnector for MockConnector {
    fn connect(&self, credentials: &Credentials) -> Box<dyn ConverseClient> {
        self.credentials.lock().unwrap().push(credentials.clone());

        Box::new(MockConverseClient {
            responses: self.responses.clone(),
            requests: self.requests.clone(),
            error: self.error.clone(),
        })
    }
}

pub struct MockConverseClient {
    responses: Arc<Mutex<Vec<ConverseResponse>>>,
    requests: Arc<Mutex<Vec<ConverseRequest>>>,
    error: Option<String>,
}

#[async_trait]
impl ConverseClient for MockConverseClient {
    async fn converse(&self, request: ConverseRequest) -> Result<ConverseResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("no more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

// Helper functions for creating test data

pub fn structured_secret(access_key: &str, secret_key: &str) -> SecretValue {
    SecretValue::Structured(
        [
            ("AWS_ACCESS_KEY".to_string(), access_key.to_string()),
            ("AWS_SECRET_KEY".to_string(), secret_key.to_string()),
        ]
        .into(),
    )
}

pub fn converse_response(text: &str) -> ConverseResponse {
    ConverseResponse {
        output: ConverseOutput {
            message: Message {
                role: None,
                content: vec![ContentBlock {
                    text: text.to_string(),
                }],
            },
        },
    }
}
