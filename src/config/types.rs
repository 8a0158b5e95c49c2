#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub aws: AwsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub region: String,
    pub inference_profile_id: String,
    pub secret_name: String,
    pub secrets_endpoint: Option<String>,
    pub bedrock_endpoint: Option<String>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

pub(super) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(super) fn default_port() -> u16 {
    8080
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}
