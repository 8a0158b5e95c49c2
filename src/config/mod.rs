mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Reads the process environment once into an immutable `Config`.
pub fn load() -> Result<Config> {
    from_lookup(|key| env::var(key).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let region = required(&lookup, "REGION_NAME")?;
    let inference_profile_id = required(&lookup, "INFERENCE_PROFILE_ID")?;
    let secret_name = required(&lookup, "SECRET_NAME")?;

    let host = lookup("HOST").unwrap_or_else(types::default_host);
    let port = match lookup("PORT") {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::config(format!("invalid PORT value: {raw}")))?,
        None => types::default_port(),
    };
    let level = lookup("LOG_LEVEL").unwrap_or_else(types::default_log_level);

    debug!("Configuration resolved for region: {}", region);

    Ok(Config {
        server: ServerConfig {
            host,
            port,
            logs: LogsConfig { level },
        },
        aws: AwsConfig {
            region,
            inference_profile_id,
            secret_name,
            secrets_endpoint: lookup("AWS_ENDPOINT_URL_SECRETS_MANAGER"),
            bedrock_endpoint: lookup("AWS_ENDPOINT_URL_BEDROCK_RUNTIME"),
        },
    })
}

fn required(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::config(format!("missing required environment variable: {key}")))
}
