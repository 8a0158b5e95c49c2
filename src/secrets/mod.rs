mod client;
mod types;

pub use client::{SecretStore, SecretsManagerStore};
pub use types::{ACCESS_KEY_FIELD, Credentials, SECRET_KEY_FIELD, SecretValue};
