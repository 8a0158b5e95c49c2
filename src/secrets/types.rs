use crate::{Error, Result};
use std::collections::HashMap;

/// Secret field holding the access key identifier.
pub const ACCESS_KEY_FIELD: &str = "AWS_ACCESS_KEY";
/// Secret field holding the secret access key.
pub const SECRET_KEY_FIELD: &str = "AWS_SECRET_KEY";

/// A secret as returned by the provider: a structured JSON mapping or a raw
/// binary payload. Callers must handle both variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretValue {
    Structured(HashMap<String, String>),
    Binary(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Credentials {
    /// Extracts the access-key/secret-key pair from a resolved secret.
    ///
    /// Binary payloads are decoded as UTF-8 and re-parsed as the same JSON
    /// mapping the structured variant carries.
    pub fn from_value(value: SecretValue) -> Result<Self> {
        let record = match value {
            SecretValue::Structured(record) => record,
            SecretValue::Binary(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| Error::credential("binary secret is not valid UTF-8"))?;
                serde_json::from_str(&text).map_err(|e| {
                    Error::credential(format!("binary secret is not a JSON object: {e}"))
                })?
            }
        };

        let access_key_id = field(&record, ACCESS_KEY_FIELD)?;
        let secret_access_key = field(&record, SECRET_KEY_FIELD)?;

        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }
}

fn field(record: &HashMap<String, String>, key: &str) -> Result<String> {
    record
        .get(key)
        .cloned()
        .ok_or_else(|| Error::credential(format!("secret is missing the {key} field")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(access: &str, secret: &str) -> HashMap<String, String> {
        HashMap::from([
            (ACCESS_KEY_FIELD.to_string(), access.to_string()),
            (SECRET_KEY_FIELD.to_string(), secret.to_string()),
        ])
    }

    #[test]
    fn structured_secret_yields_credentials() {
        let credentials =
            Credentials::from_value(SecretValue::Structured(record("K", "S"))).unwrap();

        assert_eq!(credentials.access_key_id, "K");
        assert_eq!(credentials.secret_access_key, "S");
    }

    #[test]
    fn binary_secret_is_reparsed_as_json() {
        let payload = br#"{"AWS_ACCESS_KEY":"K","AWS_SECRET_KEY":"S"}"#.to_vec();

        let credentials = Credentials::from_value(SecretValue::Binary(payload)).unwrap();

        assert_eq!(credentials.access_key_id, "K");
        assert_eq!(credentials.secret_access_key, "S");
    }

    #[test]
    fn binary_secret_that_is_not_json_is_rejected() {
        let err = Credentials::from_value(SecretValue::Binary(b"not json".to_vec())).unwrap_err();

        assert!(matches!(err, crate::Error::CredentialUnavailable(_)));
    }

    #[test]
    fn missing_access_key_is_rejected() {
        let record = HashMap::from([(SECRET_KEY_FIELD.to_string(), "S".to_string())]);

        let err = Credentials::from_value(SecretValue::Structured(record)).unwrap_err();

        assert!(err.to_string().contains(ACCESS_KEY_FIELD));
    }

    #[test]
    fn missing_secret_key_is_rejected() {
        let record = HashMap::from([(ACCESS_KEY_FIELD.to_string(), "K".to_string())]);

        let err = Credentials::from_value(SecretValue::Structured(record)).unwrap_err();

        assert!(err.to_string().contains(SECRET_KEY_FIELD));
    }
}
