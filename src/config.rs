use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest compressed PutLogs body the service accepts.
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Largest advertised `x-log-bodyrawsize` accepted for a compressed pull body.
pub const DEFAULT_MAX_RAW_SIZE: usize = 256 * 1024 * 1024;

/// Settings for a [`crate::LogCodec`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    /// Upper bound on the compressed push payload, in bytes. `0` disables the check.
    pub max_payload_size: usize,
    /// Upper bound on the decompressed size of a pull body, in bytes. `0` disables the check.
    pub max_raw_size: usize,
    /// Indent the JSON rendered from pull responses.
    pub pretty_json: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            max_raw_size: DEFAULT_MAX_RAW_SIZE,
            pretty_json: false,
        }
    }
}

impl CodecConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonParse)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = CodecConfig::from_json(r#"{"pretty_json": true}"#).unwrap();
        assert!(config.pretty_json);
        assert_eq!(config.max_payload_size, DEFAULT_MAX_PAYLOAD_SIZE);
        assert_eq!(config.max_raw_size, DEFAULT_MAX_RAW_SIZE);
    }

    #[test]
    fn test_invalid_config() {
        let err = CodecConfig::from_json(r#"{"max_payload_size": -1}"#).unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }
}
