use crate::error::TimestreamError;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Header (HTTP) and metadata key (gRPC) carrying the request identifier.
pub const REQUEST_ID_HEADER: &str = "req-id";

/// Random per-request token joining client and server journal entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// 64 random bits rendered as 16 lower-case hex digits.
    pub fn random() -> Self {
        Self(format!("{:016x}", rand::random::<u64>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RequestId {
    type Err = TimestreamError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(TimestreamError::InvalidRequestId);
        }

        Ok(Self(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_id_should_be_16_hex_digits() {
        let id = RequestId::random();
        assert_eq!(id.as_str().len(), 16);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn random_ids_should_differ() {
        assert_ne!(RequestId::random(), RequestId::random());
    }

    #[test]
    fn given_blank_value_parsing_should_fail() {
        assert!("  ".parse::<RequestId>().is_err());
        assert_eq!("00ff".parse::<RequestId>().unwrap().as_str(), "00ff");
    }

    #[test]
    fn id_should_serialize_as_plain_string() {
        let id: RequestId = "abc123".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }
}
