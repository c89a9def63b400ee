use serde::{Deserialize, Serialize};

/// A stored URL record, the only persisted entity.
///
/// Records are written once at creation time and never updated or
/// deleted by the core. The short code is not part of the record; it is
/// the object store key (see [`ShortCode::object_key`](crate::ShortCode::object_key)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    /// The destination URL. Opaque beyond being non-empty.
    pub original_url: String,
    /// Absolute Unix epoch seconds after which the record is expired.
    pub expiration_time: i64,
}

impl UrlRecord {
    /// Serializes the record to its stored JSON representation.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Parses a record from its stored JSON representation.
    pub fn from_json_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Whether the record is expired at `now` (epoch seconds).
    ///
    /// A record is live up to and including its expiration second.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiration_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_is_exact() {
        let record = UrlRecord {
            original_url: "https://example.com".to_string(),
            expiration_time: 9_999_999_999,
        };

        let bytes = record.to_json_bytes().unwrap();
        let decoded = UrlRecord::from_json_bytes(&bytes).unwrap();

        assert_eq!(decoded, record);
    }

    #[test]
    fn stored_shape_uses_camel_case_keys() {
        let record = UrlRecord {
            original_url: "https://example.com".to_string(),
            expiration_time: 42,
        };

        let json = String::from_utf8(record.to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"originalUrl":"https://example.com","expirationTime":42}"#
        );
    }

    #[test]
    fn parses_stored_shape() {
        let bytes = br#"{"originalUrl":"https://example.com","expirationTime":1700000000}"#;

        let record = UrlRecord::from_json_bytes(bytes).unwrap();
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.expiration_time, 1_700_000_000);
    }

    #[test]
    fn malformed_bytes_fail_to_parse() {
        assert!(UrlRecord::from_json_bytes(b"not json").is_err());
        assert!(UrlRecord::from_json_bytes(br#"{"originalUrl":"x"}"#).is_err());
        assert!(UrlRecord::from_json_bytes(br#"{"expirationTime":"soon"}"#).is_err());
    }

    #[test]
    fn expiration_is_strictly_after() {
        let record = UrlRecord {
            original_url: "https://example.com".to_string(),
            expiration_time: 100,
        };

        assert!(!record.is_expired_at(99));
        assert!(!record.is_expired_at(100));
        assert!(record.is_expired_at(101));
    }
}
