use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Запись лога: непрозрачные байты + offset, назначенный логом.
///
/// В JSON `value` пишется как base64 (standard, с padding). При чтении
/// принимается base64 строка, массив байт или `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(
        default,
        serialize_with = "serialize_value",
        deserialize_with = "deserialize_value"
    )]
    pub value: Vec<u8>,
    #[serde(default)]
    pub offset: u64,
}

impl Record {
    /// Запись без offset'а: его назначит `Log::append`.
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            offset: 0,
        }
    }
}

fn serialize_value<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(value);
    serializer.serialize_str(&encoded)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Base64(String),
    Bytes(Vec<u8>),
}

fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    match Option::<ValueRepr>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(ValueRepr::Bytes(bytes)) => Ok(bytes),
        Some(ValueRepr::Base64(b64)) => base64::engine::general_purpose::STANDARD
            .decode(b64)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_value_as_base64() {
        // given
        let record = Record {
            value: b"hello".to_vec(),
            offset: 3,
        };

        // when
        let json = serde_json::to_string(&record).unwrap();

        // then
        assert_eq!(json, r#"{"value":"aGVsbG8=","offset":3}"#);
    }

    #[test]
    fn should_decode_base64_value() {
        let record: Record = serde_json::from_str(r#"{"value":"aGVsbG8=","offset":7}"#).unwrap();

        assert_eq!(record.value, b"hello");
        assert_eq!(record.offset, 7);
    }

    #[test]
    fn should_decode_byte_array_value() {
        let record: Record = serde_json::from_str(r#"{"value":[104,105]}"#).unwrap();

        assert_eq!(record.value, b"hi");
        assert_eq!(record.offset, 0);
    }

    #[test]
    fn should_treat_missing_or_null_value_as_empty() {
        let missing: Record = serde_json::from_str("{}").unwrap();
        let null: Record = serde_json::from_str(r#"{"value":null}"#).unwrap();

        assert!(missing.value.is_empty());
        assert!(null.value.is_empty());
    }

    #[test]
    fn should_reject_invalid_base64() {
        let result = serde_json::from_str::<Record>(r#"{"value":"not base64!"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn should_reject_out_of_range_byte() {
        let result = serde_json::from_str::<Record>(r#"{"value":[1,256]}"#);

        assert!(result.is_err());
    }
}
