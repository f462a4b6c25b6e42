//! Types for responses from the store to the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vocab_core::Tags;

/// A vocabulary record as sent by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub word: String,
    pub translation_english: String,
    pub translation_farsi: String,
    /// Epoch milliseconds.
    #[serde(default)]
    pub added_at: Option<i64>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub last_edited_at: Option<i64>,
    #[serde(default)]
    pub tags: Option<SerializedTags>,
}

/// The store keeps tags as a JSON-encoded string, but a plain array is accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerializedTags {
    Encoded(String),
    List(Vec<String>),
}

impl SerializedTags {
    pub fn decode(&self) -> Result<Tags, serde_json::Error> {
        match self {
            Self::Encoded(encoded) if encoded.trim().is_empty() => Ok(Tags::new()),
            Self::Encoded(encoded) => {
                let tags = serde_json::from_str::<Vec<String>>(encoded)?;
                Ok(tags.into_iter().collect())
            }
            Self::List(tags) => Ok(tags.iter().collect()),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid tags for '{word}': {source}")]
    Tags {
        word: String,
        source: serde_json::Error,
    },
    #[error("Invalid timestamp for '{word}': {millis}")]
    Timestamp { word: String, millis: i64 },
}

impl TryFrom<Vocabulary> for vocab_core::Vocabulary {
    type Error = DecodeError;

    fn try_from(value: Vocabulary) -> Result<Self, Self::Error> {
        let tags = match &value.tags {
            Some(tags) => tags.decode().map_err(|source| DecodeError::Tags {
                word: value.word.clone(),
                source,
            })?,
            None => Tags::new(),
        };
        let timestamp = |millis: Option<i64>| -> Result<Option<DateTime<Utc>>, DecodeError> {
            millis
                .map(|millis| {
                    DateTime::from_timestamp_millis(millis).ok_or_else(|| DecodeError::Timestamp {
                        word: value.word.clone(),
                        millis,
                    })
                })
                .transpose()
        };
        let added_at = timestamp(value.added_at)?;
        let last_edited_at = timestamp(value.last_edited_at)?;

        Ok(Self {
            word: value.word,
            translation_english: value.translation_english,
            translation_farsi: value.translation_farsi,
            added_at,
            last_edited_at,
            tags,
        })
    }
}

/// Body of a failed request, `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub error: ErrorDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Message { message: Option<String> },
    Text(String),
}

impl Error {
    /// Extracts the reason from a failure body, if there is a non-blank one.
    pub fn message_from_body(body: &[u8]) -> Option<String> {
        let error = serde_json::from_slice::<Error>(body).ok()?;
        let message = match error.error {
            ErrorDetails::Message { message } => message?,
            ErrorDetails::Text(text) => text,
        };
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode(json: &str) -> Result<vocab_core::Vocabulary, DecodeError> {
        let wire = serde_json::from_str::<Vocabulary>(json).unwrap();
        wire.try_into()
    }

    #[test]
    fn decodes_encoded_tags() {
        let vocab = decode(
            r#"{"word":"book","translationEnglish":"book","translationFarsi":"کتاب",
                "addedAt":1700000000000,"lastEditedAt":1700000100000,
                "tags":"[\"object\",\"nature\"]"}"#,
        )
        .unwrap();
        assert_eq!(vocab.word, "book");
        assert_eq!(vocab.tags.join(","), "nature,object");
        assert_eq!(
            vocab.added_at.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_000)
        );
        assert_eq!(
            vocab.last_edited_at.map(|t| t.timestamp_millis()),
            Some(1_700_000_100_000)
        );
    }

    #[test]
    fn accepts_missing_and_plain_tags() {
        let vocab = decode(
            r#"{"word":"sky","translationEnglish":"sky","translationFarsi":"آسمان","tags":null}"#,
        )
        .unwrap();
        assert!(vocab.tags.is_empty());
        assert!(vocab.added_at.is_none());

        let vocab = decode(
            r#"{"word":"sky","translationEnglish":"sky","translationFarsi":"آسمان","tags":""}"#,
        )
        .unwrap();
        assert!(vocab.tags.is_empty());

        let vocab = decode(
            r#"{"word":"sky","translationEnglish":"sky","translationFarsi":"آسمان","tags":["nature","nature"]}"#,
        )
        .unwrap();
        assert_eq!(vocab.tags.len(), 1);
    }

    #[test]
    fn rejects_malformed_tags() {
        let err = decode(
            r#"{"word":"sky","translationEnglish":"sky","translationFarsi":"آسمان","tags":"nature"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecodeError::Tags { word, .. } if word == "sky"));
    }

    #[test]
    fn extracts_error_message() {
        let body = br#"{"error":{"message":"Word already exists"}}"#;
        assert_eq!(
            Error::message_from_body(body).as_deref(),
            Some("Word already exists")
        );
        assert_eq!(
            Error::message_from_body(br#"{"error":"Not found"}"#).as_deref(),
            Some("Not found")
        );
    }

    #[test]
    fn missing_error_message_is_none() {
        assert_eq!(Error::message_from_body(br#"{"error":{}}"#), None);
        assert_eq!(Error::message_from_body(br#"{"error":{"message":" "}}"#), None);
        assert_eq!(Error::message_from_body(b"Internal Server Error"), None);
        assert_eq!(Error::message_from_body(b""), None);
    }
}
