//! Data model and HTTP access for the event collection.

pub mod client;
pub mod manager;

use serde::{Deserialize, Deserializer, Serialize};

/// A calendar event as returned by the server.
///
/// The id is opaque to the client: it is stored as a string and echoed
/// back verbatim in update/delete paths. Servers disagree on whether ids
/// are JSON numbers or strings, so both are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "id_from_json")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for create and update: an event without its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub description: String,
}

fn id_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "event id must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let numeric: Event = serde_json::from_str(
            r#"{"id":42,"title":"A","date":"2024-01-01","description":""}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, "42");

        let text: Event =
            serde_json::from_str(r#"{"id":"ev-7","title":"B","date":"","description":"x"}"#)
                .unwrap();
        assert_eq!(text.id, "ev-7");
    }

    #[test]
    fn test_id_rejects_other_json_types() {
        let result: Result<Event, _> =
            serde_json::from_str(r#"{"id":[1],"title":"","date":"","description":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let event: Event = serde_json::from_str(r#"{"id":1,"title":"only title"}"#).unwrap();
        assert_eq!(event.title, "only title");
        assert_eq!(event.date, "");
        assert_eq!(event.description, "");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = EventDraft {
            title: "T".into(),
            date: "2024-01-01".into(),
            description: "".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "T", "date": "2024-01-01", "description": ""})
        );
    }
}
