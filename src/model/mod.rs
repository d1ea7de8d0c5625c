//! In-memory schema of a log batch.
//!
//! These types are the single canonical form of the data. The JSON adapter is
//! the serde derives below, using the same field names as the protobuf
//! definition; the wire adapter lives in `implementation`.

mod implementation;

use serde::{Deserialize, Deserializer, Serialize};

/// A key/value pair. Keys are not unique within a record and order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pair {
    pub key: String,
    pub value: String,
}

/// Reads a JSON list, treating `null` like a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub type LogContent = Pair;
pub type LogTag = Pair;

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// The minimal unit representing a log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Log {
    /// UNIX time in seconds. Required in both JSON and wire form.
    pub time: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contents: Vec<LogContent>,
}

impl Log {
    pub fn new(time: u32) -> Self {
        Self { time, contents: Vec::new() }
    }

    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.contents.push(Pair::new(key, value));
        self
    }
}

/// A batch of logs sharing topic, source and tags.
///
/// `None` optional fields are left out of both the JSON and the wire output,
/// so an omitted topic never turns into `Some("")` on a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogGroup {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logs: Vec<Log>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub log_tags: Vec<LogTag>,
}

impl LogGroup {
    pub fn new(logs: Vec<Log>) -> Self {
        Self { logs, ..Default::default() }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.log_tags.push(Pair::new(key, value));
        self
    }
}

/// The envelope every batch travels in, on the wire and in pull output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogGroupList {
    #[serde(rename = "LogGroups", default, deserialize_with = "null_as_empty")]
    pub log_groups: Vec<LogGroup>,
}

impl From<Vec<LogGroup>> for LogGroupList {
    fn from(log_groups: Vec<LogGroup>) -> Self {
        Self { log_groups }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let group = LogGroup::new(vec![Log::new(1712345678).with_content("method", "POST")])
            .with_topic("web-logs")
            .with_tag("env", "prod");
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Logs": [{"Time": 1712345678, "Contents": [{"Key": "method", "Value": "POST"}]}],
                "Topic": "web-logs",
                "LogTags": [{"Key": "env", "Value": "prod"}]
            })
        );
    }

    #[test]
    fn test_absent_and_empty_topic_differ() {
        let absent = LogGroup::new(vec![Log::new(1)]);
        let empty = LogGroup::new(vec![Log::new(1)]).with_topic("");

        let absent_json = serde_json::to_string(&absent).unwrap();
        let empty_json = serde_json::to_string(&empty).unwrap();
        assert!(!absent_json.contains("Topic"));
        assert!(empty_json.contains(r#""Topic":"""#));

        let back: LogGroup = serde_json::from_str(&absent_json).unwrap();
        assert_eq!(back.topic, None);
        let back: LogGroup = serde_json::from_str(&empty_json).unwrap();
        assert_eq!(back.topic.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_time_is_rejected() {
        let result = serde_json::from_str::<Log>(r#"{"Contents":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_keys_keep_order() {
        let log: Log = serde_json::from_str(
            r#"{"Time":5,"Contents":[{"Key":"a","Value":"1"},{"Key":"a","Value":"2"},{"Key":"b","Value":"3"}]}"#,
        )
        .unwrap();
        let values: Vec<_> = log.contents.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["1", "2", "3"]);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let group: LogGroup = serde_json::from_str(r#"{"Topic":"t"}"#).unwrap();
        assert!(group.logs.is_empty());
        assert!(group.log_tags.is_empty());
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let group: LogGroup =
            serde_json::from_str(r#"{"Logs":[{"Time":1,"Contents":null}],"LogTags":null}"#).unwrap();
        assert!(group.logs[0].contents.is_empty());
        assert!(group.log_tags.is_empty());

        let group: LogGroup = serde_json::from_str(r#"{"Logs":null}"#).unwrap();
        assert!(group.logs.is_empty());

        let list: LogGroupList = serde_json::from_str(r#"{"LogGroups":null}"#).unwrap();
        assert!(list.log_groups.is_empty());
    }
}
