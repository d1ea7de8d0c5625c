//! Decoding of pull-style response bodies.
//!
//! The service may answer with a `LogGroupList`; a bare `LogGroup` is not
//! accepted. Its field 1 is a `Log`, whose varint `Time` does not fit the
//! length-delimited field 1 of the envelope, so such input fails as
//! [`DecodeError::Envelope`].

use crate::error::DecodeError;
use crate::model::{LogGroup, LogGroupList};

/// Parses `data` as a `LogGroupList` and returns its groups.
///
/// An empty buffer is "nothing to process" and yields `Ok(vec![])`. A
/// non-empty buffer must carry at least one group, otherwise
/// [`DecodeError::NoLogGroup`] is returned.
pub fn parse_log_group_list(data: &[u8]) -> Result<Vec<LogGroup>, DecodeError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let LogGroupList { log_groups } = LogGroupList::decode(data)?;
    if log_groups.is_empty() {
        return Err(DecodeError::NoLogGroup);
    }
    debug!("decoded {} log groups from {} bytes", log_groups.len(), data.len());
    Ok(log_groups)
}

#[cfg(test)]
mod test {
    use prost::Message;

    use super::*;
    use crate::proto;

    fn wire_group(topic: &str) -> proto::LogGroup {
        proto::LogGroup {
            logs: vec![proto::Log { time: Some(1234567890), contents: vec![] }],
            topic: Some(topic.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_data() {
        let result = parse_log_group_list(&[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_valid_log_group_list() {
        let data = proto::LogGroupList { log_group_list: vec![wire_group("test-topic")] }.encode_to_vec();
        let result = parse_log_group_list(&data).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].topic.as_deref(), Some("test-topic"));
        assert_eq!(result[0].logs[0].time, 1234567890);
    }

    #[test]
    fn test_groups_keep_order() {
        let data = proto::LogGroupList {
            log_group_list: vec![wire_group("a"), wire_group("b"), wire_group("c")],
        }
        .encode_to_vec();
        let topics: Vec<_> = parse_log_group_list(&data)
            .unwrap()
            .into_iter()
            .map(|g| g.topic.unwrap())
            .collect();
        assert_eq!(topics, ["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_data() {
        let err = parse_log_group_list(b"invalid protobuf data").unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)));
        assert!(err.to_string().contains("cannot parse proto data"));
    }

    #[test]
    fn test_envelope_without_groups() {
        // a single unknown varint field: well formed, but carries no group
        let err = parse_log_group_list(&[0x10, 0x01]).unwrap_err();
        assert!(matches!(err, DecodeError::NoLogGroup));
        assert!(err.to_string().contains("cannot parse proto data"));
    }

    #[test]
    fn test_bare_log_group_is_rejected() {
        let data = wire_group("bare").encode_to_vec();
        let err = parse_log_group_list(&data).unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn test_round_trip_per_group() {
        let groups = vec![
            wire_group("first"),
            proto::LogGroup {
                logs: vec![proto::Log {
                    time: Some(42),
                    contents: vec![proto::Pair { key: "k".into(), value: "v".into() }],
                }],
                reserved: Some("x".into()),
                topic: None,
                source: Some("127.0.0.1".into()),
                log_tags: vec![proto::Pair { key: "env".into(), value: "dev".into() }],
            },
        ];
        let data = proto::LogGroupList { log_group_list: groups.clone() }.encode_to_vec();

        let decoded = parse_log_group_list(&data).unwrap();
        assert_eq!(decoded.len(), groups.len());
        for (group, wire) in decoded.iter().zip(&groups) {
            assert_eq!(group.encode_to_vec().unwrap(), wire.encode_to_vec());
        }
    }
}
