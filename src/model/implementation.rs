use bytes::BytesMut;
use prost::Message;

use super::{Log, LogGroup, LogGroupList, Pair};
use crate::error::{DecodeError, Error, Result};
use crate::proto;

impl From<&Pair> for proto::Pair {
    fn from(pair: &Pair) -> Self {
        proto::Pair { key: pair.key.clone(), value: pair.value.clone() }
    }
}

impl From<proto::Pair> for Pair {
    fn from(pair: proto::Pair) -> Self {
        let proto::Pair { key, value } = pair;
        Pair { key, value }
    }
}

impl From<&Log> for proto::Log {
    fn from(log: &Log) -> Self {
        proto::Log {
            time: Some(log.time),
            contents: log.contents.iter().map(Into::into).collect(),
        }
    }
}

impl From<&LogGroup> for proto::LogGroup {
    fn from(group: &LogGroup) -> Self {
        proto::LogGroup {
            logs: group.logs.iter().map(Into::into).collect(),
            reserved: group.reserved.clone(),
            topic: group.topic.clone(),
            source: group.source.clone(),
            log_tags: group.log_tags.iter().map(Into::into).collect(),
        }
    }
}

impl From<&LogGroupList> for proto::LogGroupList {
    fn from(list: &LogGroupList) -> Self {
        proto::LogGroupList {
            log_group_list: list.log_groups.iter().map(Into::into).collect(),
        }
    }
}

impl LogGroup {
    /// Converts a decoded wire group, rejecting any log without a `Time`.
    /// `index` is the position of the group in its envelope, for error reporting.
    pub(crate) fn from_wire(group: proto::LogGroup, index: usize) -> std::result::Result<Self, DecodeError> {
        let proto::LogGroup { logs, reserved, topic, source, log_tags } = group;
        let logs = logs
            .into_iter()
            .enumerate()
            .map(|(i, log)| {
                let time = log.time.ok_or(DecodeError::MissingTime { group: index, log: i })?;
                Ok(Log {
                    time,
                    contents: log.contents.into_iter().map(Into::into).collect(),
                })
            })
            .collect::<std::result::Result<Vec<_>, DecodeError>>()?;

        Ok(LogGroup {
            logs,
            reserved,
            topic,
            source,
            log_tags: log_tags.into_iter().map(Into::into).collect(),
        })
    }

    /// Serializes this group to its protobuf wire form.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        encode_message(&proto::LogGroup::from(self))
    }
}

impl LogGroupList {
    /// Serializes the whole envelope to its protobuf wire form.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        encode_message(&proto::LogGroupList::from(self))
    }

    /// Parses `data` as a `LogGroupList` envelope.
    ///
    /// This does not apply the "at least one group" policy of
    /// [`crate::decoder::parse_log_group_list`]; an empty buffer decodes to an
    /// empty envelope here.
    pub fn decode(data: &[u8]) -> std::result::Result<Self, DecodeError> {
        let list = proto::LogGroupList::decode(data).map_err(DecodeError::Envelope)?;
        let log_groups = list
            .log_group_list
            .into_iter()
            .enumerate()
            .map(|(i, group)| LogGroup::from_wire(group, i))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(LogGroupList { log_groups })
    }
}

fn encode_message<M: Message>(message: &M) -> Result<Vec<u8>> {
    let mut buf = BytesMut::with_capacity(message.encoded_len());
    message.encode(&mut buf).map_err(Error::Serialize)?;
    trace!("encoded {} bytes of protobuf", buf.len());
    Ok(buf.to_vec())
}
