//! The two directions between JSON callers and the binary log service API.
//!
//! PullLogs: binary `LogGroupList` body -> JSON text.
//! PutLogs: JSON `LogGroup` -> protobuf -> LZ4 block, plus its raw size.

use crate::compress::{compress_lz4, decompress_lz4};
use crate::config::CodecConfig;
use crate::decoder::parse_log_group_list;
use crate::error::{Error, Result};
use crate::model::{LogGroup, LogGroupList};

pub const HEADER_CONTENT_TYPE: &str = "content-type";
pub const HEADER_BODY_RAW_SIZE: &str = "x-log-bodyrawsize";
pub const HEADER_COMPRESS_TYPE: &str = "x-log-compresstype";
pub const CONTENT_TYPE_PROTOBUF: &str = "application/x-protobuf";
pub const COMPRESS_TYPE_LZ4: &str = "lz4";

/// Request headers that make PullLogs answer with an LZ4 compressed `LogGroupList`.
pub const PULL_LOGS_HEADERS: [(&str, &str); 2] = [
    ("Accept-Encoding", COMPRESS_TYPE_LZ4),
    ("accept", CONTENT_TYPE_PROTOBUF),
];

/// A compressed PutLogs body and the size of the protobuf it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutLogsPayload {
    pub data: Vec<u8>,
    pub raw_size: usize,
}

impl PutLogsPayload {
    /// Headers to send alongside [`PutLogsPayload::data`].
    pub fn headers(&self) -> [(&'static str, String); 3] {
        [
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_PROTOBUF.to_string()),
            (HEADER_BODY_RAW_SIZE, self.raw_size.to_string()),
            (HEADER_COMPRESS_TYPE, COMPRESS_TYPE_LZ4.to_string()),
        ]
    }

    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.data, self.raw_size)
    }
}

/// Stateless converter between the JSON and wire forms of log groups.
///
/// Holds only read-only settings, so one codec can be shared by any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct LogCodec {
    config: CodecConfig,
}

impl LogCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Renders a PullLogs response body as `{"LogGroups": [...]}`.
    ///
    /// An empty body yields an envelope with no groups.
    pub fn process_pull_logs_response(&self, body: &[u8]) -> Result<Vec<u8>> {
        let log_groups = parse_log_group_list(body).map_err(Error::PullTransform)?;
        let list = LogGroupList::from(log_groups);

        let json = if self.config.pretty_json {
            serde_json::to_vec_pretty(&list)
        } else {
            serde_json::to_vec(&list)
        }
        .map_err(Error::JsonSerialize)?;
        debug!("pull response: {} groups, {} bytes of json", list.log_groups.len(), json.len());
        Ok(json)
    }

    /// Same as [`LogCodec::process_pull_logs_response`] for a body sent with
    /// `x-log-compresstype: lz4`, where `raw_size` is its `x-log-bodyrawsize`.
    pub fn process_compressed_pull_logs_response(&self, body: &[u8], raw_size: usize) -> Result<Vec<u8>> {
        if body.is_empty() {
            return self.process_pull_logs_response(body);
        }
        let limit = self.config.max_raw_size;
        if limit > 0 && raw_size > limit {
            warn!("rejecting pull body: raw size {} exceeds limit {}", raw_size, limit);
            return Err(Error::RawSizeTooLarge { size: raw_size, limit });
        }
        let raw = decompress_lz4(body, raw_size)?;
        self.process_pull_logs_response(&raw)
    }

    /// Turns a JSON `LogGroup` into a PutLogs body.
    pub fn prepare_put_logs(&self, body: &[u8]) -> Result<PutLogsPayload> {
        if body.is_empty() {
            return Err(Error::EmptyBody);
        }

        let log_group: LogGroup = serde_json::from_slice(body).map_err(Error::JsonParse)?;
        if log_group.logs.is_empty() {
            return Err(Error::EmptyLogs);
        }

        let raw = log_group.encode_to_vec()?;
        let raw_size = raw.len();
        let data = compress_lz4(&raw).map_err(Error::Compress)?;

        let limit = self.config.max_payload_size;
        if limit > 0 && data.len() > limit {
            warn!("rejecting log group: {} compressed bytes exceeds limit {}", data.len(), limit);
            return Err(Error::PayloadTooLarge { size: data.len(), limit });
        }

        debug!(
            "put logs payload: {} logs, raw {} bytes, compressed {} bytes",
            log_group.logs.len(),
            raw_size,
            data.len()
        );
        Ok(PutLogsPayload { data, raw_size })
    }
}
