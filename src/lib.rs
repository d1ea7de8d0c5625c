//! Codec for the LogGroup payloads of the Aliyun Log Service.
//!
//! Converts PullLogs response bodies to JSON, and JSON log groups to the LZ4
//! compressed protobuf bodies PutLogs expects. Transport, signing and retries
//! belong to the caller.

#[macro_use]
extern crate log;

pub mod compress;
pub mod config;
pub mod decoder;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod proto;

pub use crate::compress::{compress_bound, compress_lz4, decompress_lz4};
pub use crate::config::CodecConfig;
pub use crate::decoder::parse_log_group_list;
pub use crate::error::{CompressError, DecodeError, Error, Result};
pub use crate::model::{Log, LogContent, LogGroup, LogGroupList, LogTag, Pair};
pub use crate::pipeline::{LogCodec, PutLogsPayload, PULL_LOGS_HEADERS};

/// Renders a PullLogs response body as JSON with default settings.
pub fn process_pull_logs_response(body: &[u8]) -> Result<Vec<u8>> {
    LogCodec::default().process_pull_logs_response(body)
}

/// Builds a PutLogs body from a JSON `LogGroup` with default settings,
/// returning the compressed bytes and the uncompressed protobuf size.
pub fn prepare_put_logs_data(body: &[u8]) -> Result<(Vec<u8>, usize)> {
    LogCodec::default().prepare_put_logs(body).map(PutLogsPayload::into_parts)
}
