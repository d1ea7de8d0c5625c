pub type Result<T> = std::result::Result<T, Error>;

// Causes are rendered into the message; no variant exposes a `source()`.

/// Failures of the wire decoder.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("cannot parse proto data as LogGroupList: {0}")]
    Envelope(prost::DecodeError),
    #[error("cannot parse proto data: no LogGroup or LogGroupList")]
    NoLogGroup,
    #[error("cannot parse proto data: log {log} of group {group} has no Time")]
    MissingTime { group: usize, log: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum CompressError {
    #[error("data cannot be empty: input must not be empty")]
    EmptyInput,
    #[error("lz4 block compression failed: {0}")]
    Lz4(lz4_flex::block::CompressError),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("parse proto object failed: {0}")]
    PullTransform(DecodeError),
    #[error("lz4 decompress failed: {0}")]
    Decompress(lz4_flex::block::DecompressError),
    #[error("body raw size mismatch: expected {expected} bytes, got {actual}")]
    RawSizeMismatch { expected: usize, actual: usize },
    #[error("body raw size {size} exceeds limit of {limit} bytes")]
    RawSizeTooLarge { size: usize, limit: usize },
    #[error("serialization failed: {0}")]
    JsonSerialize(serde_json::Error),
    #[error("no logs provided, please check the input")]
    EmptyBody,
    #[error("parse json failed: {0}")]
    JsonParse(serde_json::Error),
    #[error("log cannot be empty, please check")]
    EmptyLogs,
    #[error("serialize pb failed: {0}")]
    Serialize(prost::EncodeError),
    #[error("lz4 compress failed: {0}")]
    Compress(CompressError),
    #[error("log group size is too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },
}
