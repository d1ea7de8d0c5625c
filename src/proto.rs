//! Wire messages of the log service, derived from https://help.aliyun.com/document_detail/29055.html
//! ```protobuf
//! message Log
//! {
//!     required uint32 Time = 1;// UNIX Time Format
//!     message Content
//!     {
//!         required string Key = 1;
//!         required string Value = 2;
//!     }
//!     repeated Content Contents = 2;
//! }
//!
//! message LogTag
//! {
//!     required string Key = 1;
//!     required string Value = 2;
//! }
//!
//! message LogGroup
//! {
//!     repeated Log Logs= 1;
//!     optional string Reserved = 2; // reserved fields
//!     optional string Topic = 3;
//!     optional string Source = 4;
//!     repeated LogTag LogTags = 6;
//! }
//!
//! message LogGroupList
//! {
//!     repeated LogGroup logGroupList = 1;
//! }
//! ```
//!
//! `Time` is declared `optional` here even though the service marks it
//! `required`: the encoding is identical, and prost would otherwise default a
//! missing value to zero instead of letting the decoder reject it.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct Log {
    /// UNIX Time Stamp
    #[prost(uint32, optional, tag = "1")]
    pub time: Option<u32>,
    #[prost(message, repeated, tag = "2")]
    pub contents: Vec<Pair>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Pair {
    #[prost(string, required, tag = "1")]
    pub key: String,
    #[prost(string, required, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct LogGroup {
    #[prost(message, repeated, tag = "1")]
    pub logs: Vec<Log>,
    /// reserved fields
    #[prost(string, optional, tag = "2")]
    pub reserved: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub topic: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub source: Option<String>,
    #[prost(message, repeated, tag = "6")]
    pub log_tags: Vec<Pair>,
}

#[derive(Clone, PartialEq, Message)]
pub struct LogGroupList {
    #[prost(message, repeated, tag = "1")]
    pub log_group_list: Vec<LogGroup>,
}
