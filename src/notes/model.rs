use crate::codec::{decode_timestamp, encode_timestamp, format_iso};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A timestamp as found in the backing file.
///
/// Tagged strings that fail to decode are kept verbatim in `Raw` so that a
/// load followed by a save writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stamp {
    At(NaiveDateTime),
    Raw(String),
}

impl Stamp {
    pub fn from_raw(raw: String) -> Self {
        match decode_timestamp(&raw) {
            Some(ts) => Stamp::At(ts),
            None => Stamp::Raw(raw),
        }
    }

    pub fn at(&self) -> Option<NaiveDateTime> {
        match self {
            Stamp::At(ts) => Some(*ts),
            Stamp::Raw(_) => None,
        }
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp::At(ts) => f.write_str(&format_iso(ts)),
            Stamp::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for Stamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Stamp::At(ts) => serializer.serialize_str(&encode_timestamp(ts)),
            Stamp::Raw(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for Stamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Stamp::from_raw)
    }
}

/// One note. The field names on disk predate this crate and are kept for
/// compatibility with existing files.
///
/// Only the two time fields go through the timestamp tag. `title` and `msg`
/// are plain text, so a title such as `datetime_2024-01-01` is stored and
/// shown verbatim rather than being read back as a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub msg: String,
    #[serde(rename = "creation_time")]
    pub created_at: Stamp,
    #[serde(rename = "modification_time")]
    pub modified_at: Stamp,
}

impl Record {
    pub fn new(title: String, msg: String, now: NaiveDateTime) -> Self {
        Self {
            title,
            msg,
            created_at: Stamp::At(now),
            modified_at: Stamp::At(now),
        }
    }
}

/// The whole persisted state, keyed by record id, in document order.
pub type Notes = IndexMap<u64, Record>;
