//! # Storage Layer
//!
//! Persistence is split in two, the same way raw I/O is kept apart from
//! record logic elsewhere in the crate:
//!
//! - [`Backend`]: moves the serialized document in and out of its medium.
//!   [`fs::FileBackend`] is the production implementation; `memory::MemBackend`
//!   backs the unit tests.
//! - [`RecordStore`]: owns the decoded [`Notes`], assigns ids, stamps
//!   creation/modification times, and rewrites the whole document through
//!   the backend after every effective mutation.
//!
//! ## Storage Format
//!
//! ```text
//! notes.json
//! {
//!   "0": {
//!     "title": "groceries",
//!     "msg": "milk, eggs",
//!     "creation_time": "datetime_2024-01-01T12:00:00.123456",
//!     "modification_time": "datetime_2024-01-01T12:00:00.123456"
//!   }
//! }
//! ```
//!
//! See [`crate::codec`] for the timestamp tag and digit-key rules.
//!
//! ## Limitations
//!
//! The file is loaded once and overwritten in full on each mutation. Writes
//! are not atomic and there is no locking: two invocations against the same
//! file race, and a crash mid-write can truncate it.

use crate::codec::{decode_key, StoreKey};
use crate::error::{NotesError, Result};
use crate::model::{Notes, Record, Stamp};
use chrono::{Local, NaiveDateTime, Timelike};
use indexmap::IndexMap;

pub mod fs;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

/// Raw document I/O for a record store.
pub trait Backend {
    /// Read the persisted document. Returns `Ok(None)` when nothing has been
    /// persisted yet; that is not an error.
    fn load_raw(&self) -> Result<Option<String>>;

    /// Replace the persisted document with `contents`.
    fn save_raw(&self, contents: &str) -> Result<()>;
}

type Clock = Box<dyn Fn() -> NaiveDateTime>;

pub struct RecordStore<B: Backend> {
    backend: B,
    records: Notes,
    clock: Clock,
}

impl<B: Backend> RecordStore<B> {
    /// Load the store from `backend`. A document that exists but cannot be
    /// decoded is fatal; no partial recovery is attempted.
    pub fn load(backend: B) -> Result<Self> {
        let records = match backend.load_raw()? {
            Some(raw) => decode_notes(&raw)?,
            None => Notes::new(),
        };
        tracing::debug!(records = records.len(), "store loaded");
        Ok(Self {
            backend,
            records,
            clock: Box::new(local_now),
        })
    }

    /// Replace the time source used for creation/modification stamps.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Insert a new record and persist. Ids are one above the current
    /// maximum, starting at 0. New records go to the end of the document.
    pub fn add(&mut self, title: String, msg: String) -> Result<u64> {
        let id = self.next_id()?;
        let now = (self.clock)();
        self.records.insert(id, Record::new(title, msg, now));
        self.save()?;
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&Record> {
        self.records.get(&id)
    }

    /// All records in document order: the order of the loaded file, with
    /// records added since appended at the end.
    pub fn get_all(&self) -> &Notes {
        &self.records
    }

    /// Change the supplied fields of `id` and refresh its modification time.
    /// Returns `false` without touching the backend when `id` is unknown.
    pub fn update(&mut self, id: u64, title: Option<String>, msg: Option<String>) -> Result<bool> {
        let now = (self.clock)();
        let Some(record) = self.records.get_mut(&id) else {
            return Ok(false);
        };
        if let Some(title) = title {
            record.title = title;
        }
        if let Some(msg) = msg {
            record.msg = msg;
        }
        // modified_at never precedes created_at, even if the clock stepped back
        let refreshed = match record.created_at.at() {
            Some(created) if created > now => created,
            _ => now,
        };
        record.modified_at = Stamp::At(refreshed);
        self.save()?;
        Ok(true)
    }

    /// Remove `id` and persist. Returns `false` without touching the backend
    /// when `id` is unknown.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        if self.records.shift_remove(&id).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Serialize every record and overwrite the backing document.
    pub fn save(&self) -> Result<()> {
        let raw = encode_notes(&self.records)?;
        self.backend.save_raw(&raw)?;
        tracing::debug!(records = self.records.len(), "store saved");
        Ok(())
    }

    fn next_id(&self) -> Result<u64> {
        match self.records.keys().max() {
            None => Ok(0),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| NotesError::Store("id space exhausted".to_string())),
        }
    }
}

/// Pretty-printed JSON with two-space indentation, ids as object keys.
pub fn encode_notes(notes: &Notes) -> Result<String> {
    serde_json::to_string_pretty(notes).map_err(NotesError::Serialization)
}

pub fn decode_notes(raw: &str) -> Result<Notes> {
    let entries: IndexMap<String, Record> =
        serde_json::from_str(raw).map_err(NotesError::Serialization)?;
    let mut notes = Notes::new();
    for (key, record) in entries {
        match decode_key(&key) {
            StoreKey::Id(id) => {
                notes.insert(id, record);
            }
            StoreKey::Name(name) => {
                return Err(NotesError::Store(format!(
                    "unexpected record key '{}', keys must be numeric ids",
                    name
                )));
            }
        }
    }
    Ok(notes)
}

/// Local wall-clock time truncated to microseconds, the precision the
/// backing format stores.
fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    let micros = now.nanosecond() / 1_000 * 1_000;
    now.with_nanosecond(micros).unwrap_or(now)
}
