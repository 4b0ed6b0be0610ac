use crate::commands::{parse_id, CmdMessage, CmdResult, NO_DATA};
use crate::error::Result;
use crate::store::{Backend, RecordStore};

/// The record block echoes the id as it was typed, so `--id 007` shows
/// `id: 007`.
pub fn run<B: Backend>(store: &RecordStore<B>, raw_id: &str) -> Result<CmdResult> {
    let found = parse_id(raw_id)
        .and_then(|id| store.get(id))
        .map(|record| (raw_id.to_string(), record.clone()));

    let result = match found {
        Some(entry) => CmdResult::default().with_listed(vec![entry]),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(NO_DATA));
            result
        }
    };
    Ok(result)
}
