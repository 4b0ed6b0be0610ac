use crate::commands::{parse_id, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Backend, RecordStore};

/// Unknown and non-numeric ids are a silent no-op.
pub fn run<B: Backend>(store: &mut RecordStore<B>, raw_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(id) = parse_id(raw_id) {
        if store.delete(id)? {
            result.add_message(CmdMessage::success(format!("Record deleted: {}", id)));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    #[test]
    fn deletes_existing_record() {
        let mut store = RecordStore::load(MemBackend::new()).unwrap();
        store.add("a".into(), "b".into()).unwrap();
        let result = run(&mut store, "0").unwrap();
        assert!(store.get(0).is_none());
        assert_eq!(result.messages[0].content, "Record deleted: 0");
    }

    #[test]
    fn missing_or_bad_id_is_silent() {
        let mut store = RecordStore::load(MemBackend::new()).unwrap();
        store.add("a".into(), "b".into()).unwrap();
        let writes = store.backend().write_count();

        for raw in ["9", "x", "1e3"] {
            let result = run(&mut store, raw).unwrap();
            assert!(result.messages.is_empty());
        }
        assert_eq!(store.backend().write_count(), writes);
        assert!(store.get(0).is_some());
    }
}
