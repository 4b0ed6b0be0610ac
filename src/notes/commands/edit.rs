use crate::commands::{parse_id, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Backend, RecordStore};

/// Replace the given fields; `None` leaves a field as it is. The
/// modification time is refreshed even when neither field is given.
pub fn run<B: Backend>(
    store: &mut RecordStore<B>,
    raw_id: &str,
    title: Option<String>,
    msg: Option<String>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(id) = parse_id(raw_id) {
        if store.update(id, title, msg)? {
            result.add_message(CmdMessage::success(format!("Record updated: {}", id)));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_iso;
    use crate::store::memory::MemBackend;
    use std::cell::Cell;
    use std::rc::Rc;

    fn store() -> RecordStore<MemBackend> {
        let minutes = Rc::new(Cell::new(0i64));
        let base = parse_iso("2024-06-01T10:00:00").unwrap();
        let mut store = RecordStore::load(MemBackend::new())
            .unwrap()
            .with_clock(move || {
                let n = minutes.get();
                minutes.set(n + 1);
                base + chrono::Duration::minutes(n)
            });
        store.add("title".into(), "body".into()).unwrap();
        store
    }

    #[test]
    fn changes_only_msg() {
        let mut store = store();
        let before = store.get(0).unwrap().clone();
        let result = run(&mut store, "0", None, Some("x".into())).unwrap();

        let after = store.get(0).unwrap();
        assert_eq!(after.title, "title");
        assert_eq!(after.msg, "x");
        assert!(after.modified_at.at() > before.modified_at.at());
        assert_eq!(result.messages[0].content, "Record updated: 0");
    }

    #[test]
    fn changes_both_fields() {
        let mut store = store();
        run(&mut store, "0", Some("T".into()), Some("M".into())).unwrap();
        let after = store.get(0).unwrap();
        assert_eq!((after.title.as_str(), after.msg.as_str()), ("T", "M"));
    }

    #[test]
    fn touches_modified_time_without_fields() {
        let mut store = store();
        let before = store.get(0).unwrap().clone();
        run(&mut store, "0", None, None).unwrap();
        let after = store.get(0).unwrap();
        assert_eq!(after.title, before.title);
        assert_ne!(after.modified_at, before.modified_at);
    }

    #[test]
    fn unknown_id_is_silent() {
        let mut store = store();
        let result = run(&mut store, "3", Some("T".into()), None).unwrap();
        assert!(result.messages.is_empty());
        let result = run(&mut store, "zero", Some("T".into()), None).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(store.get(0).unwrap().title, "title");
    }
}
