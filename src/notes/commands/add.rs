use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Backend, RecordStore};

pub fn run<B: Backend>(store: &mut RecordStore<B>, title: String, msg: String) -> Result<CmdResult> {
    let id = store.add(title, msg)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record added: {}", id)));
    Ok(result)
}
