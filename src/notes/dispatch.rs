//! # Dispatcher
//!
//! Maps each [`ActionKind`] to a handler through an explicit table and runs
//! it against the record store. Handlers pull their typed arguments out of
//! the [`ParsedInvocation`] and call into [`crate::commands`].
//!
//! A failed parse never reaches a handler: its diagnostic is reported and
//! the help handler runs instead. That is the only recovery path here.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::parser::ParsedInvocation;
use crate::registry::{ActionKind, OptionKey};
use crate::store::{Backend, RecordStore};

pub type Handler<B> = fn(&ParsedInvocation, &mut RecordStore<B>) -> Result<CmdResult>;

pub fn handler_for<B: Backend>(action: ActionKind) -> Handler<B> {
    match action {
        ActionKind::Add => add::<B>,
        ActionKind::Delete => delete::<B>,
        ActionKind::Get => get::<B>,
        ActionKind::Edit => edit::<B>,
        ActionKind::List => list::<B>,
        ActionKind::Help => help::<B>,
    }
}

/// Run the invocation. Parse warnings come first in the returned messages,
/// followed by the diagnostic of a failed parse, then the handler's own.
pub fn start<B: Backend>(
    invocation: &ParsedInvocation,
    store: &mut RecordStore<B>,
) -> Result<CmdResult> {
    let mut leading: Vec<CmdMessage> = invocation
        .warnings
        .iter()
        .map(|w| CmdMessage::warning(format!("WARN: {}", w)))
        .collect();

    let action = if invocation.success {
        invocation.action
    } else {
        if let Some(diagnostic) = &invocation.diagnostic {
            leading.push(CmdMessage::error(diagnostic.clone()));
        }
        ActionKind::Help
    };
    tracing::debug!(requested = %invocation.action, running = %action, "dispatching");

    let mut result = handler_for::<B>(action)(invocation, store)?;
    leading.append(&mut result.messages);
    result.messages = leading;
    Ok(result)
}

fn owned(invocation: &ParsedInvocation, key: OptionKey) -> Option<String> {
    invocation.text(key).map(str::to_string)
}

fn add<B: Backend>(inv: &ParsedInvocation, store: &mut RecordStore<B>) -> Result<CmdResult> {
    commands::add::run(
        store,
        owned(inv, OptionKey::Title).unwrap_or_default(),
        owned(inv, OptionKey::Msg).unwrap_or_default(),
    )
}

fn delete<B: Backend>(inv: &ParsedInvocation, store: &mut RecordStore<B>) -> Result<CmdResult> {
    commands::delete::run(store, inv.text(OptionKey::Id).unwrap_or_default())
}

fn get<B: Backend>(inv: &ParsedInvocation, store: &mut RecordStore<B>) -> Result<CmdResult> {
    commands::get::run(store, inv.text(OptionKey::Id).unwrap_or_default())
}

fn edit<B: Backend>(inv: &ParsedInvocation, store: &mut RecordStore<B>) -> Result<CmdResult> {
    commands::edit::run(
        store,
        inv.text(OptionKey::Id).unwrap_or_default(),
        owned(inv, OptionKey::Title),
        owned(inv, OptionKey::Msg),
    )
}

fn list<B: Backend>(inv: &ParsedInvocation, store: &mut RecordStore<B>) -> Result<CmdResult> {
    let mut warnings = Vec::new();
    let mut bound = |key: OptionKey| {
        let raw = inv.text(key)?;
        let parsed = commands::list::parse_filter_date(raw);
        if parsed.is_none() {
            warnings.push(CmdMessage::warning(format!(
                "WARN: cannot parse date '{}' for option '{}', filter not applied",
                raw, key
            )));
        }
        parsed
    };
    let query = commands::list::ListQuery {
        sort: inv.flag(OptionKey::Sort),
        before: bound(OptionKey::FilterBefore),
        after: bound(OptionKey::FilterAfter),
    };

    let mut result = commands::list::run(store, &query)?;
    warnings.append(&mut result.messages);
    result.messages = warnings;
    Ok(result)
}

fn help<B: Backend>(_inv: &ParsedInvocation, _store: &mut RecordStore<B>) -> Result<CmdResult> {
    Ok(commands::help::run())
}
