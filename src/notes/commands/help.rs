use crate::commands::CmdResult;

/// The help page is rendered by the presentation layer from the registry;
/// this only asks for it.
pub fn run() -> CmdResult {
    CmdResult::default().with_help()
}
