//! # Command Layer
//!
//! One module per action. Each `run` function holds the business logic for
//! its action, takes plain Rust arguments, and returns a [`CmdResult`]
//! describing what to show. Nothing here writes to stdout or stderr.

use crate::codec::is_digits;
use crate::model::Record;

pub mod add;
pub mod delete;
pub mod edit;
pub mod get;
pub mod help;
pub mod list;

/// Shown when a lookup or listing has nothing to display.
pub const NO_DATA: &str = "No Data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to print, already in display order, each with the id label
    /// shown in its block.
    pub listed: Vec<(String, Record)>,
    /// Render the help page after everything else.
    pub show_help: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<(String, Record)>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }
}

/// Ids arrive as raw strings. Anything but a non-empty run of ASCII digits
/// is treated as "no such record".
pub fn parse_id(raw: &str) -> Option<u64> {
    if is_digits(raw) {
        raw.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_only_digits() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("0042"), Some(42));
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
