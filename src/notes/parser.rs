//! # Argument Parser
//!
//! Turns the user's argument list (program name already removed) into a
//! [`ParsedInvocation`]. Parsing runs in two stages.
//!
//! **Action resolution** looks at the whole list first:
//!
//! | input                          | action | success | diagnostic            |
//! |--------------------------------|--------|---------|-----------------------|
//! | empty                          | help   | no      | none                  |
//! | `-h`/`--help` at any position  | help   | yes     | none                  |
//! | unknown first token            | help   | no      | names valid actions   |
//! | known first token              | that   | scan    |                       |
//!
//! **Option scanning** walks the remaining tokens left to right. Values start
//! seeded for every required option (parameters as [`OptionValue::Missing`],
//! flags as `false`). A parameter option takes the next token as its value
//! whatever it looks like; a flag takes nothing. Options the action does not
//! declare are recorded anyway, with a warning. Unknown tokens are skipped
//! with a warning and never swallow a following token. Any value still
//! missing at the end fails the invocation.
//!
//! Values are kept as strings. Whether an id is numeric or a date parses is
//! for the handlers to decide.

use crate::registry::{ActionKind, ActionSpec, OptionKey, OptionKind, Registry, HELP_TOKENS};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A parameter option that never received its value.
    Missing,
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub action: ActionKind,
    pub values: BTreeMap<OptionKey, OptionValue>,
    pub success: bool,
    pub diagnostic: Option<String>,
    /// Non-fatal problems found while scanning, in encounter order.
    pub warnings: Vec<String>,
}

impl ParsedInvocation {
    fn help(success: bool, diagnostic: Option<String>) -> Self {
        Self {
            action: ActionKind::Help,
            values: BTreeMap::new(),
            success,
            diagnostic,
            warnings: Vec::new(),
        }
    }

    pub fn text(&self, key: OptionKey) -> Option<&str> {
        match self.values.get(&key) {
            Some(OptionValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn flag(&self, key: OptionKey) -> bool {
        matches!(self.values.get(&key), Some(OptionValue::Flag(true)))
    }
}

pub fn parse<S: AsRef<str>>(registry: &Registry, args: &[S]) -> ParsedInvocation {
    let Some(first) = args.first() else {
        return ParsedInvocation::help(false, None);
    };

    if args.iter().any(|arg| HELP_TOKENS.contains(&arg.as_ref())) {
        return ParsedInvocation::help(true, None);
    }

    let name: &str = first.as_ref();
    let Some(action) = registry.actions.get(name) else {
        return ParsedInvocation::help(
            false,
            Some(format!(
                "unrecognized action '{}', valid actions are {}",
                name,
                registry.actions.names().join(", ")
            )),
        );
    };

    scan_options(registry, action, &args[1..])
}

fn scan_options<S: AsRef<str>>(
    registry: &Registry,
    action: &ActionSpec,
    args: &[S],
) -> ParsedInvocation {
    let mut values: BTreeMap<OptionKey, OptionValue> = action
        .required
        .iter()
        .map(|key| {
            let seed = match registry.options.by_key(*key).kind {
                OptionKind::Parameter => OptionValue::Missing,
                OptionKind::Flag => OptionValue::Flag(false),
            };
            (*key, seed)
        })
        .collect();
    let mut warnings = Vec::new();

    let mut tokens = args.iter().map(|arg| -> &str { arg.as_ref() });
    while let Some(token) = tokens.next() {
        let Some(option) = registry.options.by_token(token) else {
            warnings.push(format!("unknown option '{}', ignored", token));
            continue;
        };

        let value = match option.kind {
            OptionKind::Parameter => match tokens.next() {
                Some(value) => OptionValue::Text(value.to_string()),
                None => {
                    warnings.push(format!("parameter for option '{}' not set", token));
                    OptionValue::Missing
                }
            },
            OptionKind::Flag => OptionValue::Flag(true),
        };

        if !action.accepts(option.key) {
            warnings.push(format!(
                "option '{}' has no effect on action '{}' and will be ignored",
                token,
                action.name()
            ));
        }
        values.insert(option.key, value);
    }

    let missing: Vec<&str> = values
        .iter()
        .filter(|(_, value)| **value == OptionValue::Missing)
        .map(|(key, _)| key.as_str())
        .collect();

    let (success, diagnostic) = if missing.is_empty() {
        (true, None)
    } else {
        (
            false,
            Some(format!(
                "not enough options for action '{}', you also need to set {}",
                action.name(),
                missing.join(", ")
            )),
        )
    };

    tracing::debug!(action = %action.kind, success, warnings = warnings.len(), "arguments parsed");

    ParsedInvocation {
        action: action.kind,
        values,
        success,
        diagnostic,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> ParsedInvocation {
        parse(&Registry::standard().unwrap(), args)
    }

    #[test]
    fn empty_input_is_unsuccessful_help() {
        let parsed = run(&[]);
        assert_eq!(parsed.action, ActionKind::Help);
        assert!(!parsed.success);
        assert!(parsed.diagnostic.is_none());
    }

    #[test]
    fn help_token_anywhere_wins() {
        for args in [
            vec!["-h"],
            vec!["--help"],
            vec!["add", "-h"],
            vec!["add", "--title", "x", "--help"],
            vec!["bogus", "-h"],
        ] {
            let parsed = run(&args);
            assert_eq!(parsed.action, ActionKind::Help, "{:?}", args);
            assert!(parsed.success, "{:?}", args);
            assert!(parsed.diagnostic.is_none());
        }
    }

    #[test]
    fn help_token_as_parameter_value_still_wins() {
        let parsed = run(&["add", "--title", "-h", "--msg", "b"]);
        assert_eq!(parsed.action, ActionKind::Help);
        assert!(parsed.success);
    }

    #[test]
    fn unknown_action_names_valid_ones() {
        let parsed = run(&["bogus"]);
        assert_eq!(parsed.action, ActionKind::Help);
        assert!(!parsed.success);
        let diagnostic = parsed.diagnostic.unwrap();
        assert!(diagnostic.contains("'bogus'"));
        assert!(diagnostic.contains("add, delete, get, edit, list, help"));
    }

    #[test]
    fn add_with_all_required_options() {
        let parsed = run(&["add", "--title", "A", "--msg", "B"]);
        assert_eq!(parsed.action, ActionKind::Add);
        assert!(parsed.success);
        assert_eq!(parsed.text(OptionKey::Title), Some("A"));
        assert_eq!(parsed.text(OptionKey::Msg), Some("B"));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn options_in_any_order() {
        let parsed = run(&["add", "--msg", "B", "--title", "A"]);
        assert!(parsed.success);
        assert_eq!(parsed.text(OptionKey::Title), Some("A"));
    }

    #[test]
    fn missing_required_option_fails() {
        let parsed = run(&["add", "--title", "A"]);
        assert_eq!(parsed.action, ActionKind::Add);
        assert!(!parsed.success);
        let diagnostic = parsed.diagnostic.unwrap();
        assert!(diagnostic.ends_with("you also need to set msg"), "{}", diagnostic);
    }

    #[test]
    fn every_missing_key_is_listed() {
        let parsed = run(&["add"]);
        assert!(!parsed.success);
        assert!(parsed.diagnostic.unwrap().ends_with("set title, msg"));
    }

    #[test]
    fn trailing_parameter_without_value_warns_and_fails() {
        let parsed = run(&["get", "--id"]);
        assert!(!parsed.success);
        assert_eq!(parsed.warnings, vec!["parameter for option '--id' not set"]);
        assert_eq!(parsed.values[&OptionKey::Id], OptionValue::Missing);
    }

    #[test]
    fn optional_parameter_without_value_also_fails() {
        let parsed = run(&["list", "--filter-after"]);
        assert!(!parsed.success);
        assert!(parsed.diagnostic.unwrap().ends_with("set filter-after"));
    }

    #[test]
    fn parameter_consumes_next_token_verbatim() {
        let parsed = run(&["add", "--title", "--msg", "--msg", "body"]);
        assert!(parsed.success);
        assert_eq!(parsed.text(OptionKey::Title), Some("--msg"));
        assert_eq!(parsed.text(OptionKey::Msg), Some("body"));
    }

    #[test]
    fn flag_sets_true_without_consuming() {
        let parsed = run(&["list", "--sort", "--filter-before", "01-01-2024"]);
        assert!(parsed.success);
        assert!(parsed.flag(OptionKey::Sort));
        assert_eq!(parsed.text(OptionKey::FilterBefore), Some("01-01-2024"));
    }

    #[test]
    fn unknown_option_warns_and_skips_only_itself() {
        let parsed = run(&["list", "--bogus", "--sort"]);
        assert_eq!(parsed.action, ActionKind::List);
        assert!(parsed.success);
        assert_eq!(parsed.warnings, vec!["unknown option '--bogus', ignored"]);
        assert!(parsed.flag(OptionKey::Sort));
    }

    #[test]
    fn unknown_option_does_not_swallow_value_like_token() {
        let parsed = run(&["get", "--bogus", "--id", "3"]);
        assert!(parsed.success);
        assert_eq!(parsed.text(OptionKey::Id), Some("3"));
    }

    #[test]
    fn irrelevant_option_warns_but_is_recorded() {
        let parsed = run(&["get", "--id", "1", "--title", "t"]);
        assert!(parsed.success);
        assert_eq!(
            parsed.warnings,
            vec!["option '--title' has no effect on action 'get' and will be ignored"]
        );
        assert_eq!(parsed.text(OptionKey::Title), Some("t"));
    }

    #[test]
    fn last_occurrence_wins() {
        let parsed = run(&["get", "--id", "1", "--id", "2"]);
        assert_eq!(parsed.text(OptionKey::Id), Some("2"));
    }

    #[test]
    fn values_stay_strings() {
        let parsed = run(&["delete", "--id", "abc"]);
        assert!(parsed.success);
        assert_eq!(parsed.text(OptionKey::Id), Some("abc"));
    }

    #[test]
    fn edit_optional_options_are_absent_when_not_given() {
        let parsed = run(&["edit", "--id", "0", "--msg", "x"]);
        assert!(parsed.success);
        assert_eq!(parsed.text(OptionKey::Title), None);
        assert_eq!(parsed.text(OptionKey::Msg), Some("x"));
    }
}
