//! # Option and Action Registries
//!
//! The command vocabulary is a closed set: [`OptionKey`] and [`ActionKind`]
//! enumerate everything the tool understands, and the tables built by
//! [`Registry::standard`] attach tokens, descriptions and option
//! requirements to them. The registry is built once at startup and handed
//! to the parser, the dispatcher and the help renderer.
//!
//! Construction validates the tables; a malformed declaration is a startup
//! error rather than something the parser has to cope with.

use crate::error::{NotesError, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Tokens that request the help page from any position in the argument list.
pub const HELP_TOKENS: [&str; 2] = ["-h", "--help"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    Title,
    Msg,
    Id,
    Sort,
    FilterBefore,
    FilterAfter,
}

impl OptionKey {
    pub const ALL: [OptionKey; 6] = [
        OptionKey::Title,
        OptionKey::Msg,
        OptionKey::Id,
        OptionKey::Sort,
        OptionKey::FilterBefore,
        OptionKey::FilterAfter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::Title => "title",
            OptionKey::Msg => "msg",
            OptionKey::Id => "id",
            OptionKey::Sort => "sort",
            OptionKey::FilterBefore => "filter-before",
            OptionKey::FilterAfter => "filter-after",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an option takes the following token as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Parameter,
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub key: OptionKey,
    pub token: String,
    pub kind: OptionKind,
    pub description: String,
}

impl OptionSpec {
    pub fn new(key: OptionKey, token: &str, kind: OptionKind, description: &str) -> Self {
        Self {
            key,
            token: token.to_string(),
            kind,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionRegistry {
    by_key: BTreeMap<OptionKey, OptionSpec>,
    by_token: HashMap<String, OptionKey>,
}

impl OptionRegistry {
    /// Build the registry, requiring exactly one well-formed declaration per
    /// [`OptionKey`].
    pub fn new(options: Vec<OptionSpec>) -> Result<Self> {
        let mut by_key = BTreeMap::new();
        let mut by_token = HashMap::new();

        for option in options {
            if !option.token.starts_with("--") || option.token.len() < 3 {
                return Err(NotesError::Registry(format!(
                    "option '{}' has malformed token '{}'",
                    option.key, option.token
                )));
            }
            if HELP_TOKENS.contains(&option.token.as_str()) {
                return Err(NotesError::Registry(format!(
                    "option '{}' shadows the help token '{}'",
                    option.key, option.token
                )));
            }
            if by_token.insert(option.token.clone(), option.key).is_some() {
                return Err(NotesError::Registry(format!(
                    "token '{}' is declared twice",
                    option.token
                )));
            }
            let key = option.key;
            if by_key.insert(key, option).is_some() {
                return Err(NotesError::Registry(format!(
                    "option '{}' is declared twice",
                    key
                )));
            }
        }

        if let Some(missing) = OptionKey::ALL.iter().find(|k| !by_key.contains_key(*k)) {
            return Err(NotesError::Registry(format!(
                "option '{}' is not declared",
                missing
            )));
        }

        Ok(Self { by_key, by_token })
    }

    pub fn standard() -> Result<Self> {
        use OptionKind::*;
        Self::new(vec![
            OptionSpec::new(OptionKey::Title, "--title", Parameter, "note title"),
            OptionSpec::new(OptionKey::Msg, "--msg", Parameter, "note body"),
            OptionSpec::new(OptionKey::Id, "--id", Parameter, "record identifier"),
            OptionSpec::new(
                OptionKey::Sort,
                "--sort",
                Flag,
                "order records by creation time",
            ),
            OptionSpec::new(
                OptionKey::FilterBefore,
                "--filter-before",
                Parameter,
                "only records created strictly before this date (e.g. 31-12-2024)",
            ),
            OptionSpec::new(
                OptionKey::FilterAfter,
                "--filter-after",
                Parameter,
                "only records created strictly after this date (e.g. 01-01-2024)",
            ),
        ])
    }

    pub fn by_key(&self, key: OptionKey) -> &OptionSpec {
        // every key is present, checked in `new`
        &self.by_key[&key]
    }

    pub fn by_token(&self, token: &str) -> Option<&OptionSpec> {
        self.by_token.get(token).map(|key| self.by_key(*key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Add,
    Delete,
    Get,
    Edit,
    List,
    Help,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Delete => "delete",
            ActionKind::Get => "get",
            ActionKind::Edit => "edit",
            ActionKind::List => "list",
            ActionKind::Help => "help",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub description: String,
    pub required: Vec<OptionKey>,
    pub optional: Vec<OptionKey>,
}

impl ActionSpec {
    pub fn new(
        kind: ActionKind,
        description: &str,
        required: &[OptionKey],
        optional: &[OptionKey],
    ) -> Self {
        Self {
            kind,
            description: description.to_string(),
            required: required.to_vec(),
            optional: optional.to_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// True if `key` is among this action's required or optional options.
    pub fn accepts(&self, key: OptionKey) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }
}

/// Actions in declaration order; that order is also the help page order.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: Vec<ActionSpec>,
}

impl ActionRegistry {
    pub fn new(actions: Vec<ActionSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for action in &actions {
            if !seen.insert(action.kind) {
                return Err(NotesError::Registry(format!(
                    "action '{}' is declared twice",
                    action.kind
                )));
            }
            if let Some(key) = action.required.iter().find(|k| action.optional.contains(*k)) {
                return Err(NotesError::Registry(format!(
                    "option '{}' is both required and optional for action '{}'",
                    key, action.kind
                )));
            }
        }
        if !seen.contains(&ActionKind::Help) {
            return Err(NotesError::Registry(
                "the help action is not declared".to_string(),
            ));
        }
        Ok(Self { actions })
    }

    pub fn standard() -> Result<Self> {
        use OptionKey::*;
        Self::new(vec![
            ActionSpec::new(ActionKind::Add, "add a record", &[Title, Msg], &[]),
            ActionSpec::new(ActionKind::Delete, "delete a record", &[Id], &[]),
            ActionSpec::new(ActionKind::Get, "show a single record", &[Id], &[]),
            ActionSpec::new(
                ActionKind::Edit,
                "change the title and/or body of a record",
                &[Id],
                &[Title, Msg],
            ),
            ActionSpec::new(
                ActionKind::List,
                "show all records",
                &[],
                &[Sort, FilterBefore, FilterAfter],
            ),
            ActionSpec::new(
                ActionKind::Help,
                "show this help page, also available as '-h/--help'",
                &[],
                &[],
            ),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&ActionSpec> {
        self.actions.iter().find(|a| a.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.actions.iter().map(ActionSpec::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionSpec> {
        self.actions.iter()
    }
}

/// Both registries, built together once per process.
#[derive(Debug, Clone)]
pub struct Registry {
    pub options: OptionRegistry,
    pub actions: ActionRegistry,
}

impl Registry {
    pub fn standard() -> Result<Self> {
        Ok(Self {
            options: OptionRegistry::standard()?,
            actions: ActionRegistry::standard()?,
        })
    }
}
