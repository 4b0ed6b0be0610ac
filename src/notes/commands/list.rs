use crate::commands::{CmdMessage, CmdResult, NO_DATA};
use crate::error::Result;
use crate::store::{Backend, RecordStore};
use chrono::{NaiveDate, NaiveDateTime};

/// Formats accepted by the date filters, tried in order. Date-only formats
/// resolve to midnight.
pub const DATE_TIME_FORMATS: [&str; 4] = [
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];
pub const DATE_FORMATS: [&str; 3] = ["%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Order by creation time instead of id.
    pub sort: bool,
    /// Exclusive upper bound on creation time.
    pub before: Option<NaiveDateTime>,
    /// Exclusive lower bound on creation time.
    pub after: Option<NaiveDateTime>,
}

pub fn parse_filter_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn run<B: Backend>(store: &RecordStore<B>, query: &ListQuery) -> Result<CmdResult> {
    let filtered = query.before.is_some() || query.after.is_some();

    let mut listed: Vec<_> = store
        .get_all()
        .iter()
        .filter(|(_, record)| {
            if !filtered {
                return true;
            }
            // records whose creation time could not be decoded never match a filter
            let Some(created) = record.created_at.at() else {
                return false;
            };
            query.before.map_or(true, |bound| created < bound)
                && query.after.map_or(true, |bound| created > bound)
        })
        .map(|(id, record)| (id.to_string(), record.clone()))
        .collect();

    if query.sort {
        // stable: equal stamps keep document order
        listed.sort_by_key(|(_, record)| record.created_at.at());
    }

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(NO_DATA));
    }
    Ok(result.with_listed(listed))
}
