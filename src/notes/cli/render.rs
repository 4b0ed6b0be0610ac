use notes::model::Record;
use notes::registry::{OptionKey, Registry};

const SEPARATOR: &str = "------";
const PROGRAM_INFO: &str = "notes: command-line note keeper";

/// The fixed block used for every record, by `get` and `list` alike.
pub fn render_record(id: &str, record: &Record) -> String {
    [
        SEPARATOR.to_string(),
        format!("id: {}", id),
        format!("created: {}", record.created_at),
        format!("changed: {}", record.modified_at),
        format!("header: {}", record.title),
        format!("body: {}", record.msg),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

pub fn render_help(registry: &Registry, prog: &str) -> String {
    let mut lines = vec![
        PROGRAM_INFO.to_string(),
        format!("usage: {} ACTION [OPTIONS]", prog),
        format!("available actions: {}", registry.actions.names().join(", ")),
        String::new(),
        "actions".to_string(),
    ];

    for action in registry.actions.iter() {
        lines.push(format!("  {}: {}", action.name(), action.description));
        lines.extend(render_options(registry, "required options", &action.required));
        lines.extend(render_options(registry, "optional options", &action.optional));
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_options(registry: &Registry, heading: &str, keys: &[OptionKey]) -> Vec<String> {
    if keys.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("  {}", heading)];
    for key in keys {
        let option = registry.options.by_key(*key);
        lines.push(format!("    {}: {}", option.token, option.description));
    }
    lines
}
