use super::render::{render_help, render_record};
use colored::Colorize;
use notes::commands::{CmdMessage, CmdResult, MessageLevel};
use notes::registry::Registry;

pub fn print_result(registry: &Registry, prog: &str, result: &CmdResult) {
    print_messages(&result.messages);
    for (id, record) in &result.listed {
        println!("{}", render_record(id, record));
    }
    if result.show_help {
        print!("{}", render_help(registry, prog));
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
