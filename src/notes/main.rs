use notes::config::NotesConfig;
use notes::dispatch;
use notes::error::Result;
use notes::parser::parse;
use notes::registry::Registry;
use notes::store::fs::FileBackend;
use notes::store::RecordStore;
use tracing_subscriber::EnvFilter;

mod cli;

const DEFAULT_PROG_NAME: &str = "notes";

fn main() {
    let config = NotesConfig::from_env();
    init_logging(&config);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &NotesConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(notes::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &NotesConfig) -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (prog, user_args) = match args.split_first() {
        Some((prog, rest)) => (prog.as_str(), rest),
        None => (DEFAULT_PROG_NAME, &[][..]),
    };

    let registry = Registry::standard()?;
    let invocation = parse(&registry, user_args);

    let mut store = RecordStore::load(FileBackend::new(&config.data_file))?;
    let result = dispatch::start(&invocation, &mut store)?;

    cli::print::print_result(&registry, prog, &result);
    Ok(())
}
