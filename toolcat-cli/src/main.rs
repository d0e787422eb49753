// ABOUTME: Command-line front end for toolcat: one-shot search or an interactive REPL.
// ABOUTME: Reads configuration from the environment and an optional catalog file.

mod commands;
mod config;

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::Config;
use toolcat::prelude::*;

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn run_repl(registry: &Registry, config: &Config) -> Result<()> {
    let scope = config.scope();
    let mut rl = DefaultEditor::new()?;

    println!("{} tools loaded. Type 'help' for commands, 'quit' to exit.\n", registry.len());

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };
        let _ = rl.add_history_entry(line.trim());

        if command == Command::Quit {
            break;
        }

        print_lines(&commands::execute(&command, registry, config.limit, &scope));
        println!();
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging()?;

    let config = Config::from_env()?;
    let registry = config::load_registry(&config)?;
    info!(entries = registry.len(), catalog = ?config.catalog, "Registry ready");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return run_repl(&registry, &config);
    }

    let command = Command::Search(args.join(" "));
    print_lines(&commands::execute(&command, &registry, config.limit, &config.scope()));
    Ok(())
}
