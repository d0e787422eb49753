// ABOUTME: REPL command parsing and execution against a registry.
// ABOUTME: Output is returned as lines so the REPL and one-shot mode share it.

use toolcat::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Category(String),
    List,
    Stats,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. A line with no known command word is a search.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "quit" | "exit" => Command::Quit,
            "help" | "?" => Command::Help,
            "list" => Command::List,
            "stats" => Command::Stats,
            "search" => Command::Search(rest.to_string()),
            "category" => Command::Category(rest.to_string()),
            _ => Command::Search(line.to_string()),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  search <query>     search tools (a bare query works too)
  category <name>    list tools in a category (calculator, game, app)
  list               list every tool
  stats              count tools per category
  help               show this help
  quit               exit";

fn format_entry(entry: &ToolEntry) -> String {
    format!("{} {} ({}) {}", entry.icon, entry.name, entry.category, entry.url)
}

/// Run a command, returning output lines. `Quit` yields nothing.
pub fn execute(
    command: &Command,
    registry: &Registry,
    limit: usize,
    scope: &SearchScope,
) -> Vec<String> {
    match command {
        Command::Search(query) => {
            let query = SearchQuery::new(query.as_str())
                .limit(limit)
                .scope(scope.clone());
            let hits = query.run_scored(registry);
            if hits.is_empty() {
                return vec!["No matching tools.".to_string()];
            }
            hits.iter()
                .map(|hit| format!("[{:>3}] {}", hit.score, format_entry(hit.entry)))
                .collect()
        }
        Command::Category(name) => match name.parse::<Category>() {
            Ok(category) => registry
                .entries_by_category(category)
                .into_iter()
                .map(format_entry)
                .collect(),
            Err(e) => vec![e.to_string()],
        },
        Command::List => registry.iter().map(format_entry).collect(),
        Command::Stats => {
            let mut lines: Vec<String> = registry
                .category_counts()
                .into_iter()
                .map(|(category, count)| format!("{category}: {count}"))
                .collect();
            lines.push(format!("Total: {}", registry.len()));
            lines
        }
        Command::Help => HELP.lines().map(str::to_string).collect(),
        Command::Quit => Vec::new(),
    }
}
