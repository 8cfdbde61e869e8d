//! Handle `scout browse` — the interactive filtering loop.
//!
//! Reads line-based commands from stdin and re-renders the filtered view
//! after every filter pass. Text searches are debounced: the recompute runs
//! only after the configured quiet period, delivered back to the loop on
//! the session channel.

use std::time::Duration;

use scout_catalog::CatalogSource;
use scout_config::ScoutConfig;
use scout_core::ServerType;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use crate::cli::GlobalFlags;
use crate::commands::shared;
use crate::output;
use crate::session::{FilterPass, InputEvent, Session};

/// One parsed line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput {
    Event(InputEvent),
    Quit,
    Help,
    Empty,
    InvalidType(String),
    Unknown(String),
}

pub async fn handle(
    source: &CatalogSource,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Ok(catalog) = shared::load_catalog(source).await else {
        // Terminal for this run; the loader already logged the cause.
        eprintln!("{}", shared::LOAD_FAILURE_MESSAGE);
        return Ok(());
    };

    let (tx, mut rx) = mpsc::channel(8);
    let quiet_period = Duration::from_millis(config.general.debounce_ms);
    let mut session = Session::new(catalog, quiet_period, tx);

    if !flags.quiet {
        println!("{HELP}");
    }
    let initial = session.refresh();
    print_pass(&initial, flags)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    ReplInput::Event(event) => {
                        if let Some(pass) = session.apply(event) {
                            print_pass(&pass, flags)?;
                        }
                    }
                    ReplInput::Quit => break,
                    ReplInput::Help => println!("{HELP}"),
                    ReplInput::Empty => {}
                    ReplInput::InvalidType(value) => {
                        println!("unknown type '{value}' (expected 'local' or 'remote')");
                    }
                    ReplInput::Unknown(command) => {
                        println!("unknown command '{command}' (try 'help')");
                    }
                }
            }
            Some(event) = rx.recv() => {
                if let Some(pass) = session.apply(event) {
                    print_pass(&pass, flags)?;
                }
            }
        }
    }

    Ok(())
}

const HELP: &str = "\
commands:
  /<text> or search <text>   set the search term (empty clears it)
  category [<key>]           filter by category key (no key clears it)
  type [local|remote]        filter by server type (no value clears it)
  clear                      reset all filters
  help                       show this help
  quit                       exit";

fn parse_line(line: &str) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }

    if let Some(term) = line.strip_prefix('/') {
        return ReplInput::Event(InputEvent::SearchChanged(term.trim().to_string()));
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    match command {
        "search" => ReplInput::Event(InputEvent::SearchChanged(rest.to_string())),
        "category" => {
            let category = (!rest.is_empty()).then(|| rest.to_string());
            ReplInput::Event(InputEvent::CategorySelected(category))
        }
        "type" => {
            if rest.is_empty() {
                return ReplInput::Event(InputEvent::TypeSelected(None));
            }
            ServerType::parse(rest).map_or_else(
                || ReplInput::InvalidType(rest.to_string()),
                |server_type| ReplInput::Event(InputEvent::TypeSelected(Some(server_type))),
            )
        }
        "clear" => ReplInput::Event(InputEvent::ClearFilters),
        "quit" | "exit" => ReplInput::Quit,
        "help" | "?" => ReplInput::Help,
        other => ReplInput::Unknown(other.to_string()),
    }
}

/// Print one filter pass: the match counter, then either the rows or the
/// empty-state message.
fn print_pass(pass: &FilterPass, flags: &GlobalFlags) -> anyhow::Result<()> {
    use scout_render::GridState;

    println!("{} servers", pass.view.count);
    match pass.view.state {
        GridState::EmptyState => {
            println!("No servers match the current filters.");
            Ok(())
        }
        GridState::ResultsShown => {
            let rows = shared::rows_from_entries(&pass.filtered, 0);
            output::output(&rows, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slash_prefix_sets_search_term() {
        assert_eq!(
            parse_line("/alpha"),
            ReplInput::Event(InputEvent::SearchChanged("alpha".to_string()))
        );
        assert_eq!(
            parse_line("/"),
            ReplInput::Event(InputEvent::SearchChanged(String::new()))
        );
    }

    #[test]
    fn search_command_with_and_without_text() {
        assert_eq!(
            parse_line("search file system"),
            ReplInput::Event(InputEvent::SearchChanged("file system".to_string()))
        );
        assert_eq!(
            parse_line("search"),
            ReplInput::Event(InputEvent::SearchChanged(String::new()))
        );
    }

    #[test]
    fn category_command_sets_and_clears() {
        assert_eq!(
            parse_line("category db"),
            ReplInput::Event(InputEvent::CategorySelected(Some("db".to_string())))
        );
        assert_eq!(
            parse_line("category"),
            ReplInput::Event(InputEvent::CategorySelected(None))
        );
    }

    #[test]
    fn type_command_parses_case_insensitively() {
        assert_eq!(
            parse_line("type Remote"),
            ReplInput::Event(InputEvent::TypeSelected(Some(ServerType::Remote)))
        );
        assert_eq!(
            parse_line("type"),
            ReplInput::Event(InputEvent::TypeSelected(None))
        );
        assert_eq!(
            parse_line("type hybrid"),
            ReplInput::InvalidType("hybrid".to_string())
        );
    }

    #[tokio::test]
    async fn load_failure_reports_and_exits_before_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::File(dir.path().join("missing.json"));
        let flags = GlobalFlags {
            format: crate::cli::OutputFormat::Table,
            quiet: true,
            catalog: None,
            catalog_file: None,
        };

        // Returns cleanly without ever reading stdin.
        handle(&source, &ScoutConfig::default(), &flags)
            .await
            .unwrap();
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_line("clear"), ReplInput::Event(InputEvent::ClearFilters));
        assert_eq!(parse_line("quit"), ReplInput::Quit);
        assert_eq!(parse_line("exit"), ReplInput::Quit);
        assert_eq!(parse_line("help"), ReplInput::Help);
        assert_eq!(parse_line("  "), ReplInput::Empty);
        assert_eq!(parse_line("bogus"), ReplInput::Unknown("bogus".to_string()));
    }
}
