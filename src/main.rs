//! Terminal host for the Bookshelf library.
//!
//! This binary plays the part of the screen: it owns one controller for the
//! session, turns terminal input into [`Event`]s, executes the resulting
//! [`Action`]s, and re-renders every time the controller publishes a new state.
//!
//! # Modes
//!
//! - `bookshelf dune messiah`: one search, print the result, exit
//!   (exit code 1 when the search ended in the error state)
//! - `bookshelf`: interactive session reading commands from stdin
//!
//! # Interactive Commands
//!
//! - any text: set the phrase and search
//! - `:reload`: run the last search again
//! - `:clear`: clear the phrase
//! - `:q`: quit

#![allow(clippy::multiple_crate_versions)]

use bookshelf::observability::init_tracing;
use bookshelf::ui::{compute_viewmodel, render};
use bookshelf::{
    handle_event, initialize, Action, BookshelfController, Config, Event, NetworkBookRepository,
    SearchOutcome, UiState,
};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

type Controller = BookshelfController<NetworkBookRepository>;

/// Search the Google Books catalog and list the covers.
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/bookshelf/config.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog API root
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Tracing filter, e.g. "debug" or "bookshelf=trace"
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,

    /// Override a config key, e.g. --set max_concurrent_fetches=4 (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,

    /// Search phrase; starts an interactive session when omitted
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "bookshelf failed");
            eprintln!("bookshelf: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> bookshelf::Result<ExitCode> {
    let config_path = cli.config.map(|p| {
        p.to_str()
            .map_or_else(|| p.clone(), bookshelf::infrastructure::expand_tilde)
    });

    let overrides: BTreeMap<String, String> = cli.overrides.into_iter().collect();
    let mut config = Config::load(config_path.as_deref())?.with_overrides(&overrides);
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(level) = cli.trace_level {
        config.trace_level = Some(level);
    }

    init_tracing(&config);

    let controller = Arc::new(initialize(&config)?);

    if cli.query.is_empty() {
        run_interactive(controller).await?;
        Ok(ExitCode::SUCCESS)
    } else {
        run_once(&controller, cli.query.join(" ")).await
    }
}

/// Runs a single search and prints the final screen.
async fn run_once(controller: &Controller, phrase: String) -> bookshelf::Result<ExitCode> {
    handle_event(controller, &Event::PhaseChanged(phrase))?;

    let (_, actions) = handle_event(controller, &Event::SubmitSearch)?;
    let outcome = if actions.contains(&Action::TriggerSearch) {
        controller.trigger_search().await
    } else {
        SearchOutcome::Published(controller.state())
    };

    render_state(controller)?;

    Ok(match outcome.state() {
        Some(UiState::Error { reason }) => {
            tracing::debug!(reason = %reason, "search ended in error state");
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    })
}

/// Reads commands from stdin until `:q` or end of input.
async fn run_interactive(controller: Arc<Controller>) -> bookshelf::Result<()> {
    let renderer = tokio::spawn(render_on_change(Arc::clone(&controller)));

    render_state(&controller)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let events = parse_command(line.trim());

        for event in &events {
            let (needs_render, actions) = handle_event(&controller, event)?;

            if needs_render {
                render_state(&controller)?;
            }

            for action in actions {
                match action {
                    Action::TriggerSearch => {
                        let controller = Arc::clone(&controller);
                        tokio::spawn(async move {
                            controller.trigger_search().await;
                        });
                    }
                    Action::Close => {
                        renderer.abort();
                        return Ok(());
                    }
                }
            }
        }
    }

    renderer.abort();
    Ok(())
}

fn parse_override(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn parse_command(line: &str) -> Vec<Event> {
    match line {
        ":q" | ":quit" => vec![Event::Quit],
        ":reload" => vec![Event::Reload],
        ":clear" => vec![Event::ClearPhase],
        phrase => vec![
            Event::PhaseChanged(phrase.to_string()),
            Event::SubmitSearch,
        ],
    }
}

/// Renders every state the controller publishes, including `Loading`.
async fn render_on_change(controller: Arc<Controller>) {
    let mut states = controller.subscribe();

    while states.changed().await.is_ok() {
        if let Err(e) = render_state(&controller) {
            tracing::warn!(error = %e, "failed to render");
            break;
        }
    }
}

fn render_state(controller: &Controller) -> std::io::Result<()> {
    let vm = compute_viewmodel(&controller.state(), &controller.phase());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&vm, &mut out)?;
    std::io::Write::write_all(&mut out, b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_flags_become_config_overrides() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "--set",
            "max_concurrent_fetches=4",
            "--set",
            "base_url=http://127.0.0.1:9000/",
            "dune",
        ])
        .unwrap();

        let overrides: BTreeMap<String, String> = cli.overrides.into_iter().collect();
        let config = Config::default().with_overrides(&overrides);

        assert_eq!(config.max_concurrent_fetches, 4);
        assert_eq!(config.base_url, "http://127.0.0.1:9000/");
        assert_eq!(cli.query, vec!["dune"]);
    }

    #[test]
    fn override_without_equals_is_rejected() {
        assert!(parse_override("max_concurrent_fetches").is_err());
        assert!(Cli::try_parse_from(["bookshelf", "--set", "oops"]).is_err());
    }

    #[test]
    fn override_value_may_contain_equals() {
        assert_eq!(
            parse_override("base_url=http://h/?a=b").unwrap(),
            ("base_url".to_string(), "http://h/?a=b".to_string())
        );
    }

    #[test]
    fn commands_map_to_events() {
        assert_eq!(parse_command(":q"), vec![Event::Quit]);
        assert_eq!(parse_command(":reload"), vec![Event::Reload]);
        assert_eq!(
            parse_command("earthsea"),
            vec![Event::PhaseChanged("earthsea".to_string()), Event::SubmitSearch]
        );
    }
}
