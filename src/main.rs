//! Terminal view shim and entry point.
//!
//! This binary stands in for the browser view layer: it reads one command per
//! line from stdin, resolves it through the same delegation functions a page
//! would use, dispatches the resulting event to the controller, and prints the
//! rendered HTML fragment to stdout whenever the state changed visibly.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse arguments, read configuration (optional TOML path,
//!    `--api-base` / `JOBBOARD_API_BASE` override), initialize tracing
//! 2. **Initial load**: Dispatch `Event::Initialize`
//! 3. **Loop**: Translate commands to events, dispatch, repaint
//!
//! # Commands
//!
//! - `q <text>` / `city <text>` / `category <text>`: edit a search filter
//! - `search` / `refresh`: run a search (refresh clears filters first)
//! - `apply <id>`: toggle a card's application panel
//! - `name <id> <text>` / `contact <id> <text>` / `msg <id> <text>`: edit panel inputs
//! - `send <id>`: send the application
//! - `draft <field> <text>`: edit a post form field (`title`, `pay_amount`, ...)
//! - `post`: submit the post form
//! - `show`: repaint
//! - `quit`: exit

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use jobboard::api::HttpJobBoardClient;
use jobboard::ui::{delegate, render};
use jobboard::{Config, Controller, Event};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Root of the job board API, overriding the configuration file
    #[arg(long, env = "JOBBOARD_API_BASE", value_name = "URL")]
    api_base: Option<String>,
}

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Event),
    Show,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match verb {
        "" | "show" => return Command::Show,
        "quit" | "exit" => return Command::Quit,
        "q" | "city" | "category" => delegate::on_input(verb, rest),
        "search" => delegate::on_click("id", "searchBtn"),
        "refresh" => delegate::on_click("id", "refreshBtn"),
        "apply" => delegate::on_click("data-apply", rest),
        "send" => delegate::on_click("data-send", rest),
        "name" | "contact" | "msg" => {
            let (id, text) = rest.split_once(' ').unwrap_or((rest, ""));
            delegate::on_input(&format!("{verb}-{id}"), text)
        }
        "draft" => {
            let (field, text) = rest.split_once(' ').unwrap_or((rest, ""));
            delegate::on_form_input(field, text)
        }
        "post" => delegate::on_submit("postForm"),
        _ => None,
    };

    event.map_or_else(|| Command::Unknown(line.to_string()), Command::Dispatch)
}

fn load_config(args: &Args) -> jobboard::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(api_base) = args.api_base.as_deref().map(str::trim) {
        if !api_base.is_empty() {
            config.api_base = api_base.to_string();
        }
    }

    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> jobboard::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    jobboard::observability::init_tracing(&config);

    let state = jobboard::initialize(&config);
    let client = HttpJobBoardClient::new(&config.api_base)?;

    tracing::info!(api_base = %client.base(), "job board widget started");

    let mut controller = Controller::new(state, client);

    let outcome = controller.dispatch(Event::Initialize).await?;
    if outcome.render {
        println!("{}", render(controller.state()));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let event = match parse_command(&line) {
            Command::Quit => break,
            Command::Show => {
                println!("{}", render(controller.state()));
                continue;
            }
            Command::Unknown(input) => {
                tracing::warn!(input = %input, "unrecognized command");
                continue;
            }
            Command::Dispatch(event) => event,
        };

        let outcome = controller.dispatch(event).await?;
        if outcome.render {
            println!("{}", render(controller.state()));
        }
        if let Some(section) = outcome.navigate {
            println!("#{}", section.anchor());
        }
    }

    tracing::info!("job board widget stopped");
    Ok(())
}
