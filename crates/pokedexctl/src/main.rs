//! Pokedex Control - CLI client for pokedexd
//!
//! Sends lookups to the daemon and renders the result card.

use anyhow::Result;
use clap::Parser;
use pokedex_common::page::render_document;
use pokedexctl::cli::{Cli, Commands};
use pokedexctl::client::LookupClient;
use pokedexctl::controller::{SearchController, SubmitOutcome};
use pokedexctl::display::print_page;
use pokedexctl::errors::{exit_code_for, EXIT_EMPTY_QUERY, EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use pokedexctl::logging;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_GENERAL_ERROR
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    let color = !cli.no_color;
    let client = LookupClient::new(&cli.server)?;
    let controller = SearchController::new(client);

    match cli.command {
        Commands::Lookup { name, html, json } => lookup(&controller, &name, html, json, color).await,
        Commands::Interactive => {
            interactive(Arc::new(controller), color).await?;
            Ok(EXIT_SUCCESS)
        }
    }
}

async fn lookup(
    controller: &SearchController<LookupClient>,
    name: &str,
    html: bool,
    json: bool,
    color: bool,
) -> Result<i32> {
    let (outcome, page) = controller.submit(name).await;
    let page = match page {
        Some(page) => page,
        None => controller.page().await,
    };

    match outcome {
        SubmitOutcome::Ignored => {
            eprintln!("Nothing to search for");
            Ok(EXIT_EMPTY_QUERY)
        }
        SubmitOutcome::Rendered(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if html {
                print!("{}", render_document(&page));
            } else {
                print_page(&page, color);
            }
            Ok(EXIT_SUCCESS)
        }
        SubmitOutcome::Failed(e) => {
            if html {
                print!("{}", render_document(&page));
            } else {
                eprintln!("{}", e.status_message());
            }
            Ok(exit_code_for(&e))
        }
        // Only one submission is ever in flight here
        SubmitOutcome::Stale => Ok(EXIT_SUCCESS),
    }
}

/// One submission per stdin line. Submissions run concurrently; a reply that
/// arrives after a newer line was submitted is dropped by the controller.
async fn interactive(controller: Arc<SearchController<LookupClient>>, color: bool) -> Result<()> {
    println!("Type a Pokémon name and press Enter. Ctrl+D or :q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = tokio::task::JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line == ":q" || line == "exit" {
            break;
        }

        let controller = controller.clone();
        pending.spawn(async move {
            if let (_, Some(page)) = controller.submit(&line).await {
                print_page(&page, color);
            }
        });
    }

    while pending.join_next().await.is_some() {}
    Ok(())
}
