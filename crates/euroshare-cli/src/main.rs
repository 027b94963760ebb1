use std::process::exit;

use anyhow::Result;
use clap::Parser;
use euroshare_cli::cli::{Cli, Command};
use euroshare_cli::commands::{
    is_network_failure, prompt_query, search_results, show_root_menu, stream_url,
};
use euroshare_cli::menu::{MenuItem, NETWORK_ERROR};
use euroshare_core::{ClientConfig, EuroshareScraper};
use log::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::builder().format_timestamp(None).init();

    let storage_dir = args.storage_dir()?;
    debug!("Using storage directory {}", storage_dir.display());

    let config = ClientConfig {
        timeout_secs: args.timeout,
        ..ClientConfig::default()
    };
    let mut scraper = EuroshareScraper::with_config(config, args.credentials(), &storage_dir)?;

    match run(&args, &mut scraper).await {
        Ok(()) => Ok(()),
        Err(err) if is_network_failure(&err) => {
            eprintln!("{}", NETWORK_ERROR);
            error!("{:#}", err);
            exit(1);
        }
        Err(err) => Err(err),
    }
}

async fn run(args: &Cli, scraper: &mut EuroshareScraper) -> Result<()> {
    match &args.command {
        Command::Menu => {
            let items = show_root_menu(scraper).await?;
            print_items(&items, args.json)?;
        }
        Command::Search { query, page, sort } => {
            let query = match query {
                Some(query) => query.clone(),
                None => match prompt_query()? {
                    Some(query) => query,
                    None => return Ok(()),
                },
            };
            let items = search_results(scraper, &query, *page, *sort).await?;
            print_items(&items, args.json)?;
        }
        Command::Stream { url } => {
            let resolved = stream_url(scraper, url).await?;
            if args.json {
                println!("{}", serde_json::to_string(&resolved)?);
            } else {
                println!("{}", resolved);
            }
        }
    }
    Ok(())
}

fn print_items(items: &[MenuItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    for item in items {
        match item.size {
            Some(size) => println!("{:<60} {:>12}  {}", item.label, size, item.path),
            None => println!("{:<60} {:>12}  {}", item.label, "", item.path),
        }
    }
    Ok(())
}
