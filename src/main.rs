//! TCM Movies CLI - list the latest TCM movie catalog
//!
//! Downloads the catalog (or reuses a copy cached within the last 24 hours),
//! filters it by release year and genre, and prints it as text columns or an
//! HTML table.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use tcm_movies::cache::CacheManager;
use tcm_movies::cli::Cli;
use tcm_movies::data::catalog::CACHE_TTL_HOURS;
use tcm_movies::data::{sorted_genres, CatalogClient};
use tcm_movies::logging;
use tcm_movies::render::write_listing;

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.list_genres {
        let mut stdout = io::stdout().lock();
        for genre in sorted_genres() {
            writeln!(stdout, "{}", genre)?;
        }
        return Ok(());
    }

    let cache = CacheManager::new(&cli.cache_file, CACHE_TTL_HOURS);
    let client = CatalogClient::new(cache).with_base_url(&cli.url);
    let movies = client.load_movies().await?;

    let filter = cli.filter();
    let mut stdout = io::stdout().lock();
    let shown = write_listing(&mut stdout, &movies, &filter, cli.output_format())?;
    tracing::debug!("Listed {} of {} titles", shown, movies.len());

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
