//! Command-line interface parsing for the TCM movies CLI
//!
//! This module handles parsing of CLI arguments using clap. Genre lists are
//! validated while parsing, so a bad `--genres` value fails before the cache
//! or the network is touched.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::catalog::{DEFAULT_CACHE_FILE, TCM_MOVIES_URL};
use crate::data::is_tcm_genre;
use crate::filter::MovieFilter;
use crate::render::OutputFormat;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--genres` token is not part of the TCM vocabulary
    #[error("'{0}' is not a valid TCM genre (see --list-genres)")]
    InvalidGenre(String),
}

/// TCM movies CLI - list titles from the TCM catalog
#[derive(Parser, Debug)]
#[command(name = "tcm-movies")]
#[command(about = "List and filter the latest TCM movie catalog")]
#[command(version)]
pub struct Cli {
    /// Only show movies released before this year
    #[arg(long, value_name = "YEAR")]
    pub before_year: Option<i32>,

    /// Only show movies released after this year
    #[arg(long, value_name = "YEAR")]
    pub after_year: Option<i32>,

    /// Only show movies tagged with at least one of these genres
    ///
    /// Comma-separated, e.g. --genres "Horror, Film Noir"
    #[arg(long, value_name = "GENRES", value_parser = parse_genres_arg)]
    pub genres: Option<BTreeSet<String>>,

    /// Print the genres accepted by --genres and exit
    #[arg(long)]
    pub list_genres: bool,

    /// Print an HTML table instead of text columns
    #[arg(long)]
    pub html: bool,

    /// Where the downloaded movie list is cached
    #[arg(long, value_name = "PATH", env = "TCM_MOVIES_CACHE", default_value = DEFAULT_CACHE_FILE)]
    pub cache_file: PathBuf,

    /// Catalog endpoint to download the movie list from
    #[arg(long, value_name = "URL", env = "TCM_MOVIES_URL", default_value = TCM_MOVIES_URL)]
    pub url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses a comma-separated genre list into a set.
///
/// Tokens are trimmed and must match the vocabulary exactly; the first
/// unrecognized token is reported. Duplicates collapse.
///
/// # Returns
/// * `Ok(BTreeSet<String>)` if every token is a known genre
/// * `Err(CliError::InvalidGenre)` naming the first unknown token
pub fn parse_genres_arg(s: &str) -> Result<BTreeSet<String>, CliError> {
    s.split(',')
        .map(str::trim)
        .map(|genre| {
            if is_tcm_genre(genre) {
                Ok(genre.to_string())
            } else {
                Err(CliError::InvalidGenre(genre.to_string()))
            }
        })
        .collect()
}

impl Cli {
    /// Builds the listing filter from the year and genre flags
    pub fn filter(&self) -> MovieFilter {
        MovieFilter {
            before_year: self.before_year,
            after_year: self.after_year,
            genres: self.genres.clone(),
        }
    }

    /// Output format selected by `--html`
    pub fn output_format(&self) -> OutputFormat {
        if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }
}
