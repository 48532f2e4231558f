use std::path::PathBuf;

use clap::{Parser, Subcommand};

use movieshelf::config::Config;
use movieshelf::utils::MovieshelfResult;
use movieshelf::{Field, FilterExpr, MediaManager, Operator};

use super::common::{load_catalog, print_movies};

#[derive(Debug, Parser)]
#[command(name = "movieshelf", version, about = "Query a personal movie collection")]
pub struct Cli {
    /// Configuration file (defaults to $MOVIESHELF_CONFIG_PATH or ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra movie file to load after the configured sources (repeatable)
    #[arg(long = "source", global = true)]
    pub sources: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every movie in load order
    List,
    /// Print movies sorted by a field
    Sort {
        field: Field,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Print movies where any field contains the query, ignoring case
    Search { query: String },
    /// Print movies matching `<field> <op> <query>`
    Filter {
        field: Field,
        op: Operator,
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
    /// Print movies matching a filter expression such as "year > 1990"
    Where { expression: String },
}

impl Cli {
    pub fn load_config(&self) -> Result<Config, config::ConfigError> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::init(),
        }
    }
}

pub fn run(cli: &Cli, config: &Config) -> MovieshelfResult<()> {
    let catalog = load_catalog(config, &cli.sources)?;

    let movies = match &cli.command {
        Command::List => catalog.get_movies(),
        Command::Sort { field, desc } => catalog.sort_movies(*field, !desc),
        Command::Search { query } => catalog.search_movies(query),
        Command::Filter { field, op, query } => catalog.filter_movies(*field, *op, query),
        Command::Where { expression } => {
            let expr: FilterExpr = expression.parse()?;
            catalog.filter_expr(&expr)
        }
    };

    print_movies(&movies);
    Ok(())
}
