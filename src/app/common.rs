use std::str::FromStr;

use tracing::Level;

use movieshelf::config::Config;
use movieshelf::{Catalog, MediaManager, Movie};

pub fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the catalog and load every configured source, stopping at the first failure.
pub fn load_catalog(config: &Config, extra_sources: &[String]) -> movieshelf::utils::MovieshelfResult<Catalog> {
    let catalog = Catalog::with_decoder(config.catalog.default_format.decoder());

    let sources = config.catalog.sources.iter().chain(extra_sources);
    for source in sources {
        catalog.add_movies_from_path(source)?;
    }

    if catalog.is_empty() {
        tracing::warn!("Catalog is empty: no sources configured or all sources were empty");
    }
    Ok(catalog)
}

pub fn print_movies(movies: &[std::sync::Arc<Movie>]) {
    for movie in movies {
        println!("{movie}");
    }
    tracing::debug!("Printed {} movies", movies.len());
}
