use std::process::ExitCode;

use clap::Parser;

mod app;

use app::cli::Cli;

fn main() -> ExitCode {
    // Load `./.env` if present (not required); existing env vars take precedence.
    if let Err(e) = dotenvy::from_path("./.env") {
        if !matches!(&e, dotenvy::Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound) {
            panic!("{e}");
        }
    }
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt().with_writer(std::io::stderr).init();
            tracing::error!("Failed to initialize configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    app::common::init_logging(&config);

    match app::cli::run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
