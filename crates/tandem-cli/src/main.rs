//! Tandem CLI entry point.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use tandem_cli::{Args, error_adapter::render_report};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    info!(log_level = args.log_level.as_str(); "Starting Tandem");
    debug!(args:?; "Parsed arguments");

    match tandem_cli::run(&args) {
        Ok(()) => info!("Completed successfully"),
        Err(err) => {
            error!("{}", render_report(&err));
            process::exit(1);
        }
    }
}

/// Installs `env_logger`, letting `RUST_LOG` refine the `--log-level` filter.
fn init_logger(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Invalid log level `{level}`, falling back to `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_env(env_logger::Env::default())
        .init();
}
