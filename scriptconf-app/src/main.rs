mod cli;

use clap::Parser; // needed for Cli::parse()
use tokio::runtime::Runtime;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::commands::run_cli;
use cli::opts::Cli;
use scriptconf_core::ConfigError;

fn main() {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    if let Err(err) = run(args) {
        match err.downcast_ref::<ConfigError>() {
            // Wrong file kind and unparsable config are reported plainly.
            Some(e @ (ConfigError::NotAFile { .. } | ConfigError::Malformed { .. })) => {
                error!("{e}");
            }
            _ => error!("{err:#}"),
        }
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    // Interrupts (e.g. during an interactive prompt) leave cleanly.
    rt.spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("Exiting...");
            std::process::exit(0);
        }
    });

    run_cli(args)
}
