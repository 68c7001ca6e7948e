use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_cron_describe::cli::{self, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so descriptions stay pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let catalog = cli::load_catalog(cli.config.as_deref())?;

    match cli.command {
        Commands::Describe(args) => {
            println!("{}", cli::describe(&catalog, &args)?);
        }
        Commands::Locales => {
            println!("{}", cli::locales(&catalog));
        }
    }

    Ok(())
}
