use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod scheme;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("concordance_scheme=debug,info")
    } else {
        EnvFilter::new("concordance_scheme=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let scheme_path = cli.scheme.as_deref();

    match cli.command {
        cli::Commands::Show(args) => {
            cli::show::run(args, cli.format, cli.verbose, scheme_path)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format, cli.verbose, scheme_path)?;
        }
        cli::Commands::Validate(args) => {
            cli::validate::run(args, cli.format)?;
        }
        cli::Commands::Export(args) => {
            cli::export::run(args, scheme_path)?;
        }
    }

    Ok(())
}
