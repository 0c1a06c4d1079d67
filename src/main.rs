use clap::Parser;
use tracing_subscriber::EnvFilter;

use dbutils::cli::Args;
use dbutils::config;
use dbutils::db::QueryFacade;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let connection = config::resolve(args.config.as_deref())?;
    let db = QueryFacade::postgres(connection);
    let output = args.command.run(&db, args.format)?;
    println!("{}", output);
    Ok(())
}
