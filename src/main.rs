use anyhow::Result;
use clap::{Parser, Subcommand};

use linkgate::config::{StaticConfig, get_config, init_config_from};
use linkgate::errors::LinkgateError;
use linkgate::runtime::run_server;
use linkgate::system::init_logging;

/// URL shortener with password-protected links, expiration and QR codes
#[derive(Debug, Parser)]
#[command(name = "linkgate", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Print a sample configuration file to stdout
    GenerateConfig,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::GenerateConfig => {
            println!("{}", StaticConfig::generate_sample_config());
            Ok(())
        }
        Command::Serve => {
            init_config_from(cli.config.as_deref());
            let config = get_config();

            let _guard = init_logging(&config.logging).inspect_err(report)?;

            run_server().await
        }
    }
}

fn report(err: &LinkgateError) {
    eprintln!("{}", err.format_colored());
}
